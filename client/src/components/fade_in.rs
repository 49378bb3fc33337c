//! Delayed fade-in wrapper for page content.
//!
//! The server renders children in their hidden state; the browser reveals
//! them after `delay_ms`. The shell's `<noscript>` style keeps content
//! visible when scripts are off.

use leptos::prelude::*;

#[component]
pub fn FadeIn(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                visible.set(true);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = delay_ms;

    view! {
        <div class="fade-in" class:is-visible=move || visible.get()>
            {children()}
        </div>
    }
}
