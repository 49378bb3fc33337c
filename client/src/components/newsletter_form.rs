//! "Stay Updated" newsletter signup.

use leptos::prelude::*;

use crate::state::newsletter::{NewsletterState, SignupStatus};

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let form = RwSignal::new(NewsletterState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        form.update(|f| accepted = f.submit().is_some());
        if accepted {
            log::debug!("newsletter signup accepted");
        }
    };

    view! {
        <section class="newsletter">
            <div class="container newsletter__inner">
                <h2>"Stay Updated"</h2>
                <p>"Subscribe to our newsletter to receive updates on our projects, events, and impact stories."</p>
                <form class="newsletter__form" on:submit=on_submit novalidate=true>
                    <input
                        type="email"
                        placeholder="Your email address"
                        aria-label="Email address"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <button type="submit" class="btn btn--primary">"Subscribe"</button>
                </form>
                {move || {
                    let state = form.get();
                    state.message().map(|msg| {
                        let error = state.status == SignupStatus::Invalid;
                        view! {
                            <p class="newsletter__message" class:is-error=error role="status">
                                {msg}
                            </p>
                        }
                    })
                }}
            </div>
        </section>
    }
}
