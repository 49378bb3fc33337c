//! Window scroll glue for section navigation.
//!
//! Measures `section[id]` boxes, reads the scroll offset, and performs the
//! smooth scroll for header links. Requires a browser environment; SSR
//! paths no-op.

use leptos::prelude::*;

use crate::state::nav::{NavState, SectionBounds};

/// Measure every `section[id]` element in document order.
pub fn measure_sections() -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = doc.query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll so the section sits just below the sticky header.
pub fn scroll_to_section(section_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(el) = window
            .document()
            .and_then(|d| d.get_element_by_id(section_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::debug!("scroll target #{section_id} not found");
            return;
        };

        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(crate::state::nav::scroll_target(f64::from(el.offset_top())));
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_id;
    }
}

/// Keep `nav.active_section` in step with the window scroll position until
/// the calling component is torn down.
pub fn track_active_section(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let sections = measure_sections();
            let y = scroll_y();
            nav.maybe_update(|n| n.observe_scroll(y, &sections));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}
