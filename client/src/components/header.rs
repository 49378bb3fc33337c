//! Sticky site header with section navigation and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Highlights the link for the section in view (driven by the scroll
//! listener installed here) and scrolls smoothly on click. Below the
//! desktop breakpoint the links collapse into a toggleable menu.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{LOGO_URL, NAV_LINKS, NavLink, ORG_NAME, SHORT_NAME};
use crate::state::nav::NavState;
use crate::util::scroll;

/// Close the menu and scroll to `section`.
pub fn go_to_section(nav: RwSignal<NavState>, section: &'static str) {
    nav.update(NavState::close_menu);
    scroll::scroll_to_section(section);
}

#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    scroll::track_active_section(nav);

    let desktop_links = NAV_LINKS
        .iter()
        .filter(|l| !l.mobile_only)
        .map(|&link| view! { <NavAnchor link=link nav=nav/> })
        .collect_view();

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a href="/" class="site-header__brand">
                    <img src=LOGO_URL alt=ORG_NAME width="40" height="40"/>
                    <span class="brand-gradient">{SHORT_NAME}</span>
                </a>

                <nav class="site-nav site-nav--desktop">{desktop_links}</nav>

                <div class="site-header__actions">
                    <ThemeToggle/>
                    <button
                        class="btn site-header__menu-toggle"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        aria-label="Toggle menu"
                        aria-expanded=move || nav.get().menu_open.to_string()
                    >
                        {move || if nav.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.get().menu_open>
                <nav class="site-nav site-nav--mobile">
                    {NAV_LINKS.iter().map(|&link| view! { <NavAnchor link=link nav=nav/> }).collect_view()}
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn NavAnchor(link: NavLink, nav: RwSignal<NavState>) -> impl IntoView {
    let section = link.section;
    view! {
        <a
            href=format!("#{section}")
            class="site-nav__link"
            class:is-primary=link.primary
            class:is-active=move || nav.get().is_active(section)
            on:click=move |ev| {
                ev.prevent_default();
                go_to_section(nav, section);
            }
        >
            {link.label}
        </a>
    }
}
