//! Header button cycling the theme selection.

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::theme::Theme;

/// Glyph shown for the current selection.
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
        Theme::System => "◐",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.cycle()
            title=move || format!("Theme: {} (click to change)", theme.theme())
            aria-label="Toggle color theme"
        >
            {move || theme_icon(theme.theme())}
        </button>
    }
}
