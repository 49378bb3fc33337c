//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_provider::ThemeProvider;
use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::pages::home::HomePage;
use crate::state::nav::NavState;
use crate::theme::ThemeConfig;

/// Keeps content visible when scripts never run to reveal `FadeIn` blocks.
const NOSCRIPT_STYLE: &str = ".fade-in{opacity:1;transform:none}";

/// Theme settings for the site.
pub fn theme_config() -> ThemeConfig {
    ThemeConfig::default()
}

/// Root marker for the configured default, in the form the browser surface
/// writes it.
pub fn root_marker(config: &ThemeConfig) -> (String, &'static str) {
    let (name, value) = config.initial_marker().root_attribute();
    (name.to_owned(), value)
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let (name, value) = root_marker(&theme_config());
    let root_marker = custom_attribute(name, value);

    view! {
        <!DOCTYPE html>
        <html lang="en" {..root_marker}>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/images/high-five-logo.svg"/>
                <noscript><style>{NOSCRIPT_STYLE}</style></noscript>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides theme and navigation contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    view! {
        <Stylesheet id="leptos" href="/pkg/highfive.css"/>
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <Meta property="og:title" content=PAGE_TITLE/>
        <Meta property="og:image" content="/images/high-five-logo.svg"/>

        <ThemeProvider config=theme_config()>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
