//! UI components composed by the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay presentation-focused; shared state comes from context
//! (`ThemeContext`, `RwSignal<NavState>`) provided by `app::App`.

pub mod cards;
pub mod fade_in;
pub mod footer;
pub mod header;
pub mod newsletter_form;
pub mod theme_provider;
pub mod theme_toggle;
