//! Browser glue that pages and components call instead of touching `web_sys`
//! directly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `scroll` measures the page's sections and drives smooth scrolling for the
//! header links. Every helper no-ops outside the `hydrate` build.

pub mod scroll;
