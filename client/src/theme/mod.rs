//! Theme preference model and manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site renders in one of two presentation modes (`light`/`dark`). The
//! visitor picks `light`, `dark`, or `system`; `system` follows the OS
//! color-scheme signal. The choice survives reloads through a single
//! key-value entry in browser storage.
//!
//! DESIGN
//! ======
//! The manager is plain Rust over three environment seams (`env`) so the
//! resolution and persistence rules run the same in native tests as in the
//! browser. Browser implementations live in `browser` and only compile
//! with the `hydrate` feature.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod env;
pub mod manager;
#[cfg(test)]
pub(crate) mod test_env;

use std::fmt;
use std::str::FromStr;

pub use env::{ColorScheme, PreferenceStore, ThemeSurface, WatchGuard};
pub use manager::{ThemeEnv, ThemeManager};

/// Storage key used when the configuration does not override it.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Media query for the OS dark color-scheme signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The visitor's theme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Next value in the toggle cycle: light -> dark -> system -> light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Concrete presentation state. Exactly one is applied at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Fallback used when `system` cannot consult the OS.
    pub const FALLBACK: ResolvedTheme = ResolvedTheme::Light;

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The marker that must be cleared before this one is applied.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the resolved theme is marked on the root element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeAttribute {
    /// Toggle `light` / `dark` classes.
    #[default]
    Class,
    /// Set the named attribute (e.g. `data-theme`) to the resolved value.
    Data(String),
}

/// What to write on the root element for a resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    Class { add: &'static str, remove: &'static str },
    Attribute { name: &'a str, value: &'static str },
}

impl ThemeAttribute {
    pub fn marker(&self, resolved: ResolvedTheme) -> Marker<'_> {
        match self {
            Self::Class => Marker::Class { add: resolved.as_str(), remove: resolved.opposite().as_str() },
            Self::Data(name) => Marker::Attribute { name, value: resolved.as_str() },
        }
    }
}

impl<'a> Marker<'a> {
    /// The root attribute that carries this marker, as `(name, value)`.
    pub fn root_attribute(self) -> (&'a str, &'static str) {
        match self {
            Self::Class { add, .. } => ("class", add),
            Self::Attribute { name, value } => (name, value),
        }
    }
}

/// Provider configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub default_theme: Theme,
    pub storage_key: String,
    pub enable_system: bool,
    pub attribute: ThemeAttribute,
}

impl ThemeConfig {
    /// Marker for the first paint, before any browser state is read.
    pub fn initial_marker(&self) -> Marker<'_> {
        self.attribute.marker(resolve(self.default_theme, || None))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            enable_system: true,
            attribute: ThemeAttribute::Class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("color-scheme signal unavailable: {0}")]
    SignalUnavailable(String),
    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),
}

/// Map a selection to its presentation state.
///
/// `prefers_dark` is only consulted for `System`; `None` means the OS signal
/// could not be read and yields [`ResolvedTheme::FALLBACK`].
#[must_use]
pub fn resolve(theme: Theme, prefers_dark: impl FnOnce() -> Option<bool>) -> ResolvedTheme {
    match theme {
        Theme::Light => ResolvedTheme::Light,
        Theme::Dark => ResolvedTheme::Dark,
        Theme::System => prefers_dark().map_or(ResolvedTheme::FALLBACK, ResolvedTheme::from_prefers_dark),
    }
}
