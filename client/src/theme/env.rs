//! Environment seams consumed by the theme manager.
//!
//! Every browser API the manager touches sits behind one of these traits:
//! key-value storage, the OS color-scheme signal, and the element that
//! carries the presentation marker.

use super::{ResolvedTheme, ThemeError};

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    /// Read the value stored under `key`. `Ok(None)` means nothing stored.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Read-only access to the OS "prefers dark" signal.
pub trait ColorScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError>;

    /// Invoke `on_change` with the new preference whenever the OS setting
    /// changes, until the returned guard is dropped.
    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<WatchGuard, ThemeError>;
}

/// The presentation target (the document root in the browser).
pub trait ThemeSurface {
    /// Clear the opposite marker, then apply `resolved`.
    fn apply(&self, resolved: ResolvedTheme);
}

/// Active subscription. Dropping it runs the release hook exactly once.
#[must_use = "dropping the guard ends the subscription"]
pub struct WatchGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl WatchGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchGuard").field("active", &self.release.is_some()).finish()
    }
}
