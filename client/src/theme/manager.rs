//! Theme preference manager.
//!
//! DESIGN
//! ======
//! Initialization is two-phase. `new` only records the configured default
//! and never touches the environment, so it is safe during server
//! rendering. `hydrate` runs once in the browser: it reads storage, applies
//! the resolved presentation, and subscribes to OS changes while `system`
//! is selected.
//!
//! TRADE-OFFS
//! ==========
//! Storage and OS-signal failures are logged at debug level and otherwise
//! ignored. The session then behaves as in-memory only, or resolves
//! `system` to `light`.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::Cell;
use std::rc::Rc;

use super::env::{ColorScheme, PreferenceStore, ThemeSurface, WatchGuard};
use super::{ResolvedTheme, Theme, ThemeConfig, ThemeError, resolve};

/// Environment handles shared with the OS-change callback.
#[derive(Clone)]
pub struct ThemeEnv {
    pub store: Rc<dyn PreferenceStore>,
    pub scheme: Rc<dyn ColorScheme>,
    pub surface: Rc<dyn ThemeSurface>,
}

/// Owns the current theme and keeps storage and presentation in step.
pub struct ThemeManager {
    config: ThemeConfig,
    env: ThemeEnv,
    theme: Theme,
    resolved: Rc<Cell<ResolvedTheme>>,
    hydrated: bool,
    watch: Option<WatchGuard>,
}

impl ThemeManager {
    /// Construct with the configured default. No environment access.
    #[must_use]
    pub fn new(config: ThemeConfig, env: ThemeEnv) -> Self {
        let theme = config.default_theme;
        Self {
            config,
            env,
            theme,
            resolved: Rc::new(Cell::new(resolve(theme, || None))),
            hydrated: false,
            watch: None,
        }
    }

    /// Read the stored preference once and apply it.
    ///
    /// A missing, unreadable, or unrecognized stored value keeps the current
    /// theme. Calling this again is a no-op.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;

        match self.env.store.load(&self.config.storage_key) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(stored) => self.theme = stored,
                Err(e) => log::debug!("ignoring stored theme: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::debug!("theme storage read skipped: {e}"),
        }

        self.reconcile();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved.get()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Whether an OS color-scheme subscription is currently held.
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Replace the current theme.
    ///
    /// Before hydration only the in-memory value changes. Afterwards the
    /// value is persisted and the presentation re-resolved.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;

        if !self.hydrated {
            self.resolved.set(resolve(theme, || None));
            return;
        }

        if let Err(e) = self.env.store.save(&self.config.storage_key, theme.as_str()) {
            log::debug!("theme storage write skipped: {e}");
        }
        self.reconcile();
    }

    /// Parse and set a theme name. Unknown names leave all state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidTheme`] for anything other than
    /// `light`, `dark`, or `system`.
    pub fn set_theme_str(&mut self, raw: &str) -> Result<(), ThemeError> {
        let theme = raw.parse::<Theme>()?;
        self.set_theme(theme);
        Ok(())
    }

    fn reconcile(&mut self) {
        let resolved = resolve(self.theme, || self.prefers_dark());
        self.apply(resolved);
        self.sync_watch();
    }

    fn prefers_dark(&self) -> Option<bool> {
        if !self.config.enable_system {
            return None;
        }
        match self.env.scheme.prefers_dark() {
            Ok(dark) => Some(dark),
            Err(e) => {
                log::debug!("falling back to {}: {e}", ResolvedTheme::FALLBACK);
                None
            }
        }
    }

    fn apply(&self, resolved: ResolvedTheme) {
        self.resolved.set(resolved);
        self.env.surface.apply(resolved);
    }

    fn sync_watch(&mut self) {
        let wants_watch = self.theme == Theme::System && self.config.enable_system;
        if !wants_watch {
            self.watch = None;
            return;
        }
        if self.watch.is_some() {
            return;
        }

        let surface = Rc::clone(&self.env.surface);
        let resolved = Rc::clone(&self.resolved);
        let on_change = Box::new(move |prefers_dark: bool| {
            let next = ResolvedTheme::from_prefers_dark(prefers_dark);
            resolved.set(next);
            surface.apply(next);
        });

        match self.env.scheme.watch(on_change) {
            Ok(guard) => self.watch = Some(guard),
            Err(e) => log::debug!("color-scheme changes not observed: {e}"),
        }
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("theme", &self.theme)
            .field("resolved", &self.resolved.get())
            .field("hydrated", &self.hydrated)
            .field("watching", &self.watch.is_some())
            .finish_non_exhaustive()
    }
}
