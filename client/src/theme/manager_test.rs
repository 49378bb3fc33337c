use super::*;
use crate::theme::test_env::{FakeScheme, MemoryStore, RecordingSurface};

struct Harness {
    store: Rc<MemoryStore>,
    scheme: Rc<FakeScheme>,
    surface: Rc<RecordingSurface>,
}

impl Harness {
    fn new(store: MemoryStore, scheme: FakeScheme) -> Self {
        Self { store: Rc::new(store), scheme: Rc::new(scheme), surface: Rc::default() }
    }

    fn env(&self) -> ThemeEnv {
        ThemeEnv { store: self.store.clone(), scheme: self.scheme.clone(), surface: self.surface.clone() }
    }

    fn manager(&self, default_theme: Theme) -> ThemeManager {
        let config = ThemeConfig { default_theme, ..ThemeConfig::default() };
        ThemeManager::new(config, self.env())
    }

    fn hydrated(&self, default_theme: Theme) -> ThemeManager {
        let mut manager = self.manager(default_theme);
        manager.hydrate();
        manager
    }
}

// =============================================================
// Construction and hydration
// =============================================================

#[test]
fn new_does_not_touch_environment() {
    let h = Harness::new(MemoryStore::with("theme", "dark"), FakeScheme::new(true));
    let manager = h.manager(Theme::System);
    assert_eq!(manager.theme(), Theme::System);
    assert_eq!(manager.resolved(), ResolvedTheme::Light);
    assert!(!manager.is_hydrated());
    assert!(!manager.is_watching());
    assert!(h.surface.applied.borrow().is_empty());
}

#[test]
fn explicit_light_default_wins_over_dark_os() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let manager = h.hydrated(Theme::Light);
    assert_eq!(manager.theme(), Theme::Light);
    assert_eq!(manager.resolved(), ResolvedTheme::Light);
    assert_eq!(h.surface.markers(), vec!["light"]);
}

#[test]
fn system_default_follows_dark_os() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let manager = h.hydrated(Theme::System);
    assert_eq!(manager.theme(), Theme::System);
    assert_eq!(manager.resolved(), ResolvedTheme::Dark);
    assert_eq!(h.surface.markers(), vec!["dark"]);
}

#[test]
fn stored_value_overrides_default() {
    let h = Harness::new(MemoryStore::with("theme", "dark"), FakeScheme::new(false));
    let manager = h.hydrated(Theme::System);
    assert_eq!(manager.theme(), Theme::Dark);
    assert_eq!(manager.resolved(), ResolvedTheme::Dark);
    assert!(!manager.is_watching());
}

#[test]
fn unrecognized_stored_value_keeps_default() {
    let h = Harness::new(MemoryStore::with("theme", "sepia"), FakeScheme::new(false));
    let manager = h.hydrated(Theme::Dark);
    assert_eq!(manager.theme(), Theme::Dark);
}

#[test]
fn unavailable_storage_resolves_default_without_error() {
    let h = Harness::new(MemoryStore::unavailable(), FakeScheme::new(true));
    let mut manager = h.hydrated(Theme::System);
    assert_eq!(manager.resolved(), ResolvedTheme::Dark);

    manager.set_theme(Theme::Light);
    assert_eq!(manager.theme(), Theme::Light);
    assert_eq!(h.surface.markers(), vec!["light"]);
}

#[test]
fn hydrate_is_idempotent() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let mut manager = h.hydrated(Theme::System);
    manager.hydrate();
    assert_eq!(h.surface.applied.borrow().len(), 1);
    assert_eq!(h.scheme.listener_count(), 1);
}

#[test]
fn custom_storage_key_is_used() {
    let h = Harness::new(MemoryStore::with("site-theme", "dark"), FakeScheme::new(false));
    let config = ThemeConfig { storage_key: "site-theme".into(), ..ThemeConfig::default() };
    let mut manager = ThemeManager::new(config, h.env());
    manager.hydrate();
    assert_eq!(manager.theme(), Theme::Dark);

    manager.set_theme(Theme::System);
    assert_eq!(h.store.get("site-theme").as_deref(), Some("system"));
    assert_eq!(h.store.get("theme"), None);
}

// =============================================================
// set_theme
// =============================================================

#[test]
fn set_theme_is_visible_immediately() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(false));
    let mut manager = h.hydrated(Theme::Light);
    for theme in Theme::ALL {
        manager.set_theme(theme);
        assert_eq!(manager.theme(), theme);
    }
}

#[test]
fn set_theme_persists_for_a_fresh_manager() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(false));
    for theme in Theme::ALL {
        let mut manager = h.hydrated(Theme::Light);
        manager.set_theme(theme);
        drop(manager);

        let fresh = h.hydrated(Theme::Light);
        assert_eq!(fresh.theme(), theme);
    }
}

#[test]
fn set_theme_before_hydrate_is_memory_only() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let mut manager = h.manager(Theme::Light);
    manager.set_theme(Theme::Dark);
    assert_eq!(manager.theme(), Theme::Dark);
    assert_eq!(manager.resolved(), ResolvedTheme::Dark);
    assert_eq!(h.store.writes.get(), 0);
    assert!(h.surface.applied.borrow().is_empty());
}

#[test]
fn exactly_one_marker_after_any_sequence() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let mut manager = h.hydrated(Theme::Light);
    let sequence = [Theme::Dark, Theme::System, Theme::Light, Theme::System, Theme::Dark, Theme::Dark];
    for theme in sequence {
        manager.set_theme(theme);
        let markers = h.surface.markers();
        assert_eq!(markers.len(), 1, "markers after {theme}: {markers:?}");
        assert_eq!(markers[0], manager.resolved().as_str());
    }
}

#[test]
fn set_theme_str_accepts_known_names() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(false));
    let mut manager = h.hydrated(Theme::Light);
    manager.set_theme_str("dark").unwrap();
    assert_eq!(manager.theme(), Theme::Dark);
}

#[test]
fn set_theme_str_rejects_unknown_names_without_side_effects() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(false));
    let mut manager = h.hydrated(Theme::Dark);
    let applied_before = h.surface.applied.borrow().len();

    let err = manager.set_theme_str("blue").unwrap_err();
    assert_eq!(err, ThemeError::InvalidTheme("blue".into()));
    assert_eq!(manager.theme(), Theme::Dark);
    assert_eq!(h.store.get("theme"), None);
    assert_eq!(h.surface.applied.borrow().len(), applied_before);
}

// =============================================================
// OS signal
// =============================================================

#[test]
fn system_tracks_os_changes_without_set_theme() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let manager = h.hydrated(Theme::System);
    assert_eq!(manager.resolved(), ResolvedTheme::Dark);

    h.scheme.set_dark(false);
    assert_eq!(manager.resolved(), ResolvedTheme::Light);
    assert_eq!(h.surface.markers(), vec!["light"]);

    h.scheme.set_dark(true);
    assert_eq!(manager.resolved(), ResolvedTheme::Dark);
    assert_eq!(h.surface.markers(), vec!["dark"]);
}

#[test]
fn subscription_only_while_system_selected() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(false));
    let mut manager = h.hydrated(Theme::Light);
    assert_eq!(h.scheme.listener_count(), 0);

    manager.set_theme(Theme::System);
    assert_eq!(h.scheme.listener_count(), 1);

    manager.set_theme(Theme::System);
    assert_eq!(h.scheme.listener_count(), 1);

    manager.set_theme(Theme::Dark);
    assert_eq!(h.scheme.listener_count(), 0);
    assert!(!manager.is_watching());
}

#[test]
fn os_changes_ignored_after_leaving_system() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let mut manager = h.hydrated(Theme::System);
    manager.set_theme(Theme::Light);

    h.scheme.set_dark(true);
    assert_eq!(manager.resolved(), ResolvedTheme::Light);
    assert_eq!(h.surface.last(), Some(ResolvedTheme::Light));
}

#[test]
fn dropping_manager_releases_subscription() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let manager = h.hydrated(Theme::System);
    assert_eq!(h.scheme.listener_count(), 1);
    drop(manager);
    assert_eq!(h.scheme.listener_count(), 0);
}

#[test]
fn no_subscription_before_hydrate() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let mut manager = h.manager(Theme::System);
    manager.set_theme(Theme::System);
    assert_eq!(h.scheme.listener_count(), 0);
}

#[test]
fn unsupported_signal_falls_back_to_light() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::unsupported());
    let manager = h.hydrated(Theme::System);
    assert_eq!(manager.resolved(), ResolvedTheme::Light);
    assert!(!manager.is_watching());
    assert_eq!(h.surface.markers(), vec!["light"]);
}

#[test]
fn disabled_system_resolves_light_and_never_subscribes() {
    let h = Harness::new(MemoryStore::default(), FakeScheme::new(true));
    let config = ThemeConfig { default_theme: Theme::System, enable_system: false, ..ThemeConfig::default() };
    let mut manager = ThemeManager::new(config, h.env());
    manager.hydrate();
    assert_eq!(manager.theme(), Theme::System);
    assert_eq!(manager.resolved(), ResolvedTheme::Light);
    assert_eq!(h.scheme.listener_count(), 0);
}
