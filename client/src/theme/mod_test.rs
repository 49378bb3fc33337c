use super::*;

#[test]
fn theme_parses_known_names() {
    for theme in Theme::ALL {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn theme_parse_is_case_sensitive() {
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeError::InvalidTheme("Dark".into())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_next_cycles_through_all_values() {
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::System);
    assert_eq!(Theme::System.next(), Theme::Light);
}

#[test]
fn resolve_explicit_values_ignore_os() {
    assert_eq!(resolve(Theme::Light, || Some(true)), ResolvedTheme::Light);
    assert_eq!(resolve(Theme::Dark, || Some(false)), ResolvedTheme::Dark);
}

#[test]
fn resolve_system_follows_os() {
    assert_eq!(resolve(Theme::System, || Some(true)), ResolvedTheme::Dark);
    assert_eq!(resolve(Theme::System, || Some(false)), ResolvedTheme::Light);
}

#[test]
fn resolve_system_without_signal_uses_fallback() {
    assert_eq!(resolve(Theme::System, || None), ResolvedTheme::FALLBACK);
    assert_eq!(ResolvedTheme::FALLBACK, ResolvedTheme::Light);
}

#[test]
fn resolved_opposite_is_the_other_marker() {
    assert_eq!(ResolvedTheme::Light.opposite(), ResolvedTheme::Dark);
    assert_eq!(ResolvedTheme::Dark.opposite(), ResolvedTheme::Light);
}

#[test]
fn config_default_matches_site_layout() {
    let config = ThemeConfig::default();
    assert_eq!(config.default_theme, Theme::Light);
    assert_eq!(config.storage_key, "theme");
    assert!(config.enable_system);
    assert_eq!(config.attribute, ThemeAttribute::Class);
}

#[test]
fn class_marker_swaps_opposite_class() {
    assert_eq!(
        ThemeAttribute::Class.marker(ResolvedTheme::Dark),
        Marker::Class { add: "dark", remove: "light" }
    );
}

#[test]
fn data_marker_sets_named_attribute() {
    let attribute = ThemeAttribute::Data("data-theme".into());
    assert_eq!(
        attribute.marker(ResolvedTheme::Light),
        Marker::Attribute { name: "data-theme", value: "light" }
    );
}

#[test]
fn root_attribute_names_class_or_data_attribute() {
    assert_eq!(ThemeAttribute::Class.marker(ResolvedTheme::Dark).root_attribute(), ("class", "dark"));
    let attribute = ThemeAttribute::Data("data-theme".into());
    assert_eq!(attribute.marker(ResolvedTheme::Dark).root_attribute(), ("data-theme", "dark"));
}

#[test]
fn initial_marker_resolves_default_without_os_signal() {
    let config = ThemeConfig { default_theme: Theme::System, ..ThemeConfig::default() };
    assert_eq!(config.initial_marker(), Marker::Class { add: "light", remove: "dark" });
}
