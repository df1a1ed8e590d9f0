use griddle::color::{Color, StyleColor};
use griddle::theme::{DefaultTheme, Theme, resolve_color, resolve_style_color};

#[test]
fn test_default_theme_resolves_colors() {
    let theme = DefaultTheme::dark();

    assert!(theme.resolve("primary").is_some());
    assert!(theme.resolve("surface").is_some());
    assert!(theme.resolve("icon_muted").is_some());
    assert!(theme.resolve("unknown_color").is_none());
}

#[test]
fn test_default_theme_aliases() {
    let theme = DefaultTheme::dark();

    // fg should resolve to text
    assert_eq!(theme.resolve("fg"), theme.resolve("text"));
    assert_eq!(theme.resolve("muted"), theme.resolve("text_muted"));
}

#[test]
fn test_light_theme_differs_from_dark() {
    let dark = DefaultTheme::dark();
    let light = DefaultTheme::light();

    assert_ne!(dark.resolve("background"), light.resolve("background"));
}

#[test]
fn test_resolve_color_with_named() {
    let theme = DefaultTheme::dark();
    let named = StyleColor::Named("primary".to_string());

    assert_eq!(resolve_color(&named, &theme), theme.primary);
}

#[test]
fn test_resolve_color_passthrough() {
    let theme = DefaultTheme::dark();
    let literal = StyleColor::Concrete(Color::CYAN);

    assert_eq!(resolve_color(&literal, &theme), Color::CYAN);
}

#[test]
fn test_resolve_unknown_falls_back() {
    let theme = DefaultTheme::dark();
    let named = StyleColor::Named("no_such_color".to_string());

    assert_eq!(resolve_style_color(&named, &theme), None);
    assert_eq!(resolve_color(&named, &theme), Color::GRAY);
}

#[test]
fn test_color_names_are_resolvable() {
    let theme = DefaultTheme::dark();
    for name in theme.color_names() {
        assert!(theme.resolve(name).is_some(), "{name} should resolve");
    }
}
