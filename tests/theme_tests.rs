use radar_rs::render::Color;
use radar_rs::theme::{ThemeName, ThemeOverrides, ThemePalette, resolve_theme};

#[test]
fn presets_are_distinct() {
    let light = ThemePalette::preset(ThemeName::Light);
    let dark = ThemePalette::preset(ThemeName::Dark);
    let unicorn = ThemePalette::preset(ThemeName::Unicorn);
    let retro = ThemePalette::preset(ThemeName::Retro);

    assert_ne!(light.background, dark.background);
    assert_ne!(unicorn.background, retro.background);
    assert_ne!(light.background, unicorn.background);
}

#[test]
fn dark_theme_raises_the_inactive_opacity() {
    let light = ThemePalette::preset(ThemeName::Light);
    let dark = ThemePalette::preset(ThemeName::Dark);
    assert_eq!(light.inactive_opacity, 0.6);
    assert_eq!(dark.inactive_opacity, 0.9);
}

#[test]
fn empty_overrides_reproduce_the_preset() {
    let resolved = resolve_theme(ThemeName::Light, ThemeOverrides::default());
    assert_eq!(resolved, ThemePalette::preset(ThemeName::Light));
}

#[test]
fn overridden_fields_win_and_the_rest_keep_preset_values() {
    let custom = Color::rgb(0.1, 0.2, 0.3);
    let overrides = ThemeOverrides {
        background: Some(custom),
        inactive_opacity: Some(0.42),
        ..ThemeOverrides::default()
    };

    let resolved = resolve_theme(ThemeName::Dark, overrides);
    let preset = ThemePalette::preset(ThemeName::Dark);

    assert_eq!(resolved.background, custom);
    assert_eq!(resolved.inactive_opacity, 0.42);
    assert_eq!(resolved.grid, preset.grid);
    assert_eq!(resolved.text, preset.text);
    assert_eq!(resolved.legend_background, preset.legend_background);
}

#[test]
fn theme_names_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&ThemeName::Unicorn).expect("serialize"),
        "\"unicorn\""
    );
    let parsed: ThemeName = serde_json::from_str("\"retro\"").expect("deserialize");
    assert_eq!(parsed, ThemeName::Retro);
}
