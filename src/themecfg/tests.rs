use super::*;

// std imports
use std::sync::atomic::{AtomicUsize, Ordering};

// third-party imports
use assert_matches::assert_matches;
use maplit::hashmap;

fn app_dirs() -> AppDirs {
    static SEQ: AtomicUsize = AtomicUsize::new(0);
    let root = std::env::temp_dir().join(format!(
        "wf-themecfg-tests-{}-{}",
        std::process::id(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    AppDirs {
        cache_dir: root.join("cache"),
        config_dir: root.join("config"),
        state_dir: root.join("state"),
    }
}

#[test]
fn test_rgb() {
    let a = RGB::from_str("#102030").unwrap();
    assert_eq!(a, RGB(16, 32, 48));
    let b: RGB = serde_yaml::from_str(r##""#102030""##).unwrap();
    assert_eq!(b, RGB(16, 32, 48));
    assert_eq!(a.to_string(), "#102030");
}

#[test]
fn test_rgb_invalid() {
    assert!(RGB::from_str("102030").is_err());
    assert!(RGB::from_str("#10203").is_err());
    assert!(RGB::from_str("#10203x").is_err());
}

#[test]
fn test_parse_theme() {
    let theme: Theme = serde_yaml::from_str(
        r#"
        elements:
          header:
            modes: [bold]
          word:
            foreground: '#c0ffee'
          page-info:
            foreground: 245
          control-disabled:
            modes: [faint]
            foreground: bright-black
        "#,
    )
    .unwrap();

    let header = theme.elements.get(&Element::Header).unwrap();
    assert_matches!(header.modes[..], [Mode::Bold]);
    assert_matches!(header.foreground, None);

    let word = theme.elements.get(&Element::Word).unwrap();
    assert_matches!(word.foreground, Some(Color::RGB(RGB(0xC0, 0xFF, 0xEE))));

    let page_info = theme.elements.get(&Element::PageInfo).unwrap();
    assert_matches!(page_info.foreground, Some(Color::Palette(245)));

    let disabled = theme.elements.get(&Element::ControlDisabled).unwrap();
    assert_matches!(disabled.foreground, Some(Color::Plain(PlainColor::BrightBlack)));
}

#[test]
fn test_style_pack_from() {
    let pack = StylePack::from(hashmap! {
        Element::Word => Style {
            modes: vec![Mode::Bold],
            ..Default::default()
        },
    });
    assert_eq!(pack.items().len(), 1);
}

#[test]
fn test_embedded() {
    for name in ["light", "dark"] {
        let theme = Theme::embedded(name).unwrap();
        assert!(!theme.elements.is_empty(), "{name} has no elements");
    }
}

#[test]
fn test_embedded_unknown() {
    let err = Theme::embedded("ligth").unwrap_err();
    assert_matches!(err, Error::ThemeNotFound { ref name, ref suggestions } => {
        assert_eq!(&**name, "ligth");
        assert!(suggestions.iter().any(|s| s == "light"));
    });
}

#[test]
fn test_load_falls_back_to_embedded() {
    let theme = Theme::load(&app_dirs(), "dark").unwrap();
    assert!(!theme.elements.is_empty());
}

#[test]
fn test_load_unknown() {
    let err = Theme::load(&app_dirs(), "no-such-theme").unwrap_err();
    assert_matches!(err, Error::ThemeNotFound { .. });
}

#[test]
fn test_list() {
    let themes = Theme::list(&app_dirs()).unwrap();
    assert_matches!(themes.get("light"), Some(ThemeInfo { origin: ThemeOrigin::Stock }));
    assert_matches!(themes.get("dark"), Some(ThemeInfo { origin: ThemeOrigin::Stock }));
}
