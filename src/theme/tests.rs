use super::*;

// std imports
use std::{
    str,
    sync::atomic::{AtomicUsize, Ordering},
};

// third-party imports
use maplit::hashmap;

// local imports
use crate::themecfg::{Color, Mode, PlainColor};

fn app_dirs() -> AppDirs {
    static SEQ: AtomicUsize = AtomicUsize::new(0);
    let root = std::env::temp_dir().join(format!(
        "wf-theme-tests-{}-{}",
        std::process::id(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    AppDirs {
        cache_dir: root.join("cache"),
        config_dir: root.join("config"),
        state_dir: root.join("state"),
    }
}

fn config() -> themecfg::Theme {
    themecfg::Theme {
        elements: hashmap! {
            Element::Header => themecfg::Style {
                modes: vec![Mode::Bold],
                ..Default::default()
            },
            Element::Status => themecfg::Style {
                foreground: Some(Color::Plain(PlainColor::BrightBlack)),
                ..Default::default()
            },
            Element::PageInfo => themecfg::Style {
                foreground: Some(Color::Plain(PlainColor::BrightBlack)),
                ..Default::default()
            },
        }
        .into(),
    }
}

#[test]
fn test_none() {
    let theme = Theme::none();
    let mut buf = Buf::new();
    theme.apply(&mut buf, |buf, styler| {
        styler.set(buf, Element::Header);
        buf.extend_from_slice(b"Found 2 matching words:");
    });
    assert_eq!(buf, b"Found 2 matching words:");
}

#[test]
fn test_apply() {
    let theme = Theme::from(&config());
    let mut buf = Buf::new();
    theme.apply(&mut buf, |buf, styler| {
        styler.set(buf, Element::Header);
        buf.extend_from_slice(b"Found 1 matching words:");
        styler.set(buf, Element::Word);
        buf.extend_from_slice(b"cat");
    });
    assert_eq!(
        str::from_utf8(&buf).unwrap(),
        "\u{1b}[0;1mFound 1 matching words:\u{1b}[0mcat"
    );
}

#[test]
fn test_shared_styles() {
    let theme = Theme::from(&config());
    let mut buf = Buf::new();
    theme.apply(&mut buf, |buf, styler| {
        styler.set(buf, Element::Status);
        buf.extend_from_slice(b"a");
        styler.set(buf, Element::PageInfo);
        buf.extend_from_slice(b"b");
    });
    assert_eq!(str::from_utf8(&buf).unwrap(), "\u{1b}[0;90mab\u{1b}[0m");
}

#[test]
fn test_load_embedded_fallback() {
    let theme = Theme::load(&app_dirs(), "light").unwrap();
    let mut buf = Buf::new();
    theme.apply(&mut buf, |buf, styler| {
        styler.set(buf, Element::Prompt);
        buf.extend_from_slice(b"> ");
    });
    assert_eq!(str::from_utf8(&buf).unwrap(), "\u{1b}[0;1;34m> \u{1b}[0m");
}

#[test]
fn test_load_unknown() {
    assert!(Theme::load(&app_dirs(), "no-such-theme").is_err());
}
