use super::*;

// std imports
use std::str;

// third-party imports
use maplit::hashmap;

// local imports
use crate::themecfg;

fn words(names: &[&str]) -> Vec<Arc<str>> {
    names.iter().map(|name| (*name).into()).collect()
}

fn page<'a>(items: &'a [Arc<str>], index: usize, total: usize) -> PageView<'a, Arc<str>> {
    PageView {
        items,
        index,
        total,
        has_prev: index > 1,
        has_next: index < total,
    }
}

fn plain(controls: bool) -> Renderer {
    Renderer::new(Arc::new(Theme::none()), controls)
}

#[test]
fn test_status() {
    let mut buf = Buf::new();
    plain(false).render(&mut buf, &Reply::Status("No matching words found.".into()));
    assert_eq!(str::from_utf8(&buf).unwrap(), "No matching words found.\n");
}

#[test]
fn test_prompt() {
    let mut buf = Buf::new();
    plain(true).prompt(&mut buf);
    assert_eq!(str::from_utf8(&buf).unwrap(), "> ");
}

#[test]
fn test_single_page_results() {
    let items = words(&["cat", "cut"]);
    let mut buf = Buf::new();
    plain(true).render(
        &mut buf,
        &Reply::Results {
            header: "Found 2 matching words:",
            page: page(&items, 1, 1),
        },
    );
    assert_eq!(str::from_utf8(&buf).unwrap(), "Found 2 matching words:\ncat\ncut\n");
}

#[test]
fn test_paginated_results_with_controls() {
    let items = words(&["alpha", "beta"]);
    let mut buf = Buf::new();
    plain(true).render(
        &mut buf,
        &Reply::Results {
            header: "Found 120 matching words:",
            page: page(&items, 2, 3),
        },
    );
    assert_eq!(
        str::from_utf8(&buf).unwrap(),
        "Found 120 matching words:\nPage 2 of 3  ← Previous  Next →\nalpha\nbeta\n"
    );
}

#[test]
fn test_paginated_results_without_controls() {
    let items = words(&["alpha", "beta"]);
    let mut buf = Buf::new();
    plain(false).render(
        &mut buf,
        &Reply::Results {
            header: "Found 120 matching words:",
            page: page(&items, 1, 3),
        },
    );
    assert_eq!(
        str::from_utf8(&buf).unwrap(),
        "Found 120 matching words:\nPage 1 of 3\nalpha\nbeta\n"
    );
}

#[test]
fn test_styled_output() {
    let theme = Theme::from(&themecfg::Theme {
        elements: hashmap! {
            Element::Header => themecfg::Style {
                modes: vec![themecfg::Mode::Bold],
                ..Default::default()
            },
        }
        .into(),
    });
    let items = words(&["cat"]);
    let mut buf = Buf::new();
    Renderer::new(Arc::new(theme), false).render(
        &mut buf,
        &Reply::Results {
            header: "Found 1 matching words:",
            page: page(&items, 1, 1),
        },
    );
    assert_eq!(
        str::from_utf8(&buf).unwrap(),
        "\u{1b}[0;1mFound 1 matching words:\u{1b}[0m\n\u{1b}[0mcat\n"
    );
}
