// std imports
use std::sync::Arc;

// local imports
use crate::{
    app::Reply,
    paging::PageView,
    theme::{Buf, Element, Theme},
};

// ---

/// Renders replies into themed byte output.
pub struct Renderer {
    theme: Arc<Theme>,
    controls: bool,
}

impl Renderer {
    /// Creates a renderer; `controls` enables the navigation affordances on
    /// the pagination line.
    pub fn new(theme: Arc<Theme>, controls: bool) -> Self {
        Self { theme, controls }
    }

    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
    }

    pub fn render(&self, buf: &mut Buf, reply: &Reply) {
        match reply {
            Reply::Status(status) => self.status(buf, status),
            Reply::Results { header, page } => self.results(buf, header, page),
        }
    }

    pub fn prompt(&self, buf: &mut Buf) {
        self.theme.apply(buf, |buf, styler| {
            styler.set(buf, Element::Prompt);
            buf.extend_from_slice(b"> ");
        });
    }

    fn status(&self, buf: &mut Buf, status: &str) {
        self.theme.apply(buf, |buf, styler| {
            styler.set(buf, Element::Status);
            buf.extend_from_slice(status.as_bytes());
        });
        buf.push(b'\n');
    }

    fn results(&self, buf: &mut Buf, header: &str, page: &PageView<Arc<str>>) {
        self.theme.apply(buf, |buf, styler| {
            styler.set(buf, Element::Header);
            buf.extend_from_slice(header.as_bytes());
        });
        buf.push(b'\n');

        if page.total > 1 {
            self.page_info(buf, page);
        }

        for word in page.items {
            self.theme.apply(buf, |buf, styler| {
                styler.set(buf, Element::Word);
                buf.extend_from_slice(word.as_bytes());
            });
            buf.push(b'\n');
        }
    }

    fn page_info(&self, buf: &mut Buf, page: &PageView<Arc<str>>) {
        self.theme.apply(buf, |buf, styler| {
            styler.set(buf, Element::PageInfo);
            buf.extend_from_slice(format!("Page {} of {}", page.index, page.total).as_bytes());
            if self.controls {
                styler.set(
                    buf,
                    if page.has_prev {
                        Element::Control
                    } else {
                        Element::ControlDisabled
                    },
                );
                buf.extend_from_slice("  ← Previous".as_bytes());
                styler.set(
                    buf,
                    if page.has_next {
                        Element::Control
                    } else {
                        Element::ControlDisabled
                    },
                );
                buf.extend_from_slice("  Next →".as_bytes());
            }
        });
        buf.push(b'\n');
    }
}

// ---

#[cfg(test)]
mod tests;
