// third-party imports
use enum_map::EnumMap;

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    eseq::{Brightness, Color, ColorCode, Mode, Sequence, StyleCode},
    themecfg,
};
pub use themecfg::Element;

// ---

pub type Buf = Vec<u8>;

// ---

/// Theme with styles compiled into terminal escape sequences.
#[derive(Default)]
pub struct Theme {
    pack: StylePack,
}

impl Theme {
    /// Returns a theme that emits no escape sequences at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Loads the theme configuration and compiles its styles.
    pub fn load(app_dirs: &AppDirs, name: &str) -> Result<Self> {
        Ok(Self::from(&themecfg::Theme::load(app_dirs, name)?))
    }

    pub fn apply<'a, F: FnOnce(&mut Buf, &mut Styler<'a>)>(&'a self, buf: &mut Buf, f: F) {
        let mut styler = Styler {
            pack: &self.pack,
            current: None,
        };
        f(buf, &mut styler);
        styler.reset(buf)
    }
}

impl From<&themecfg::Theme> for Theme {
    fn from(theme: &themecfg::Theme) -> Self {
        Self {
            pack: StylePack::load(&theme.elements),
        }
    }
}

// ---

pub struct Styler<'a> {
    pack: &'a StylePack,
    current: Option<usize>,
}

impl<'a> Styler<'a> {
    #[inline]
    pub fn set(&mut self, buf: &mut Buf, e: Element) {
        self.set_style(buf, self.pack.elements[e])
    }

    #[inline]
    fn reset(&mut self, buf: &mut Buf) {
        self.set_style(buf, None)
    }

    #[inline]
    fn set_style(&mut self, buf: &mut Buf, style: Option<usize>) {
        let style = match style {
            Some(style) => Some(style),
            None => self.pack.reset,
        };
        if let Some(style) = style {
            if self.current != Some(style) {
                self.current = Some(style);
                let style = &self.pack.styles[style];
                style.apply(buf);
            }
        }
    }
}

// ---

#[derive(Default)]
struct StylePack {
    elements: EnumMap<Element, Option<usize>>,
    reset: Option<usize>,
    styles: Vec<Style>,
}

impl StylePack {
    fn add(&mut self, element: Element, style: &Style) {
        let pos = match self.styles.iter().position(|x| x == style) {
            Some(pos) => pos,
            None => {
                self.styles.push(style.clone());
                self.styles.len() - 1
            }
        };
        self.elements[element] = Some(pos);
    }

    fn load(s: &themecfg::StylePack) -> Self {
        let mut result = Self::default();
        result.styles.push(Style::reset());
        result.reset = Some(0);
        for (element, style) in s.items() {
            result.add(*element, &Style::from(style));
        }
        result
    }
}

// ---

#[derive(Clone, Eq, PartialEq)]
struct Style(Sequence);

impl Style {
    #[inline]
    fn apply(&self, buf: &mut Buf) {
        buf.extend_from_slice(self.0.data())
    }

    fn reset() -> Self {
        Sequence::reset().into()
    }

    fn convert_color(color: &themecfg::Color) -> ColorCode {
        match color {
            themecfg::Color::Plain(color) => {
                let c = match color {
                    themecfg::PlainColor::Default => (Color::White, Brightness::Normal),
                    themecfg::PlainColor::Black => (Color::Black, Brightness::Normal),
                    themecfg::PlainColor::Blue => (Color::Blue, Brightness::Normal),
                    themecfg::PlainColor::Cyan => (Color::Cyan, Brightness::Normal),
                    themecfg::PlainColor::Green => (Color::Green, Brightness::Normal),
                    themecfg::PlainColor::Magenta => (Color::Magenta, Brightness::Normal),
                    themecfg::PlainColor::Red => (Color::Red, Brightness::Normal),
                    themecfg::PlainColor::White => (Color::White, Brightness::Normal),
                    themecfg::PlainColor::Yellow => (Color::Yellow, Brightness::Normal),
                    themecfg::PlainColor::BrightBlack => (Color::Black, Brightness::Bright),
                    themecfg::PlainColor::BrightBlue => (Color::Blue, Brightness::Bright),
                    themecfg::PlainColor::BrightCyan => (Color::Cyan, Brightness::Bright),
                    themecfg::PlainColor::BrightGreen => (Color::Green, Brightness::Bright),
                    themecfg::PlainColor::BrightMagenta => (Color::Magenta, Brightness::Bright),
                    themecfg::PlainColor::BrightRed => (Color::Red, Brightness::Bright),
                    themecfg::PlainColor::BrightWhite => (Color::White, Brightness::Bright),
                    themecfg::PlainColor::BrightYellow => (Color::Yellow, Brightness::Bright),
                };
                ColorCode::Plain(c.0, c.1)
            }
            themecfg::Color::Palette(code) => ColorCode::Palette(*code),
            themecfg::Color::RGB(themecfg::RGB(r, g, b)) => ColorCode::RGB(*r, *g, *b),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::reset()
    }
}

impl<T: Into<Sequence>> From<T> for Style {
    fn from(value: T) -> Self {
        Self(value.into())
    }
}

impl From<&themecfg::Style> for Style {
    fn from(style: &themecfg::Style) -> Self {
        let mut codes = Vec::<StyleCode>::new();
        for mode in &style.modes {
            codes.push(
                match mode {
                    themecfg::Mode::Bold => Mode::Bold,
                    themecfg::Mode::Conceal => Mode::Conceal,
                    themecfg::Mode::CrossedOut => Mode::CrossedOut,
                    themecfg::Mode::Faint => Mode::Faint,
                    themecfg::Mode::Italic => Mode::Italic,
                    themecfg::Mode::RapidBlink => Mode::RapidBlink,
                    themecfg::Mode::Reverse => Mode::Reverse,
                    themecfg::Mode::SlowBlink => Mode::SlowBlink,
                    themecfg::Mode::Underline => Mode::Underline,
                }
                .into(),
            );
        }
        if let Some(color) = &style.background {
            codes.push(StyleCode::Background(Self::convert_color(color)));
        }
        if let Some(color) = &style.foreground {
            codes.push(StyleCode::Foreground(Self::convert_color(color)));
        }
        Self(Sequence::from(codes))
    }
}

// ---

#[cfg(test)]
mod tests;
