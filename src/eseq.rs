// std imports
use std::io::Write;

// ---

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Bold = 1,
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Reverse,
    Conceal,
    CrossedOut,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Brightness {
    Normal,
    Bright,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorCode {
    Plain(Color, Brightness),
    Palette(u8),
    RGB(u8, u8, u8),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StyleCode {
    Mode(Mode),
    Background(ColorCode),
    Foreground(ColorCode),
}

impl StyleCode {
    fn render(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Mode(mode) => mode.render(buf),
            Self::Background(color) => color.render(buf, 40),
            Self::Foreground(color) => color.render(buf, 30),
        }
    }
}

impl From<Mode> for StyleCode {
    fn from(mode: Mode) -> Self {
        StyleCode::Mode(mode)
    }
}

impl Mode {
    fn render(&self, buf: &mut Vec<u8>) {
        write!(buf, "{}", (*self as u8)).unwrap()
    }
}

impl Color {
    fn render(&self, buf: &mut Vec<u8>, base: u8) {
        write!(buf, "{}", base + (*self as u8)).unwrap()
    }
}

impl ColorCode {
    fn render(&self, buf: &mut Vec<u8>, base: u8) {
        match self {
            Self::Plain(color, Brightness::Normal) => color.render(buf, base),
            Self::Plain(color, Brightness::Bright) => color.render(buf, base + 60),
            Self::Palette(color) => write!(buf, "{};5;{}", base + 8, color).unwrap(),
            Self::RGB(r, g, b) => write!(buf, "{};2;{};{};{}", base + 8, r, g, b).unwrap(),
        }
    }
}

// ---

/// A rendered escape sequence selecting a terminal style.
///
/// The sequence always begins with a reset so styles of successive elements
/// do not accumulate.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn reset() -> Self {
        Self::from(vec![])
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<StyleCode>> for Sequence {
    fn from(codes: Vec<StyleCode>) -> Self {
        let mut buf = Vec::with_capacity(8 + 16 * codes.len());
        begin(&mut buf);
        for code in &codes {
            next(&mut buf);
            code.render(&mut buf);
        }
        end(&mut buf);
        Self(buf)
    }
}

// ---

#[inline]
fn begin(buf: &mut Vec<u8>) {
    buf.push(b'\x1b');
    buf.push(b'[');
    buf.push(b'0');
}

#[inline]
fn next(buf: &mut Vec<u8>) {
    buf.push(b';');
}

#[inline]
fn end(buf: &mut Vec<u8>) {
    buf.push(b'm');
}

// ---
