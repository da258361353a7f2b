// std imports
use std::{
    collections::HashMap,
    fmt::{self, Write},
    io::ErrorKind,
    path::{Path, PathBuf},
    str::{self, FromStr},
};

// third-party imports
use derive_more::Deref;
use enum_map::Enum;
use rust_embed::RustEmbed;
use serde::Deserialize;

// local imports
use crate::appdirs::AppDirs;
use crate::xerr::Suggestions;

// public modules
pub mod error;

// re-exports
pub use error::{Error, ExternalError, Result};

// ---

/// Theme definition as stored on disk.
///
/// Maps output elements to styles. Themes are loaded from the custom themes
/// directory if a file with a matching name exists there, otherwise from the
/// set embedded into the binary.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub elements: StylePack,
}

impl Theme {
    pub fn load(app_dirs: &AppDirs, name: &str) -> Result<Self> {
        let filename = Self::filename(name);
        let path = Self::themes_dir(app_dirs).join(&filename);
        match Self::load_from(&path) {
            Ok(theme) => Ok(theme),
            Err(ExternalError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Self::load_embedded(app_dirs, name, &filename)
            }
            Err(source) => Err(Error::FailedToLoadCustomTheme {
                name: name.into(),
                path: path.into(),
                source,
            }),
        }
    }

    pub fn embedded(name: &str) -> Result<Self> {
        let filename = Self::filename(name);
        let Some(asset) = Assets::get(&filename) else {
            return Err(Self::not_found(name, Self::embedded_names()));
        };
        Self::from_buf(asset.data.as_ref()).map_err(|source| Error::FailedToLoadEmbeddedTheme {
            name: name.into(),
            source,
        })
    }

    pub fn list(app_dirs: &AppDirs) -> Result<HashMap<String, ThemeInfo>> {
        let mut result = HashMap::new();

        for name in Self::embedded_names() {
            result.insert(name, ThemeOrigin::Stock.into());
        }

        if let Some(names) = Self::custom_names(app_dirs)? {
            for name in names {
                result.insert(name?, ThemeOrigin::Custom.into());
            }
        }

        Ok(result)
    }

    fn load_embedded(app_dirs: &AppDirs, name: &str, filename: &str) -> Result<Self> {
        let Some(asset) = Assets::get(filename) else {
            let mut known: Vec<_> = Self::embedded_names().collect();
            if let Ok(Some(names)) = Self::custom_names(app_dirs) {
                known.extend(names.filter_map(|n| n.ok()));
            }
            known.sort_unstable();
            known.dedup();
            return Err(Self::not_found(name, known));
        };

        Self::from_buf(asset.data.as_ref()).map_err(|source| Error::FailedToLoadEmbeddedTheme {
            name: name.into(),
            source,
        })
    }

    fn not_found(name: &str, known: impl IntoIterator<Item = String>) -> Error {
        Error::ThemeNotFound {
            name: name.into(),
            suggestions: Suggestions::new(name, known),
        }
    }

    fn from_buf(data: &[u8]) -> Result<Self, ExternalError> {
        Ok(serde_yaml::from_str(str::from_utf8(data)?)?)
    }

    fn load_from(path: &Path) -> Result<Self, ExternalError> {
        let f = std::fs::File::open(path)?;
        Ok(serde_yaml::from_reader(f)?)
    }

    fn filename(name: &str) -> String {
        format!("{}.{}", name, Self::EXTENSION)
    }

    fn themes_dir(app_dirs: &AppDirs) -> PathBuf {
        app_dirs.config_dir.join("themes")
    }

    fn embedded_names() -> impl Iterator<Item = String> {
        Assets::iter().filter_map(|a| Self::strip_extension(&a).map(|n| n.to_string()))
    }

    fn custom_names(app_dirs: &AppDirs) -> Result<Option<impl Iterator<Item = Result<String>>>> {
        let dir = Self::themes_dir(app_dirs);
        let items = match dir.read_dir() {
            Ok(items) => items,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::FailedToListCustomThemes(e)),
        };
        Ok(Some(
            items
                .map(|item| {
                    let item = item.map_err(Error::FailedToListCustomThemes)?;
                    Ok(item
                        .path()
                        .file_name()
                        .and_then(|n| n.to_str())
                        .and_then(|a| Self::strip_extension(a).map(|n| n.to_string())))
                })
                .filter_map(|x| x.transpose()),
        ))
    }

    fn strip_extension(filename: &str) -> Option<&str> {
        filename.strip_suffix(Self::EXTENSION).and_then(|r| r.strip_suffix("."))
    }

    const EXTENSION: &'static str = "yaml";
}

// ---

#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub origin: ThemeOrigin,
}

impl From<ThemeOrigin> for ThemeInfo {
    fn from(origin: ThemeOrigin) -> Self {
        Self { origin }
    }
}

// ---

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeOrigin {
    Stock,
    Custom,
}

// ---

#[derive(Clone, Debug, Default, Deserialize, Deref)]
#[serde(rename_all = "kebab-case")]
pub struct StylePack(HashMap<Element, Style>);

impl StylePack {
    pub fn items(&self) -> &HashMap<Element, Style> {
        &self.0
    }
}

impl<I: Into<HashMap<Element, Style>>> From<I> for StylePack {
    fn from(i: I) -> Self {
        Self(i.into())
    }
}

// ---

/// Output elements that may be styled by a theme.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Enum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Element {
    Prompt,
    Status,
    Header,
    Word,
    PageInfo,
    Control,
    ControlDisabled,
}

// ---

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(default)]
pub struct Style {
    pub modes: Vec<Mode>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

// ---

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Bold,
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Reverse,
    Conceal,
    CrossedOut,
}

// ---

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(untagged)]
pub enum Color {
    Plain(PlainColor),
    Palette(u8),
    RGB(RGB),
}

// ---

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlainColor {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

// ---

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Deserialize)]
#[serde(try_from = "String")]
pub struct RGB(pub u8, pub u8, pub u8);

impl FromStr for RGB {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().as_bytes();
        if s.len() != 7 {
            return Err("expected 7 bytes".into());
        }
        if s[0] != b'#' {
            return Err("expected # sign".into());
        }
        let r = unhex(s[1], s[2]).ok_or("expected hex code for red")?;
        let g = unhex(s[3], s[4]).ok_or("expected hex code for green")?;
        let b = unhex(s[5], s[6]).ok_or("expected hex code for blue")?;
        Ok(RGB(r, g, b))
    }
}

impl TryFrom<String> for RGB {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl fmt::Display for RGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('#')?;
        write_hex(f, self.0)?;
        write_hex(f, self.1)?;
        write_hex(f, self.2)?;
        Ok(())
    }
}

// ---

#[derive(RustEmbed)]
#[folder = "etc/defaults/themes/"]
struct Assets;

// ---

fn unhex(high: u8, low: u8) -> Option<u8> {
    unhex_one(high).and_then(|high| unhex_one(low).map(|low| (high << 4) + low))
}

fn unhex_one(v: u8) -> Option<u8> {
    match v {
        b'0'..=b'9' => Some(v - b'0'),
        b'a'..=b'f' => Some(10 + v - b'a'),
        b'A'..=b'F' => Some(10 + v - b'A'),
        _ => None,
    }
}

fn write_hex<T: fmt::Write>(to: &mut T, v: u8) -> fmt::Result {
    to.write_char(HEXDIGIT[(v >> 4) as usize].into())?;
    to.write_char(HEXDIGIT[(v & 0xF) as usize].into())?;
    Ok(())
}

const HEXDIGIT: [u8; 16] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'a', b'b', b'c', b'd', b'e', b'f',
];

// ---

#[cfg(test)]
mod tests;
