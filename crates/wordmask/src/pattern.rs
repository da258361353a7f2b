// std imports
use std::fmt;
use std::mem::take;

// third-party imports
use memchr::{memchr2, memmem};

// local imports
use crate::utf8;

// ---

/// Returns `true` if `query` contains any wildcard characters.
#[inline]
pub fn has_wildcards(query: &str) -> bool {
    memchr2(b'_', b'*', query.as_bytes()).is_some()
}

/// A compiled word mask.
///
/// A mask matches a whole word, not a fragment of it. Two characters are
/// special: `_` matches exactly one character and `*` matches any run of
/// characters, including an empty one. Everything else matches itself, so
/// characters that carry meaning in other pattern languages, like `.` or `+`,
/// are ordinary literals here and no escaping is ever needed.
///
/// # Examples
///
/// ```
/// use wordmask::Pattern;
///
/// let mask = Pattern::new("c_t");
/// assert!(mask.matches("cat"));
/// assert!(!mask.matches("cart"));
///
/// let mask = Pattern::new("a*");
/// assert!(mask.matches("a"));
/// assert!(mask.matches("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compiles `query` into a pattern.
    ///
    /// Compilation cannot fail, any string is a valid mask.
    pub fn new(query: impl AsRef<str>) -> Self {
        Compiler::default().compile(query.as_ref())
    }

    /// Checks whether the whole of `word` matches the pattern.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        Self::partial_match(&self.segments, word)
    }

    fn partial_match(mut segments: &[Segment], mut word: &str) -> bool {
        while let Some((segment, rest)) = segments.split_first() {
            for _ in 0..segment.gap.blanks {
                let Some(&byte) = word.as_bytes().first() else {
                    return false;
                };
                word = &word[utf8::char_width(byte)..];
            }

            if segment.gap.open {
                if segment.text.is_empty() {
                    // an open gap without trailing text is always the last
                    // segment and swallows the rest of the word
                    return true;
                }
                // occurrences may overlap, so resume the search one byte past
                // the start of the previous one
                let needle = segment.text.as_bytes();
                let mut from = 0;
                while let Some(i) = memmem::find(&word.as_bytes()[from..], needle) {
                    let at = from + i;
                    if Self::partial_match(rest, &word[at + segment.text.len()..]) {
                        return true;
                    }
                    from = at + 1;
                }
                return false;
            } else {
                if !word.starts_with(&segment.text) {
                    return false;
                }
                word = &word[segment.text.len()..];
            }

            segments = rest;
        }

        word.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            for _ in 0..segment.gap.blanks {
                f.write_str("_")?;
            }
            if segment.gap.open {
                f.write_str("*")?;
            }
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

// ---

/// A literal chunk of the mask preceded by a wildcard gap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Segment {
    gap: Gap,
    text: String,
}

/// The wildcard characters between two literal chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Gap {
    /// Number of `_` wildcards, one character each.
    blanks: usize,
    /// Whether the gap includes a `*` and may swallow any number of characters.
    open: bool,
}

impl Gap {
    #[inline]
    fn is_empty(&self) -> bool {
        self.blanks == 0 && !self.open
    }
}

// ---

#[derive(Default)]
struct Compiler {
    segments: Vec<Segment>,
    next: Segment,
}

impl Compiler {
    fn compile(mut self, query: &str) -> Pattern {
        for c in query.chars() {
            match c {
                '*' => {
                    self.flush();
                    self.next.gap.open = true;
                }
                '_' => {
                    self.flush();
                    self.next.gap.blanks += 1;
                }
                _ => {
                    self.next.text.push(c);
                }
            }
        }

        self.flush();

        if !self.next.gap.is_empty() || self.segments.is_empty() {
            self.segments.push(self.next);
        }

        Pattern {
            segments: self.segments,
        }
    }

    fn flush(&mut self) {
        if !self.next.text.is_empty() {
            self.segments.push(take(&mut self.next));
        }
    }
}
