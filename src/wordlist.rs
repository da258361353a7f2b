// std imports
use std::{fs, io::Read, path::Path, sync::Arc};

// local imports
use crate::error::Result;

// ---

/// Word corpus to search in.
///
/// Words are stored one per line and lowercased on load. Empty lines are
/// kept, so word positions match line numbers of the source file.
#[derive(Debug, Default, Clone)]
pub struct Wordlist {
    words: Vec<Arc<str>>,
}

impl Wordlist {
    /// Loads the word list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from(fs::read_to_string(path)?.as_str()))
    }

    /// Reads the word list to the end of the stream.
    pub fn from_reader(mut input: impl Read) -> Result<Self> {
        let mut buf = String::new();
        input.read_to_string(&mut buf)?;
        Ok(Self::from(buf.as_str()))
    }

    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<&str> for Wordlist {
    fn from(s: &str) -> Self {
        Self {
            words: s.split('\n').map(|word| word.trim().to_lowercase().into()).collect(),
        }
    }
}

// ---
