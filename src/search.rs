// std imports
use std::sync::Arc;

// third-party imports
use strum::EnumString;

// workspace imports
use wordmask::Pattern;

// local imports
use crate::wordlist::Wordlist;

// ---

/// How query text is matched against corpus words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SearchMode {
    /// Whole-word match with `_` and `*` wildcards.
    #[default]
    Pattern,
    /// Substring match anywhere in the word.
    Contains,
}

// ---

/// Finds all corpus words matching the query, preserving corpus order.
pub fn find(corpus: &Wordlist, query: &str, mode: SearchMode) -> Vec<Arc<str>> {
    match mode {
        SearchMode::Contains => corpus
            .words()
            .iter()
            .filter(|word| word.contains(query))
            .cloned()
            .collect(),
        SearchMode::Pattern => {
            let pattern = Pattern::new(query);
            corpus
                .words()
                .iter()
                .filter(|word| pattern.matches(word))
                .cloned()
                .collect()
        }
    }
}

// ---
