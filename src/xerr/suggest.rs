// std imports
use std::{cmp::Ordering, collections::HashSet, sync::Arc};

const MIN_RELEVANCE: f64 = 0.75;

/// Candidate replacements for a misspelled name, ordered by relevance.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    candidates: Vec<(f64, Arc<str>)>,
}

impl Suggestions {
    pub fn new<T, I>(wanted: &str, variants: I) -> Self
    where
        T: Into<Arc<str>>,
        I: IntoIterator<Item = T>,
    {
        let mut candidates = Vec::<(f64, Arc<str>)>::new();
        let mut reg = HashSet::new();

        for variant in variants {
            let variant = variant.into();
            if reg.contains(&*variant) {
                continue;
            }

            let relevance = strsim::jaro(wanted, &variant);

            if relevance > MIN_RELEVANCE {
                let pos = candidates
                    .binary_search_by(|candidate| {
                        if candidate.0 < relevance {
                            Ordering::Greater
                        } else {
                            Ordering::Less
                        }
                    })
                    .unwrap_or_else(|e| e);
                candidates.insert(pos, (relevance, variant.clone()));
                reg.insert(variant);
            }
        }

        Self { candidates }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> SuggestionsIter {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a str;
    type IntoIter = SuggestionsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        SuggestionsIter {
            iter: self.candidates.iter(),
        }
    }
}

pub struct SuggestionsIter<'a> {
    iter: std::slice::Iter<'a, (f64, Arc<str>)>,
}

impl<'a> Iterator for SuggestionsIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, candidate)| candidate.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let suggestions = Suggestions::new("light", vec!["ligth", "light", "ligth", "dark", "lights"]);
        assert!(!suggestions.is_empty());

        let mut iter = suggestions.iter();
        assert_eq!(iter.next(), Some("light"));
        assert_eq!(iter.next(), Some("lights"));
        assert_eq!(iter.next(), Some("ligth"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_suggestions_irrelevant() {
        let suggestions = Suggestions::new("light", vec!["zebra", "quorum"]);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_none() {
        let suggestions = Suggestions::none();
        assert!(suggestions.is_empty());
        let mut iter = (&suggestions).into_iter();

        assert_eq!(iter.next(), None);
    }
}
