//! The valid input names of a console.
//!
//! Names are stored lowercase and bucketed by first character, longest
//! first, so the tokenizer can find the longest name at a position without
//! scanning the whole set.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of input names supporting longest-match lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct InputNames {
    by_first: HashMap<char, Vec<String>>,
    len: usize,
}

impl InputNames {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name. Empty names and duplicates are ignored.
    pub fn insert(&mut self, name: &str) {
        let name = name.to_lowercase();
        let Some(first) = name.chars().next() else {
            return;
        };
        let bucket = self.by_first.entry(first).or_default();
        if bucket.iter().any(|existing| *existing == name) {
            return;
        }
        let at = bucket.partition_point(|existing| existing.len() >= name.len());
        bucket.insert(at, name);
        self.len += 1;
    }

    /// Returns true if `name` is in the set, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        name.chars()
            .next()
            .and_then(|first| self.by_first.get(&first))
            .is_some_and(|bucket| bucket.contains(&name))
    }

    /// Returns the longest name that `text` starts with.
    ///
    /// `text` is expected to be lowercase already.
    #[must_use]
    pub fn longest_match(&self, text: &str) -> Option<&str> {
        let first = text.chars().next()?;
        self.by_first
            .get(&first)?
            .iter()
            .find(|name| text.starts_with(name.as_str()))
            .map(String::as_str)
    }

    /// Returns every name that `text` starts with, longest first.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.chars()
            .next()
            .and_then(|first| self.by_first.get(&first))
            .into_iter()
            .flatten()
            .filter(move |name| text.starts_with(name.as_str()))
            .map(String::as_str)
    }

    /// Returns the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_first.values().flatten().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for InputNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.insert(name.as_ref());
        }
        names
    }
}

impl From<Vec<String>> for InputNames {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<InputNames> for Vec<String> {
    fn from(names: InputNames) -> Self {
        let mut all: Vec<String> = names.by_first.into_values().flatten().collect();
        all.sort();
        all
    }
}
