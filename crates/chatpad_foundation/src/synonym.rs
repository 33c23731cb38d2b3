//! Synonym definitions.

use im::Vector;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A literal alias: every occurrence of `name` becomes `value`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Synonym {
    name: String,
    value: String,
}

impl Synonym {
    /// Creates a synonym.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_synonym(name, "name can't be empty"));
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Returns the text being replaced.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An immutable snapshot of synonyms in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynonymTable {
    synonyms: Vector<Synonym>,
}

impl SynonymTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a table with `synonym` appended.
    #[must_use]
    pub fn with(&self, synonym: Synonym) -> Self {
        let mut synonyms = self.synonyms.clone();
        synonyms.push_back(synonym);
        Self { synonyms }
    }

    /// Appends a synonym in place.
    pub fn push(&mut self, synonym: Synonym) {
        self.synonyms.push_back(synonym);
    }

    /// Removes every synonym named `name`, returning how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.synonyms.len();
        self.synonyms.retain(|synonym| synonym.name != name);
        before - self.synonyms.len()
    }

    /// Returns the number of synonyms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Returns true if there are no synonyms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Returns an iterator over the synonyms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Synonym> {
        self.synonyms.iter()
    }
}

impl FromIterator<Synonym> for SynonymTable {
    fn from_iter<I: IntoIterator<Item = Synonym>>(iter: I) -> Self {
        Self {
            synonyms: iter.into_iter().collect(),
        }
    }
}
