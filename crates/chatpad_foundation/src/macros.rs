//! Macro definitions and the snapshot the expander reads them from.
//!
//! A static macro is a name and a template. A dynamic macro's name ends in a
//! list of wildcard slots, `#press(*,*)`, and its template refers to the call
//! arguments as `<0>`, `<1>` and so on.

use std::ops::Bound;

use im::OrdMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Character that starts every macro name.
pub const MACRO_SIGIL: char = '#';

/// Shortest allowed macro name, sigil included.
pub const MIN_MACRO_NAME_LEN: usize = 2;

/// Longest allowed macro name, sigil included.
pub const MAX_MACRO_NAME_LEN: usize = 50;

/// A validated macro definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Macro {
    name: String,
    template: String,
    arity: Option<usize>,
}

impl Macro {
    /// Creates a macro whose name starts with [`MACRO_SIGIL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the name is malformed.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Result<Self> {
        Self::with_sigil(name, template, MACRO_SIGIL)
    }

    /// Creates a macro whose name starts with `sigil`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name does not start with `sigil`, is not
    /// 2 to 50 characters long, lacks an alphanumeric character after the
    /// sigil, contains whitespace or a second sigil, or has a malformed
    /// wildcard list.
    pub fn with_sigil(
        name: impl Into<String>,
        template: impl Into<String>,
        sigil: char,
    ) -> Result<Self> {
        let name = name.into();
        let arity = validate_name(&name, sigil)?;
        Ok(Self {
            name,
            template: template.into(),
            arity,
        })
    }

    /// Returns the full name, including any wildcard list.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name without its wildcard list.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name
            .find('(')
            .map_or(self.name.as_str(), |open| &self.name[..open])
    }

    /// Returns the template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the number of arguments a dynamic macro takes.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Returns true if the macro takes arguments.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.arity.is_some()
    }
}

/// Builds the name a dynamic macro taking `arity` arguments is stored under.
#[must_use]
pub fn dynamic_name(base: &str, arity: usize) -> String {
    let slots = vec!["*"; arity.max(1)].join(",");
    format!("{base}({slots})")
}

fn validate_name(name: &str, sigil: char) -> Result<Option<usize>> {
    let mut chars = name.chars();
    if chars.next() != Some(sigil) {
        return Err(Error::invalid_macro(
            name,
            format!("must start with '{sigil}'"),
        ));
    }
    let len = name.chars().count();
    if !(MIN_MACRO_NAME_LEN..=MAX_MACRO_NAME_LEN).contains(&len) {
        return Err(Error::invalid_macro(
            name,
            format!("must be {MIN_MACRO_NAME_LEN} to {MAX_MACRO_NAME_LEN} characters long"),
        ));
    }
    if !chars.next().is_some_and(char::is_alphanumeric) {
        return Err(Error::invalid_macro(
            name,
            format!("the character after '{sigil}' must be alphanumeric"),
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::invalid_macro(name, "can't contain whitespace"));
    }
    if name.chars().skip(1).any(|c| c == sigil) {
        return Err(Error::invalid_macro(
            name,
            format!("can't contain '{sigil}' after the first character"),
        ));
    }

    let Some(open) = name.find('(') else {
        return Ok(None);
    };
    let slots = name[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| Error::invalid_macro(name, "argument list must end with ')'"))?;
    if slots.split(',').any(|slot| slot != "*") {
        return Err(Error::invalid_macro(
            name,
            "argument list must be '*' slots separated by ','",
        ));
    }
    Ok(Some(slots.split(',').count()))
}

/// Read access to macro definitions during expansion.
///
/// Implementations must answer consistently for the duration of one parse.
/// A name returned by [`names_with_prefix`](Self::names_with_prefix) whose
/// [`template`](Self::template) is then missing aborts the expansion.
pub trait MacroSource {
    /// Returns every stored name that starts with `prefix`.
    fn names_with_prefix(&self, prefix: &str) -> Vec<&str>;

    /// Returns the template stored under exactly `name`.
    fn template(&self, name: &str) -> Option<&str>;
}

/// An immutable snapshot of macro definitions, ordered by name.
///
/// Cloning is cheap and shares structure, so each parse can hold its own
/// snapshot while the owner keeps editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroTable {
    macros: OrdMap<String, Macro>,
}

impl MacroTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a table with `definition` added, replacing any macro of the
    /// same name.
    #[must_use]
    pub fn with(&self, definition: Macro) -> Self {
        Self {
            macros: self.macros.update(definition.name.clone(), definition),
        }
    }

    /// Returns a table without the macro named `name`.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        Self {
            macros: self.macros.without(name),
        }
    }

    /// Adds or replaces a macro in place, returning the old definition.
    pub fn insert(&mut self, definition: Macro) -> Option<Macro> {
        self.macros.insert(definition.name.clone(), definition)
    }

    /// Removes a macro in place.
    pub fn remove(&mut self, name: &str) -> Option<Macro> {
        self.macros.remove(name)
    }

    /// Looks up a macro by full name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Macro> {
        self.macros.get(name)
    }

    /// Returns the number of macros.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// Returns true if there are no macros.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Returns an iterator over the macros in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Macro> {
        self.macros.values()
    }
}

impl MacroSource for MacroTable {
    fn names_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.macros
            .range::<_, str>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(name, _)| name.as_str())
            .take_while(|name| name.starts_with(prefix))
            .collect()
    }

    fn template(&self, name: &str) -> Option<&str> {
        self.macros.get(name).map(Macro::template)
    }
}

impl FromIterator<Macro> for MacroTable {
    fn from_iter<I: IntoIterator<Item = Macro>>(iter: I) -> Self {
        Self {
            macros: iter
                .into_iter()
                .map(|definition| (definition.name.clone(), definition))
                .collect(),
        }
    }
}
