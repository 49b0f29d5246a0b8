//! Bound argument storage.
//!
//! The mapping from slot names to raw input words that handlers receive.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use banter_foundation::{Error, Result};

/// The arguments bound for one handler invocation.
///
/// Maps slot names to the raw words that bound to them. Optional slots the
/// input did not supply are absent from the map, never bound to an empty
/// placeholder. The dispatcher performs no coercion; the [`parsed`] and
/// [`required`] helpers locate that in the handler.
///
/// [`parsed`]: BoundArgs::parsed
/// [`required`]: BoundArgs::required
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundArgs {
    values: HashMap<String, String>,
}

impl BoundArgs {
    /// Creates an empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a raw word to a slot name.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Gets the raw word bound to a slot.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Checks whether a slot was bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of bound slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether no slots were bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over bound slots as (name, word) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Parses an optional slot's word into `T`.
    ///
    /// Returns `Ok(None)` when the slot is absent and an invalid-argument
    /// error when the word is present but does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`banter_foundation::ErrorKind::InvalidArgument`] on a word
    /// `T` rejects.
    pub fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>>
    where
        T::Err: Display,
    {
        match self.get(name) {
            None => Ok(None),
            Some(word) => word
                .parse()
                .map(Some)
                .map_err(|e: T::Err| Error::invalid_argument(name, e.to_string())),
        }
    }

    /// Parses a required slot's word into `T`.
    ///
    /// # Errors
    ///
    /// Returns a missing-argument error when the slot is absent and an
    /// invalid-argument error when the word does not parse.
    pub fn required<T: FromStr>(&self, name: &str) -> Result<T>
    where
        T::Err: Display,
    {
        self.parsed(name)?
            .ok_or_else(|| Error::missing_argument(name))
    }
}
