use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GroupError};
use crate::notation;

/// Returns the inverse of a generator character, encoded by letter case.
pub fn invert_char(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}

/// A representation of a group element: a word over generator characters.
///
/// The empty word is the identity. Representations are stored in expanded
/// form and only contain ASCII letters; [`Rep::parse`] accepts the human
/// notation and [`fmt::Display`] renders it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rep(String);

impl Rep {
    /// The identity representation.
    pub fn identity() -> Self {
        Self(String::new())
    }

    /// Wraps an already expanded word without checking it, see
    /// [`Rep::try_new`].
    pub fn new(expanded: impl Into<String>) -> Self {
        Self(expanded.into())
    }

    /// Wraps an already expanded word after checking it only holds ASCII
    /// letters.
    pub fn try_new(expanded: impl Into<String>) -> Result<Self, GroupError> {
        let rep = Self(expanded.into());
        rep.validate()?;
        Ok(rep)
    }

    /// Checks that the word only holds ASCII letters, the characters the
    /// rewriting engine works with.
    pub fn validate(&self) -> Result<(), GroupError> {
        match self.0.char_indices().find(|(_, c)| !c.is_ascii_alphabetic()) {
            None => Ok(()),
            Some((position, c)) => {
                let info = ErrorInfo::new("notation-invalid", "representation holds a non-letter")
                    .with_context("rep", self.0.clone())
                    .with_context("character", c.to_string())
                    .with_context("position", position.to_string());
                Err(GroupError::Notation(info))
            }
        }
    }

    /// Parses a representation written in human notation (`H2r`, `e`).
    pub fn parse(notation: &str) -> Result<Self, GroupError> {
        notation::expand(notation).map(Self)
    }

    /// Returns the expanded word.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the expanded word as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of generator characters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the word is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this representation is the identity.
    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the generator characters of the word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Composition, which is concatenation of the words.
    pub fn compose(&self, other: &Rep) -> Rep {
        let mut word = String::with_capacity(self.len() + other.len());
        word.push_str(&self.0);
        word.push_str(&other.0);
        Rep(word)
    }

    /// Composition with a single generator character on the right.
    pub fn then(&self, generator: char) -> Rep {
        let mut word = self.0.clone();
        word.push(generator);
        Rep(word)
    }

    /// The formal inverse: the word reversed with every character inverted.
    pub fn inverse(&self) -> Rep {
        Rep(self.0.chars().rev().map(invert_char).collect())
    }

    /// Sub-word between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> Rep {
        Rep(self.0[start..end].to_string())
    }

    /// Renders the representation in human notation.
    pub fn compressed(&self) -> String {
        notation::compress(&self.0)
    }

    /// Consumes the representation and returns the expanded word.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Rep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compressed())
    }
}

impl From<char> for Rep {
    fn from(generator: char) -> Self {
        Rep(generator.to_string())
    }
}
