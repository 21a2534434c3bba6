use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::rep::{invert_char, Rep};

/// Registry of generator characters and their inverses.
///
/// The case of a letter seen first becomes the generator, the toggled case
/// its inverse. The alphabet also defines the canonical ordering of
/// representations, see [`Alphabet::sort_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    generators: Vec<char>,
    inverses: BTreeSet<char>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `c` as a generator unless it, or its inverse, is already
    /// known. Returns `true` for a newly registered generator.
    pub fn register(&mut self, c: char) -> bool {
        if self.contains(c) {
            return false;
        }
        self.generators.push(c);
        self.inverses.insert(invert_char(c));
        true
    }

    /// Whether `c` is a known generator or inverse character.
    pub fn contains(&self, c: char) -> bool {
        self.generators.contains(&c) || self.inverses.contains(&c)
    }

    /// Whether `c` is registered as an inverse character.
    pub fn is_inverse(&self, c: char) -> bool {
        self.inverses.contains(&c)
    }

    /// Generators in discovery order.
    pub fn generators(&self) -> &[char] {
        &self.generators
    }

    /// Every character of the alphabet: each generator followed by its inverse.
    pub fn symbols(&self) -> Vec<char> {
        self.generators
            .iter()
            .flat_map(|&g| [g, invert_char(g)])
            .collect()
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether no generator has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Counts the inverse characters occurring in `rep`.
    pub fn inverse_count(&self, rep: &Rep) -> usize {
        rep.chars().filter(|c| self.inverses.contains(c)).count()
    }

    /// Canonical ordering key: inverse characters, then length, then the word.
    ///
    /// The ordering is compatible with composition: replacing a sub-word by a
    /// smaller one yields a smaller word.
    pub fn sort_key<'a>(&self, rep: &'a Rep) -> (usize, usize, &'a str) {
        (self.inverse_count(rep), rep.len(), rep.as_str())
    }

    /// Compares two representations by [`Alphabet::sort_key`].
    pub fn compare(&self, a: &Rep, b: &Rep) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Returns the smallest representation of `reps` in canonical order.
    pub fn most_reduced<'a, I>(&self, reps: I) -> Option<&'a Rep>
    where
        I: IntoIterator<Item = &'a Rep>,
    {
        reps.into_iter().min_by(|a, b| self.compare(a, b))
    }

    /// Sorts `reps` in canonical order.
    pub fn sort(&self, reps: &mut [Rep]) {
        reps.sort_by(|a, b| self.compare(a, b));
    }
}
