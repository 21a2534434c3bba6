use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use grp_core::{Alphabet, ErrorInfo, GroupError, Rep};
use log::trace;
use serde::{Deserialize, Serialize};

/// A prime reduction rule `word -> target`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Left hand side, the representation being rewritten.
    pub word: Rep,
    /// The sink the word reduces to.
    pub target: Rep,
}

impl Rule {
    /// Creates a rule.
    pub fn new(word: Rep, target: Rep) -> Self {
        Self { word, target }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.word, self.target)
    }
}

/// Outcome of [`ReductionTable::insert_or_merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The representation already pointed at the proposed sink.
    Unchanged,
    /// The representation was recorded for the first time.
    Inserted {
        /// Whether the representation was recorded as its own sink.
        is_sink: bool,
    },
    /// Two distinct sinks turned out to be the same element.
    Merged(Merge),
}

/// Description of a sink merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    /// The sink that stays canonical.
    pub canonical: Rep,
    /// The former sink, now reducible to `canonical`.
    pub retired: Rep,
    /// Every key whose value moved from `retired` to `canonical`.
    pub redirected: Vec<Rep>,
}

/// Mutable store mapping every explored representation to its current sink.
///
/// Invariants (checked by [`ReductionTable::validate`]): every value is a
/// sink, every sink maps to itself, and the identity is a sink. The prime
/// rules are kept in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReductionTable {
    entries: BTreeMap<Rep, Rep>,
    sinks: BTreeSet<Rep>,
    primes: Vec<Rep>,
}

impl ReductionTable {
    /// Creates a table that only knows the identity.
    pub fn new() -> Self {
        let mut table = Self::default();
        table.entries.insert(Rep::identity(), Rep::identity());
        table.sinks.insert(Rep::identity());
        table
    }

    /// Looks up the current sink of `rep`.
    pub fn sink_of(&self, rep: &Rep) -> Option<&Rep> {
        self.entries.get(rep)
    }

    /// Whether `rep` has been explored.
    pub fn contains(&self, rep: &Rep) -> bool {
        self.entries.contains_key(rep)
    }

    /// Whether `rep` is currently a sink.
    pub fn is_sink(&self, rep: &Rep) -> bool {
        self.sinks.contains(rep)
    }

    /// Iterates over the current sinks in bytewise order.
    pub fn sinks(&self) -> impl Iterator<Item = &Rep> {
        self.sinks.iter()
    }

    /// Number of current sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Number of explored representations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing but the identity is known.
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    /// All explored representations with their sinks.
    pub fn entries(&self) -> &BTreeMap<Rep, Rep> {
        &self.entries
    }

    /// Prime rule words in discovery order.
    pub fn primes(&self) -> &[Rep] {
        &self.primes
    }

    /// Whether `rep` is currently a prime rule word.
    pub fn is_prime(&self, rep: &Rep) -> bool {
        self.primes.contains(rep)
    }

    /// Prime rules with their targets, in discovery order.
    pub fn rules(&self) -> Vec<Rule> {
        self.primes
            .iter()
            .filter_map(|word| {
                self.entries
                    .get(word)
                    .map(|target| Rule::new(word.clone(), target.clone()))
            })
            .collect()
    }

    /// Records that `rep` reduces to `sink`.
    ///
    /// A representation already pointing at a different sink triggers a merge
    /// of the two sinks; the one first in canonical order stays canonical.
    pub fn insert_or_merge(&mut self, rep: &Rep, sink: &Rep, alphabet: &Alphabet) -> Update {
        // A proposed sink that is already known reducible stands for its own sink.
        let sink = self.resolve(sink);
        if let Some(known) = self.entries.get(rep) {
            if *known == sink {
                return Update::Unchanged;
            }
            let known = known.clone();
            let (canonical, retired) = if alphabet.compare(&known, &sink).is_le() {
                (known, sink)
            } else {
                (sink, known)
            };
            return match self.merge(&retired, &canonical) {
                Some(merge) => Update::Merged(merge),
                None => Update::Unchanged,
            };
        }

        self.entries.insert(rep.clone(), sink.clone());
        if !self.sinks.contains(&sink) {
            self.entries.insert(sink.clone(), sink.clone());
            self.sinks.insert(sink.clone());
        }
        Update::Inserted {
            is_sink: *rep == sink,
        }
    }

    /// Redirects every entry pointing at the sink `retired` to `canonical`.
    ///
    /// Returns `None` when `retired` is not a sink or both are equal.
    pub fn merge(&mut self, retired: &Rep, canonical: &Rep) -> Option<Merge> {
        let canonical = &self.resolve(canonical);
        if retired == canonical || !self.sinks.contains(retired) {
            return None;
        }

        let mut redirected = Vec::new();
        for (key, value) in self.entries.iter_mut() {
            if value == retired {
                *value = canonical.clone();
                redirected.push(key.clone());
            }
        }
        self.sinks.remove(retired);
        if !self.sinks.contains(canonical) {
            self.entries.insert(canonical.clone(), canonical.clone());
            self.sinks.insert(canonical.clone());
        }
        trace!("merged sink {retired} into {canonical} ({} entries)", redirected.len());

        Some(Merge {
            canonical: canonical.clone(),
            retired: retired.clone(),
            redirected,
        })
    }

    fn resolve(&self, rep: &Rep) -> Rep {
        self.entries.get(rep).cloned().unwrap_or_else(|| rep.clone())
    }

    pub(crate) fn add_prime(&mut self, rep: &Rep) -> bool {
        if self.primes.contains(rep) {
            return false;
        }
        self.primes.push(rep.clone());
        true
    }

    pub(crate) fn remove_prime(&mut self, rep: &Rep) -> bool {
        let before = self.primes.len();
        self.primes.retain(|prime| prime != rep);
        before != self.primes.len()
    }

    /// Rebuilds a table from raw parts, validating the invariants.
    pub fn from_parts(
        entries: BTreeMap<Rep, Rep>,
        primes: Vec<Rep>,
    ) -> Result<Self, GroupError> {
        let sinks = entries
            .iter()
            .filter(|(key, value)| key == value)
            .map(|(key, _)| key.clone())
            .collect();
        let table = Self {
            entries,
            sinks,
            primes,
        };
        table.validate()?;
        Ok(table)
    }

    /// Checks the structural invariants of the table.
    pub fn validate(&self) -> Result<(), GroupError> {
        let identity = Rep::identity();
        if self.entries.get(&identity) != Some(&identity) || !self.sinks.contains(&identity) {
            return Err(table_error(
                ErrorInfo::new("identity-not-sink", "the identity must be a sink"),
                &identity,
            ));
        }
        for (key, value) in &self.entries {
            if !self.sinks.contains(value) {
                let info = ErrorInfo::new("value-not-sink", "entry points at a non-sink")
                    .with_context("value", value.to_string());
                return Err(table_error(info, key));
            }
        }
        for sink in &self.sinks {
            if self.entries.get(sink) != Some(sink) {
                let info = ErrorInfo::new("sink-not-idempotent", "sink does not map to itself");
                return Err(table_error(info, sink));
            }
        }
        for prime in &self.primes {
            if self.sinks.contains(prime) || !self.entries.contains_key(prime) {
                let info = ErrorInfo::new(
                    "prime-not-reductible",
                    "prime rule word must be a reducible entry",
                );
                return Err(table_error(info, prime));
            }
        }
        Ok(())
    }
}

fn table_error(info: ErrorInfo, rep: &Rep) -> GroupError {
    GroupError::Table(info.with_context("rep", rep.to_string()))
}
