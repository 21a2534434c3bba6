//! Closure driver: saturation rounds and gap filling.

use std::collections::BTreeSet;
use std::fmt;

use grp_core::{ErrorInfo, GroupError, Rep};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::critical::critical_pairs;
use crate::group::Group;
use crate::integrate::integrate;
use crate::oracle;
use crate::primes;
use crate::table::Rule;

/// Structural status of a group after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClosureStatus {
    /// Every sink has an image under every alphabet character.
    Complete,
    /// `sink` has no known image under `generator`.
    Incomplete {
        /// Sink lacking an image.
        sink: Rep,
        /// Character whose image is missing.
        generator: char,
    },
    /// Closure exceeded the sink limit; the group kept its last state within
    /// the limit.
    Aborted {
        /// Number of sinks reached when the limit was exceeded.
        sink_count: usize,
    },
}

impl ClosureStatus {
    /// Whether the status is [`ClosureStatus::Complete`].
    pub fn is_complete(&self) -> bool {
        matches!(self, ClosureStatus::Complete)
    }

    /// Converts the status into a result for callers using `?`.
    pub fn into_result(self) -> Result<(), GroupError> {
        match self {
            ClosureStatus::Complete => Ok(()),
            ClosureStatus::Incomplete { sink, generator } => Err(GroupError::Incomplete(
                ErrorInfo::new("image-missing", "a sink has no image under a generator")
                    .with_context("sink", sink.to_string())
                    .with_context("generator", generator.to_string()),
            )),
            ClosureStatus::Aborted { sink_count } => Err(GroupError::Capacity(
                ErrorInfo::new("too-many-sinks", "closure exceeded the sink limit")
                    .with_context("sink_count", sink_count.to_string())
                    .with_hint("raise max_sinks if the group is expected to be larger"),
            )),
        }
    }
}

impl fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureStatus::Complete => write!(f, "Complete"),
            ClosureStatus::Incomplete { sink, generator } => {
                write!(f, "Incomplete, missing {}", sink.then(*generator))
            }
            ClosureStatus::Aborted { sink_count } => {
                write!(f, "Aborted, too many sinks ({sink_count})")
            }
        }
    }
}

enum Saturation {
    Settled,
    RoundLimit,
    Overflow { sink_count: usize },
}

impl Group {
    /// Runs saturation rounds (prime extraction, then integration of every
    /// overlap of prime rules) until a round changes neither the prime rules
    /// nor the sinks. Does not fill gaps.
    pub fn integrate_combined_prime_reductibles(&mut self) -> ClosureStatus {
        match self.saturate() {
            Saturation::Overflow { sink_count } => ClosureStatus::Aborted { sink_count },
            Saturation::Settled | Saturation::RoundLimit => self.status(),
        }
    }

    /// Saturates, then repeatedly adds a provisional sink for the first
    /// missing image and saturates again, until the group is complete or the
    /// sink limit is exceeded.
    pub fn fill_in_gaps(&mut self) -> ClosureStatus {
        loop {
            if let Saturation::Overflow { sink_count } = self.saturate() {
                return ClosureStatus::Aborted { sink_count };
            }
            let Some((sink, generator)) = oracle::first_gap(&self.table, &self.alphabet) else {
                return ClosureStatus::Complete;
            };

            let checkpoint = self.table.clone();
            let provisional = sink.then(generator);
            debug!("filling gap {provisional} ({} sinks)", self.table.sink_count());
            integrate(&mut self.table, &self.alphabet, vec![provisional]);

            let sink_count = self.table.sink_count();
            if sink_count > self.config.max_sinks {
                warn!(
                    "group {} exceeded {} sinks while filling gaps",
                    self.config.name, self.config.max_sinks
                );
                self.table = checkpoint;
                return ClosureStatus::Aborted { sink_count };
            }
        }
    }

    fn saturate(&mut self) -> Saturation {
        for round in 0..self.config.max_rounds {
            let checkpoint = self.table.clone();
            let before = self.fingerprint();

            let dropped = primes::extract(&mut self.table, &self.alphabet);
            let diverging = self.combine_prime_rules();

            let sink_count = self.table.sink_count();
            if sink_count > self.config.max_sinks {
                warn!(
                    "group {} exceeded {} sinks in round {round}",
                    self.config.name, self.config.max_sinks
                );
                self.table = checkpoint;
                return Saturation::Overflow { sink_count };
            }

            let after = self.fingerprint();
            debug!(
                "round {round}: dropped {dropped} rules, {diverging} diverging overlaps, {} rules, {sink_count} sinks",
                self.table.primes().len()
            );
            if before == after {
                return Saturation::Settled;
            }
        }
        warn!(
            "group {} did not settle within {} rounds",
            self.config.name, self.config.max_rounds
        );
        Saturation::RoundLimit
    }

    /// Integrates every overlap of every ordered pair of prime rules, taken
    /// from a snapshot of the rules at the start of the pass. Returns the
    /// number of overlaps whose two reductions differed.
    fn combine_prime_rules(&mut self) -> usize {
        let mut snapshot: Vec<Rep> = self.table.primes().to_vec();
        self.alphabet.sort(&mut snapshot);

        let mut diverging = 0;
        for first in &snapshot {
            for second in &snapshot {
                // Either rule may have been dropped by an earlier integration.
                let (Some(first), Some(second)) = (self.current_rule(first), self.current_rule(second))
                else {
                    continue;
                };
                let rules = self.table.rules();
                for pair in critical_pairs(&first, &second, &rules) {
                    if !pair.is_joinable() {
                        diverging += 1;
                    }
                    integrate(
                        &mut self.table,
                        &self.alphabet,
                        vec![pair.word, pair.left, pair.right],
                    );
                }
            }
        }
        diverging
    }

    fn current_rule(&self, word: &Rep) -> Option<Rule> {
        if !self.table.is_prime(word) {
            return None;
        }
        self.table
            .sink_of(word)
            .map(|target| Rule::new(word.clone(), target.clone()))
    }

    fn fingerprint(&self) -> (BTreeSet<Rule>, BTreeSet<Rep>) {
        (
            self.table.rules().into_iter().collect(),
            self.table.sinks().cloned().collect(),
        )
    }
}
