use grp_core::{Alphabet, ErrorInfo, GroupError, Rep};
use log::debug;

use crate::closure::ClosureStatus;
use crate::config::GroupConfig;
use crate::integrate::integrate_batch;
use crate::oracle;
use crate::rewrite::reduce;
use crate::table::{ReductionTable, Rule};

/// A finitely presented group whose multiplication structure is inferred
/// from declared equivalences between representations.
///
/// The group only grows: equivalences are added through
/// [`Group::add_equivalences`] and the closure operations, and none is ever
/// retracted. Sinks may be retired when a smaller equivalent representation
/// turns up.
#[derive(Debug, Clone)]
pub struct Group {
    pub(crate) config: GroupConfig,
    pub(crate) alphabet: Alphabet,
    pub(crate) table: ReductionTable,
}

impl Group {
    /// Creates a group that only knows the identity.
    pub fn new(config: GroupConfig) -> Self {
        Self {
            config,
            alphabet: Alphabet::new(),
            table: ReductionTable::new(),
        }
    }

    /// Creates a group from batches of equivalent representations written in
    /// human notation, then runs the saturation fixpoint (without filling
    /// gaps).
    ///
    /// Every batch is parsed before anything is integrated, so a notation
    /// error leaves no partially built group behind. Saturation exceeding
    /// `max_sinks` is reported as [`GroupError::Capacity`].
    pub fn from_batches<I, B, S>(batches: I, config: GroupConfig) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = B>,
        B: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = batches
            .into_iter()
            .map(parse_batch::<B, S>)
            .collect::<Result<Vec<_>, _>>()?;

        let mut group = Self::new(config);
        for batch in parsed {
            group.add_reps(batch)?;
        }
        let status = group.integrate_combined_prime_reductibles();
        debug!("constructed group {}: {status}", group.config.name);
        if let ClosureStatus::Aborted { .. } = status {
            status.into_result()?;
        }
        Ok(group)
    }

    pub(crate) fn from_parts(config: GroupConfig, alphabet: Alphabet, table: ReductionTable) -> Self {
        Self {
            config,
            alphabet,
            table,
        }
    }

    /// Declares the representations (human notation) to be equivalent.
    ///
    /// Returns the sink the first representation now reduces to, or `None`
    /// for an empty batch, which carries no information.
    pub fn add_equivalences<I, S>(&mut self, reps: I) -> Result<Option<Rep>, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = parse_batch(reps)?;
        self.add_reps(batch)
    }

    /// Declares already expanded representations to be equivalent.
    ///
    /// Every representation must hold ASCII letters only; the batch is
    /// rejected as a whole otherwise.
    pub fn add_reps(&mut self, batch: Vec<Rep>) -> Result<Option<Rep>, GroupError> {
        for rep in &batch {
            rep.validate()?;
        }
        Ok(integrate_batch(&mut self.table, &mut self.alphabet, batch))
    }

    /// Display name of the group.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configuration the group was created with.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Generator alphabet discovered so far.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Read-only view of the reduction table.
    pub fn table(&self) -> &ReductionTable {
        &self.table
    }

    /// Current sinks in canonical order.
    pub fn sinks(&self) -> Vec<Rep> {
        let mut sinks: Vec<Rep> = self.table.sinks().cloned().collect();
        self.alphabet.sort(&mut sinks);
        sinks
    }

    /// Current prime rules, ordered canonically by rule word.
    pub fn prime_rules(&self) -> Vec<Rule> {
        let mut rules = self.table.rules();
        rules.sort_by(|a, b| self.alphabet.compare(&a.word, &b.word));
        rules
    }

    /// Number of current sinks.
    pub fn sink_count(&self) -> usize {
        self.table.sink_count()
    }

    /// Number of representations explored so far.
    pub fn explored_count(&self) -> usize {
        self.table.len()
    }

    /// Reduces `rep` with the current prime rules, leftmost occurrence first.
    pub fn reduce(&self, rep: &Rep) -> Rep {
        reduce(rep, &self.table.rules())
    }

    /// Completeness of the group in its current state.
    pub fn status(&self) -> ClosureStatus {
        match oracle::first_gap(&self.table, &self.alphabet) {
            None => ClosureStatus::Complete,
            Some((sink, generator)) => ClosureStatus::Incomplete { sink, generator },
        }
    }

    /// Whether every sink has an image under every alphabet character.
    pub fn is_complete(&self) -> bool {
        oracle::is_complete(&self.table, &self.alphabet)
    }

    /// One sink and one character without a known image, if any.
    pub fn missing_generator_report(&self) -> Option<(Rep, char)> {
        oracle::first_gap(&self.table, &self.alphabet)
    }

    /// Sink of a representation written in human notation.
    ///
    /// Requires a complete group: the word is reduced one character at a
    /// time, each step being the image of a sink under a character.
    pub fn sink_of(&self, notation: &str) -> Result<Rep, GroupError> {
        let rep = Rep::parse(notation)?;
        self.sink_of_rep(&rep)
    }

    /// Sink of an already expanded representation, see [`Group::sink_of`].
    pub fn sink_of_rep(&self, rep: &Rep) -> Result<Rep, GroupError> {
        self.status().into_result()?;

        let rules = self.table.rules();
        let mut current = Rep::identity();
        for c in rep.chars() {
            if !self.alphabet.contains(c) {
                let info = ErrorInfo::new("unknown-generator", "character is not in the alphabet")
                    .with_context("rep", rep.to_string())
                    .with_context("generator", c.to_string());
                return Err(GroupError::Notation(info));
            }
            current = reduce(&current.then(c), &rules);
        }
        if !self.table.is_sink(&current) {
            let info = ErrorInfo::new("reduction-not-sink", "reduction did not end in a sink")
                .with_context("rep", rep.to_string())
                .with_context("reduced", current.to_string());
            return Err(GroupError::Incomplete(info));
        }
        Ok(current)
    }

    /// Sink of the inverse of a representation written in human notation.
    pub fn inverse_of(&self, notation: &str) -> Result<Rep, GroupError> {
        let rep = Rep::parse(notation)?;
        self.sink_of_rep(&rep.inverse())
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new(GroupConfig::default())
    }
}

fn parse_batch<I, S>(reps: I) -> Result<Vec<Rep>, GroupError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    reps.into_iter().map(|rep| Rep::parse(rep.as_ref())).collect()
}
