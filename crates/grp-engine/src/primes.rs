//! Maintenance of the minimal set of prime rules.

use std::collections::BTreeMap;

use grp_core::{Alphabet, Rep};
use log::trace;

use crate::rewrite::reachable;
use crate::table::{ReductionTable, Rule};

/// Whether `rep` cannot be brought to its sink with the other prime rules.
pub(crate) fn should_be_prime(table: &ReductionTable, rep: &Rep) -> bool {
    let Some(sink) = table.sink_of(rep) else {
        return false;
    };
    if sink == rep {
        return false;
    }

    let mut known = BTreeMap::new();
    let mut rules = Vec::with_capacity(table.primes().len());
    for prime in table.primes().iter().filter(|prime| *prime != rep) {
        if let Some(target) = table.sink_of(prime) {
            known.insert(prime.clone(), target.clone());
            rules.push(Rule::new(prime.clone(), target.clone()));
        }
    }

    !reachable([rep.clone()], &known, &rules).contains(sink)
}

/// Adds `rep` as a prime rule when it is not derivable, then drops the
/// larger primes the new rule makes redundant.
pub(crate) fn consider(table: &mut ReductionTable, alphabet: &Alphabet, rep: &Rep) {
    if !should_be_prime(table, rep) {
        return;
    }
    if table.add_prime(rep) {
        trace!("new prime rule {rep}");
    }

    let established: Vec<Rep> = table.primes().to_vec();
    for prime in established {
        if alphabet.compare(rep, &prime).is_ge() {
            continue;
        }
        if !should_be_prime(table, &prime) && table.remove_prime(&prime) {
            trace!("prime rule {prime} made redundant by {rep}");
        }
    }
}

/// Drops every prime rule derivable from the remaining ones, largest first,
/// until no rule can be dropped. Returns the number of rules dropped.
pub(crate) fn extract(table: &mut ReductionTable, alphabet: &Alphabet) -> usize {
    let mut dropped = 0;
    loop {
        let mut candidates: Vec<Rep> = table.primes().to_vec();
        candidates.sort_by(|a, b| alphabet.compare(b, a));

        let mut changed = false;
        for prime in candidates {
            if !should_be_prime(table, &prime) && table.remove_prime(&prime) {
                trace!("dropped redundant prime rule {prime}");
                dropped += 1;
                changed = true;
            }
        }
        if !changed {
            return dropped;
        }
    }
}
