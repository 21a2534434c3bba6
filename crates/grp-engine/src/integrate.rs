//! Batch integration: recording that a set of representations denote the
//! same element.

use std::collections::VecDeque;

use grp_core::{invert_char, Alphabet, Rep};
use log::trace;

use crate::primes;
use crate::rewrite::reachable;
use crate::shave::most_shaveds;
use crate::table::{ReductionTable, Update};

/// Registers the generators of `batch` and integrates it.
///
/// Every character seen for the first time becomes a generator and the
/// inverse axiom `c.C == C.c == e` is integrated before the batch itself.
/// Returns the sink the first member of the batch now reduces to, or `None`
/// for an empty batch.
pub(crate) fn integrate_batch(
    table: &mut ReductionTable,
    alphabet: &mut Alphabet,
    batch: Vec<Rep>,
) -> Option<Rep> {
    let first = batch.first()?.clone();

    let fresh: Vec<char> = batch
        .iter()
        .flat_map(|rep| rep.chars())
        .filter(|&c| alphabet.register(c))
        .collect();
    for generator in fresh {
        let inverse = invert_char(generator);
        trace!("registered generator {generator} with inverse {inverse}");
        let axiom = vec![
            Rep::from(generator).then(inverse),
            Rep::from(inverse).then(generator),
            Rep::identity(),
        ];
        integrate(table, alphabet, axiom);
    }

    integrate(table, alphabet, batch);
    table.sink_of(&first).cloned()
}

/// Integrates `batch` against the current table without touching the
/// alphabet.
///
/// All representations reachable from the batch are pointed at the smallest
/// of them; sinks found along the way are merged into it. Every recorded
/// pair that shares a head or tail is shaved and the shaved pair is queued
/// as a batch of its own.
pub(crate) fn integrate(table: &mut ReductionTable, alphabet: &Alphabet, batch: Vec<Rep>) {
    let mut pending: VecDeque<Vec<Rep>> = VecDeque::from([batch]);
    while let Some(batch) = pending.pop_front() {
        if batch.is_empty() {
            continue;
        }
        let rules = table.rules();
        let equivalent = reachable(batch, table.entries(), &rules);
        let Some(most_reduced) = alphabet.most_reduced(&equivalent).cloned() else {
            continue;
        };

        set_entry(table, alphabet, &most_reduced, &most_reduced);
        for rep in equivalent.iter().filter(|rep| **rep != most_reduced) {
            set_entry(table, alphabet, rep, &most_reduced);

            for (rep_shaved, reduced_shaved) in most_shaveds(rep, &most_reduced) {
                if rep_shaved == *rep {
                    continue;
                }
                trace!("shaved {rep} == {most_reduced} to {rep_shaved} == {reduced_shaved}");
                pending.push_back(vec![rep_shaved, reduced_shaved]);
            }
        }
    }
}

fn set_entry(table: &mut ReductionTable, alphabet: &Alphabet, rep: &Rep, sink: &Rep) {
    match table.insert_or_merge(rep, sink, alphabet) {
        Update::Unchanged => {}
        Update::Inserted { is_sink: true } => {}
        Update::Inserted { is_sink: false } => primes::consider(table, alphabet, rep),
        Update::Merged(merge) => {
            for key in &merge.redirected {
                primes::consider(table, alphabet, key);
            }
        }
    }
}
