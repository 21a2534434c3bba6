use grp_core::{Alphabet, Rep};

use crate::rewrite::reduce;
use crate::table::{ReductionTable, Rule};

/// Finds the first sink lacking an image under some alphabet character.
///
/// Sinks are visited in canonical order and characters in alphabet order
/// (each generator followed by its inverse). The image of `s` under `c` is
/// defined when `s.c` reduces to a sink.
pub fn first_gap(table: &ReductionTable, alphabet: &Alphabet) -> Option<(Rep, char)> {
    let rules = table.rules();
    let symbols = alphabet.symbols();
    let mut sinks: Vec<Rep> = table.sinks().cloned().collect();
    alphabet.sort(&mut sinks);

    sinks.into_iter().find_map(|sink| {
        symbols
            .iter()
            .copied()
            .find(|&c| !has_image(table, &rules, &sink, c))
            .map(|c| (sink, c))
    })
}

/// Whether every sink has an image under every alphabet character.
pub fn is_complete(table: &ReductionTable, alphabet: &Alphabet) -> bool {
    first_gap(table, alphabet).is_none()
}

fn has_image(table: &ReductionTable, rules: &[Rule], sink: &Rep, c: char) -> bool {
    let composed = sink.then(c);
    if table.is_sink(&composed) {
        return true;
    }
    table.is_sink(&reduce(&composed, rules))
}
