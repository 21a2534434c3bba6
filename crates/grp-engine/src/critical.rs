//! Overlaps between prime rules ("combined prime reductibles").

use std::collections::BTreeSet;

use grp_core::Rep;

use crate::rewrite::reduce;
use crate::table::Rule;

/// Every word built by overlapping a proper, non-empty suffix of one input
/// with a prefix of the other, in both orders.
///
/// `contractions("Hrr", "rrH")` is `{"HrrH", "rrHrr", "HrrrH"}`.
pub fn contractions(a: &Rep, b: &Rep) -> BTreeSet<Rep> {
    let mut words = BTreeSet::new();
    let max_overlap = a.len().min(b.len());
    for overlap in 1..max_overlap {
        if let Some(word) = overlap_word(a, b, overlap) {
            words.insert(word);
        }
        if let Some(word) = overlap_word(b, a, overlap) {
            words.insert(word);
        }
    }
    words
}

fn overlap_word(left: &Rep, right: &Rep, overlap: usize) -> Option<Rep> {
    let (l, r) = (left.as_bytes(), right.as_bytes());
    if l[l.len() - overlap..] != r[..overlap] {
        return None;
    }
    Some(left.compose(&right.slice(overlap, right.len())))
}

/// An overlap of two rules together with its two reductions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPair {
    /// Word holding the first rule word at its start and the second at its end.
    pub word: Rep,
    /// Full reduction after rewriting the first rule word.
    pub left: Rep,
    /// Full reduction after rewriting the second rule word.
    pub right: Rep,
}

impl CriticalPair {
    /// Whether both reductions agree.
    pub fn is_joinable(&self) -> bool {
        self.left == self.right
    }
}

/// Enumerates the overlaps of `first` followed by `second`.
///
/// `rules` is used to reduce both sides fully.
pub fn critical_pairs(first: &Rule, second: &Rule, rules: &[Rule]) -> Vec<CriticalPair> {
    let (l1, l2) = (&first.word, &second.word);
    let max_overlap = l1.len().min(l2.len());
    let mut pairs = Vec::new();
    for overlap in 1..max_overlap {
        let Some(word) = overlap_word(l1, l2, overlap) else {
            continue;
        };
        let tail = l2.slice(overlap, l2.len());
        let head = l1.slice(0, l1.len() - overlap);
        pairs.push(CriticalPair {
            word,
            left: reduce(&first.target.compose(&tail), rules),
            right: reduce(&head.compose(&second.target), rules),
        });
    }
    pairs
}
