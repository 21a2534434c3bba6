//! Cancellation of common prefixes and suffixes.
//!
//! In a group `u.x.v == u.y.v` implies `x == y`, so an equivalence between two
//! words sharing a head or a tail can be replaced by the equivalence of what
//! is left. The shaved equivalence applies wherever `x` occurs, not only next
//! to `u` and `v`.

use std::collections::BTreeSet;

use grp_core::Rep;

/// Returns `a` and `b` with their common head and tail removed.
///
/// Shaving the head first and the tail first can disagree when one side is
/// consumed completely (`rrHrr` against `rr`); both variants are returned in
/// that case.
pub fn most_shaveds(a: &Rep, b: &Rep) -> BTreeSet<(Rep, Rep)> {
    let limit = a.len().min(b.len());

    let head = common_head(a, b, limit);
    let tail = common_tail(a, b, limit - head);
    let head_first = cut(a, b, head, tail);

    let mut shaved = BTreeSet::new();
    if !head_first.0.is_empty() && !head_first.1.is_empty() {
        shaved.insert(head_first);
        return shaved;
    }

    let tail = common_tail(a, b, limit);
    let head = common_head(a, b, limit - tail);
    shaved.insert(head_first);
    shaved.insert(cut(a, b, head, tail));
    shaved
}

// Both helpers back off to a character boundary in either word.
fn common_head(a: &Rep, b: &Rep, limit: usize) -> usize {
    let mut head = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .take(limit)
        .take_while(|(p, q)| p == q)
        .count();
    while !(a.as_str().is_char_boundary(head) && b.as_str().is_char_boundary(head)) {
        head -= 1;
    }
    head
}

fn common_tail(a: &Rep, b: &Rep, limit: usize) -> usize {
    let mut tail = a
        .as_bytes()
        .iter()
        .rev()
        .zip(b.as_bytes().iter().rev())
        .take(limit)
        .take_while(|(p, q)| p == q)
        .count();
    while !(a.as_str().is_char_boundary(a.len() - tail)
        && b.as_str().is_char_boundary(b.len() - tail))
    {
        tail -= 1;
    }
    tail
}

fn cut(a: &Rep, b: &Rep, head: usize, tail: usize) -> (Rep, Rep) {
    (
        a.slice(head, a.len() - tail),
        b.slice(head, b.len() - tail),
    )
}
