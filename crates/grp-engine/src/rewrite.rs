//! String rewriting primitives shared by the integrator, the prime extractor
//! and the critical-pair pass.

use std::collections::{BTreeMap, BTreeSet};

use grp_core::Rep;
use log::warn;

use crate::table::Rule;

/// Returns every word reachable by rewriting one occurrence of `word` with
/// `target` inside `rep`. Occurrences may overlap.
pub fn apply_rule_once(word: &Rep, target: &Rep, rep: &Rep) -> BTreeSet<Rep> {
    let mut results = BTreeSet::new();
    if word.is_empty() || word.len() > rep.len() {
        return results;
    }
    let haystack = rep.as_str();
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(word.as_str()) {
        let index = start + offset;
        let mut rewritten = String::with_capacity(rep.len() - word.len() + target.len());
        rewritten.push_str(&haystack[..index]);
        rewritten.push_str(target.as_str());
        rewritten.push_str(&haystack[index + word.len()..]);
        results.insert(Rep::new(rewritten));
        start = index + haystack[index..].chars().next().map_or(1, char::len_utf8);
    }
    results
}

/// Collects every representation reachable from `seeds`.
///
/// A representation with a `known` sink is not expanded further; its sink is
/// collected instead. Unknown representations are rewritten with every rule
/// at every position. Each rewrite yields a smaller word in canonical order,
/// so the search is finite.
pub fn reachable<I>(seeds: I, known: &BTreeMap<Rep, Rep>, rules: &[Rule]) -> BTreeSet<Rep>
where
    I: IntoIterator<Item = Rep>,
{
    let mut seen = BTreeSet::new();
    let mut stack: Vec<Rep> = seeds.into_iter().collect();
    stack.reverse();
    while let Some(rep) = stack.pop() {
        if !seen.insert(rep.clone()) {
            continue;
        }
        if let Some(sink) = known.get(&rep) {
            seen.insert(sink.clone());
            continue;
        }
        for rule in rules {
            for next in apply_rule_once(&rule.word, &rule.target, &rep) {
                if !seen.contains(&next) {
                    stack.push(next);
                }
            }
        }
    }
    seen
}

/// Reduces `rep` with `rules` until no rule word occurs in it.
///
/// The leftmost occurrence is rewritten first; at equal positions the rule
/// listed first wins. The number of steps is bounded by a budget derived
/// from the input length, after which the current word is returned.
pub fn reduce(rep: &Rep, rules: &[Rule]) -> Rep {
    let longest_target = rules.iter().map(|rule| rule.target.len()).max().unwrap_or(0);
    let budget = (rep.len() + 1) * (rep.len() + 1) * (longest_target + 1);

    let mut current = rep.clone();
    for _ in 0..budget {
        match leftmost_match(&current, rules) {
            Some((index, rule)) => {
                let text = current.as_str();
                let mut rewritten = String::with_capacity(text.len() + rule.target.len());
                rewritten.push_str(&text[..index]);
                rewritten.push_str(rule.target.as_str());
                rewritten.push_str(&text[index + rule.word.len()..]);
                current = Rep::new(rewritten);
            }
            None => return current,
        }
    }
    if leftmost_match(&current, rules).is_some() {
        warn!("reduction of {rep} stopped after {budget} steps at {current}");
    }
    current
}

fn leftmost_match<'a>(rep: &Rep, rules: &'a [Rule]) -> Option<(usize, &'a Rule)> {
    let text = rep.as_str();
    let mut best: Option<(usize, &Rule)> = None;
    for rule in rules {
        if rule.word.is_empty() {
            continue;
        }
        if let Some(index) = text.find(rule.word.as_str()) {
            if best.map_or(true, |(at, _)| index < at) {
                best = Some((index, rule));
            }
        }
    }
    best
}
