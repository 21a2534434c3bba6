//! Conversion between the human notation (`H2r3`, `e`) and the internal
//! expanded form (`HHrrr`, ``).

use crate::errors::{ErrorInfo, GroupError};

/// Character reserved for the identity element in human notation.
pub const IDENTITY_SYMBOL: char = 'e';

/// Longest representation [`expand`] produces, in generator characters.
pub const MAX_EXPANDED_LEN: usize = 1 << 16;

/// Expands human notation into the internal representation.
///
/// Every `e` is dropped, and a letter followed by a decimal count is repeated
/// that many times. `E` is rejected because its inverse would be `e`.
pub fn expand(notation: &str) -> Result<String, GroupError> {
    if notation.contains('E') {
        let info = ErrorInfo::new(
            "notation-reserved",
            "the letter E cannot be a generator because e denotes the identity",
        )
        .with_context("notation", notation)
        .with_hint("pick another letter for this generator");
        return Err(GroupError::Notation(info));
    }

    let stripped: Vec<char> = notation.chars().filter(|&c| c != IDENTITY_SYMBOL).collect();
    let mut expanded = String::with_capacity(stripped.len());
    let mut idx = 0;
    while idx < stripped.len() {
        let c = stripped[idx];
        if !c.is_ascii_alphabetic() {
            let info = ErrorInfo::new(
                "notation-invalid",
                "representation is not alphabetic after expansion",
            )
            .with_context("notation", notation)
            .with_context("position", idx.to_string());
            return Err(GroupError::Notation(info));
        }
        idx += 1;

        let digits_start = idx;
        while idx < stripped.len() && stripped[idx].is_ascii_digit() {
            idx += 1;
        }
        let digits: String = stripped[digits_start..idx].iter().collect();
        let count: usize = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| {
                GroupError::Notation(
                    ErrorInfo::new("notation-count", "power does not fit in a machine word")
                        .with_context("notation", notation)
                        .with_context("power", digits.clone()),
                )
            })?
        };
        match expanded.len().checked_add(count) {
            Some(total) if total <= MAX_EXPANDED_LEN => {
                expanded.extend(std::iter::repeat(c).take(count));
            }
            _ => {
                let info = ErrorInfo::new("notation-count", "expanded representation is too long")
                    .with_context("notation", notation)
                    .with_context("limit", MAX_EXPANDED_LEN.to_string())
                    .with_hint("write the relation with smaller powers");
                return Err(GroupError::Notation(info));
            }
        }
    }
    Ok(expanded)
}

/// Compresses an internal representation into human notation.
///
/// The empty representation renders as `e`; runs of two or more equal
/// characters render as the character followed by the run length.
pub fn compress(expanded: &str) -> String {
    if expanded.is_empty() {
        return IDENTITY_SYMBOL.to_string();
    }

    let mut out = String::with_capacity(expanded.len());
    let mut chars = expanded.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        out.push(c);
        if run > 1 {
            out.push_str(&run.to_string());
        }
    }
    out
}
