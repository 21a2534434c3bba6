#![deny(missing_docs)]

//! Completion engine for finitely presented groups.
//!
//! A [`Group`] starts from declared equivalences between representations
//! (words over generator characters, inverses written in the other case) and
//! infers its multiplication structure: it keeps a minimal set of prime
//! reduction rules, integrates the overlaps of those rules, cancels common
//! heads and tails of equivalent words, and finally fills missing images
//! with provisional sinks until every sink has an image under every
//! character. The process is a heuristic bounded by a sink limit.
//!
//! ```
//! use grp_engine::{Group, GroupConfig};
//!
//! let group = Group::from_batches(
//!     [vec!["H2", "r3", "e"], vec!["Hr", "rrH"]],
//!     GroupConfig::named("D6"),
//! )
//! .unwrap();
//! assert!(group.is_complete());
//! assert_eq!(group.sink_count(), 6);
//! ```

mod closure;
mod config;
mod critical;
mod group;
mod hash;
mod integrate;
mod oracle;
mod primes;
mod report;
mod rewrite;
mod serialization;
mod shave;
mod table;

pub use closure::ClosureStatus;
pub use config::GroupConfig;
pub use critical::{contractions, critical_pairs, CriticalPair};
pub use group::Group;
pub use hash::canonical_hash;
pub use oracle::{first_gap, is_complete};
pub use report::GroupReport;
pub use rewrite::{apply_rule_once, reachable, reduce};
pub use serialization::{group_from_bytes, group_from_json, group_to_bytes, group_to_json};
pub use shave::most_shaveds;
pub use table::{Merge, ReductionTable, Rule, Update};

/// Re-export of the shared vocabulary for downstream crates.
pub use grp_core::{Alphabet, ErrorInfo, GroupError, Rep};
