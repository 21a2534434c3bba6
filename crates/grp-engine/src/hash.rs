use grp_core::Rep;
use sha2::{Digest, Sha256};

use crate::group::Group;

/// Computes the canonical structural hash of a group.
///
/// Covers the ordered sinks and prime rules; the name and limits are left
/// out so that two definitions of the same structure hash equally.
pub fn canonical_hash(group: &Group) -> String {
    let mut hasher = Sha256::new();

    let sinks = group.sinks();
    hasher.update(b"sinks");
    hasher.update((sinks.len() as u64).to_le_bytes());
    for sink in &sinks {
        update_rep(sink, &mut hasher);
    }

    let rules = group.prime_rules();
    hasher.update(b"rules");
    hasher.update((rules.len() as u64).to_le_bytes());
    for rule in &rules {
        update_rep(&rule.word, &mut hasher);
        update_rep(&rule.target, &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_rep(rep: &Rep, hasher: &mut Sha256) {
    hasher.update((rep.len() as u64).to_le_bytes());
    hasher.update(rep.as_bytes());
}
