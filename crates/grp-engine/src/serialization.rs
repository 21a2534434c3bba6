use std::collections::BTreeMap;

use grp_core::{Alphabet, ErrorInfo, GroupError, Rep, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::config::GroupConfig;
use crate::group::Group;
use crate::table::ReductionTable;

/// Serializes the group to a compact binary representation using `bincode`.
pub fn group_to_bytes(group: &Group) -> Result<Vec<u8>, GroupError> {
    let snapshot = Snapshot::from_group(group);
    bincode::serialize(&snapshot)
        .map_err(|err| GroupError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a group from its binary representation.
pub fn group_from_bytes(bytes: &[u8]) -> Result<Group, GroupError> {
    let snapshot: Snapshot = bincode::deserialize(bytes)
        .map_err(|err| GroupError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    snapshot.into_group()
}

/// Serializes the group to a JSON string.
pub fn group_to_json(group: &Group) -> Result<String, GroupError> {
    let snapshot = Snapshot::from_group(group);
    serde_json::to_string_pretty(&snapshot)
        .map_err(|err| GroupError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a group from a JSON string.
pub fn group_from_json(json: &str) -> Result<Group, GroupError> {
    let snapshot: Snapshot = serde_json::from_str(json)
        .map_err(|err| GroupError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    snapshot.into_group()
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    schema_version: SchemaVersion,
    name: String,
    max_sinks: usize,
    max_rounds: usize,
    alphabet: Alphabet,
    entries: BTreeMap<Rep, Rep>,
    primes: Vec<Rep>,
}

impl Snapshot {
    fn from_group(group: &Group) -> Self {
        let config = group.config();
        Self {
            schema_version: config.schema_version,
            name: config.name.clone(),
            max_sinks: config.max_sinks,
            max_rounds: config.max_rounds,
            alphabet: group.alphabet().clone(),
            entries: group.table().entries().clone(),
            primes: group.table().primes().to_vec(),
        }
    }

    fn into_group(self) -> Result<Group, GroupError> {
        if !SchemaVersion::CURRENT.reads(&self.schema_version) {
            let info = ErrorInfo::new("schema-mismatch", "snapshot schema is not readable")
                .with_context("found", self.schema_version.to_string())
                .with_context("supported", SchemaVersion::CURRENT.to_string());
            return Err(GroupError::Serde(info));
        }
        let table = ReductionTable::from_parts(self.entries, self.primes)?;
        let config = GroupConfig {
            name: self.name,
            max_sinks: self.max_sinks,
            max_rounds: self.max_rounds,
            schema_version: self.schema_version,
        };
        Ok(Group::from_parts(config, self.alphabet, table))
    }
}
