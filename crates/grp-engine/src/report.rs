use std::fmt;

use serde::{Deserialize, Serialize};

use crate::closure::ClosureStatus;
use crate::group::Group;

/// Summary of a group for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    /// Display name of the group.
    pub name: String,
    /// Sinks in canonical order, human notation.
    pub sinks: Vec<String>,
    /// Prime rules rendered as `word -> sink`.
    pub rules: Vec<String>,
    /// Completeness of the group.
    pub status: ClosureStatus,
}

impl Group {
    /// Builds the presentation summary of the group.
    pub fn report(&self) -> GroupReport {
        GroupReport {
            name: self.name().to_string(),
            sinks: self.sinks().iter().map(ToString::to_string).collect(),
            rules: self.prime_rules().iter().map(ToString::to_string).collect(),
            status: self.status(),
        }
    }
}

impl fmt::Display for GroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Group with name: {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Sinks:")?;
        writeln!(f, "[{}]", self.sinks.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Prime reductibles:")?;
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        writeln!(f)?;
        match &self.status {
            ClosureStatus::Complete if self.sinks.len() == 1 => write!(f, "Complete (trivially)"),
            status => write!(f, "{status}"),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report().fmt(f)
    }
}
