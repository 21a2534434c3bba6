//! Errors raised while parsing representations, closing a group or
//! restoring a snapshot.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Details of a [`GroupError`]: what failed and on which representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable code such as `too-many-sinks` or `notation-invalid`.
    pub code: String,
    /// One-line description of the failure.
    pub message: String,
    /// The representations involved (`rep`, `sink`, `generator`) and the
    /// counts or limits that were crossed, keyed by name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the caller can change, typically a limit in `GroupConfig`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload without context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records a named value, for instance the offending `rep`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Error type of every fallible group operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GroupError {
    /// Malformed human notation for a representation.
    #[error("notation error: {0}")]
    Notation(ErrorInfo),
    /// The sink limit was exceeded while closing the group.
    #[error("capacity error: {0}")]
    Capacity(ErrorInfo),
    /// The operation requires a complete group.
    #[error("incomplete group: {0}")]
    Incomplete(ErrorInfo),
    /// A reduction table violates its structural invariants.
    #[error("table error: {0}")]
    Table(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl GroupError {
    /// Payload of the error, whatever its family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GroupError::Notation(info)
            | GroupError::Capacity(info)
            | GroupError::Incomplete(info)
            | GroupError::Table(info)
            | GroupError::Serde(info) => info,
        }
    }
}
