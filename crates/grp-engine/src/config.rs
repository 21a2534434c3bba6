use grp_core::SchemaVersion;

/// Configuration options that control a [`Group`](crate::Group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    /// Display name of the group.
    pub name: String,
    /// Maximum number of sinks before closure is aborted.
    pub max_sinks: usize,
    /// Maximum number of saturation rounds in one fixpoint run.
    pub max_rounds: usize,
    /// Schema version stored alongside serialized snapshots.
    pub schema_version: SchemaVersion,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            max_sinks: 50,
            max_rounds: 256,
            schema_version: SchemaVersion::CURRENT,
        }
    }
}

impl GroupConfig {
    /// Default configuration with the given display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sink limit.
    pub fn with_max_sinks(mut self, max_sinks: usize) -> Self {
        self.max_sinks = max_sinks;
        self
    }

    /// Sets the saturation round limit.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
