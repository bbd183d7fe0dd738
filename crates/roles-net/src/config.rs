use roles_core::SchemaVersion;

/// Configuration options that control the behaviour of [`Network`](crate::Network).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Whether ties from a node to itself are accepted.
    pub allow_loops: bool,
    /// Whether several ties may connect the same ordered node pair.
    pub allow_parallel: bool,
    /// Schema version stored alongside serialized payloads.
    pub schema_version: SchemaVersion,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            allow_loops: true,
            allow_parallel: false,
            schema_version: SchemaVersion::new(1, 0, 0),
        }
    }
}

impl NetworkConfig {
    /// A permissive configuration accepting loops and parallel ties.
    pub fn multigraph() -> Self {
        Self {
            allow_parallel: true,
            ..Self::default()
        }
    }
}
