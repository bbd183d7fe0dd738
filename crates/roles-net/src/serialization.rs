use roles_core::errors::{ErrorInfo, RoleError};
use roles_core::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::network::Network;

/// Schema version written by this crate.
pub const NETWORK_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes the network to a compact binary representation using `bincode`.
pub fn network_to_bytes(network: &Network) -> Result<Vec<u8>, RoleError> {
    let document = NetworkDocument::from_network(network);
    bincode::serialize(&document)
        .map_err(|err| RoleError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a network from its binary representation.
pub fn network_from_bytes(bytes: &[u8]) -> Result<Network, RoleError> {
    let document: NetworkDocument = bincode::deserialize(bytes)
        .map_err(|err| RoleError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    document.into_network()
}

/// Serializes the network to a JSON string.
pub fn network_to_json(network: &Network) -> Result<String, RoleError> {
    let document = NetworkDocument::from_network(network);
    serde_json::to_string_pretty(&document)
        .map_err(|err| RoleError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a network from a JSON string.
pub fn network_from_json(json: &str) -> Result<Network, RoleError> {
    let document: NetworkDocument = serde_json::from_str(json)
        .map_err(|err| RoleError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    document.into_network()
}

#[derive(Debug, Serialize, Deserialize)]
struct NetworkDocument {
    schema_version: SchemaVersion,
    allow_loops: bool,
    allow_parallel: bool,
    nodes: usize,
    ties: Vec<(usize, usize, i64)>,
}

impl NetworkDocument {
    fn from_network(network: &Network) -> Self {
        let config = network.config();
        Self {
            schema_version: config.schema_version,
            allow_loops: config.allow_loops,
            allow_parallel: config.allow_parallel,
            nodes: network.node_count(),
            ties: network
                .ties()
                .iter()
                .map(|tie| (tie.source, tie.target, tie.weight))
                .collect(),
        }
    }

    // Rebuilt through `add_tie` so stored documents obey the same rules as
    // networks built in memory.
    fn into_network(self) -> Result<Network, RoleError> {
        if !NETWORK_SCHEMA.accepts(&self.schema_version) {
            return Err(RoleError::Serde(
                ErrorInfo::new("schema-unsupported", "document schema cannot be read")
                    .with_context("found", format_version(&self.schema_version))
                    .with_context("supported", format_version(&NETWORK_SCHEMA)),
            ));
        }
        let config = NetworkConfig {
            allow_loops: self.allow_loops,
            allow_parallel: self.allow_parallel,
            schema_version: self.schema_version,
        };
        Network::from_weighted_edges(self.nodes, &self.ties, config)
    }
}

fn format_version(version: &SchemaVersion) -> String {
    format!("{}.{}.{}", version.major, version.minor, version.patch)
}
