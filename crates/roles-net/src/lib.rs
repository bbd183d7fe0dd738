#![deny(missing_docs)]

//! In-memory directed networks and the directional views role operators
//! read ties through.

mod config;
mod generators;
mod hash;
mod network;
mod serialization;
mod view;

pub use config::NetworkConfig;
pub use generators::{gen_out_regular, gen_random, gen_ring};
pub use hash::canonical_hash;
pub use network::{Network, Tie};
pub use view::{Direction, DirectedView};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    network_from_bytes, network_from_json, network_to_bytes, network_to_json, NETWORK_SCHEMA,
};
