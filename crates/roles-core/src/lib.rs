#![deny(missing_docs)]
#![doc = "Core value types for role equivalence computations: the partition and \
relation lattices, the network view contracts operators read ties through, and \
the shared error taxonomy."]

pub mod disjoint_sets;
pub mod errors;
pub mod lattice;
pub mod partition;
pub mod relation;
pub mod rng;
pub mod schema;
pub mod view;

pub use disjoint_sets::DisjointSets;
pub use errors::{ensure_same_domain, ErrorInfo, RoleError};
pub use lattice::Lattice;
pub use partition::Partition;
pub use relation::{Relation, RelationDocument};
pub use rng::{derive_substream_seed, RngHandle};
pub use schema::SchemaVersion;
pub use view::{transpose_target, NetworkView, TransposableNetworkView};
