use std::collections::BTreeSet;

use roles_core::errors::{ErrorInfo, RoleError};
use roles_core::Relation;
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;

/// A directed, weighted tie between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tie {
    /// Insertion index of the tie, stable for the lifetime of the network.
    pub index: usize,
    /// Node the tie starts at.
    pub source: usize,
    /// Node the tie ends at.
    pub target: usize,
    /// Integer weight used by comparators.
    pub weight: i64,
}

/// Directed network over the dense node domain `[0, n)`.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    ties: Vec<Tie>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    pairs: BTreeSet<(usize, usize)>,
}

impl Network {
    /// Creates an empty network with the provided configuration.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            ties: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            pairs: BTreeSet::new(),
        }
    }

    /// Creates a network with `n` isolated nodes.
    pub fn with_nodes(n: usize, config: NetworkConfig) -> Self {
        let mut network = Self::new(config);
        for _ in 0..n {
            network.add_node();
        }
        network
    }

    /// Builds an unweighted network (weight `1`) from an edge list.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, RoleError> {
        let mut network = Self::with_nodes(n, NetworkConfig::default());
        for &(source, target) in edges {
            network.add_tie(source, target, 1)?;
        }
        Ok(network)
    }

    /// Builds a weighted network from `(source, target, weight)` triples.
    pub fn from_weighted_edges(
        n: usize,
        edges: &[(usize, usize, i64)],
        config: NetworkConfig,
    ) -> Result<Self, RoleError> {
        let mut network = Self::with_nodes(n, config);
        for &(source, target, weight) in edges {
            network.add_tie(source, target, weight)?;
        }
        Ok(network)
    }

    /// Returns the configuration used by this network.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Appends a node and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.outgoing.len() - 1
    }

    /// Adds a tie and returns its index.
    pub fn add_tie(&mut self, source: usize, target: usize, weight: i64) -> Result<usize, RoleError> {
        self.ensure_node(source)?;
        self.ensure_node(target)?;
        if source == target && !self.config.allow_loops {
            return Err(network_error("loop-rejected", "configuration rejects loops")
                .with_context("node", source));
        }
        if !self.config.allow_parallel && self.pairs.contains(&(source, target)) {
            return Err(network_error("parallel-tie", "tie already exists")
                .with_context("source", source)
                .with_context("target", target));
        }
        let index = self.ties.len();
        self.ties.push(Tie {
            index,
            source,
            target,
            weight,
        });
        self.outgoing[source].push(index);
        self.incoming[target].push(index);
        self.pairs.insert((source, target));
        Ok(index)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of ties.
    pub fn tie_count(&self) -> usize {
        self.ties.len()
    }

    /// Returns the tie stored at `index`.
    pub fn tie(&self, index: usize) -> Result<&Tie, RoleError> {
        self.ties.get(index).ok_or_else(|| {
            network_error("unknown-tie", "tie does not exist").with_context("tie", index)
        })
    }

    /// All ties in insertion order.
    pub fn ties(&self) -> &[Tie] {
        &self.ties
    }

    /// Returns whether a tie from `source` to `target` exists.
    pub fn has_tie(&self, source: usize, target: usize) -> bool {
        self.pairs.contains(&(source, target))
    }

    /// Returns the outbound degree of `node`.
    pub fn out_degree(&self, node: usize) -> Result<usize, RoleError> {
        self.ensure_node(node)?;
        Ok(self.outgoing[node].len())
    }

    /// Returns the inbound degree of `node`.
    pub fn in_degree(&self, node: usize) -> Result<usize, RoleError> {
        self.ensure_node(node)?;
        Ok(self.incoming[node].len())
    }

    /// The adjacency relation: `(s, t)` for every tie `s -> t`.
    pub fn to_relation(&self) -> Relation {
        let mut relation = Relation::empty(self.node_count());
        for &(source, target) in &self.pairs {
            relation.insert(source, target);
        }
        relation
    }

    pub(crate) fn outgoing_ties(&self, node: usize) -> impl Iterator<Item = Tie> + '_ {
        self.outgoing[node].iter().map(move |&idx| self.ties[idx])
    }

    pub(crate) fn incoming_ties(&self, node: usize) -> impl Iterator<Item = Tie> + '_ {
        self.incoming[node].iter().map(move |&idx| self.ties[idx])
    }

    pub(crate) fn outgoing_len(&self, node: usize) -> usize {
        self.outgoing[node].len()
    }

    pub(crate) fn incoming_len(&self, node: usize) -> usize {
        self.incoming[node].len()
    }

    fn ensure_node(&self, node: usize) -> Result<(), RoleError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(network_error("unknown-node", "node does not exist")
                .with_context("node", node)
                .with_context("nodes", self.node_count()))
        }
    }
}

pub(crate) fn network_error(code: impl Into<String>, message: impl Into<String>) -> RoleError {
    RoleError::Network(ErrorInfo::new(code, message))
}

pub(crate) trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> RoleError;
}

impl ContextExt for RoleError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> RoleError {
        match self {
            RoleError::Network(info) => RoleError::Network(info.with_context(key, value.to_string())),
            other => other,
        }
    }
}
