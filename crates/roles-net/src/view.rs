use roles_core::{NetworkView, TransposableNetworkView};
use serde::{Deserialize, Serialize};

use crate::network::{Network, Tie};

/// Which ties of a node a [`DirectedView`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ties ending at the node; the far end is the tie source.
    Incoming,
    /// Ties starting at the node; the far end is the tie target.
    Outgoing,
    /// Outgoing ties followed by incoming ties. Loops are listed once.
    Undirected,
}

/// Directional perspective over a borrowed [`Network`].
#[derive(Debug, Clone, Copy)]
pub struct DirectedView<'a> {
    network: &'a Network,
    direction: Direction,
}

impl<'a> DirectedView<'a> {
    /// Creates a view reading `network` in `direction`.
    pub fn new(network: &'a Network, direction: Direction) -> Self {
        Self { network, direction }
    }

    /// View over incoming ties.
    pub fn incoming(network: &'a Network) -> Self {
        Self::new(network, Direction::Incoming)
    }

    /// View over outgoing ties.
    pub fn outgoing(network: &'a Network) -> Self {
        Self::new(network, Direction::Outgoing)
    }

    /// View ignoring tie direction.
    pub fn undirected(network: &'a Network) -> Self {
        Self::new(network, Direction::Undirected)
    }

    /// The direction this view reads.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The underlying network.
    pub fn network(&self) -> &'a Network {
        self.network
    }
}

impl NetworkView for DirectedView<'_> {
    type Tie = Tie;

    fn node_count(&self) -> usize {
        self.network.node_count()
    }

    fn ties(&self, node: usize) -> Box<dyn Iterator<Item = Tie> + '_> {
        match self.direction {
            Direction::Incoming => Box::new(self.network.incoming_ties(node)),
            Direction::Outgoing => Box::new(self.network.outgoing_ties(node)),
            Direction::Undirected => Box::new(
                self.network.outgoing_ties(node).chain(
                    self.network
                        .incoming_ties(node)
                        .filter(|tie| tie.source != tie.target),
                ),
            ),
        }
    }

    fn tie_target(&self, node: usize, tie: &Tie) -> usize {
        match self.direction {
            Direction::Incoming => tie.source,
            Direction::Outgoing => tie.target,
            Direction::Undirected => {
                if tie.source == node {
                    tie.target
                } else {
                    tie.source
                }
            }
        }
    }

    fn tie_index(&self, _node: usize, tie: &Tie) -> usize {
        tie.index
    }

    fn count_ties(&self, node: usize) -> usize {
        match self.direction {
            Direction::Incoming => self.network.incoming_len(node),
            Direction::Outgoing => self.network.outgoing_len(node),
            Direction::Undirected => self.ties(node).count(),
        }
    }
}

impl TransposableNetworkView for DirectedView<'_> {}
