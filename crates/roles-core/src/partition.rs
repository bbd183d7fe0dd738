//! Partitions of a dense node domain, ordered by refinement.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::disjoint_sets::DisjointSets;
use crate::errors::{ensure_same_domain, ErrorInfo, RoleError};
use crate::lattice::Lattice;
use crate::relation::Relation;

/// An equivalence over `[0, n)` stored as a canonical class labeling.
///
/// Class identifiers are assigned in order of first occurrence, so two
/// partitions compare equal (and hash equally) exactly when they group the
/// nodes the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct Partition {
    labels: Vec<usize>,
    class_count: usize,
}

impl Partition {
    /// Builds a partition from an arbitrary labeling: nodes sharing a label
    /// share a class.
    pub fn from_labels(labels: &[usize]) -> Self {
        let mut canonical: HashMap<usize, usize> = HashMap::new();
        let labels: Vec<usize> = labels
            .iter()
            .map(|label| {
                let next = canonical.len();
                *canonical.entry(*label).or_insert(next)
            })
            .collect();
        Self {
            labels,
            class_count: canonical.len(),
        }
    }

    /// Builds a partition from explicit member lists. Every node in `[0, n)`
    /// must appear in exactly one class.
    pub fn from_classes(n: usize, classes: &[Vec<usize>]) -> Result<Self, RoleError> {
        let mut labels: Vec<Option<usize>> = vec![None; n];
        for (class, members) in classes.iter().enumerate() {
            for &node in members {
                let slot = labels.get_mut(node).ok_or_else(|| {
                    RoleError::Argument(
                        ErrorInfo::new("node-out-of-range", "class member outside the domain")
                            .with_context("node", node.to_string())
                            .with_context("size", n.to_string()),
                    )
                })?;
                if slot.replace(class).is_some() {
                    return Err(RoleError::Argument(
                        ErrorInfo::new("node-repeated", "node listed in more than one class")
                            .with_context("node", node.to_string()),
                    ));
                }
            }
        }
        let labels = labels
            .into_iter()
            .enumerate()
            .map(|(node, label)| {
                label.ok_or_else(|| {
                    RoleError::Argument(
                        ErrorInfo::new("node-uncovered", "node missing from every class")
                            .with_context("node", node.to_string()),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_labels(&labels))
    }

    /// The finest partition: every node in its own class.
    pub fn discrete(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
            class_count: n,
        }
    }

    /// The coarsest partition: all nodes in one class.
    pub fn indiscrete(n: usize) -> Self {
        Self {
            labels: vec![0; n],
            class_count: usize::from(n > 0),
        }
    }

    /// Number of nodes in the domain.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Canonical class of `node`.
    pub fn class_of(&self, node: usize) -> usize {
        self.labels[node]
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Canonical labels indexed by node.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns whether `a` and `b` share a class.
    pub fn same_class(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }

    /// Members of each class in ascending node order, indexed by class.
    pub fn classes(&self) -> Vec<Vec<usize>> {
        let mut classes = vec![Vec::new(); self.class_count];
        for (node, &class) in self.labels.iter().enumerate() {
            classes[class].push(node);
        }
        classes
    }

    /// Whether every class of `self` lies inside a class of `other`.
    pub fn refines(&self, other: &Partition) -> Result<bool, RoleError> {
        ensure_same_domain(self.len(), other.len())?;
        let mut image: Vec<Option<usize>> = vec![None; self.class_count];
        for (node, &class) in self.labels.iter().enumerate() {
            let target = other.labels[node];
            match image[class] {
                Some(existing) if existing != target => return Ok(false),
                Some(_) => {}
                None => image[class] = Some(target),
            }
        }
        Ok(true)
    }

    /// The induced equivalence relation: `(i, j)` iff `i` and `j` share a class.
    pub fn to_relation(&self) -> Relation {
        let mut relation = Relation::empty(self.len());
        for members in self.classes() {
            for &i in &members {
                for &j in &members {
                    relation.insert(i, j);
                }
            }
        }
        relation
    }
}

impl Lattice for Partition {
    fn domain_size(&self) -> usize {
        self.len()
    }

    fn bottom(n: usize) -> Self {
        Partition::discrete(n)
    }

    fn top(n: usize) -> Self {
        Partition::indiscrete(n)
    }

    fn meet(&self, other: &Self) -> Result<Self, RoleError> {
        ensure_same_domain(self.len(), other.len())?;
        let mut canonical: HashMap<(usize, usize), usize> = HashMap::new();
        let labels: Vec<usize> = self
            .labels
            .iter()
            .zip(&other.labels)
            .map(|(&a, &b)| {
                let next = canonical.len();
                *canonical.entry((a, b)).or_insert(next)
            })
            .collect();
        Ok(Self {
            labels,
            class_count: canonical.len(),
        })
    }

    fn join(&self, other: &Self) -> Result<Self, RoleError> {
        ensure_same_domain(self.len(), other.len())?;
        let mut sets = DisjointSets::new(self.len());
        let mut first_a: Vec<Option<usize>> = vec![None; self.class_count];
        let mut first_b: Vec<Option<usize>> = vec![None; other.class_count];
        for node in 0..self.len() {
            let rep_a = *first_a[self.labels[node]].get_or_insert(node);
            let rep_b = *first_b[other.labels[node]].get_or_insert(node);
            sets.union(node, rep_a);
            sets.union(node, rep_b);
        }
        Ok(sets.into_partition())
    }

    fn leq(&self, other: &Self) -> Result<bool, RoleError> {
        self.refines(other)
    }

    fn height(n: usize) -> usize {
        n.saturating_sub(1)
    }
}

impl From<Vec<usize>> for Partition {
    fn from(labels: Vec<usize>) -> Self {
        Partition::from_labels(&labels)
    }
}

impl From<Partition> for Vec<usize> {
    fn from(partition: Partition) -> Self {
        partition.labels
    }
}
