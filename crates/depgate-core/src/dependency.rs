//! Declared dependencies of a build target.
//!
//! A target declares its module dependencies in two ordered partitions,
//! public and private. For flag derivation only presence matters: a name is
//! present if it appears in either partition, compared by exact,
//! case-sensitive equality.
//!
//! # Example
//!
//! ```
//! use depgate_core::dependency::{DependencySet, Partition, exists};
//!
//! let mut deps = DependencySet::from_partitions(["Core", "Engine"], ["MongoC"]);
//! assert!(exists("MongoC", &deps));
//! assert!(!exists("mongoc", &deps));
//!
//! deps.insert(Partition::Public, "UViz");
//! assert!(deps.contains("UViz"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which dependency list of the target a name belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Dependencies re-exported to modules depending on this target.
    Public,
    /// Dependencies used only by this target's own sources.
    #[default]
    Private,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Public => write!(f, "public"),
            Partition::Private => write!(f, "private"),
        }
    }
}

/// The public and private dependency names of one build target.
///
/// Both partitions keep their declaration order. Each partition also keeps a
/// hash index, so inserts and lookups stay constant time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    public: Vec<String>,
    private: Vec<String>,
    public_index: HashSet<String>,
    private_index: HashSet<String>,
}

impl DependencySet {
    /// Create an empty dependency set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dependency set from the two declared partitions.
    ///
    /// Repeated names within a partition collapse to their first occurrence.
    pub fn from_partitions<P, Q>(public: P, private: Q) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        let mut set = Self::new();
        for name in public {
            set.insert(Partition::Public, name);
        }
        for name in private {
            set.insert(Partition::Private, name);
        }
        set
    }

    /// Add `name` to `partition`.
    ///
    /// Returns `true` if the partition did not already contain the name.
    pub fn insert(&mut self, partition: Partition, name: impl Into<String>) -> bool {
        let name = name.into();
        let (list, index) = match partition {
            Partition::Public => (&mut self.public, &mut self.public_index),
            Partition::Private => (&mut self.private, &mut self.private_index),
        };
        if !index.insert(name.clone()) {
            return false;
        }
        list.push(name);
        true
    }

    /// Whether `name` is declared in either partition.
    pub fn contains(&self, name: &str) -> bool {
        self.public_index.contains(name) || self.private_index.contains(name)
    }

    /// Names declared in the given partition, in declaration order.
    pub fn partition(&self, partition: Partition) -> &[String] {
        match partition {
            Partition::Public => &self.public,
            Partition::Private => &self.private,
        }
    }

    /// Public dependency names, in declaration order.
    pub fn public(&self) -> &[String] {
        &self.public
    }

    /// Private dependency names, in declaration order.
    pub fn private(&self) -> &[String] {
        &self.private
    }

    /// Number of distinct names across both partitions.
    pub fn len(&self) -> usize {
        self.public_index.len()
            + self
                .private_index
                .difference(&self.public_index)
                .count()
    }

    /// Whether neither partition declares anything.
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty()
    }
}

/// True iff `name` exactly matches an entry in the public or private
/// partition of `deps`.
pub fn exists(name: &str, deps: &DependencySet) -> bool {
    deps.contains(name)
}
