//! Roll history: immutable snapshots of every roll-all event.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Face values captured at one roll-all event, in collection order.
///
/// Snapshots hold copies of the values, never references into the dice,
/// so later rolls cannot change them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    values: SmallVec<[u32; 8]>,
}

impl Snapshot {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the captured faces.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }
}

impl PartialEq<[u32]> for Snapshot {
    fn eq(&self, other: &[u32]) -> bool {
        self.values() == other
    }
}

impl PartialEq<Vec<u32>> for Snapshot {
    fn eq(&self, other: &Vec<u32>) -> bool {
        self.values() == other.as_slice()
    }
}

/// Ordered sequence of snapshots, oldest first.
///
/// Backed by a persistent vector so handing a copy to a renderer or a
/// broadcaster is O(1). Deserializing enforces `limit`, keeping the newest
/// snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct RollHistory {
    snapshots: Vector<Snapshot>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct StoredHistory {
    snapshots: Vector<Snapshot>,
    limit: Option<usize>,
}

impl From<StoredHistory> for RollHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self::with_limit(stored.limit);
        history.snapshots = stored.snapshots;
        history.trim();
        history
    }
}

impl RollHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` snapshots.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            snapshots: Vector::new(),
            limit,
        }
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a snapshot, discarding the oldest ones past the limit.
    pub(crate) fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        self.trim();
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
            }
        }
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Snapshot before the most recent one.
    #[must_use]
    pub fn previous(&self) -> Option<&Snapshot> {
        let len = self.snapshots.len();
        if len < 2 {
            return None;
        }
        self.snapshots.get(len - 2)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.snapshots.iter()
    }
}
