use serde::Serialize;

use crate::domain::Consumer;

/// A candidate consumer together with its score against the target.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub score: f64,
    pub consumer: &'a Consumer,
}

impl Neighbor<'_> {
    pub fn name(&self) -> &str {
        self.consumer.name()
    }

    pub fn summary(&self) -> NeighborSummary {
        NeighborSummary {
            name: self.consumer.name().to_string(),
            score: self.score,
            rated_count: self.consumer.rated_count(),
        }
    }
}

/// Owned view of a neighbor for output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborSummary {
    pub name: String,
    pub score: f64,
    pub rated_count: usize,
}
