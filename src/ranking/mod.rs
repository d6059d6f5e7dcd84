pub mod neighbors;
pub mod types;

pub use neighbors::{rank, rank_by};
pub use types::{Neighbor, NeighborSummary};
