pub mod search;
pub mod transform;

pub use search::{brute_force_distances, nearest_marked};
pub use transform::{compute_distances, distance_transform, DistanceGrid};
