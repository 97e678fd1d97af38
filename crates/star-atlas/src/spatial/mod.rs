pub mod links;
pub mod query;

pub use links::LinkCache;
pub use query::{connections, euclidean, nearby, nearest_to_point, within_radius, Neighbor, Positioned};
