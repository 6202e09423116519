// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;

pub use distance::{euclidean, nearest_candidate};
pub use filters::filter_by_magnitude;
pub use matcher::{find_correspondences, MatchError, Matcher};
