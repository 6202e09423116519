// Model exports
pub mod domain;

pub use domain::{MatchResult, Point, SourceMatch};
