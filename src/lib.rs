//! Starmatch - Source cross-matching core for astronomical observation pipelines
//!
//! This library provides the position-matching stage used between two source
//! detections of the same field (two exposures, or two filters): a
//! nearest-neighbor correspondence search with a separation threshold,
//! followed by an optional magnitude-difference filter. Detection,
//! photometry, plotting, and catalog access live upstream and downstream of
//! this crate; they exchange plain coordinate and magnitude tables with it.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::config::{MatchingSettings, Settings};
pub use crate::core::{filter_by_magnitude, find_correspondences, MatchError, Matcher};
pub use crate::models::{MatchResult, Point, SourceMatch};
