//! Allocation-support algorithms.

pub mod conflicts;

pub use conflicts::{windows_overlap, CollisionChecker};
