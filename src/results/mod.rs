//! Results aggregation for completed sessions

mod summary;

pub use summary::*;
