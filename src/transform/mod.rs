//! Transform hooks called around the pipeline's template step.
//!
//! This module provides:
//! - `hook`: the two lifecycle hooks and the `ModelTransform` capability
//! - `boundary`: raw-JSON adapters for the hosting pipeline

mod boundary;
mod hook;

pub use boundary::*;
pub use hook::*;
