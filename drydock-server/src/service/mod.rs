//! Service layer
//!
//! Business logic for the pipeline tracker.

pub mod tracker;
