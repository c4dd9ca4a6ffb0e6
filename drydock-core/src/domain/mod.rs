//! Core domain types
//!
//! This module contains the domain structures the tracker operates on:
//! the fixed stage catalog and the run records it produces.

pub mod run;
pub mod stage;
