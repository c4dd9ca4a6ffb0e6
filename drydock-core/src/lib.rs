//! Drydock Core
//!
//! Core types for the Drydock pipeline tracker.
//!
//! This crate contains:
//! - Domain types: the stage catalog and pipeline run records
//! - DTOs: response payloads served by the HTTP layer

pub mod domain;
pub mod dto;
