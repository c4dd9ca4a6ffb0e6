//! Data Transfer Objects for the HTTP layer
//!
//! Response payloads served by the tracker's API. These are lightweight
//! views of the domain types shaped for clients.

pub mod info;
pub mod run;
