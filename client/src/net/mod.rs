//! Networking modules for the posts REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway every view calls, `transport` is the raw HTTP seam
//! beneath it, `error` classifies failures and `types` defines the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
