//! Brewery - customer resource HTTP service
//!
//! Exposes fetch, create, update and delete for customers under
//! `/api/v1/customer`:
//! - Payload validation runs before any store call
//! - Pluggable customer stores (stub and in-memory)
//! - JSON error bodies shaped as `["<field> : <message>"]`

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
