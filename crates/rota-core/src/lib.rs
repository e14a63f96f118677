//! Core types and trait definitions for the rota shift-scheduling store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod employee;
pub mod error;
pub mod seed;
pub mod shift;
pub mod store;

pub use error::{Error, Result};
