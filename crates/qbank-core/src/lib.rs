//! qbank-core — Question records, bank files, and pure record transformations.
//!
//! This crate defines the `Question`/`Answer` data model and the stateless
//! functions the rest of qbank builds on. Nothing here mutates its input:
//! every operation returns freshly owned values.

pub mod arrays;
pub mod bank;
pub mod csv;
pub mod error;
pub mod model;
pub mod questions;
pub mod summary;
