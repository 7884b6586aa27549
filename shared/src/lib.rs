//! Shared types and the agronomic estimation engine for AgriConnect
//!
//! This crate contains everything that is pure computation: the soil/district
//! catalogs, the yield estimator, the weather normalization pipeline, the
//! season resolver, the farming guideline tables and the chat command
//! grammar. The backend service embeds these; nothing here performs I/O or
//! holds mutable state across calls.

pub mod aggregator;
pub mod catalog;
pub mod command;
pub mod estimator;
pub mod guidelines;
pub mod models;
pub mod season;
pub mod types;

pub use models::*;
pub use types::*;
