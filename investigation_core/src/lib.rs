//! # Investigation Core
//!
//! The read side of an investigation. This crate works over a
//! `case_rules::Casebook`: it queries and searches it, aggregates statistics,
//! checks its integrity and renders narrative text from it.
//!
//! ## Core Components
//!
//! - **query**: Filters, neighborhood lookups and text search
//! - **statistics**: Summary counters computed on demand
//! - **validation**: Referential and domain integrity checks
//! - **narrative**: Summaries, profiles, timelines, suspicion reports and leads
//! - **projection**: Flat key-value views for external serialization
//! - **shared**: A lock-guarded handle for concurrent embedding
//!
//! Nothing here mutates a casebook except through [`SharedCasebook::write`],
//! which only hands out the casebook's own writers.

pub mod narrative;
pub mod projection;
pub mod query;
pub mod shared;
pub mod statistics;
pub mod validation;

pub use narrative::*;
pub use projection::*;
pub use query::*;
pub use shared::*;
pub use statistics::*;
pub use validation::*;
