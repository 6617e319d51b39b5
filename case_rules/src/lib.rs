//! # Case Rules
//!
//! The casebook crate - entity definitions, suspicion and cold-case rules,
//! the relationship graph and the in-memory store that owns them all.
//! This crate is the single source of truth for investigation state and
//! contains no reporting or narrative logic.

pub mod casebook;
pub mod config;
pub mod entities;
pub mod error;
pub mod mechanics;

pub use casebook::*;
pub use config::CasebookConfig;
pub use entities::*;
pub use error::{Error, Result};
pub use mechanics::*;
