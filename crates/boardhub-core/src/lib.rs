//! # boardhub-core
//!
//! Core crate for BoardHub. Contains configuration schemas and the
//! environment loader, board/principal domain types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other BoardHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
