//! # boardhub-api
//!
//! HTTP layer: the axum router with one guarded mount per board, the
//! session-gate middleware, auth-flow handlers, and the built-in board
//! views.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;
