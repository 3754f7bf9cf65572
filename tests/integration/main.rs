//! Router-level integration tests.

mod helpers;

mod auth_flow_test;
mod board_test;
