//! Domain types shared across BoardHub crates.

pub mod board;
pub mod principal;

pub use board::{AccessMode, BoardDescriptor, QueueName, RedisConnectionParams};
pub use principal::Principal;
