//! Board descriptor types.
//!
//! A board is one monitored queue backend: its Redis connection
//! parameters, the HTTP path it is mounted at, and whether the mounted
//! view may perform mutating actions.

use serde::{Deserialize, Serialize};

/// A discovered queue name within one backend's namespace.
pub type QueueName = String;

/// Whether a mounted board view may perform mutating actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Mutating actions permitted.
    FullAccess,
    /// Mutating actions suppressed by the view.
    ReadOnly,
}

impl AccessMode {
    /// True if this mode suppresses mutating actions.
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// Connection parameters for one Redis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisConnectionParams {
    /// Redis host.
    pub host: String,
    /// Redis port.
    pub port: u16,
    /// Logical database index.
    pub db: i64,
    /// Optional credential.
    pub password: Option<String>,
}

impl RedisConnectionParams {
    /// Render as a `redis://` URL suitable for `redis::Client::open`.
    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

/// One monitored backend: mount path, connection parameters, access mode.
///
/// Created once at process start by the config loader and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescriptor {
    /// Unique, non-empty HTTP prefix this board is mounted at.
    pub mount_path: String,
    /// Backend connection parameters, fully resolved before discovery runs.
    pub connection: RedisConnectionParams,
    /// Access mode passed through to the mounted view.
    pub access_mode: AccessMode,
}
