//! # boardhub-discovery
//!
//! Enumerates the distinct queue names present in one Redis backend.
//!
//! Discovery never fails outward: a backend that is unreachable or
//! errors mid-scan yields an empty queue set so the orchestrator can
//! still mount the board. The key-scan capability is behind the
//! [`KeyScan`] trait so tests run against a fixture instead of Redis.

pub mod scanner;

use std::collections::BTreeSet;

use tracing::{debug, warn};

use boardhub_core::types::{BoardDescriptor, QueueName};

use crate::scanner::{KeyScan, RedisKeyScanner};

/// Key pattern every BullMQ queue key lives under.
pub const QUEUE_KEY_PATTERN: &str = "bull:*";

/// Discover the sorted, deduplicated queue names in one backend.
///
/// On any connection or scan error, logs and returns an empty set —
/// a bad backend must not prevent the process from starting.
pub async fn discover(descriptor: &BoardDescriptor) -> Vec<QueueName> {
    let scanner = match RedisKeyScanner::connect(&descriptor.connection).await {
        Ok(s) => s,
        Err(e) => {
            warn!(
                mount_path = %descriptor.mount_path,
                error = %e,
                "Backend unreachable, mounting board with zero queues"
            );
            return Vec::new();
        }
    };

    discover_with(&descriptor.mount_path, &scanner).await
}

/// Discovery against an arbitrary scanner. Split out for tests.
pub async fn discover_with(mount_path: &str, scanner: &dyn KeyScan) -> Vec<QueueName> {
    // Connection (if any) is released when the scanner drops, on every
    // exit path.
    let keys = match scanner.scan(QUEUE_KEY_PATTERN).await {
        Ok(keys) => keys,
        Err(e) => {
            warn!(mount_path, error = %e, "Key scan failed, returning empty queue set");
            return Vec::new();
        }
    };

    let names: BTreeSet<QueueName> = keys
        .iter()
        .filter_map(|key| key.split(':').nth(1))
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    debug!(mount_path, queues = names.len(), "Queue discovery complete");
    names.into_iter().collect()
}
