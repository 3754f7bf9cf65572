//! Indexed board descriptor loader.
//!
//! Boards are configured through indexed environment entries starting at
//! 1 (`BOARD_ROUTER_1`, `REDIS_HOST_1`, ...). The scan is strictly
//! sequential and stops at the first missing `BOARD_ROUTER_i` — a gap at
//! index k yields exactly k-1 descriptors even if k+1 is set.

use tracing::warn;

use crate::types::{AccessMode, BoardDescriptor, RedisConnectionParams};

use super::{EnvLookup, parse_or_default};

/// Load the ordered board descriptor list from the environment.
///
/// Per-index defaults: host `localhost`, port 6379, logical db = the
/// board index itself (board 1 → db 1, board 2 → db 2, avoiding
/// collision), FullAccess unless `READ_ONLY_MODE_i` is exactly `"true"`.
/// Malformed numeric fields fail closed to their default. If zero
/// descriptors are found, two hard-coded defaults are emitted so the
/// process always has something to mount.
///
/// An empty `BOARD_ROUTER_i` terminates the scan like a missing one.
/// Mount paths leave here router-safe (leading slash, non-empty) and
/// unique across the returned set: a later duplicate is dropped with a
/// warning rather than aborting startup.
pub fn load_board_descriptors(env: &dyn EnvLookup) -> Vec<BoardDescriptor> {
    let mut boards: Vec<BoardDescriptor> = Vec::new();
    let mut idx: u32 = 1;

    while let Some(raw_path) = env.get(&format!("BOARD_ROUTER_{idx}")) {
        // An empty entry ends the scan the same way a missing one does.
        if raw_path.is_empty() {
            break;
        }

        let descriptor = BoardDescriptor {
            mount_path: normalize_mount_path(raw_path, idx),
            connection: RedisConnectionParams {
                host: env
                    .get(&format!("REDIS_HOST_{idx}"))
                    .unwrap_or_else(|| "localhost".to_string()),
                port: parse_or_default(
                    env.get(&format!("REDIS_PORT_{idx}")),
                    "REDIS_PORT",
                    6379,
                ),
                db: parse_or_default(
                    env.get(&format!("REDIS_DB_{idx}")),
                    "REDIS_DB",
                    i64::from(idx),
                ),
                password: env.get(&format!("REDIS_PASSWORD_{idx}")),
            },
            access_mode: match env.get(&format!("READ_ONLY_MODE_{idx}")).as_deref() {
                Some("true") => AccessMode::ReadOnly,
                _ => AccessMode::FullAccess,
            },
        };

        if boards
            .iter()
            .any(|b: &BoardDescriptor| b.mount_path == descriptor.mount_path)
        {
            warn!(
                mount_path = %descriptor.mount_path,
                index = idx,
                "Duplicate board mount path, dropping later entry"
            );
        } else {
            boards.push(descriptor);
        }

        idx += 1;
    }

    if boards.is_empty() {
        boards = default_boards();
    }

    boards
}

/// Router nesting requires a leading slash; a path without one would
/// abort router construction well after config loading succeeded.
fn normalize_mount_path(raw: String, idx: u32) -> String {
    if raw.starts_with('/') {
        raw
    } else {
        warn!(
            mount_path = %raw,
            index = idx,
            "Board mount path missing leading slash, prepending"
        );
        format!("/{raw}")
    }
}

/// The two hard-coded fallback boards used when no indexed entries exist.
fn default_boards() -> Vec<BoardDescriptor> {
    [1_i64, 2]
        .into_iter()
        .map(|db| BoardDescriptor {
            mount_path: format!("/board{db}"),
            connection: RedisConnectionParams {
                host: "localhost".to_string(),
                port: 6379,
                db,
                password: None,
            },
            access_mode: AccessMode::FullAccess,
        })
        .collect()
}
