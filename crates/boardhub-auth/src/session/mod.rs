//! Session persistence.
//!
//! A session record binds an opaque cookie-carried token to an
//! authenticated principal with an expiry. The store is the only
//! mutable shared state in the process; each record is addressed by its
//! own token so concurrent requests for different sessions never
//! contend.

pub mod memory;
pub mod redis;
pub mod store;

pub use store::{SessionRecord, SessionStore, build_session_store, new_session_token};

pub use memory::MemorySessionStore;
