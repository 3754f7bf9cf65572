//! # boardhub-auth
//!
//! The authentication gate: OAuth2 identity provider client, the
//! domain allow-list decision, and the session store the gate's
//! verdicts are persisted into.
//!
//! The HTTP-facing half of the gate (redirects, cookies, middleware)
//! lives in `boardhub-api`; this crate holds everything that can be
//! exercised without a running server.

pub mod gate;
pub mod oauth;
pub mod session;

pub use gate::{AuthRejection, validate_profile};
pub use oauth::{IdentityProvider, UserProfile};
pub use session::{SessionRecord, SessionStore};
