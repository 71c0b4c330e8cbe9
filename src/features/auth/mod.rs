//! Authentication feature: session reconciliation, route gates, and the
//! credential/recovery/verification flows against the identity API.

pub(crate) mod cache;
pub(crate) mod client;
pub(crate) mod flows;
pub(crate) mod guards;
pub(crate) mod notice;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validation;
pub(crate) mod verify;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) use guards::{RequireAuth, RequireGuest};
