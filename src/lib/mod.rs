//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! 1. **Reconciliation:** On mount the app resolves the session from the local
//!    snapshot first and falls back to the identity API (`/v1/account` plus the
//!    profile lookup).
//! 2. **Credentials:** Sign-in and sign-up create a cookie-backed session and
//!    then re-run reconciliation before navigating into the app.
//! 3. **Recovery & Verification:** Link-based flows consume `userId`/`secret`
//!    query parameters and redeem them against the identity API.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{delete_empty, get_optional_json, post_json, post_optional_json, put_json};
pub(crate) use config::AppConfig;
pub(crate) use errors::{remote_error_message, AppError};
