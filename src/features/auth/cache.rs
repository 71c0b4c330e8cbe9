//! Local session cache: one localStorage entry holding the last authenticated
//! user's snapshot. The cache is read before any remote call and cleared on
//! sign-out, reconciliation failure, and successful email verification.
//! Concurrent tabs race on this key without locking; last writer wins.

use crate::features::auth::types::User;

/// Fixed localStorage key for the serialized `User` snapshot.
pub(crate) const SESSION_CACHE_KEY: &str = "glimmer_session";

/// Persistence seam for the cached session, so reconciliation logic can be
/// exercised without a browser.
pub(crate) trait SessionStore {
    fn load(&self) -> Option<User>;
    fn save(&self, user: &User);
    fn clear(&self);
}

/// localStorage-backed store used in the running app. A snapshot that fails to
/// parse is treated as absent, which sends reconciliation to the remote
/// lookup instead of silently trusting a corrupt entry.
pub(crate) struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<User> {
        let raw = Self::storage()?.get_item(SESSION_CACHE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, user: &User) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_CACHE_KEY, &raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_CACHE_KEY);
        }
    }
}
