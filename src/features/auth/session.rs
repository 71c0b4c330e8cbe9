//! Session reconciliation core: decides who the current user is from the
//! local snapshot first, then the remote identity service. This logic is kept
//! free of signals and DOM types so it can be tested against mock gateways
//! and stores.

use crate::{
    app_lib::AppError,
    features::auth::{cache::SessionStore, client::IdentityGateway, types::User},
};

/// Resolves the current session. Cache hits return immediately without any
/// remote call; the staleness this trades for latency is cleared on sign-out
/// and on successful email verification. Every failure path degrades to
/// `None` with the cache cleared; no error escapes.
pub(crate) async fn resolve_session<G, S>(gateway: &G, store: &S) -> Option<User>
where
    G: IdentityGateway,
    S: SessionStore,
{
    if let Some(user) = store.load() {
        return Some(user);
    }

    match remote_lookup(gateway).await {
        Ok(Some(user)) => {
            store.save(&user);
            Some(user)
        }
        Ok(None) | Err(_) => {
            store.clear();
            None
        }
    }
}

/// Two sequential lookups: the account for the ambient session, then the
/// profile record keyed by account id. Either one missing means there is no
/// usable identity.
async fn remote_lookup<G: IdentityGateway>(gateway: &G) -> Result<Option<User>, AppError> {
    let Some(account) = gateway.current_account().await? else {
        return Ok(None);
    };
    let Some(profile) = gateway.profile_by_account_id(&account.id).await? else {
        return Ok(None);
    };
    Ok(Some(User::from_parts(profile, &account)))
}

/// Ends the remote session and drops the local snapshot. The snapshot is
/// cleared even when the remote call fails, so a signed-out browser never
/// resurrects the old identity from cache.
pub(crate) async fn sign_out<G, S>(gateway: &G, store: &S) -> Result<(), AppError>
where
    G: IdentityGateway,
    S: SessionStore,
{
    let result = gateway.delete_session().await;
    store.clear();
    result
}
