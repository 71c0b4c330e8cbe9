//! Credential flow chains. Each step awaits the previous one; a failing step
//! halts the chain and maps to its own user-facing error, and only a fully
//! reconciled session yields a redirect into the app.

use crate::{
    app_lib::AppError,
    features::auth::{cache::SessionStore, client::IdentityGateway, session, types::{NewUser, User}},
    routes::paths,
};

/// Outcome of the sign-in chain. `Rejected` means the service refused the
/// credentials before any reconciliation was attempted.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SignInFlow {
    Rejected,
    NotEstablished,
    Established(User),
}

impl SignInFlow {
    /// Navigation target implied by the outcome, if any.
    pub(crate) fn redirect(&self) -> Option<&'static str> {
        match self {
            SignInFlow::Established(_) => Some(paths::HOME),
            SignInFlow::Rejected | SignInFlow::NotEstablished => None,
        }
    }
}

/// Creates a credential session and reconciles local state from it.
/// Navigation into the app only happens when both steps succeed, so a session
/// created remotely with a failed local reconciliation never looks signed in.
pub(crate) async fn sign_in<G, S>(
    gateway: &G,
    store: &S,
    email: &str,
    password: &str,
) -> Result<SignInFlow, AppError>
where
    G: IdentityGateway,
    S: SessionStore,
{
    let Some(_session) = gateway.create_session(email, password).await? else {
        return Ok(SignInFlow::Rejected);
    };

    match session::resolve_session(gateway, store).await {
        Some(user) => Ok(SignInFlow::Established(user)),
        None => Ok(SignInFlow::NotEstablished),
    }
}

/// Outcome of the sign-up chain. `SessionRejected` covers the odd case where
/// the account was created but the immediate sign-in failed; the user is sent
/// to the sign-in form to try their new account by hand.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SignUpFlow {
    SessionRejected,
    NotEstablished,
    Established(User),
}

impl SignUpFlow {
    pub(crate) fn redirect(&self) -> Option<&'static str> {
        match self {
            SignUpFlow::Established(_) => Some(paths::HOME),
            SignUpFlow::SessionRejected => Some(paths::SIGN_IN),
            SignUpFlow::NotEstablished => None,
        }
    }
}

/// Account creation, immediate sign-in with the same credentials, then
/// reconciliation. Account-creation failures surface as the error itself.
pub(crate) async fn sign_up<G, S>(
    gateway: &G,
    store: &S,
    input: &NewUser,
) -> Result<SignUpFlow, AppError>
where
    G: IdentityGateway,
    S: SessionStore,
{
    gateway.create_account(input).await?;

    let Some(_session) = gateway.create_session(&input.email, &input.password).await? else {
        return Ok(SignUpFlow::SessionRejected);
    };

    match session::resolve_session(gateway, store).await {
        Some(user) => Ok(SignUpFlow::Established(user)),
        None => Ok(SignUpFlow::NotEstablished),
    }
}

#[cfg(test)]
mod tests {
    use super::{sign_in, sign_up, SignInFlow, SignUpFlow};
    use crate::{
        features::auth::{
            cache::testing::MemoryStore,
            testing::MockGateway,
            types::NewUser,
        },
        routes::paths,
    };
    use futures::executor::block_on;

    fn new_user() -> NewUser {
        NewUser {
            name: "A".to_string(),
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            password: "password1".to_string(),
        }
    }

    #[test]
    fn successful_sign_up_establishes_the_session_and_redirects_home() {
        let gateway = MockGateway::signed_in();
        let store = MemoryStore::default();

        let outcome =
            block_on(sign_up(&gateway, &store, &new_user())).expect("sign up chain failed");

        let SignUpFlow::Established(user) = &outcome else {
            panic!("expected an established session, got {outcome:?}");
        };
        assert!(!user.id.is_empty());
        assert_eq!(outcome.redirect(), Some(paths::HOME));
        assert!(!store.is_empty());
    }

    #[test]
    fn sign_up_halts_when_account_creation_fails() {
        let mut gateway = MockGateway::signed_in();
        gateway.reject_signup = true;
        let store = MemoryStore::default();

        assert!(block_on(sign_up(&gateway, &store, &new_user())).is_err());
        assert_eq!(gateway.calls.create_session.get(), 0);
    }

    #[test]
    fn sign_up_with_rejected_session_points_at_the_sign_in_form() {
        let mut gateway = MockGateway::signed_in();
        gateway.session = None;
        let store = MemoryStore::default();

        let outcome =
            block_on(sign_up(&gateway, &store, &new_user())).expect("sign up chain failed");

        assert_eq!(outcome, SignUpFlow::SessionRejected);
        assert_eq!(outcome.redirect(), Some(paths::SIGN_IN));
        assert_eq!(gateway.calls.current_account.get(), 0);
    }

    #[test]
    fn rejected_credentials_never_reach_reconciliation() {
        let mut gateway = MockGateway::signed_in();
        gateway.session = None;
        let store = MemoryStore::default();

        let outcome = block_on(sign_in(&gateway, &store, "a@x.com", "wrong-password"))
            .expect("sign in chain failed");

        assert_eq!(outcome, SignInFlow::Rejected);
        assert_eq!(outcome.redirect(), None);
        assert_eq!(gateway.calls.current_account.get(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn sign_in_with_failed_reconciliation_is_not_established() {
        let mut gateway = MockGateway::signed_in();
        gateway.account = None;
        let store = MemoryStore::default();

        let outcome = block_on(sign_in(&gateway, &store, "a@x.com", "password1"))
            .expect("sign in chain failed");

        assert_eq!(outcome, SignInFlow::NotEstablished);
        assert!(store.is_empty());
    }

    #[test]
    fn successful_sign_in_redirects_home() {
        let gateway = MockGateway::signed_in();
        let store = MemoryStore::default();

        let outcome = block_on(sign_in(&gateway, &store, "ada@example.com", "password1"))
            .expect("sign in chain failed");

        assert_eq!(outcome.redirect(), Some(paths::HOME));
    }
}
