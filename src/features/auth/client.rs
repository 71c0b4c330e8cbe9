//! Client for the remote identity service. The wire format belongs to the
//! service; this module owns only the operation contract the session
//! subsystem relies on. Lookup operations return `Ok(None)` where the
//! contract is "record or null" so callers never branch on status codes.

use crate::{
    app_lib::{delete_empty, get_optional_json, post_json, post_optional_json, put_json, AppError},
    features::auth::types::{
        Account, Confirmation, CreateRecoveryRequest, CreateSessionRequest,
        CreateVerificationRequest, NewUser, Profile, RedeemRecoveryRequest,
        RedeemVerificationRequest, Session,
    },
};

/// Operation contract of the remote identity service. Implemented over HTTP by
/// [`RemoteIdentity`] and by in-memory mocks in tests.
pub(crate) trait IdentityGateway {
    async fn create_account(&self, user: &NewUser) -> Result<Account, AppError>;
    async fn create_session(&self, email: &str, password: &str)
        -> Result<Option<Session>, AppError>;
    async fn delete_session(&self) -> Result<(), AppError>;
    async fn current_account(&self) -> Result<Option<Account>, AppError>;
    async fn profile_by_account_id(&self, account_id: &str) -> Result<Option<Profile>, AppError>;
    async fn create_recovery(&self, email: &str, redirect_url: &str)
        -> Result<Confirmation, AppError>;
    async fn redeem_recovery(
        &self,
        user_id: &str,
        secret: &str,
        password: &str,
    ) -> Result<Confirmation, AppError>;
    async fn create_verification(&self, redirect_url: &str) -> Result<Confirmation, AppError>;
    async fn redeem_verification(&self, user_id: &str, secret: &str)
        -> Result<Confirmation, AppError>;
}

/// HTTP implementation against the configured identity API base URL. Session
/// affinity is cookie-based, so no token material lives in this struct.
pub(crate) struct RemoteIdentity;

impl IdentityGateway for RemoteIdentity {
    async fn create_account(&self, user: &NewUser) -> Result<Account, AppError> {
        post_json("/v1/account", user).await
    }

    /// Returns `Ok(None)` when the service rejects the credentials.
    async fn create_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Session>, AppError> {
        post_optional_json("/v1/account/sessions", &CreateSessionRequest { email, password }).await
    }

    async fn delete_session(&self) -> Result<(), AppError> {
        delete_empty("/v1/account/sessions/current").await
    }

    /// Looks up the account for the ambient cookie session, `Ok(None)` when
    /// there is no active session.
    async fn current_account(&self) -> Result<Option<Account>, AppError> {
        get_optional_json("/v1/account").await
    }

    async fn profile_by_account_id(&self, account_id: &str) -> Result<Option<Profile>, AppError> {
        get_optional_json(&format!("/v1/profiles/by-account/{account_id}")).await
    }

    async fn create_recovery(
        &self,
        email: &str,
        redirect_url: &str,
    ) -> Result<Confirmation, AppError> {
        post_json(
            "/v1/account/recovery",
            &CreateRecoveryRequest {
                email,
                url: redirect_url,
            },
        )
        .await
    }

    async fn redeem_recovery(
        &self,
        user_id: &str,
        secret: &str,
        password: &str,
    ) -> Result<Confirmation, AppError> {
        put_json(
            "/v1/account/recovery",
            &RedeemRecoveryRequest {
                user_id,
                secret,
                password,
            },
        )
        .await
    }

    async fn create_verification(&self, redirect_url: &str) -> Result<Confirmation, AppError> {
        post_json(
            "/v1/account/verification",
            &CreateVerificationRequest { url: redirect_url },
        )
        .await
    }

    async fn redeem_verification(
        &self,
        user_id: &str,
        secret: &str,
    ) -> Result<Confirmation, AppError> {
        put_json(
            "/v1/account/verification",
            &RedeemVerificationRequest { user_id, secret },
        )
        .await
    }
}
