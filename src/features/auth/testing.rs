//! Mock identity gateway for exercising reconciliation and credential flows
//! without a network.

use crate::{
    app_lib::AppError,
    features::auth::{
        client::IdentityGateway,
        types::{Account, Confirmation, NewUser, Profile, Session, User},
    },
};
use std::cell::Cell;

#[derive(Default)]
pub(crate) struct GatewayCalls {
    pub current_account: Cell<u32>,
    pub profile: Cell<u32>,
    pub create_session: Cell<u32>,
    pub redeem_verification: Cell<u32>,
}

/// Configurable gateway double. `None` fields mean "record missing";
/// `network_down` makes every call fail like an unreachable server.
#[derive(Default)]
pub(crate) struct MockGateway {
    pub account: Option<Account>,
    pub profile: Option<Profile>,
    pub session: Option<Session>,
    pub reject_signup: bool,
    pub network_down: bool,
    pub redeem_error: Option<String>,
    pub calls: GatewayCalls,
}

impl MockGateway {
    /// Gateway with an active remote session for a verified user.
    pub(crate) fn signed_in() -> Self {
        Self {
            account: Some(Self::account()),
            profile: Some(Self::profile()),
            session: Some(Session {
                id: "sess-1".to_string(),
                user_id: "acc-1".to_string(),
            }),
            ..Self::default()
        }
    }

    pub(crate) fn account() -> Account {
        Account {
            id: "acc-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            verified: true,
            labels: Vec::new(),
        }
    }

    pub(crate) fn profile() -> Profile {
        Profile {
            id: "u-1".to_string(),
            account_id: "acc-1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            image_url: String::new(),
            bio: String::new(),
        }
    }

    /// The `User` that `signed_in()` resolves to.
    pub(crate) fn cached_user() -> User {
        User::from_parts(Self::profile(), &Self::account())
    }

    fn offline(&self) -> Result<(), AppError> {
        if self.network_down {
            Err(AppError::Network("Unable to reach the server".to_string()))
        } else {
            Ok(())
        }
    }
}

impl IdentityGateway for MockGateway {
    async fn create_account(&self, user: &NewUser) -> Result<Account, AppError> {
        self.offline()?;
        if self.reject_signup {
            return Err(AppError::Http {
                status: 409,
                message: "A user with the same email already exists.".to_string(),
            });
        }
        Ok(Account {
            id: "acc-1".to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            verified: false,
            labels: Vec::new(),
        })
    }

    async fn create_session(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Option<Session>, AppError> {
        self.calls.create_session.set(self.calls.create_session.get() + 1);
        self.offline()?;
        Ok(self.session.clone())
    }

    async fn delete_session(&self) -> Result<(), AppError> {
        self.offline()
    }

    async fn current_account(&self) -> Result<Option<Account>, AppError> {
        self.calls.current_account.set(self.calls.current_account.get() + 1);
        self.offline()?;
        Ok(self.account.clone())
    }

    async fn profile_by_account_id(&self, account_id: &str) -> Result<Option<Profile>, AppError> {
        self.calls.profile.set(self.calls.profile.get() + 1);
        self.offline()?;
        Ok(self
            .profile
            .clone()
            .filter(|profile| profile.account_id == account_id))
    }

    async fn create_recovery(
        &self,
        _email: &str,
        _redirect_url: &str,
    ) -> Result<Confirmation, AppError> {
        self.offline()?;
        Ok(Confirmation {
            user_id: "acc-1".to_string(),
        })
    }

    async fn redeem_recovery(
        &self,
        user_id: &str,
        _secret: &str,
        _password: &str,
    ) -> Result<Confirmation, AppError> {
        self.offline()?;
        Ok(Confirmation {
            user_id: user_id.to_string(),
        })
    }

    async fn create_verification(&self, _redirect_url: &str) -> Result<Confirmation, AppError> {
        self.offline()?;
        Ok(Confirmation {
            user_id: "acc-1".to_string(),
        })
    }

    async fn redeem_verification(
        &self,
        user_id: &str,
        _secret: &str,
    ) -> Result<Confirmation, AppError> {
        self.calls.redeem_verification.set(self.calls.redeem_verification.get() + 1);
        self.offline()?;
        if let Some(message) = &self.redeem_error {
            return Err(AppError::Http {
                status: 401,
                message: message.clone(),
            });
        }
        Ok(Confirmation {
            user_id: user_id.to_string(),
        })
    }
}
