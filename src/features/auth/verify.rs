//! Email verification link handling: pure validation of the inbound
//! `userId`/`secret`/`expire` query parameters, and the one-shot redemption
//! that invalidates the local snapshot so the next reconciliation re-derives
//! the verified flag from the remote account.

use crate::{
    app_lib::AppError,
    features::auth::{cache::SessionStore, client::IdentityGateway, types::Confirmation},
};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Result of validating a verification link before any network call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LinkCheck {
    Valid { user_id: String, secret: String },
    MissingParams,
    Expired,
}

/// First failing condition wins: missing parameters, then expiry. A link that
/// passes both is ready for redemption.
pub(crate) fn check_verification_link(
    user_id: &str,
    secret: &str,
    expire: &str,
    now: DateTime<Utc>,
) -> LinkCheck {
    if user_id.is_empty() || secret.is_empty() || expire.is_empty() {
        return LinkCheck::MissingParams;
    }

    if let Some(expiry) = parse_expiry(expire) {
        if now > expiry {
            return LinkCheck::Expired;
        }
    }

    LinkCheck::Valid {
        user_id: user_id.to_string(),
        secret: secret.to_string(),
    }
}

/// Accepts RFC 3339 as well as the service's space-separated UTC form. An
/// unparseable timestamp is treated as not expired; the remote redemption is
/// the authority on single-use and expiry anyway.
fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Redeems the token pair and, on success, drops the cached session so the
/// verified flag is re-read from the remote account instead of a stale
/// snapshot.
pub(crate) async fn redeem<G, S>(
    gateway: &G,
    store: &S,
    user_id: &str,
    secret: &str,
) -> Result<Confirmation, AppError>
where
    G: IdentityGateway,
    S: SessionStore,
{
    let confirmation = gateway.redeem_verification(user_id, secret).await?;
    store.clear();
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::{check_verification_link, parse_expiry, redeem, LinkCheck};
    use crate::features::auth::{
        cache::{testing::MemoryStore, SessionStore},
        testing::MockGateway,
    };
    use chrono::{Duration, Utc};
    use futures::executor::block_on;

    #[test]
    fn missing_parameters_win_over_expiry() {
        let past = "2020-01-01T00:00:00+00:00";
        assert_eq!(
            check_verification_link("", "s3cret", past, Utc::now()),
            LinkCheck::MissingParams
        );
        assert_eq!(
            check_verification_link("u-1", "", past, Utc::now()),
            LinkCheck::MissingParams
        );
        assert_eq!(
            check_verification_link("u-1", "s3cret", "", Utc::now()),
            LinkCheck::MissingParams
        );
    }

    #[test]
    fn expired_links_are_rejected_before_any_network_call() {
        let now = Utc::now();
        let expire = (now - Duration::hours(1)).to_rfc3339();

        assert_eq!(
            check_verification_link("u-1", "s3cret", &expire, now),
            LinkCheck::Expired
        );
    }

    #[test]
    fn rejected_links_never_reach_redemption() {
        let gateway = MockGateway::signed_in();
        let store = MemoryStore::holding(MockGateway::cached_user());
        let now = Utc::now();
        let expired = (now - Duration::hours(1)).to_rfc3339();

        for (user_id, secret, expire) in [("u-1", "s3cret", expired.as_str()), ("", "s3cret", "")] {
            if let LinkCheck::Valid { user_id, secret } =
                check_verification_link(user_id, secret, expire, now)
            {
                let _ = block_on(redeem(&gateway, &store, &user_id, &secret));
            }
        }

        assert_eq!(gateway.calls.redeem_verification.get(), 0);
        assert!(store.load().is_some());
    }

    #[test]
    fn future_expiry_yields_a_valid_link() {
        let now = Utc::now();
        let expire = (now + Duration::hours(1)).to_rfc3339();

        assert_eq!(
            check_verification_link("u-1", "s3cret", &expire, now),
            LinkCheck::Valid {
                user_id: "u-1".to_string(),
                secret: "s3cret".to_string(),
            }
        );
    }

    #[test]
    fn parse_expiry_accepts_the_space_separated_form() {
        let parsed = parse_expiry("2023-07-04 14:24:42.353").expect("should parse");
        assert_eq!(parsed.to_rfc3339(), "2023-07-04T14:24:42.353+00:00");
        assert!(parse_expiry("not-a-date").is_none());
    }

    #[test]
    fn successful_redemption_clears_the_cached_session() {
        let gateway = MockGateway::signed_in();
        let store = MemoryStore::holding(MockGateway::cached_user());

        let confirmation =
            block_on(redeem(&gateway, &store, "u-1", "s3cret")).expect("redeem failed");

        assert_eq!(confirmation.user_id, "u-1");
        assert!(store.is_empty());
        assert_eq!(gateway.calls.redeem_verification.get(), 1);
    }

    #[test]
    fn failed_redemption_keeps_the_cached_session() {
        let mut gateway = MockGateway::signed_in();
        gateway.redeem_error = Some("Invalid token passed in the request.".to_string());
        let store = MemoryStore::holding(MockGateway::cached_user());

        assert!(block_on(redeem(&gateway, &store, "u-1", "s3cret")).is_err());
        assert!(store.load().is_some());
    }
}
