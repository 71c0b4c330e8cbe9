use crate::app_lib::remote_error_message;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::cache::BrowserStore;
use crate::features::auth::client::RemoteIdentity;
use crate::features::auth::verify::{self, LinkCheck};
use crate::routes::paths;
use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingParams,
    Expired,
    Pending,
    Success,
    Error(String),
}

/// Landing page for the emailed verification link. The link is checked
/// locally first (completeness, expiry) and only a valid one is redeemed
/// against the identity API; the secret is single-use.
#[component]
pub fn VerificationPage() -> impl IntoView {
    let query = use_query_map();
    let (status, set_status) = signal(VerifyStatus::Idle);

    let redeem_action = Action::new_local(move |input: &(String, String)| {
        let (user_id, secret) = input.clone();
        async move { verify::redeem(&RemoteIdentity, &BrowserStore, &user_id, &secret).await }
    });

    Effect::new(move |_| {
        if status.get_untracked() != VerifyStatus::Idle {
            return;
        }

        let user_id = query.read().get("userId").unwrap_or_default();
        let secret = query.read().get("secret").unwrap_or_default();
        let expire = query.read().get("expire").unwrap_or_default();

        match verify::check_verification_link(&user_id, &secret, &expire, Utc::now()) {
            LinkCheck::Valid { user_id, secret } => {
                set_status.set(VerifyStatus::Pending);
                redeem_action.dispatch((user_id, secret));
            }
            LinkCheck::MissingParams => set_status.set(VerifyStatus::MissingParams),
            LinkCheck::Expired => set_status.set(VerifyStatus::Expired),
        }
    });

    Effect::new(move |_| {
        if let Some(result) = redeem_action.value().get() {
            match result {
                Ok(_) => set_status.set(VerifyStatus::Success),
                Err(err) => set_status.set(VerifyStatus::Error(remote_error_message(&err))),
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Account Verification"
                </h1>
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="mt-4 space-y-4">
                            <Alert
                                kind=AlertKind::Info
                                message="Verifying your email...".to_string()
                            />
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Your email has been successfully verified!".to_string()
                            />
                            <p class="mt-4 text-sm text-gray-600 dark:text-gray-300">
                                <A
                                    href={paths::HOME}
                                    {..}
                                    class="font-medium text-violet-600 hover:underline"
                                >
                                    "Return"
                                </A>
                                " to the app to keep using."
                            </p>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingParams => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Missing required parameters.".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Expired => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Error
                                message="The verification link has expired. Try sending a new link to your email."
                                    .to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
