//! Route gates. Decisions are pure functions over the session state so the
//! routing rules can be tested without a DOM; the components only translate a
//! decision into a redirect, a placeholder, or the gated children.
//!
//! These gates are UX-only. Real access control lives on the API, which scopes
//! every request to the cookie session.

use crate::{
    app_lib::{remote_error_message, AppConfig},
    components::{Alert, AlertKind, Button, Spinner},
    features::auth::{client::{IdentityGateway, RemoteIdentity}, state::use_auth, types::SessionState},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// What a gate wants the router to do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GateDecision {
    /// Reconciliation is still running; render a neutral placeholder.
    Wait,
    /// Render the gated children.
    Allow,
    /// Send the visitor elsewhere.
    Redirect(&'static str),
    /// Authenticated but unverified; show the verification prompt.
    Interstitial,
}

/// Gate for the credential forms. Signed-in visitors have nothing to do here
/// and are sent into the app.
pub(crate) fn guest_route_decision(state: &SessionState) -> GateDecision {
    if state.is_loading {
        GateDecision::Wait
    } else if state.is_authenticated {
        GateDecision::Redirect(paths::HOME)
    } else {
        GateDecision::Allow
    }
}

/// Gate for the app area. Anonymous visitors go to the sign-in form, and
/// unverified accounts are held at the verification prompt.
pub(crate) fn protected_route_decision(state: &SessionState) -> GateDecision {
    if state.is_loading {
        GateDecision::Wait
    } else if !state.is_authenticated {
        GateDecision::Redirect(paths::SIGN_IN)
    } else if !state.user.verified {
        GateDecision::Interstitial
    } else {
        GateDecision::Allow
    }
}

#[component]
fn GateWait() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
            <Spinner />
        </div>
    }
}

/// Wraps routes that only make sense for anonymous visitors.
#[component]
pub fn RequireGuest(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Signal::derive(move || auth.state.with(guest_route_decision));

    view! {
        {move || match decision.get() {
            GateDecision::Wait => view! { <GateWait /> }.into_any(),
            GateDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            GateDecision::Allow | GateDecision::Interstitial => children().into_any(),
        }}
    }
}

/// Wraps routes that require an authenticated, verified session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Signal::derive(move || auth.state.with(protected_route_decision));

    view! {
        {move || match decision.get() {
            GateDecision::Wait => view! { <GateWait /> }.into_any(),
            GateDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            GateDecision::Interstitial => view! { <VerifyAccountPanel /> }.into_any(),
            GateDecision::Allow => children().into_any(),
        }}
    }
}

/// Interstitial for signed-in but unverified accounts: explains the pending
/// verification and offers to resend the email.
#[component]
fn VerifyAccountPanel() -> impl IntoView {
    let auth = use_auth();
    let (notice, set_notice) = signal(None::<(AlertKind, String)>);

    let resend = Action::new_local(move |(): &()| async move {
        let url = verification_target();
        match RemoteIdentity.create_verification(&url).await {
            Ok(_) => set_notice.set(Some((
                AlertKind::Success,
                "Verification email sent. Check your inbox.".to_string(),
            ))),
            Err(err) => set_notice.set(Some((AlertKind::Error, remote_error_message(&err)))),
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);
        resend.dispatch(());
    };

    view! {
        <main class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
            <div class="max-w-md text-center">
                <h1 class="mb-4 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Verify your email"
                </h1>
                <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                    "Your account " <strong>{move || auth.user.get().email}</strong>
                    " is not verified yet. Follow the link we emailed you to finish signing up."
                </p>
                {move || {
                    notice
                        .get()
                        .map(|(kind, message)| {
                            view! {
                                <div class="mb-4">
                                    <Alert kind=kind message=message />
                                </div>
                            }
                        })
                }}
                <form on:submit=on_submit>
                    <Button button_type="submit" disabled=resend.pending()>
                        "Resend verification email"
                    </Button>
                </form>
            </div>
        </main>
    }
}

/// Absolute URL the verification email should link back to. Configured
/// absolute URLs are kept as-is; path-only values get the current origin.
fn verification_target() -> String {
    let path = AppConfig::load().verification_redirect_url;
    if path.starts_with("http") {
        return path;
    }
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => format!("{origin}{path}"),
        None => path,
    }
}
