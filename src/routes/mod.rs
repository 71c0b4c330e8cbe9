mod health;
mod home;
mod landing;
mod not_found;
mod password_recovery;
mod reset_password;
mod sign_in;
mod sign_up;
mod verification;

pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use landing::LandingPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use password_recovery::PasswordRecoveryPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use sign_in::SignInPage;
pub(crate) use sign_up::SignUpPage;
pub(crate) use verification::VerificationPage;

use crate::features::auth::{RequireAuth, RequireGuest};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared between the router, the gates, and the flows.
pub(crate) mod paths {
    pub(crate) const HOME: &str = "/home";
    pub(crate) const SIGN_IN: &str = "/sign-in";
    pub(crate) const SIGN_UP: &str = "/sign-up";
    pub(crate) const PASSWORD_RECOVERY: &str = "/password-recovery";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/health") view=HealthPage />
            <Route
                path=path!("/home")
                view=|| view! { <RequireAuth><HomePage /></RequireAuth> }
            />
            <Route
                path=path!("/sign-in")
                view=|| view! { <RequireGuest><SignInPage /></RequireGuest> }
            />
            <Route
                path=path!("/sign-up")
                view=|| view! { <RequireGuest><SignUpPage /></RequireGuest> }
            />
            <Route
                path=path!("/password-recovery")
                view=|| view! { <RequireGuest><PasswordRecoveryPage /></RequireGuest> }
            />
            <Route
                path=path!("/reset-password")
                view=|| view! { <RequireGuest><ResetPasswordPage /></RequireGuest> }
            />
            <Route path=path!("/verification") view=VerificationPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
