use crate::app_lib::{remote_error_message, AppConfig};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client::{IdentityGateway, RemoteIdentity};
use crate::features::auth::validation;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PasswordRecoveryPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (notice, set_notice) = signal(None::<(AlertKind, String)>);

    let recovery_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { RemoteIdentity.create_recovery(&email, &reset_target()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = recovery_action.value().get() {
            match result {
                Ok(_) => set_notice.set(Some((
                    AlertKind::Success,
                    "Please, check your email and reset password following the given link."
                        .to_string(),
                ))),
                Err(err) => set_notice.set(Some((AlertKind::Error, remote_error_message(&err)))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if let Err(message) = validation::validate_email(&email_value) {
            set_notice.set(Some((AlertKind::Error, message)));
            return;
        }

        recovery_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Recover Account"
                </h1>
                <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                    "Enter the email address associated with your account."
                </p>
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@inbox.im"
                    set_value=set_email
                />
                <Button button_type="submit" disabled=recovery_action.pending()>
                    "Send Link"
                </Button>
                {move || {
                    recovery_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    notice
                        .get()
                        .map(|(kind, message)| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=kind message=message />
                                </div>
                            }
                        })
                }}
                <p class="mt-6 text-sm text-gray-600 dark:text-gray-300">
                    "Want to try again? "
                    <A href={paths::SIGN_IN} {..} class="font-medium text-violet-600 hover:underline">
                        "Sign In"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}

/// Absolute URL the recovery email should link back to. Configured absolute
/// URLs are kept as-is; path-only values get the current origin.
fn reset_target() -> String {
    let path = AppConfig::load().reset_redirect_url;
    if path.starts_with("http") {
        return path;
    }
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => format!("{origin}{path}"),
        None => path,
    }
}
