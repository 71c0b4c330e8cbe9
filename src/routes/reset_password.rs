use crate::app_lib::remote_error_message;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client::{IdentityGateway, RemoteIdentity};
use crate::features::auth::validation;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[derive(Clone)]
struct ResetInput {
    user_id: String,
    secret: String,
    password: String,
}

/// Consumes the `userId`/`secret` pair from the recovery email and sets a new
/// password. The secret is single-use; a failed attempt needs a fresh link.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let user_id = move || query.read().get("userId").unwrap_or_default();
    let secret = move || query.read().get("secret").unwrap_or_default();
    let link_incomplete = move || user_id().is_empty() || secret().is_empty();

    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (notice, set_notice) = signal(None::<(AlertKind, String)>);

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            RemoteIdentity
                .redeem_recovery(&input.user_id, &input.secret, &input.password)
                .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(_) => set_notice.set(Some((
                    AlertKind::Success,
                    "Please, sign in with your new password now.".to_string(),
                ))),
                Err(err) => set_notice.set(Some((AlertKind::Error, remote_error_message(&err)))),
            }
        }
    });

    Effect::new(move |_| {
        if link_incomplete() {
            set_notice.set(Some((
                AlertKind::Error,
                "Missing required parameters.".to_string(),
            )));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if link_incomplete() {
            return;
        }
        set_notice.set(None);

        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        if let Err(message) = validation::validate_reset(&password_value, &confirm_value) {
            set_notice.set(Some((AlertKind::Error, message)));
            return;
        }

        reset_action.dispatch(ResetInput {
            user_id: user_id(),
            secret: secret(),
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Recover Account"
                </h1>
                <p class="mb-6 text-sm text-gray-600 dark:text-gray-300">
                    "Enter your new password below"
                </p>
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    set_value=set_password
                />
                <TextField
                    id="confirm_password"
                    label="Confirm Password"
                    input_type="password"
                    autocomplete="new-password"
                    set_value=set_confirm_password
                />
                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || {
                        link_incomplete() || reset_action.pending().get()
                    })
                >
                    "Reset Password"
                </Button>
                {move || {
                    reset_action
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
