use crate::app_lib::remote_error_message;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::cache::BrowserStore;
use crate::features::auth::client::RemoteIdentity;
use crate::features::auth::flows::{self, SignInFlow};
use crate::features::auth::notice::use_flash_notice;
use crate::features::auth::state::use_auth;
use crate::features::auth::validation;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct SignInInput {
    email: String,
    password: String,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    // A flow that routed here may have parked a message for this form.
    let (error, set_error) = signal(use_flash_notice().take());

    let sign_in_action = Action::new_local(move |input: &SignInInput| {
        let input = input.clone();
        async move { flows::sign_in(&RemoteIdentity, &BrowserStore, &input.email, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(SignInFlow::Established(user)) => {
                    auth.establish(user);
                    navigate(paths::HOME, Default::default());
                }
                Ok(SignInFlow::Rejected | SignInFlow::NotEstablished) => {
                    set_error.set(Some("Login failed. Please try again.".to_string()));
                }
                Err(err) => set_error.set(Some(remote_error_message(&err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if let Err(message) = validation::validate_sign_in(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }

        sign_in_action.dispatch(SignInInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Sign in to Glimmer"
                </h1>
                <TextField
                    id="email"
                    label="Your email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@inbox.im"
                    set_value=set_email
                />
                <TextField
                    id="password"
                    label="Your password"
                    input_type="password"
                    autocomplete="current-password"
                    set_value=set_password
                />
                <Button button_type="submit" disabled=sign_in_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    sign_in_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                <p class="mt-6 text-sm text-gray-600 dark:text-gray-300">
                    "No account yet? "
                    <A href={paths::SIGN_UP} {..} class="font-medium text-violet-600 hover:underline">
                        "Sign Up"
                    </A>
                </p>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                    "Forgot your password? "
                    <A
                        href={paths::PASSWORD_RECOVERY}
                        {..}
                        class="font-medium text-violet-600 hover:underline"
                    >
                        "Recover Account"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
