use crate::app_lib::remote_error_message;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::cache::BrowserStore;
use crate::features::auth::client::RemoteIdentity;
use crate::features::auth::flows::{self, SignUpFlow};
use crate::features::auth::notice::use_flash_notice;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::NewUser;
use crate::features::auth::validation;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let flash = use_flash_notice();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let sign_up_action = Action::new_local(move |input: &NewUser| {
        let input = input.clone();
        async move { flows::sign_up(&RemoteIdentity, &BrowserStore, &input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_up_action.value().get() {
            match result {
                Ok(SignUpFlow::Established(user)) => {
                    auth.establish(user);
                    navigate(paths::HOME, Default::default());
                }
                Ok(SignUpFlow::SessionRejected) => {
                    // Navigation unmounts this page; park the message so the
                    // sign-in form can render it.
                    flash.set("Something went wrong. Please login your new account");
                    navigate(paths::SIGN_IN, Default::default());
                }
                Ok(SignUpFlow::NotEstablished) => {
                    set_error.set(Some("Login failed. Please try again.".to_string()));
                }
                Err(err) => set_error.set(Some(remote_error_message(&err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let input = NewUser {
            name: name.get_untracked().trim().to_string(),
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(message) =
            validation::validate_sign_up(&input.name, &input.username, &input.email, &input.password)
        {
            set_error.set(Some(message));
            return;
        }

        sign_up_action.dispatch(input);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create your account"
                </h1>
                <TextField id="name" label="Name" autocomplete="name" set_value=set_name />
                <TextField
                    id="username"
                    label="Username"
                    autocomplete="username"
                    set_value=set_username
                />
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@inbox.im"
                    set_value=set_email
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    set_value=set_password
                />
                <Button button_type="submit" disabled=sign_up_action.pending()>
                    "Sign Up"
                </Button>
                {move || {
                    sign_up_action
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
                    "Already have an account? "
                    <A href={paths::SIGN_IN} {..} class="font-medium text-violet-600 hover:underline">
                        "Sign In"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
