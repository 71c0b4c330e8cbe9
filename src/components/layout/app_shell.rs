//! Shared page chrome: brand header, session-aware navigation, and the main
//! content container. The sign-out button ends the cookie session and drops
//! local state; routing away is handled by the gates reacting to the cleared
//! state.

use crate::features::auth::{cache::BrowserStore, client::RemoteIdentity, session, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    let nav_link_class = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-violet-700 md:p-0 dark:text-white md:dark:hover:text-violet-400 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

    let sign_out = move |_| {
        spawn_local(async move {
            let _ = session::sign_out(&RemoteIdentity, &BrowserStore).await;
            auth.clear();
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <header class="border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="text-xl font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Glimmer"
                        </span>
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-row space-x-6">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A href="/sign-in" {..} class=nav_link_class>
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A href="/sign-up" {..} class=nav_link_class>
                                                "Sign Up"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <button type="button" class=nav_link_class on:click=sign_out>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
