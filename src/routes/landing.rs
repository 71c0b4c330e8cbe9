use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto text-center py-16">
                <h1 class="text-4xl font-extrabold text-gray-900 dark:text-white">
                    "Share your brightest moments"
                </h1>
                <p class="mt-4 text-lg text-gray-600 dark:text-gray-300">
                    "Glimmer is a small corner of the internet for the pictures that matter."
                </p>
                <div class="mt-8">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <A
                                    href={paths::SIGN_UP}
                                    {..}
                                    class="inline-block px-6 py-3 text-sm font-medium text-white bg-violet-700 rounded-md hover:bg-violet-800 dark:bg-violet-600 dark:hover:bg-violet-700"
                                >
                                    "Start your journey"
                                </A>
                            }
                        }
                    >
                        {view! {
                            <A
                                href={paths::HOME}
                                {..}
                                class="inline-block px-6 py-3 text-sm font-medium text-white bg-violet-700 rounded-md hover:bg-violet-800 dark:bg-violet-600 dark:hover:bg-violet-700"
                            >
                                "Go to your home feed"
                            </A>
                        }
                            .into_any()}
                    </Show>
                </div>
            </div>
        </AppShell>
    }
}
