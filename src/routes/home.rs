use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

/// Signed-in landing area. Reached only through the session gate, so the user
/// signal always holds a verified identity here.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user;

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    {move || format!("Welcome back, {}", user.get().name)}
                </h1>
                <div class="mt-6 rounded-lg border border-gray-200 bg-white p-5 dark:border-gray-700 dark:bg-gray-800">
                    <dl class="space-y-3 text-sm">
                        <div>
                            <dt class="font-medium text-gray-900 dark:text-white">"Username"</dt>
                            <dd class="text-gray-600 dark:text-gray-300">
                                {move || format!("@{}", user.get().username)}
                            </dd>
                        </div>
                        <div>
                            <dt class="font-medium text-gray-900 dark:text-white">"Email"</dt>
                            <dd class="text-gray-600 dark:text-gray-300">
                                {move || user.get().email}
                            </dd>
                        </div>
                        {move || {
                            let bio = user.get().bio;
                            (!bio.is_empty())
                                .then(|| {
                                    view! {
                                        <div>
                                            <dt class="font-medium text-gray-900 dark:text-white">
                                                "Bio"
                                            </dt>
                                            <dd class="text-gray-600 dark:text-gray-300">{bio}</dd>
                                        </div>
                                    }
                                })
                        }}
                    </dl>
                </div>
            </div>
        </AppShell>
    }
}
