use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-800">
                    <div class="border-b border-gray-200 dark:border-gray-700 px-6 py-3 text-gray-700 dark:text-gray-100 font-semibold">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-base text-gray-900 dark:text-gray-100">
                            {commit}
                        </pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
