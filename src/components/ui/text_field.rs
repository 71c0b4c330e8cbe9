//! Labeled text input used by every credential form. The value flows out
//! through a write signal so forms keep their own state.

use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    set_value: WriteSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label
                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                for=id
            >
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-md focus:ring-violet-500 focus:border-violet-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-violet-500 dark:focus:border-violet-500"
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or("")
                required
                on:input=move |event| set_value.set(event_target_value(&event))
            />
        </div>
    }
}
