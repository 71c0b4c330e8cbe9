//! Alert banners for form feedback. Messages are plain text coming from
//! validation or sanitized API errors; never render token material here.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md border border-rose-300 bg-rose-50 px-4 py-3 text-sm text-rose-800 dark:border-rose-500 dark:bg-rose-950/40 dark:text-rose-200"
        }
        AlertKind::Success => {
            "rounded-md border border-teal-300 bg-teal-50 px-4 py-3 text-sm text-teal-800 dark:border-teal-500 dark:bg-teal-950/40 dark:text-teal-200"
        }
        AlertKind::Info => {
            "rounded-md border border-sky-300 bg-sky-50 px-4 py-3 text-sm text-sky-800 dark:border-sky-500 dark:bg-sky-950/40 dark:text-sky-200"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
