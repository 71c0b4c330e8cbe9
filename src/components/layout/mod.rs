//! Layout components shared across routes.

mod app_shell;

pub(crate) use app_shell::AppShell;
