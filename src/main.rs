mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

pub fn main() {
    #[cfg(target_arch = "wasm32")]
    leptos::prelude::mount_to_body(crate::app::App);
}
