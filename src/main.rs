mod app;
mod components;
mod config;
mod menu;
mod pages;
mod toast;
mod upload;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    log::info!("Starting canteen-scribe");
    leptos::mount::mount_to_body(App);
}
