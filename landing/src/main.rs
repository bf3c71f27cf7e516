// Global Logistics Landing Page - Leptos 0.8 Edition
// Developed by the Global Logistics web team (c)2025

use freight_landing::{App, load_content, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let content = load_content();
    leptos::mount::mount_to_body(move || view! { <App content=content /> });
}
