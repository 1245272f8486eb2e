#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use route::Route;

// Configuration
/// Build-time override for the marketplace API root, e.g. `http://localhost:8000/api`.
pub const API_URL_OVERRIDE: Option<&str> = option_env!("VISUALIZER_API_URL");
/// Used when there is no browser origin to derive the API root from.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
/// Delay between refreshes of a running experiment.
pub const POLL_INTERVAL_MS: u32 = 2000;

// Branding
pub const BRAND_TITLE: &str = "Magentic Marketplace";
pub const LOGO_SRC: &str = "/logo.svg";
pub const LOGO_ALT: &str = "Magentic Logo";
pub const BRAND_GRADIENT: &str = "linear-gradient(120deg, #fb81ff, #922185 30%)";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    tracing::debug!(api = %hooks::api_base(), "mounting visualizer");

    rsx! {
        Router::<Route> {}
    }
}
