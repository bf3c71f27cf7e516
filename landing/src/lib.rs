//! # freight-landing
//!
//! Global Logistics landing page, rendered client-side with
//! [Leptos](https://leptos.dev/) and compiled to WASM.
//!
//! The page is a hero (slide-in navigation drawer, quick-access popover,
//! entrance reveal) followed by a services showcase grid. Everything stateful
//! sits behind plain Rust types that run natively under `cargo test`:
//!
//! - [`config`] - site copy, links and timing, parsed from embedded JSON
//! - [`host`] - timers, resize listener and scroll reset behind the [`host::Host`] trait
//! - [`disclosure`] - drawer / popover / entrance state and its lifecycle
//! - [`grid`] - service cards in order, with image overrides and stagger delays
//! - [`sections`] and [`pages`] - Leptos components wiring the above to the DOM
//!
//! ---
//!
//! Developed by the Global Logistics web team (c)2025

pub mod config;
pub mod disclosure;
pub mod error;
pub mod grid;
pub mod host;
pub mod logging;
pub mod pages;
pub mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use config::SiteContent;
use pages::{HomePage, NotFoundPage, PortalPage, ServiceDetailPage, ServicesPage};
use sections::{Footer, Nav};

/// Root component. `content` is provided as context to every section.
#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    provide_context(content);

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/services/:id") view=ServiceDetailPage />
                    <Route path=path!("/:portal") view=PortalPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Load content, falling back to an empty site if the embedded document is
/// broken so the shell still renders.
pub fn load_content() -> SiteContent {
    match SiteContent::builtin() {
        Ok(content) => {
            tracing::info!(
                services = content.services.len(),
                portals = content.portal_links.len(),
                "site content loaded"
            );
            content
        }
        Err(err) => {
            tracing::error!(%err, "site content invalid; rendering empty site");
            SiteContent::default()
        }
    }
}
