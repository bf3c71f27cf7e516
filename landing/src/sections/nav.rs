use leptos::prelude::*;
use leptos_router::components::A;

use super::Icon;
use crate::config::{Glyph, SiteContent};

/// Desktop top bar. The mobile drawer lives in the hero.
#[component]
pub fn Nav() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let brand = content.brand;
    let portals = content
        .portal_links
        .into_iter()
        .map(|link| {
            view! {
                <A href=link.url attr:class="nav-link">
                    {link.title}
                </A>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <Icon glyph=Glyph::Globe size="28" class="nav-logo" />
                    <span class="nav-title">{brand.name}</span>
                </A>
                <div class="nav-links">
                    <A href=brand.services_link attr:class="nav-link">"Services"</A>
                    {portals}
                    <A href=brand.quote_link attr:class="nav-cta">"Get A Quote"</A>
                </div>
            </div>
        </nav>
    }
}
