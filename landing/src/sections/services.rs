use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::Icon;
use crate::config::{Glyph, SiteContent};
use crate::grid::{ContentGrid, ScrollOnRouteChange, stagger_delay};
use crate::host::{BrowserHost, Host};

/// "Our Core Services" showcase.
#[component]
pub fn Services() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let grid = StoredValue::new_local(ContentGrid::new(
        content.services.clone(),
        content.image_overrides.clone(),
        content.timing.card_stagger_ms,
    ));
    let host = StoredValue::new_local(BrowserHost::new());
    let tracker = StoredValue::new_local(ScrollOnRouteChange::default());

    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        host.with_value(|h| {
            tracker.update_value(|t| {
                t.on_route_change(&path, h);
            })
        });
    });

    let cards = grid.with_value(|g| g.len());
    let footer_delay = stagger_delay(cards, content.timing.card_stagger_ms);
    let all_services_href = content.brand.services_link.clone();
    let all_services = content.brand.services_link;
    let navigate = use_navigate();

    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Core Services"</h2>
                    <div class="section-rule"></div>
                    <p class="section-description">
                        "Discover our comprehensive range of logistics solutions designed to meet your global shipping needs."
                    </p>
                </div>

                <div class="services-grid">
                    {(0..cards).map(|index| view! { <ServiceCardView grid=grid host=host index=index /> }).collect_view()}
                </div>

                <div class="services-footer" style=format!("animation-delay: {footer_delay}ms")>
                    <a
                        href=all_services_href
                        class="btn btn-navy"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            navigate(&all_services, Default::default());
                            host.with_value(|h| h.scroll_to_top());
                        }
                    >
                        "Explore All Services"
                        <span class="nudge">
                            <Icon glyph=Glyph::ArrowRight size="16" />
                        </span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCardView(
    grid: StoredValue<ContentGrid, LocalStorage>,
    host: StoredValue<BrowserHost, LocalStorage>,
    index: usize,
) -> impl IntoView {
    let navigate = use_navigate();
    let card = grid.with_value(|g| {
        g.cards().nth(index).map(|c| {
            (
                c.title.to_string(),
                c.description.to_string(),
                c.icon,
                c.link.to_string(),
                c.image.to_string(),
                c.delay_ms,
            )
        })
    });
    let Some((title, description, icon, link, image, delay)) = card else {
        return ().into_any();
    };

    let alt = title.clone();
    let on_select = move |ev: MouseEvent| {
        ev.prevent_default();
        grid.with_value(|g| {
            if let Some(card) = g.cards().nth(index) {
                host.with_value(|h| {
                    g.select(&card, h, |path| navigate(path, Default::default()))
                });
            }
        });
    };

    view! {
        <div class="service-card-slot" style=format!("animation-delay: {delay}ms")>
            <article class="service-card">
                <a href=link class="service-card-link" on:click=on_select>
                    <div class="service-card-media">
                        <img src=image alt=alt class="service-card-image" />
                    </div>
                    <div class="service-card-body">
                        <div class="service-card-heading">
                            <div class="service-card-icon">
                                <Icon glyph=icon />
                            </div>
                            <h3 class="service-card-title">{title}</h3>
                        </div>
                        <p class="service-card-description">{description}</p>
                        <div class="service-card-more">
                            "Learn More"
                            <span class="nudge">
                                <Icon glyph=Glyph::ArrowRight size="16" />
                            </span>
                        </div>
                    </div>
                </a>
            </article>
        </div>
    }
    .into_any()
}
