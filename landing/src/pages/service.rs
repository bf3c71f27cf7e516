// Services listing + per-service detail
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::NotFoundPage;
use crate::config::SiteContent;
use crate::sections::{Icon, Services};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Services"</h1>
                <p class="page-description">
                    "Air, ocean, customs, liquid and project cargo handled end to end."
                </p>
            </div>
        </section>
        <Services />
    }
}

/// `/services/:id`. Unknown ids render the 404 page.
#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let params = use_params_map();

    move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let Some(service) = content.service_by_id(&id) else {
            tracing::debug!(id = %id, "unknown service");
            return view! { <NotFoundPage /> }.into_any();
        };

        let image = content.image_overrides.resolve(service).to_string();
        let title = service.title.clone();
        let alt = title.clone();
        let description = service.description.clone();
        let icon = service.icon;
        let quote = content.brand.quote_link.clone();

        view! {
            <section class="service-detail">
                <div class="container">
                    <div class="service-detail-media">
                        <img src=image alt=alt class="service-detail-image" />
                    </div>
                    <div class="service-detail-heading">
                        <div class="service-card-icon">
                            <Icon glyph=icon size="28" />
                        </div>
                        <h1 class="page-title">{title}</h1>
                    </div>
                    <p class="page-description">{description}</p>
                    <A href=quote attr:class="btn btn-gold">"Get A Quote"</A>
                </div>
            </section>
        }
        .into_any()
    }
}
