use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::NotFoundPage;
use crate::config::SiteContent;
use crate::sections::Icon;

/// Single-segment routes: the portal links and the quote page.
#[component]
pub fn PortalPage() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let params = use_params_map();

    move || {
        let path = format!("/{}", params.with(|p| p.get("portal")).unwrap_or_default());

        if path == content.brand.quote_link {
            return view! {
                <section class="page-header">
                    <div class="container">
                        <h1 class="page-title">"Get A Quote"</h1>
                        <p class="page-description">
                            "Tell us what you are shipping, where from and where to. Our team replies within one business day."
                        </p>
                    </div>
                </section>
            }
            .into_any();
        }

        let Some(portal) = content.portal_by_path(&path) else {
            tracing::debug!(path = %path, "no route");
            return view! { <NotFoundPage /> }.into_any();
        };

        let icon = portal.icon;
        let title = portal.title.clone();
        let description = portal.description.clone();

        view! {
            <section class="page-header">
                <div class="container">
                    <div class="portal-heading">
                        <Icon glyph=icon size="32" />
                        <h1 class="page-title">{title}</h1>
                    </div>
                    <p class="page-description">{description}</p>
                </div>
            </section>
        }
        .into_any()
    }
}
