use leptos::prelude::*;

use crate::config::SiteContent;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = expect_context::<SiteContent>().brand;
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{brand.name.clone()}</span>
                </div>
                <div class="footer-links">
                    <a href=brand.services_link class="footer-link">"Services"</a>
                    <a href=brand.quote_link class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">
                    {format!("(c)2025 {}. Air, ocean and project cargo worldwide.", brand.name)}
                </p>
            </div>
        </footer>
    }
}
