use leptos::prelude::*;

use super::Icon;
use crate::config::{Brand, Glyph, PortalLink, SiteContent};
use crate::disclosure::{DisclosureState, NavigationDisclosure};
use crate::host::BrowserHost;

type Controller = StoredValue<NavigationDisclosure<BrowserHost>, LocalStorage>;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let state = RwSignal::new(DisclosureState::default());

    // One controller per mounted hero; the signal mirrors its state.
    let controller: Controller = StoredValue::new_local(NavigationDisclosure::initialize(
        BrowserHost::new(),
        content.timing,
        move |next| state.set(next),
    ));
    on_cleanup(move || {
        controller.try_update_value(|c| c.teardown());
    });

    let brand = content.brand.clone();
    let hero_image = content.brand.hero_image.clone();
    let drawer_links = content.portal_links.clone();
    let quick_links = content.portal_links;

    view! {
        <section class="hero">
            <div class="hero-menu-trigger">
                <button
                    class="menu-button"
                    aria-label="Toggle navigation"
                    on:click=move |_| controller.with_value(|c| c.toggle_mobile_menu())
                >
                    <Icon glyph=Glyph::Menu size="24" />
                </button>
            </div>

            <Show when=move || state.get().mobile_menu_open>
                <MobileDrawer controller=controller brand=brand.clone() links=drawer_links.clone() />
            </Show>

            <div class="hero-background">
                <img src=hero_image alt="Hero background" class="hero-image" loading="eager" />
                <div class="hero-overlay"></div>
            </div>

            <div class=move || {
                if state.get().visible { "hero-quick-access visible" } else { "hero-quick-access" }
            }>
                <button
                    class="quick-access-toggle"
                    on:click=move |_| controller.with_value(|c| c.toggle_quick_access())
                >
                    {move || if state.get().menu_open { "Close Quick Access" } else { "Quick Access" }}
                </button>
                <Show when=move || state.get().menu_open>
                    <QuickAccessList controller=controller links=quick_links.clone() />
                </Show>
            </div>
        </section>
    }
}

/// Slide-in drawer with the portal links and the two call-to-action buttons.
#[component]
fn MobileDrawer(controller: Controller, brand: Brand, links: Vec<PortalLink>) -> impl IntoView {
    let entries = links
        .into_iter()
        .enumerate()
        .map(|(index, link)| {
            let delay = controller.with_value(|c| c.drawer_delay_ms(index));
            view! {
                <div class="drawer-entry" style=format!("animation-delay: {delay}ms")>
                    <PortalEntry controller=controller link=link />
                </div>
            }
        })
        .collect_view();

    let quote_href = brand.quote_link.clone();
    let quote_path = brand.quote_link;
    let services_href = brand.services_link.clone();
    let services_path = brand.services_link;

    view! {
        <div class="mobile-drawer">
            <div class="drawer-inner">
                <div class="drawer-header">
                    <Icon glyph=Glyph::Globe size="32" class="drawer-logo" />
                    <h2 class="drawer-title">{brand.name}</h2>
                    <button
                        class="drawer-close"
                        aria-label="Close navigation"
                        on:click=move |_| controller.with_value(|c| c.toggle_mobile_menu())
                    >
                        <Icon glyph=Glyph::Close />
                    </button>
                </div>

                <div class="drawer-links">{entries}</div>

                <div class="drawer-actions">
                    <a
                        href=quote_href
                        class="btn btn-gold"
                        on:click=move |_| controller.with_value(|c| c.select_entry(&quote_path))
                    >
                        "Get A Quote"
                    </a>
                    <a
                        href=services_href
                        class="btn btn-gold btn-navy-text"
                        on:click=move |_| controller.with_value(|c| c.select_entry(&services_path))
                    >
                        "Our Services"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Popover list under the hero, shown on small screens only (CSS).
#[component]
fn QuickAccessList(controller: Controller, links: Vec<PortalLink>) -> impl IntoView {
    let entries = links
        .into_iter()
        .enumerate()
        .map(|(index, link)| {
            let delay = controller.with_value(|c| c.quick_access_delay_ms(index));
            view! {
                <div class="quick-access-entry" style=format!("animation-delay: {delay}ms")>
                    <PortalEntry controller=controller link=link />
                </div>
            }
        })
        .collect_view();

    view! { <div class="quick-access-list">{entries}</div> }
}

#[component]
fn PortalEntry(controller: Controller, link: PortalLink) -> impl IntoView {
    let path = link.url.clone();
    view! {
        <a
            href=link.url
            class="portal-entry"
            on:click=move |_| controller.with_value(|c| c.select_entry(&path))
        >
            <span class="portal-icon">
                <Icon glyph=link.icon />
            </span>
            <div class="portal-text">
                <div class="portal-title">{link.title}</div>
                <div class="portal-description">{link.description}</div>
            </div>
        </a>
    }
}
