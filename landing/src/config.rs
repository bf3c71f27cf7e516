//! Site content and tunables.
//!
//! All copy, links and image paths live in `content/site.json`, embedded at
//! compile time and parsed once at startup. Components receive the parsed
//! [`SiteContent`] (or slices of it) at construction instead of reaching for
//! module-level constants, so tests can hand them any content they like.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::error::{ContentError, Result};

const BUILTIN_CONTENT: &str = include_str!("../content/site.json");

/// Symbolic icon reference, rendered by [`crate::sections::Icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Users,
    UserCircle,
    SearchCode,
    Ship,
    Box,
    Package,
    Anchor,
    Truck,
    Droplets,
    Globe,
    ArrowRight,
    Menu,
    Close,
}

/// Quick-access entry shown in the drawer and the mobile popover.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortalLink {
    pub icon: Glyph,
    pub title: String,
    pub description: String,
    pub url: String,
}

/// One card in the services showcase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceEntry {
    /// Stable slug; image overrides and detail routes key on this.
    pub id: String,
    pub image: String,
    pub title: String,
    pub description: String,
    pub icon: Glyph,
    pub link: String,
}

/// Replacement card images keyed by service id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ImageOverrides(BTreeMap<String, String>);

impl ImageOverrides {
    pub fn get(&self, service_id: &str) -> Option<&str> {
        self.0.get(service_id).map(String::as_str)
    }

    /// The override for `entry`, else its own image.
    pub fn resolve<'a>(&'a self, entry: &'a ServiceEntry) -> &'a str {
        self.get(&entry.id).unwrap_or(entry.image.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ImageOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Animation and layout tunables.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Delay before the hero flips to visible and runs its entrance transition.
    pub entrance_delay_ms: u32,
    /// Viewports wider than this close the mobile drawer.
    pub mobile_breakpoint_px: f64,
    pub card_stagger_ms: u32,
    pub drawer_stagger_ms: u32,
    pub quick_access_stagger_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            entrance_delay_ms: 300,
            mobile_breakpoint_px: 768.0,
            card_stagger_ms: 100,
            drawer_stagger_ms: 100,
            quick_access_stagger_ms: 70,
        }
    }
}

/// Branding and the drawer call-to-action targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub hero_image: String,
    pub quote_link: String,
    pub services_link: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Global Logistics".into(),
            hero_image: "homeimage.jpg".into(),
            quote_link: "/contact".into(),
            services_link: "/services".into(),
        }
    }
}

/// Everything the landing page renders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub brand: Brand,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub portal_links: Vec<PortalLink>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    #[serde(default)]
    pub image_overrides: ImageOverrides,
}

impl SiteContent {
    /// Parse and validate a JSON content document.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// The content shipped with the site.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Check authoring invariants the router cannot catch for us.
    pub fn validate(&self) -> Result<()> {
        check_link("brand quote link", &self.brand.quote_link)?;
        check_link("brand services link", &self.brand.services_link)?;

        for link in &self.portal_links {
            check_link(&link.title, &link.url)?;
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            if service.id.trim().is_empty() {
                return Err(ContentError::EmptyServiceId);
            }
            if !seen.insert(service.id.as_str()) {
                return Err(ContentError::DuplicateService(service.id.clone()));
            }
            check_link(&service.title, &service.link)?;
        }

        if let Some(unknown) = self.image_overrides.keys().find(|id| !seen.contains(id)) {
            return Err(ContentError::UnknownOverride(unknown.to_string()));
        }

        Ok(())
    }

    pub fn service_by_id(&self, id: &str) -> Option<&ServiceEntry> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn portal_by_path(&self, path: &str) -> Option<&PortalLink> {
        self.portal_links.iter().find(|p| p.url == path)
    }
}

fn check_link(owner: &str, link: &str) -> Result<()> {
    if link.starts_with('/') {
        Ok(())
    } else {
        Err(ContentError::InvalidLink {
            owner: owner.to_string(),
            link: link.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_is_valid() {
        let content = SiteContent::builtin().expect("embedded content parses");

        assert_eq!(content.portal_links.len(), 5);
        assert_eq!(content.services.len(), 5);
        assert_eq!(content.timing, Timing::default());
        assert_eq!(content.brand.name, "Global Logistics");
        assert_eq!(
            content.image_overrides.get("air-freight"),
            Some("/airfreight2.jpg")
        );
    }

    #[test]
    fn builtin_services_keep_authored_order() {
        let content = SiteContent::builtin().unwrap();
        let ids: Vec<&str> = content.services.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "air-freight",
                "ocean-freight",
                "customs-clearance",
                "liquid-transportation",
                "project-cargo",
            ]
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let content = SiteContent::from_json("{}").unwrap();

        assert!(content.services.is_empty());
        assert_eq!(content.timing.entrance_delay_ms, 300);
        assert_eq!(content.timing.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn partial_timing_keeps_other_defaults() {
        let content =
            SiteContent::from_json(r#"{ "timing": { "card_stagger_ms": 250 } }"#).unwrap();

        assert_eq!(content.timing.card_stagger_ms, 250);
        assert_eq!(content.timing.quick_access_stagger_ms, 70);
    }

    #[test]
    fn rejects_relative_portal_url() {
        let json = r#"{
            "portal_links": [
                { "icon": "ship", "title": "Schedule", "description": "d", "url": "schedule" }
            ]
        }"#;

        let err = SiteContent::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::InvalidLink { ref link, .. } if link == "schedule"));
    }

    #[test]
    fn rejects_duplicate_service_ids() {
        let json = r#"{
            "services": [
                { "id": "air", "image": "a", "title": "A", "description": "", "icon": "package", "link": "/a" },
                { "id": "air", "image": "b", "title": "B", "description": "", "icon": "package", "link": "/b" }
            ]
        }"#;

        let err = SiteContent::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateService(ref id) if id == "air"));
    }

    #[test]
    fn rejects_blank_service_id() {
        let json = r#"{
            "services": [
                { "id": " ", "image": "a", "title": "A", "description": "", "icon": "package", "link": "/a" }
            ]
        }"#;

        assert!(matches!(
            SiteContent::from_json(json).unwrap_err(),
            ContentError::EmptyServiceId
        ));
    }

    #[test]
    fn rejects_override_for_unknown_service() {
        let json = r#"{ "image_overrides": { "rail-freight": "/rail.jpg" } }"#;

        let err = SiteContent::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "Image override targets unknown service 'rail-freight'");
    }

    #[test]
    fn rejects_unknown_glyph() {
        let json = r#"{
            "portal_links": [
                { "icon": "rocket", "title": "T", "description": "d", "url": "/t" }
            ]
        }"#;

        assert!(matches!(
            SiteContent::from_json(json).unwrap_err(),
            ContentError::Json(_)
        ));
    }

    #[test]
    fn lookups_by_id_and_path() {
        let content = SiteContent::builtin().unwrap();

        assert_eq!(
            content.service_by_id("ocean-freight").map(|s| s.title.as_str()),
            Some("Ocean Freight")
        );
        assert!(content.service_by_id("rail").is_none());
        assert_eq!(
            content.portal_by_path("/tracking").map(|p| p.icon),
            Some(Glyph::SearchCode)
        );
    }
}
