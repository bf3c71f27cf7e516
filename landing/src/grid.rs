//! Services grid presenter.
//!
//! Turns the configured [`ServiceEntry`] list into [`ServiceCard`] view models
//! in authored order. The Leptos side only maps cards to markup.

use crate::config::{Glyph, ImageOverrides, ServiceEntry};
use crate::host::Host;

/// Per-item entrance delay for list position `index`.
pub fn stagger_delay(index: usize, unit_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(unit_ms)
}

/// Everything a service card needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard<'a> {
    pub index: usize,
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub icon: Glyph,
    pub link: &'a str,
    pub image: &'a str,
    pub delay_ms: u32,
}

pub struct ContentGrid {
    entries: Vec<ServiceEntry>,
    overrides: ImageOverrides,
    stagger_ms: u32,
}

impl ContentGrid {
    pub fn new(entries: Vec<ServiceEntry>, overrides: ImageOverrides, stagger_ms: u32) -> Self {
        Self {
            entries,
            overrides,
            stagger_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Override image for the entry's id, else its own image.
    pub fn resolve_display_image<'a>(&'a self, entry: &'a ServiceEntry) -> &'a str {
        self.overrides.resolve(entry)
    }

    /// Cards in input order, each delayed one stagger unit after the last.
    pub fn cards(&self) -> impl Iterator<Item = ServiceCard<'_>> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(move |(index, entry)| ServiceCard {
                index,
                id: &entry.id,
                title: &entry.title,
                description: &entry.description,
                icon: entry.icon,
                link: &entry.link,
                image: self.resolve_display_image(entry),
                delay_ms: stagger_delay(index, self.stagger_ms),
            })
    }

    /// Navigate to the card's link, then reset scroll.
    pub fn select(&self, card: &ServiceCard<'_>, host: &impl Host, navigate: impl FnOnce(&str)) {
        tracing::debug!(service = card.id, link = card.link, "service selected");
        navigate(card.link);
        host.scroll_to_top();
    }
}

/// Scroll to top once per route path change.
#[derive(Debug, Default)]
pub struct ScrollOnRouteChange {
    last_path: Option<String>,
}

impl ScrollOnRouteChange {
    /// Returns whether the path was new and scroll was reset.
    pub fn on_route_change(&mut self, path: &str, host: &impl Host) -> bool {
        if self.last_path.as_deref() == Some(path) {
            return false;
        }
        self.last_path = Some(path.to_string());
        host.scroll_to_top();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::config::SiteContent;
    use crate::host::fake::FakeHost;
    use pretty_assertions::assert_eq;

    fn entry(id: &str, title: &str, image: &str) -> ServiceEntry {
        ServiceEntry {
            id: id.into(),
            image: image.into(),
            title: title.into(),
            description: String::new(),
            icon: Glyph::Package,
            link: format!("/services/{id}"),
        }
    }

    fn overrides() -> ImageOverrides {
        [("air-freight", "/airfreight2.jpg")].into_iter().collect()
    }

    #[test]
    fn override_wins_for_known_id() {
        let air = entry("air-freight", "Air Freight", "x");
        let grid = ContentGrid::new(vec![air.clone()], overrides(), 100);

        assert_eq!(grid.resolve_display_image(&air), "/airfreight2.jpg");
    }

    #[test]
    fn unknown_id_keeps_own_image() {
        let other = entry("unknown", "Unknown", "x");
        let grid = ContentGrid::new(vec![], overrides(), 100);

        assert_eq!(grid.resolve_display_image(&other), "x");
    }

    #[test]
    fn override_follows_id_not_title() {
        let renamed = entry("air-freight", "Express Air", "x");
        let lookalike = entry("air-charter", "Air Freight", "y");
        let grid = ContentGrid::new(vec![], overrides(), 100);

        assert_eq!(grid.resolve_display_image(&renamed), "/airfreight2.jpg");
        assert_eq!(grid.resolve_display_image(&lookalike), "y");
    }

    #[test]
    fn cards_preserve_order_with_increasing_delay() {
        let grid = ContentGrid::new(
            vec![
                entry("a", "A", "/a.jpg"),
                entry("b", "B", "/b.jpg"),
                entry("c", "C", "/c.jpg"),
            ],
            ImageOverrides::default(),
            100,
        );

        let cards: Vec<(usize, &str, u32)> = grid
            .cards()
            .map(|c| (c.index, c.id, c.delay_ms))
            .collect();

        assert_eq!(cards, vec![(0, "a", 0), (1, "b", 100), (2, "c", 200)]);
    }

    #[test]
    fn builtin_services_render_with_overrides() {
        let content = SiteContent::builtin().unwrap();
        let grid = ContentGrid::new(
            content.services.clone(),
            content.image_overrides.clone(),
            content.timing.card_stagger_ms,
        );

        let images: Vec<&str> = grid.cards().map(|c| c.image).collect();
        assert_eq!(
            images,
            vec![
                "/airfreight2.jpg",
                "/lovable-uploads/oceanfrieght.jpg",
                "/lovable-uploads/cc.jpg",
                "/lovable-uploads/liquid.jpg",
                "/projectcargo3.png",
            ]
        );
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn empty_grid_has_no_cards() {
        let grid = ContentGrid::new(vec![], ImageOverrides::default(), 100);

        assert!(grid.is_empty());
        assert_eq!(grid.cards().count(), 0);
    }

    #[test]
    fn stagger_delay_saturates() {
        assert_eq!(stagger_delay(3, 70), 210);
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn select_navigates_then_scrolls() {
        let host = FakeHost::default();
        let grid = ContentGrid::new(
            vec![entry("ocean-freight", "Ocean Freight", "/o.jpg")],
            ImageOverrides::default(),
            100,
        );
        let visited = RefCell::new(Vec::new());

        let card = grid.cards().next().unwrap();
        grid.select(&card, &host, |path| visited.borrow_mut().push(path.to_string()));

        assert_eq!(visited.into_inner(), vec!["/services/ocean-freight".to_string()]);
        assert_eq!(host.scroll_resets(), 1);
    }

    #[test]
    fn scroll_resets_once_per_path_change() {
        let host = FakeHost::default();
        let mut tracker = ScrollOnRouteChange::default();

        assert!(tracker.on_route_change("/", &host));
        assert!(!tracker.on_route_change("/", &host));
        assert!(tracker.on_route_change("/services", &host));
        assert!(tracker.on_route_change("/", &host));

        assert_eq!(host.scroll_resets(), 3);
    }
}
