//! Navigation disclosure: the mobile drawer, the quick-access popover and the
//! hero entrance flag.
//!
//! [`DisclosureState`] is three orthogonal booleans. [`NavigationDisclosure`]
//! owns one copy per mounted hero, wires it to the [`Host`] (entrance timer,
//! resize listener) and reports every effective change to an observer, which
//! in the browser is a Leptos signal setter.
//!
//! Lifecycle:
//!
//! ```text
//! initialize ──► schedule entrance timer ──► (delay) visible = true
//!            └─► subscribe resize ──► width > breakpoint closes drawer
//! teardown   ──► cancel timer, unsubscribe; late callbacks are ignored
//! ```

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::config::Timing;
use crate::grid::stagger_delay;
use crate::host::{Host, ListenerHandle, TimerHandle};

/// Visibility flags for one mounted hero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    /// Quick-access popover (mobile-only block under the hero).
    pub menu_open: bool,
    /// Slide-in navigation drawer.
    pub mobile_menu_open: bool,
    /// Flips once, after the entrance delay.
    pub visible: bool,
}

impl DisclosureState {
    /// Apply a viewport width. Returns whether anything changed.
    pub fn on_resize(&mut self, width: f64, breakpoint: f64) -> bool {
        if width > breakpoint && self.mobile_menu_open {
            self.mobile_menu_open = false;
            true
        } else {
            false
        }
    }
}

type Observer = Box<dyn Fn(DisclosureState)>;

struct Shared {
    state: Cell<DisclosureState>,
    alive: Cell<bool>,
    breakpoint: f64,
    observer: Observer,
}

impl Shared {
    fn apply(&self, reason: &'static str, change: impl FnOnce(&mut DisclosureState)) {
        if !self.alive.get() {
            tracing::debug!(reason, "ignoring update after teardown");
            return;
        }
        let before = self.state.get();
        let mut after = before;
        change(&mut after);
        if after != before {
            tracing::debug!(reason, ?after, "disclosure state changed");
            self.state.set(after);
            (self.observer)(after);
        }
    }
}

/// Owns the disclosure state and the host resources backing it.
pub struct NavigationDisclosure<H: Host> {
    host: H,
    shared: Rc<Shared>,
    timing: Timing,
    entrance: Option<TimerHandle>,
    resize: Option<ListenerHandle>,
}

impl<H: Host> NavigationDisclosure<H> {
    /// Start closed and hidden, schedule the entrance reveal and start
    /// listening for resizes.
    pub fn initialize(
        host: H,
        timing: Timing,
        observer: impl Fn(DisclosureState) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            state: Cell::new(DisclosureState::default()),
            alive: Cell::new(true),
            breakpoint: timing.mobile_breakpoint_px,
            observer: Box::new(observer),
        });

        let weak = Rc::downgrade(&shared);
        let entrance = host.schedule_once(
            timing.entrance_delay_ms,
            Box::new(move || {
                if let Some(shared) = Weak::upgrade(&weak) {
                    shared.apply("entrance", |s| s.visible = true);
                }
            }),
        );

        let weak = Rc::downgrade(&shared);
        let resize = host.subscribe_resize(Rc::new(move |width: f64| {
            if let Some(shared) = Weak::upgrade(&weak) {
                let breakpoint = shared.breakpoint;
                shared.apply("resize", |s| {
                    s.on_resize(width, breakpoint);
                });
            }
        }));

        tracing::debug!(width = ?host.viewport_width(), "disclosure mounted");
        if entrance.is_none() {
            tracing::warn!("entrance timer unavailable; hero stays hidden");
        }
        if resize.is_none() {
            tracing::warn!("resize listener unavailable; drawer will not auto-close");
        }

        Self {
            host,
            shared,
            timing,
            entrance,
            resize,
        }
    }

    pub fn state(&self) -> DisclosureState {
        self.shared.state.get()
    }

    pub fn is_torn_down(&self) -> bool {
        !self.shared.alive.get()
    }

    /// Feed a viewport width directly, as the resize listener does.
    pub fn on_resize(&self, width: f64) {
        let breakpoint = self.shared.breakpoint;
        self.shared.apply("resize", |s| {
            s.on_resize(width, breakpoint);
        });
    }

    pub fn toggle_mobile_menu(&self) {
        self.shared
            .apply("toggle drawer", |s| s.mobile_menu_open = !s.mobile_menu_open);
    }

    pub fn close_mobile_menu(&self) {
        self.shared
            .apply("close drawer", |s| s.mobile_menu_open = false);
    }

    pub fn toggle_quick_access(&self) {
        self.shared
            .apply("toggle quick access", |s| s.menu_open = !s.menu_open);
    }

    /// A navigation entry was picked: close the drawer and reset scroll.
    /// The caller hands `path` to the router.
    pub fn select_entry(&self, path: &str) {
        tracing::debug!(path, "navigation entry selected");
        self.close_mobile_menu();
        self.host.scroll_to_top();
    }

    /// Entrance delay for the `index`th drawer entry.
    pub fn drawer_delay_ms(&self, index: usize) -> u32 {
        stagger_delay(index, self.timing.drawer_stagger_ms)
    }

    /// Entrance delay for the `index`th quick-access entry.
    pub fn quick_access_delay_ms(&self, index: usize) -> u32 {
        stagger_delay(index, self.timing.quick_access_stagger_ms)
    }

    /// Release the timer and the listener. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.shared.alive.replace(false) {
            return;
        }
        if let Some(timer) = self.entrance.take() {
            self.host.cancel(timer);
        }
        if let Some(listener) = self.resize.take() {
            self.host.unsubscribe(listener);
        }
        tracing::debug!("disclosure torn down");
    }
}

impl<H: Host> Drop for NavigationDisclosure<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
