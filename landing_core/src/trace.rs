// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for page behavior.
//!
//! This module provides an [`InteractionSink`] trait with one method per
//! diagnostic event. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! Events are observed, never stored by the controllers: each one is handed
//! to the sink and dropped. Borrowed fields live only for the duration of the
//! call.
//!
//! Controllers share one sink through [`SharedSink`]. Use [`noop_sink`] when
//! nothing should be reported.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::accordion::{PanelId, PanelState};
use crate::finisher::ImageId;
use crate::time::{Duration, WallTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when the page controller is installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerEvent {
    /// Product name.
    pub product: &'static str,
    /// Script version.
    pub version: &'static str,
    /// Human-readable last-updated stamp.
    pub last_updated: &'static str,
    /// Author credit.
    pub author: &'static str,
}

/// Emitted when a click lands on or inside a call-to-action element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtaClickEvent<'a> {
    /// Destination reference of the call-to-action (empty if it has none).
    pub href: &'a str,
}

/// Emitted when a click lands inside a bonus card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusCardEvent<'a> {
    /// Text of the card's heading.
    pub heading: &'a str,
}

/// Emitted once per page view with the measured load duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLoadEvent {
    /// `loadEventEnd - navigationStart`.
    pub load_time: Duration,
}

/// Emitted the first time the countdown observes its target has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownExpiredEvent {
    /// The countdown target.
    pub target: WallTime,
    /// The clock reading at which expiry was observed.
    pub observed_at: WallTime,
    /// Number of display containers switched to the expired rendering.
    pub containers: usize,
}

/// Emitted when an accordion panel changes state through selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelToggledEvent {
    /// The panel whose header was selected.
    pub panel: PanelId,
    /// The panel's state after the selection.
    pub state: PanelState,
    /// Number of sibling panels collapsed by the selection.
    pub collapsed_siblings: usize,
}

/// Emitted for each placeholder substitution the page finisher performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentFilledEvent<'a> {
    /// The placeholder selector.
    pub selector: &'a str,
    /// The literal written into each match.
    pub value: &'a str,
    /// Number of elements written.
    pub count: usize,
}

/// Emitted when a deferred image starts loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageLoadEvent {
    /// The image that became visible.
    pub image: ImageId,
}

// ---------------------------------------------------------------------------
// InteractionSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostic events from the page controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait InteractionSink {
    /// Called once at startup.
    fn on_banner(&mut self, e: &BannerEvent) {
        _ = e;
    }

    /// Called for each click on a call-to-action.
    fn on_cta_click(&mut self, e: &CtaClickEvent<'_>) {
        _ = e;
    }

    /// Called for each click inside a bonus card with a heading.
    fn on_bonus_card(&mut self, e: &BonusCardEvent<'_>) {
        _ = e;
    }

    /// Called once with the page-load measurement.
    fn on_page_load(&mut self, e: &PageLoadEvent) {
        _ = e;
    }

    /// Called the first time the countdown expires.
    fn on_countdown_expired(&mut self, e: &CountdownExpiredEvent) {
        _ = e;
    }

    /// Called when an accordion selection changes a panel.
    fn on_panel_toggled(&mut self, e: &PanelToggledEvent) {
        _ = e;
    }

    /// Called for each placeholder substitution.
    fn on_content_filled(&mut self, e: &ContentFilledEvent<'_>) {
        _ = e;
    }

    /// Called when a deferred image starts loading.
    fn on_image_load(&mut self, e: &ImageLoadEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// An [`InteractionSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl InteractionSink for NoopSink {}

/// A sink shared between the controllers of one page.
pub type SharedSink = Rc<RefCell<dyn InteractionSink>>;

/// Returns a [`SharedSink`] that discards all events.
#[must_use]
pub fn noop_sink() -> SharedSink {
    Rc::new(RefCell::new(NoopSink))
}

/// Wraps `sink` for sharing between controllers.
#[must_use]
pub fn share<S: InteractionSink + 'static>(sink: S) -> (Rc<RefCell<S>>, SharedSink) {
    let typed = Rc::new(RefCell::new(sink));
    let shared: SharedSink = typed.clone();
    (typed, shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Labels(Vec<String>);

    impl InteractionSink for Labels {
        fn on_cta_click(&mut self, e: &CtaClickEvent<'_>) {
            self.0.push(e.href.to_string());
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_cta_click(&CtaClickEvent { href: "#signup" });
        sink.on_page_load(&PageLoadEvent {
            load_time: Duration(12),
        });
        sink.on_panel_toggled(&PanelToggledEvent {
            panel: PanelId(0),
            state: PanelState::Expanded,
            collapsed_siblings: 0,
        });
    }

    #[test]
    fn share_keeps_typed_handle() {
        let (typed, shared) = share(Labels::default());
        shared
            .borrow_mut()
            .on_cta_click(&CtaClickEvent { href: "/buy" });
        // Unhandled events fall through to the default no-op.
        shared.borrow_mut().on_bonus_card(&BonusCardEvent { heading: "x" });
        assert_eq!(typed.borrow().0, ["/buy"]);
    }
}
