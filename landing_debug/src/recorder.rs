// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`InteractionSink`] and stores every event as
//! an owned [`RecordedEvent`], copying borrowed strings. Events are kept in
//! arrival order.

use landing_core::accordion::{PanelId, PanelState};
use landing_core::finisher::ImageId;
use landing_core::time::{Duration, WallTime};
use landing_core::trace::{
    BannerEvent, BonusCardEvent, ContentFilledEvent, CountdownExpiredEvent, CtaClickEvent,
    ImageLoadEvent, InteractionSink, PageLoadEvent, PanelToggledEvent,
};

/// An owned copy of one diagnostic event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// Startup banner.
    Banner(BannerEvent),
    /// Call-to-action click with its destination.
    CtaClick {
        /// Destination reference.
        href: String,
    },
    /// Bonus card click with the card heading.
    BonusCard {
        /// Heading text.
        heading: String,
    },
    /// Page load measurement.
    PageLoad {
        /// Measured load duration.
        load_time: Duration,
    },
    /// First observed countdown expiry.
    CountdownExpired {
        /// Countdown target.
        target: WallTime,
        /// Clock reading at expiry.
        observed_at: WallTime,
        /// Containers switched to the expired rendering.
        containers: usize,
    },
    /// Accordion selection.
    PanelToggled {
        /// Selected panel.
        panel: PanelId,
        /// State after the selection.
        state: PanelState,
        /// Siblings collapsed by the selection.
        collapsed_siblings: usize,
    },
    /// Placeholder substitution.
    ContentFilled {
        /// Placeholder selector.
        selector: String,
        /// Written literal.
        value: String,
        /// Elements written.
        count: usize,
    },
    /// Deferred image load started.
    ImageLoad {
        /// The image.
        image: ImageId,
    },
}

impl RecordedEvent {
    /// Returns the event kind as a short name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Banner(_) => "banner",
            Self::CtaClick { .. } => "cta_click",
            Self::BonusCard { .. } => "bonus_card",
            Self::PageLoad { .. } => "page_load",
            Self::CountdownExpired { .. } => "countdown_expired",
            Self::PanelToggled { .. } => "panel_toggled",
            Self::ContentFilled { .. } => "content_filled",
            Self::ImageLoad { .. } => "image_load",
        }
    }

    /// Returns `true` for events triggered by user interaction or page
    /// timing, the ones a visitor-facing log reports.
    #[must_use]
    pub fn is_interaction(&self) -> bool {
        matches!(
            self,
            Self::CtaClick { .. } | Self::BonusCard { .. } | Self::PageLoad { .. }
        )
    }
}

/// An [`InteractionSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Returns the number of recorded events of the given [`kind`](RecordedEvent::kind).
    #[must_use]
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Returns only the interaction events.
    pub fn interactions(&self) -> impl Iterator<Item = &RecordedEvent> {
        self.events.iter().filter(|e| e.is_interaction())
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<RecordedEvent> {
        std::mem::take(&mut self.events)
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl InteractionSink for RecorderSink {
    fn on_banner(&mut self, e: &BannerEvent) {
        self.events.push(RecordedEvent::Banner(*e));
    }

    fn on_cta_click(&mut self, e: &CtaClickEvent<'_>) {
        self.events.push(RecordedEvent::CtaClick {
            href: e.href.to_owned(),
        });
    }

    fn on_bonus_card(&mut self, e: &BonusCardEvent<'_>) {
        self.events.push(RecordedEvent::BonusCard {
            heading: e.heading.to_owned(),
        });
    }

    fn on_page_load(&mut self, e: &PageLoadEvent) {
        self.events.push(RecordedEvent::PageLoad {
            load_time: e.load_time,
        });
    }

    fn on_countdown_expired(&mut self, e: &CountdownExpiredEvent) {
        self.events.push(RecordedEvent::CountdownExpired {
            target: e.target,
            observed_at: e.observed_at,
            containers: e.containers,
        });
    }

    fn on_panel_toggled(&mut self, e: &PanelToggledEvent) {
        self.events.push(RecordedEvent::PanelToggled {
            panel: e.panel,
            state: e.state,
            collapsed_siblings: e.collapsed_siblings,
        });
    }

    fn on_content_filled(&mut self, e: &ContentFilledEvent<'_>) {
        self.events.push(RecordedEvent::ContentFilled {
            selector: e.selector.to_owned(),
            value: e.value.to_owned(),
            count: e.count,
        });
    }

    fn on_image_load(&mut self, e: &ImageLoadEvent) {
        self.events.push(RecordedEvent::ImageLoad { image: e.image });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let mut sink = RecorderSink::new();
        sink.on_cta_click(&CtaClickEvent { href: "#signup" });
        sink.on_image_load(&ImageLoadEvent { image: ImageId(4) });
        sink.on_bonus_card(&BonusCardEvent { heading: "Templates" });

        let kinds: Vec<_> = sink.events().iter().map(RecordedEvent::kind).collect();
        assert_eq!(kinds, ["cta_click", "image_load", "bonus_card"]);
        assert_eq!(
            sink.events()[0],
            RecordedEvent::CtaClick {
                href: "#signup".into()
            }
        );
    }

    #[test]
    fn interactions_skip_internal_events() {
        let mut sink = RecorderSink::new();
        sink.on_panel_toggled(&PanelToggledEvent {
            panel: PanelId(0),
            state: PanelState::Expanded,
            collapsed_siblings: 0,
        });
        sink.on_page_load(&PageLoadEvent {
            load_time: Duration(800),
        });
        assert_eq!(sink.interactions().count(), 1);
        assert_eq!(sink.count("panel_toggled"), 1);
    }

    #[test]
    fn drain_empties_the_log() {
        let mut sink = RecorderSink::new();
        sink.on_page_load(&PageLoadEvent {
            load_time: Duration(1),
        });
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.events().is_empty());
    }
}
