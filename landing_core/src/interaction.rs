// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passive interaction and performance logging.
//!
//! The host resolves each click against a [`ClickQuery`] and describes what it
//! found as [`ClickFacts`]. [`InteractionLogger::on_click`] turns those facts
//! into diagnostic events:
//!
//! - a click on or inside a call-to-action reports the CTA's destination;
//! - a click inside a bonus card reports the card's heading text.
//!
//! The two categories are independent, so a CTA placed inside a bonus card
//! reports both. A bonus card without a heading reports nothing.
//!
//! [`InteractionLogger::on_load_measured`] reports the page-load duration
//! from [`LoadTiming`].

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::surface::{EventSource, PageClock, TaskHost};
use crate::time::{Duration, WallTime};
use crate::trace::{
    BannerEvent, BonusCardEvent, CtaClickEvent, PageLoadEvent, SharedSink, noop_sink,
};

/// Selectors used to classify a click target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickQuery {
    /// Selector of call-to-action elements.
    pub cta_selector: &'static str,
    /// Selector of bonus-card containers.
    pub bonus_card_selector: &'static str,
    /// Selector of the heading inside a bonus card.
    pub bonus_heading_selector: &'static str,
}

/// The call-to-action a click landed on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CtaFacts {
    /// Destination reference, if the element has one.
    pub href: Option<String>,
}

/// The bonus card a click landed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusCardFacts {
    /// Heading text, if the card has a heading.
    pub heading: Option<String>,
}

/// What the host found at a click target.
///
/// Both fields are resolved through the target's ancestors, so a click on a
/// child of a call-to-action still counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickFacts {
    /// The enclosing call-to-action, if any.
    pub cta: Option<CtaFacts>,
    /// The enclosing bonus card, if any.
    pub bonus_card: Option<BonusCardFacts>,
}

/// Navigation timing for one page view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTiming {
    /// When navigation started.
    pub navigation_start: WallTime,
    /// When the `load` event handler finished, or [`WallTime::EPOCH`] if it
    /// has not finished yet.
    pub load_event_end: WallTime,
}

impl LoadTiming {
    /// Returns `load_event_end - navigation_start`.
    ///
    /// Returns `None` while `load_event_end` is unset or if the clock went
    /// backwards.
    #[must_use]
    pub fn load_duration(&self) -> Option<Duration> {
        if self.load_event_end == WallTime::EPOCH {
            return None;
        }
        let d = self.load_event_end - self.navigation_start;
        (d >= Duration::ZERO).then_some(d)
    }
}

/// Static credits printed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerConfig {
    /// Product name.
    pub product: &'static str,
    /// Script version.
    pub version: &'static str,
    /// Human-readable last-updated stamp.
    pub last_updated: &'static str,
    /// Author credit.
    pub author: &'static str,
}

/// Turns observed clicks and load timing into diagnostic events.
#[derive(Clone)]
pub struct InteractionLogger {
    sink: SharedSink,
}

impl fmt::Debug for InteractionLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionLogger").finish_non_exhaustive()
    }
}

impl Default for InteractionLogger {
    fn default() -> Self {
        Self::new(noop_sink())
    }
}

impl InteractionLogger {
    /// Creates a logger reporting to `sink`.
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Emits the startup banner.
    pub fn banner(&self, banner: &BannerConfig) {
        self.sink.borrow_mut().on_banner(&BannerEvent {
            product: banner.product,
            version: banner.version,
            last_updated: banner.last_updated,
            author: banner.author,
        });
    }

    /// Logs one click. Returns the number of entries emitted.
    pub fn on_click(&self, facts: &ClickFacts) -> usize {
        let mut emitted = 0;
        let mut sink = self.sink.borrow_mut();
        if let Some(cta) = &facts.cta {
            sink.on_cta_click(&CtaClickEvent {
                href: cta.href.as_deref().unwrap_or(""),
            });
            emitted += 1;
        }
        if let Some(heading) = facts
            .bonus_card
            .as_ref()
            .and_then(|card| card.heading.as_deref())
        {
            sink.on_bonus_card(&BonusCardEvent { heading });
            emitted += 1;
        }
        emitted
    }

    /// Logs the page-load duration. Returns `false` if `timing` holds no
    /// usable measurement.
    pub fn on_load_measured(&self, timing: LoadTiming) -> bool {
        let Some(load_time) = timing.load_duration() else {
            return false;
        };
        self.sink
            .borrow_mut()
            .on_page_load(&PageLoadEvent { load_time });
        true
    }

    /// Observes every click on the page through `events`.
    pub fn install<E: EventSource + ?Sized>(&self, query: ClickQuery, events: &E) {
        let logger = self.clone();
        events.on_click(
            query,
            Box::new(move |facts| {
                logger.on_click(facts);
            }),
        );
    }

    /// Measures the load time on the task after `load`, once the browser has
    /// filled in `loadEventEnd`.
    pub fn measure_after_load<E, H, C>(&self, events: &E, host: H, clock: C)
    where
        E: EventSource + ?Sized,
        H: TaskHost + 'static,
        C: PageClock + 'static,
    {
        let logger = self.clone();
        events.on_load(Box::new(move || {
            host.defer(Box::new(move || {
                if let Some(timing) = clock.load_timing() {
                    logger.on_load_measured(timing);
                }
            }));
        }));
    }
}
