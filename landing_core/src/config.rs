// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.
//!
//! All selectors, identifiers and literal values the controllers use live in
//! one immutable [`PageConfig`], passed to each controller at construction.
//! [`PageConfig::channel_builder`] is the configuration shipped with the
//! ChannelBuilder AI landing page.

use crate::accordion::AccordionConfig;
use crate::countdown::{CountdownConfig, DisplayGroup};
use crate::finisher::{FinisherConfig, StaticValue, Substitution};
use crate::interaction::{BannerConfig, ClickQuery};
use crate::time::{Duration, WallTime};

/// Countdown target: 2025-05-20T19:47:46Z.
pub const OFFER_EXPIRES_AT: WallTime = WallTime(1_747_770_466_000);

/// Last content update: 2025-05-17T19:47:46Z.
pub const LAST_UPDATED_AT: WallTime = WallTime(1_747_511_266_000);

/// Markup shown in a countdown container after the offer has expired.
pub const EXPIRED_MARKUP: &str = r#"<div class="time-block"><span class="number">EXPIRED</span></div>"#;

/// The hero countdown and the bonus-section countdown.
pub const DISPLAY_GROUPS: &[DisplayGroup] = &[
    DisplayGroup {
        hours: "hours",
        minutes: "minutes",
        seconds: "seconds",
        container: ".main-countdown",
    },
    DisplayGroup {
        hours: "bonus-hours",
        minutes: "bonus-minutes",
        seconds: "bonus-seconds",
        container: ".bonus-countdown",
    },
];

/// Placeholder substitutions applied on load.
pub const SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        selector: ".current-date",
        value: StaticValue::Date(LAST_UPDATED_AT),
    },
    Substitution {
        selector: ".user-login",
        value: StaticValue::Text("Yassinosml"),
    },
    Substitution {
        selector: ".total-amount",
        value: StaticValue::Currency {
            symbol: "$",
            amount: 645,
        },
    },
];

/// Everything the page controllers need to know about the page.
#[derive(Clone, Copy, Debug)]
pub struct PageConfig {
    /// Countdown target, cadence and display groups.
    pub countdown: CountdownConfig,
    /// FAQ accordion selectors.
    pub accordion: AccordionConfig,
    /// Click classification selectors.
    pub clicks: ClickQuery,
    /// Page-load conveniences.
    pub finisher: FinisherConfig,
    /// Startup banner.
    pub banner: BannerConfig,
}

impl PageConfig {
    /// The configuration shipped with the ChannelBuilder AI landing page.
    #[must_use]
    pub const fn channel_builder() -> Self {
        Self {
            countdown: CountdownConfig {
                target: OFFER_EXPIRES_AT,
                period: Duration::from_secs(1),
                groups: DISPLAY_GROUPS,
                expired_markup: EXPIRED_MARKUP,
            },
            accordion: AccordionConfig {
                item_selector: ".faq-item",
                header_selector: ".faq-question",
                expanded_class: "active",
            },
            clicks: ClickQuery {
                cta_selector: ".cta-button",
                bonus_card_selector: ".bonus-card",
                bonus_heading_selector: "h3",
            },
            finisher: FinisherConfig {
                anchor_selector: "a[href^=\"#\"]",
                lazy_image_selector: "img[loading=\"lazy\"]",
                deferred_src_attr: "data-src",
                substitutions: SUBSTITUTIONS,
            },
            banner: BannerConfig {
                product: "ChannelBuilder AI Landing Page",
                version: "1.0.0",
                last_updated: "2025-05-17 19:47:46",
                author: "Yassinosml",
            },
        }
    }

    /// Returns this configuration counting down to `target` instead.
    #[must_use]
    pub const fn with_target(mut self, target: WallTime) -> Self {
        self.countdown.target = target;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::channel_builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::CivilDate;

    #[test]
    fn shipped_stamps_match_their_labels() {
        let expires = CivilDate::from_wall_time(OFFER_EXPIRES_AT);
        assert_eq!((expires.year, expires.month, expires.day), (2025, 5, 20));
        // Three days between the content update and the offer deadline.
        assert_eq!(
            (OFFER_EXPIRES_AT - LAST_UPDATED_AT).millis(),
            3 * crate::time::MILLIS_PER_DAY
        );
    }

    #[test]
    fn with_target_keeps_everything_else() {
        let cfg = PageConfig::channel_builder().with_target(WallTime(42));
        assert_eq!(cfg.countdown.target, WallTime(42));
        assert_eq!(cfg.countdown.groups.len(), 2);
        assert_eq!(cfg.accordion.expanded_class, "active");
    }
}
