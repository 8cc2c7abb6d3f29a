// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the countdown display and the accordion invariant.

use landing_core::accordion::{AccordionController, PanelId};
use landing_core::config::PageConfig;
use landing_core::countdown::{CountdownUpdater, Hms, Remaining};
use landing_core::time::{Duration, MILLIS_PER_SECOND, WallTime};
use landing_harness::FakePage;
use proptest::prelude::*;

const NOW: WallTime = WallTime(1_700_000_000_000);

fn countdown_page() -> FakePage {
    FakePage::builder()
        .slot("hours", "")
        .slot("minutes", "")
        .slot("seconds", "")
        .container(".main-countdown")
        .build()
}

fn field(page: &FakePage, id: &str) -> String {
    page.text(id).unwrap_or_default()
}

proptest! {
    #[test]
    fn displayed_fields_decompose_remaining(remaining in 1_i64..1_000 * 3_600_000) {
        let page = countdown_page();
        let config = PageConfig::channel_builder().with_target(NOW + Duration(remaining));
        let mut updater = CountdownUpdater::new(config.countdown, page.clone());
        prop_assert!(!updater.update(NOW).is_expired());

        let (h, m, s) = (field(&page, "hours"), field(&page, "minutes"), field(&page, "seconds"));
        prop_assert!(h.len() >= 2, "hours {h:?} not padded");
        prop_assert_eq!(m.len(), 2);
        prop_assert_eq!(s.len(), 2);

        let h: i64 = h.parse().unwrap();
        let m: i64 = m.parse().unwrap();
        let s: i64 = s.parse().unwrap();
        prop_assert!((0..60).contains(&m));
        prop_assert!((0..60).contains(&s));

        let hms = Hms::from_duration(Duration(remaining)).unwrap();
        prop_assert_eq!(hms.total_seconds(), u64::try_from((h * 60 + m) * 60 + s).unwrap());

        let shown = ((h * 60 + m) * 60 + s) * MILLIS_PER_SECOND;
        prop_assert!(shown <= remaining && remaining < shown + MILLIS_PER_SECOND,
            "{remaining}ms shown as {h}:{m}:{s}");
        prop_assert!(page.container_markup(".main-countdown")[0].is_empty());
    }

    #[test]
    fn non_positive_remaining_never_writes_numbers(elapsed in 0_i64..10 * 86_400_000) {
        let page = countdown_page();
        let config = PageConfig::channel_builder().with_target(NOW - Duration(elapsed));
        let mut updater = CountdownUpdater::new(config.countdown, page.clone());
        prop_assert_eq!(updater.update(NOW), Remaining::Expired);
        prop_assert_eq!(page.id_writes(), 0);
        prop_assert!(page.container_markup(".main-countdown")[0].contains("EXPIRED"));
    }

    #[test]
    fn at_most_one_panel_stays_open(
        initially_open in proptest::collection::vec(any::<bool>(), 1..6),
        clicks in proptest::collection::vec(any::<prop::sample::Index>(), 1..30),
    ) {
        let mut builder = FakePage::builder();
        for &open in &initially_open {
            builder = builder.panel(".faq-item", Some(".faq-question"), open);
        }
        let mut page = builder.build();
        let config = PageConfig::channel_builder().accordion;
        let accordion = AccordionController::from_surface(config, &mut page);

        for click in clicks {
            let panel = PanelId(u32::try_from(click.index(initially_open.len())).unwrap());
            let was_open = page.panels_with_class("active").contains(&panel);
            accordion.select(&mut page, panel);

            let open = page.panels_with_class("active");
            prop_assert!(open.len() <= 1, "open after click: {open:?}");
            if was_open {
                prop_assert!(open.is_empty(), "clicking an open panel closes it");
            } else {
                prop_assert_eq!(open, vec![panel]);
            }
        }
    }
}
