// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios: the full page controller installed on a fake page.

use std::cell::RefCell;
use std::rc::Rc;

use landing_core::accordion::PanelId;
use landing_core::config::{EXPIRED_MARKUP, PageConfig};
use landing_core::finisher::{AnchorId, ImageId};
use landing_core::interaction::LoadTiming;
use landing_core::page::PageController;
use landing_core::time::{Duration, WallTime};
use landing_core::trace::share;
use landing_debug::recorder::{RecordedEvent, RecorderSink};
use landing_harness::{ClickTarget, FakePage, ManualHost};

/// Two hours before the shipped deadline.
const NOW: WallTime = WallTime(1_747_763_266_000);

struct Scenario {
    page: FakePage,
    host: ManualHost,
    recorder: Rc<RefCell<RecorderSink>>,
}

impl Scenario {
    fn install(page: FakePage, target: WallTime) -> Self {
        let host = ManualHost::new(NOW);
        let (recorder, sink) = share(RecorderSink::new());
        let config = PageConfig::channel_builder().with_target(target);
        PageController::new(config, sink).install(page.clone(), host.clone(), host.clone());
        Self {
            page,
            host,
            recorder,
        }
    }

    fn shipped(target: WallTime) -> Self {
        Self::install(FakePage::channel_builder(), target)
    }

    fn clock(&self, group: &str) -> String {
        let id = |field: &str| {
            if group.is_empty() {
                field.to_string()
            } else {
                format!("{group}-{field}")
            }
        };
        let text = |field: &str| self.page.text(&id(field)).unwrap_or_default();
        format!("{}:{}:{}", text("hours"), text("minutes"), text("seconds"))
    }

    fn count(&self, kind: &str) -> usize {
        self.recorder.borrow().count(kind)
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn banner_is_emitted_before_the_page_is_ready() {
    let s = Scenario::shipped(NOW + Duration::from_hms_millis(2, 0, 0, 0));
    assert_eq!(s.recorder.borrow().events().len(), 1);
    assert_eq!(s.recorder.borrow().events()[0].kind(), "banner");
    assert_eq!(s.host.repeating_tasks(), 0, "countdown waits for ready");
    assert_eq!(s.page.click_observers(), 0, "click logging waits for ready");
}

#[test]
fn page_without_any_expected_elements_is_harmless() {
    let s = Scenario::install(FakePage::builder().build(), NOW + Duration::from_secs(3_600));
    s.page.fire_ready();
    s.page.fire_load();
    s.host.advance(Duration::from_secs(10));
    s.page.click(&ClickTarget::unrelated());

    assert_eq!(s.page.id_writes(), 0);
    assert_eq!(s.count("banner"), 1);
    assert_eq!(s.recorder.borrow().events().len(), 1, "only the banner");
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

#[test]
fn two_hours_out_first_render_is_immediate() {
    let s = Scenario::shipped(NOW + Duration::from_hms_millis(2, 0, 0, 0));
    s.page.fire_ready();
    assert_eq!(s.clock(""), "02:00:00");
    assert_eq!(s.clock("bonus"), "02:00:00");

    s.host.advance(Duration::from_secs(1));
    assert_eq!(s.clock(""), "01:59:59");
    assert_eq!(s.clock("bonus"), "01:59:59");
}

#[test]
fn past_target_renders_expired_without_flicker() {
    let s = Scenario::shipped(NOW - Duration(1));
    s.page.fire_ready();

    assert_eq!(s.page.container_markup(".main-countdown"), [EXPIRED_MARKUP]);
    assert_eq!(s.page.container_markup(".bonus-countdown"), [EXPIRED_MARKUP]);
    assert_eq!(s.page.id_writes(), 0, "no numeric field may be written");

    s.host.advance(Duration::from_secs(5));
    assert_eq!(s.page.id_writes(), 0, "no flicker back to numbers");
    assert_eq!(s.count("countdown_expired"), 1);
}

#[test]
fn countdown_runs_into_expiry_and_reports_once() {
    let s = Scenario::shipped(NOW + Duration::from_secs(2));
    s.page.fire_ready();
    assert_eq!(s.clock(""), "00:00:02");

    s.host.advance(Duration::from_secs(1));
    assert_eq!(s.clock(""), "00:00:01");
    assert!(s.page.container_markup(".main-countdown")[0].is_empty());

    // Exactly at the target nothing is left.
    s.host.advance(Duration::from_secs(1));
    assert_eq!(s.page.container_markup(".main-countdown"), [EXPIRED_MARKUP]);

    s.host.advance(Duration::from_secs(3));
    assert_eq!(s.count("countdown_expired"), 1);
    let expired = s
        .recorder
        .borrow()
        .events()
        .iter()
        .find_map(|e| match e {
            RecordedEvent::CountdownExpired {
                observed_at,
                containers,
                ..
            } => Some((*observed_at, *containers)),
            _ => None,
        });
    assert_eq!(expired, Some((NOW + Duration::from_secs(2), 2)));
}

#[test]
fn hours_past_a_day_are_not_wrapped() {
    let s = Scenario::shipped(NOW + Duration::from_hms_millis(100, 0, 30, 500));
    s.page.fire_ready();
    assert_eq!(s.clock(""), "100:00:30");
}

#[test]
fn group_without_hours_slot_is_skipped() {
    let page = FakePage::builder()
        .slot("hours", "")
        .slot("minutes", "")
        .slot("seconds", "")
        .slot("bonus-minutes", "--")
        .slot("bonus-seconds", "--")
        .build();
    let s = Scenario::install(page, NOW + Duration::from_secs(61));
    s.page.fire_ready();
    assert_eq!(s.clock(""), "00:01:01");
    assert_eq!(s.page.text("bonus-minutes").as_deref(), Some("--"));
}

// ---------------------------------------------------------------------------
// Accordion
// ---------------------------------------------------------------------------

#[test]
fn at_most_one_faq_panel_is_open() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();

    let clicks = [0, 1, 1, 2, 0, 0, 2];
    let expected: [&[u32]; 7] = [&[0], &[1], &[], &[2], &[0], &[], &[2]];
    for (click, open) in clicks.into_iter().zip(expected) {
        assert!(s.page.click_panel_header(PanelId(click)));
        let open: Vec<PanelId> = open.iter().copied().map(PanelId).collect();
        assert_eq!(s.page.panels_with_class("active"), open, "after clicking {click}");
    }
    assert_eq!(s.count("panel_toggled"), clicks.len());
}

#[test]
fn accordion_normalizes_multiple_open_panels() {
    let page = FakePage::builder()
        .panel(".faq-item", Some(".faq-question"), true)
        .panel(".faq-item", Some(".faq-question"), true)
        .panel(".faq-item", Some(".faq-question"), false)
        .build();
    let s = Scenario::install(page, NOW);
    s.page.fire_ready();

    s.page.click_panel_header(PanelId(2));
    assert_eq!(s.page.panels_with_class("active"), [PanelId(2)]);
    let collapsed = s.recorder.borrow().events().iter().find_map(|e| match e {
        RecordedEvent::PanelToggled {
            collapsed_siblings, ..
        } => Some(*collapsed_siblings),
        _ => None,
    });
    assert_eq!(collapsed, Some(2));
}

// ---------------------------------------------------------------------------
// Interaction logging
// ---------------------------------------------------------------------------

#[test]
fn qualifying_clicks_emit_one_entry_per_category() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();

    s.page.click(&ClickTarget::default().within(
        ".cta-button",
        Some("https://example.com/start"),
        None,
    ));
    assert_eq!(s.recorder.borrow().interactions().count(), 1);

    s.page.click(
        &ClickTarget::default()
            .within("p", None, None)
            .within(".bonus-card", None, Some("Viral Script Vault")),
    );
    assert_eq!(s.recorder.borrow().interactions().count(), 2);

    // A call-to-action inside a bonus card counts in both categories.
    s.page.click(
        &ClickTarget::default()
            .within(".cta-button", Some("#pricing"), None)
            .within(".bonus-card", None, Some("Thumbnail Pack")),
    );
    assert_eq!(s.recorder.borrow().interactions().count(), 4);

    s.page.click(&ClickTarget::unrelated());
    s.page.click(&ClickTarget::default().within(".bonus-card", None, None));
    assert_eq!(
        s.recorder.borrow().interactions().count(),
        4,
        "unrelated clicks and heading-less cards emit nothing"
    );

    let events: Vec<RecordedEvent> = s.recorder.borrow().interactions().cloned().collect();
    assert_eq!(
        events[0],
        RecordedEvent::CtaClick {
            href: "https://example.com/start".into()
        }
    );
    assert_eq!(
        events[1],
        RecordedEvent::BonusCard {
            heading: "Viral Script Vault".into()
        }
    );
}

#[test]
fn load_time_is_measured_on_the_following_task() {
    let s = Scenario::shipped(NOW);
    s.host.set_load_timing(Some(LoadTiming {
        navigation_start: WallTime(1_000),
        load_event_end: WallTime(2_250),
    }));
    s.page.fire_ready();
    s.page.fire_load();
    assert_eq!(s.count("page_load"), 0, "measured after the load handler returns");
    assert_eq!(s.host.pending_deferred(), 1);

    s.host.run_deferred();
    let events = s.recorder.borrow().events().to_vec();
    assert!(events.contains(&RecordedEvent::PageLoad {
        load_time: Duration(1_250)
    }));
}

#[test]
fn unfinished_load_timing_is_not_reported() {
    let s = Scenario::shipped(NOW);
    s.host.set_load_timing(Some(LoadTiming {
        navigation_start: WallTime(1_000),
        load_event_end: WallTime::EPOCH,
    }));
    s.page.fire_ready();
    s.page.fire_load();
    s.host.run_deferred();
    assert_eq!(s.count("page_load"), 0);
}

// ---------------------------------------------------------------------------
// Page finisher
// ---------------------------------------------------------------------------

#[test]
fn same_page_anchor_scrolls_to_its_target() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();
    s.page.fire_load();

    assert!(s.page.click_anchor(AnchorId(0)), "default navigation prevented");
    assert_eq!(s.page.scrolled(), ["features"]);
}

#[test]
fn dangling_anchor_is_prevented_and_ignored() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();
    s.page.fire_load();

    assert!(s.page.click_anchor(AnchorId(1)), "default navigation prevented");
    assert!(s.page.scrolled().is_empty());
}

#[test]
fn anchors_are_inert_before_load() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();
    assert!(!s.page.click_anchor(AnchorId(0)));
}

#[test]
fn lazy_image_loads_once_when_revealed() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();
    s.page.fire_load();

    let image = ImageId(0);
    assert!(s.page.is_watched(image));
    assert_eq!(s.page.image_attr(image, "src"), None);

    s.page.reveal_image(image);
    assert_eq!(s.page.image_attr(image, "src").as_deref(), Some("/img/hero.webp"));
    assert_eq!(s.page.image_attr(image, "data-src"), None);
    assert!(!s.page.is_watched(image));

    s.page.reveal_image(image);
    assert_eq!(s.count("image_load"), 1);
    assert!(s.page.is_watched(ImageId(1)), "other images still watched");
}

#[test]
fn image_without_deferred_source_is_unwatched_unchanged() {
    let page = FakePage::builder()
        .lazy_image("img[loading=\"lazy\"]", None)
        .build();
    let s = Scenario::install(page, NOW);
    s.page.fire_ready();
    s.page.fire_load();

    s.page.reveal_image(ImageId(0));
    assert!(!s.page.is_watched(ImageId(0)));
    assert_eq!(s.page.image_attr(ImageId(0), "src"), None);
    assert_eq!(s.count("image_load"), 0);
}

#[test]
fn placeholders_are_filled_on_load() {
    let s = Scenario::shipped(NOW);
    s.page.fire_ready();
    assert_eq!(s.page.placeholder_texts(".user-login"), ["", ""]);

    s.page.fire_load();
    assert_eq!(s.page.placeholder_texts(".current-date"), ["5/17/2025"]);
    assert_eq!(
        s.page.placeholder_texts(".user-login"),
        ["Yassinosml", "Yassinosml"]
    );
    assert_eq!(s.page.placeholder_texts(".total-amount"), ["$645"]);
    assert_eq!(s.count("content_filled"), 3);
}
