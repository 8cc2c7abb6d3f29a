// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Developer-console diagnostics.
//!
//! [`ConsoleSink`] writes interaction events with `console.log` and the
//! controller-internal events (expiry, panel toggles, substitutions, image
//! loads) with `console.debug`, so they stay hidden at the default console
//! level.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;
use web_sys::console;

use landing_core::accordion::PanelState;
use landing_core::trace::{
    BannerEvent, BonusCardEvent, ContentFilledEvent, CountdownExpiredEvent, CtaClickEvent,
    ImageLoadEvent, InteractionSink, PageLoadEvent, PanelToggledEvent,
};

/// Writes one console line per diagnostic event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn log(line: &str) {
    console::log_1(&JsValue::from_str(line));
}

fn debug(line: &str) {
    console::debug_1(&JsValue::from_str(line));
}

fn banner_text(e: &BannerEvent) -> String {
    format!(
        "\n{}\nVersion: {}\nLast Updated: {}\nCreated by: {}\n",
        e.product, e.version, e.last_updated, e.author
    )
}

fn cta_line(e: &CtaClickEvent<'_>) -> String {
    format!("CTA Button Clicked: {}", e.href)
}

fn bonus_card_line(e: &BonusCardEvent<'_>) -> String {
    format!("Bonus Card Interaction: {}", e.heading)
}

fn page_load_line(e: &PageLoadEvent) -> String {
    format!("Page Load Time: {}ms", e.load_time.millis())
}

fn expired_line(e: &CountdownExpiredEvent) -> String {
    format!(
        "Countdown expired at {}ms: {} containers switched",
        e.observed_at.millis(),
        e.containers
    )
}

fn panel_line(e: &PanelToggledEvent) -> String {
    let state = match e.state {
        PanelState::Expanded => "expanded",
        PanelState::Collapsed => "collapsed",
    };
    format!(
        "FAQ panel {} {state} ({} collapsed)",
        e.panel.0, e.collapsed_siblings
    )
}

fn filled_line(e: &ContentFilledEvent<'_>) -> String {
    format!("Filled {} x{} with {:?}", e.selector, e.count, e.value)
}

fn image_line(e: &ImageLoadEvent) -> String {
    format!("Lazy image {} loading", e.image.0)
}

impl InteractionSink for ConsoleSink {
    fn on_banner(&mut self, e: &BannerEvent) {
        log(&banner_text(e));
    }

    fn on_cta_click(&mut self, e: &CtaClickEvent<'_>) {
        log(&cta_line(e));
    }

    fn on_bonus_card(&mut self, e: &BonusCardEvent<'_>) {
        log(&bonus_card_line(e));
    }

    fn on_page_load(&mut self, e: &PageLoadEvent) {
        log(&page_load_line(e));
    }

    fn on_countdown_expired(&mut self, e: &CountdownExpiredEvent) {
        debug(&expired_line(e));
    }

    fn on_panel_toggled(&mut self, e: &PanelToggledEvent) {
        debug(&panel_line(e));
    }

    fn on_content_filled(&mut self, e: &ContentFilledEvent<'_>) {
        debug(&filled_line(e));
    }

    fn on_image_load(&mut self, e: &ImageLoadEvent) {
        debug(&image_line(e));
    }
}
