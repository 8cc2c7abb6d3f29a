// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable event output.
//!
//! [`PrettyPrintSink`] implements [`InteractionSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use landing_core::accordion::PanelState;
use landing_core::trace::{
    BannerEvent, BonusCardEvent, ContentFilledEvent, CountdownExpiredEvent, CtaClickEvent,
    ImageLoadEvent, InteractionSink, PageLoadEvent, PanelToggledEvent,
};

/// Writes human-readable event lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn state_name(state: PanelState) -> &'static str {
    match state {
        PanelState::Expanded => "expanded",
        PanelState::Collapsed => "collapsed",
    }
}

impl<W: Write> InteractionSink for PrettyPrintSink<W> {
    fn on_banner(&mut self, e: &BannerEvent) {
        let _ = writeln!(
            self.writer,
            "[banner] {} v{} updated={} by={}",
            e.product, e.version, e.last_updated, e.author,
        );
    }

    fn on_cta_click(&mut self, e: &CtaClickEvent<'_>) {
        let _ = writeln!(self.writer, "[cta] href={}", e.href);
    }

    fn on_bonus_card(&mut self, e: &BonusCardEvent<'_>) {
        let _ = writeln!(self.writer, "[bonus] heading={:?}", e.heading);
    }

    fn on_page_load(&mut self, e: &PageLoadEvent) {
        let _ = writeln!(self.writer, "[load] {}ms", e.load_time.millis());
    }

    fn on_countdown_expired(&mut self, e: &CountdownExpiredEvent) {
        let late = e.observed_at - e.target;
        let _ = writeln!(
            self.writer,
            "[countdown:expired] late={}ms containers={}",
            late.millis(),
            e.containers,
        );
    }

    fn on_panel_toggled(&mut self, e: &PanelToggledEvent) {
        let _ = writeln!(
            self.writer,
            "[faq] panel={} {} collapsed={}",
            e.panel.0,
            state_name(e.state),
            e.collapsed_siblings,
        );
    }

    fn on_content_filled(&mut self, e: &ContentFilledEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[fill] {} x{} value={:?}",
            e.selector, e.count, e.value,
        );
    }

    fn on_image_load(&mut self, e: &ImageLoadEvent) {
        let _ = writeln!(self.writer, "[image] {} loading", e.image.0);
    }
}
