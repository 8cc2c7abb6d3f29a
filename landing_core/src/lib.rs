// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-agnostic behavior for the ChannelBuilder AI landing page.
//!
//! `landing_core` owns every decision the page script makes and none of the
//! browser plumbing. It is `no_std` compatible (with `alloc`) so the same
//! controllers run in the browser and against the fake page used in tests.
//!
//! # Architecture
//!
//! The page is wired once, when its structure becomes available:
//!
//! ```text
//!   EventSource::on_ready ──► CountdownUpdater::start ──► TaskHost::repeat
//!                        ├──► AccordionController::install
//!                        └──► InteractionLogger::install
//!
//!   EventSource::on_load  ──► PageFinisher::finish
//!                        └──► TaskHost::defer ──► InteractionLogger::on_load_measured
//! ```
//!
//! **[`countdown`]**: remaining-time arithmetic and the once-per-second
//! display updater.
//!
//! **[`accordion`]**: the FAQ toggle with its "at most one expanded panel"
//! invariant.
//!
//! **[`interaction`]**: click classification for call-to-action buttons and
//! bonus cards, plus the load-time measurement.
//!
//! **[`finisher`]**: the one-shot page-load conveniences (smooth anchor
//! scrolling, lazy images, static text substitution).
//!
//! **[`page`]**: [`PageController`](page::PageController) ties the four
//! behaviors to a host.
//!
//! **[`surface`]**: the capability traits a host implements
//! ([`PageSurface`](surface::PageSurface),
//! [`EventSource`](surface::EventSource), [`TaskHost`](surface::TaskHost),
//! [`PageClock`](surface::PageClock)).
//!
//! **[`trace`]**: the [`InteractionSink`](trace::InteractionSink) diagnostics
//! trait and its event types.
//!
//! **[`config`]**: the shipped [`PageConfig`](config::PageConfig).
//!
//! **[`time`]**: wall-clock milliseconds and civil-date formatting.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod accordion;
pub mod config;
pub mod countdown;
pub mod finisher;
pub mod interaction;
pub mod page;
pub mod surface;
pub mod time;
pub mod trace;

#[cfg(test)]
mod testing;
