// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for the landing page.
//!
//! This crate implements the `landing_core` capability traits on top of
//! browser APIs:
//!
//! - [`DomPage`]: [`PageSurface`] and [`EventSource`] over the live document
//! - [`TimerHost`]: [`TaskHost`] via `setInterval` / `setTimeout`
//! - [`BrowserClock`]: [`PageClock`] via `Date.now()` and `performance.timing`
//! - [`ConsoleSink`]: [`InteractionSink`] writing to the developer console
//!
//! [`PageSurface`]: landing_core::surface::PageSurface
//! [`EventSource`]: landing_core::surface::EventSource
//! [`TaskHost`]: landing_core::surface::TaskHost
//! [`PageClock`]: landing_core::surface::PageClock
//! [`InteractionSink`]: landing_core::trace::InteractionSink

#![no_std]

extern crate alloc;

mod clock;
mod console;
mod dom;
mod timer;

pub use clock::BrowserClock;
pub use console::ConsoleSink;
pub use dom::DomPage;
pub use timer::TimerHost;

use landing_core::time::WallTime;

/// Returns the current wall-clock time from `Date.now()`.
#[must_use]
pub fn now() -> WallTime {
    millis_to_wall_time(timer::date_now())
}

/// Converts a JS millisecond timestamp to [`WallTime`].
///
/// Fractional milliseconds are truncated; non-finite values map to the epoch.
#[must_use]
pub(crate) fn millis_to_wall_time(ms: f64) -> WallTime {
    if !ms.is_finite() {
        return WallTime::EPOCH;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "JS timestamps are integral milliseconds well inside i64 range"
    )]
    let ms = ms as i64;
    WallTime(ms)
}
