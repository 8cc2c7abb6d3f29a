// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall clock and navigation timing.

use web_sys::{Performance, Window};

use landing_core::interaction::LoadTiming;
use landing_core::surface::PageClock;
use landing_core::time::WallTime;

use crate::millis_to_wall_time;

/// Reads `Date.now()` and `performance.timing`.
#[derive(Clone, Debug)]
pub struct BrowserClock {
    performance: Option<Performance>,
}

impl BrowserClock {
    /// Creates a clock for `window`. Navigation timing is unavailable if the
    /// window exposes no `performance` object.
    #[must_use]
    pub fn new(window: &Window) -> Self {
        Self {
            performance: window.performance(),
        }
    }
}

impl PageClock for BrowserClock {
    fn now(&self) -> WallTime {
        crate::now()
    }

    fn load_timing(&self) -> Option<LoadTiming> {
        let timing = self.performance.as_ref()?.timing();
        Some(LoadTiming {
            navigation_start: millis_to_wall_time(timing.navigation_start()),
            load_event_end: millis_to_wall_time(timing.load_event_end()),
        })
    }
}
