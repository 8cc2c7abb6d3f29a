// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Countdown to a fixed target time.
//!
//! [`Remaining::between`] decomposes `target - now` into whole hours,
//! minutes and seconds. Hours accumulate past 24; there is no day field.
//!
//! [`CountdownUpdater`] writes the decomposition into every configured
//! [`DisplayGroup`] once at startup and then once per
//! [`CountdownConfig::period`]. Once the target has passed, every group's
//! container is switched to the expired rendering. The updater keeps running
//! after expiry; further ticks rewrite the same terminal state.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::surface::{PageClock, PageSurface, TaskHost};
use crate::time::{Duration, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, WallTime};
use crate::trace::{CountdownExpiredEvent, SharedSink, noop_sink};

/// Whole hours, minutes and seconds left before the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hms {
    /// Whole hours; may exceed 24.
    pub hours: u64,
    /// Minutes, 0–59.
    pub minutes: u8,
    /// Seconds, 0–59.
    pub seconds: u8,
}

impl Hms {
    /// Decomposes a positive duration, truncating sub-second remainders.
    ///
    /// Returns `None` for zero or negative durations.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "minutes and seconds are reduced modulo 60 before the cast"
    )]
    pub fn from_duration(remaining: Duration) -> Option<Self> {
        if !remaining.is_positive() {
            return None;
        }
        const HOUR: u64 = MILLIS_PER_HOUR.unsigned_abs();
        const MINUTE: u64 = MILLIS_PER_MINUTE.unsigned_abs();
        const SECOND: u64 = MILLIS_PER_SECOND.unsigned_abs();

        let ms = remaining.millis().unsigned_abs();
        Some(Self {
            hours: ms / HOUR,
            minutes: ((ms % HOUR) / MINUTE) as u8,
            seconds: ((ms % MINUTE) / SECOND) as u8,
        })
    }

    /// Returns the decomposition as a whole number of seconds.
    #[must_use]
    pub const fn total_seconds(self) -> u64 {
        self.hours * 3_600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Returns the three fields zero-padded to at least two digits.
    #[must_use]
    pub fn padded_fields(self) -> [String; 3] {
        [
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// The state of a countdown at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Remaining {
    /// The target is still in the future.
    Running(Hms),
    /// The target has been reached or passed.
    Expired,
}

impl Remaining {
    /// Computes the countdown state for `now`.
    ///
    /// Less than one second remaining still counts as running and renders as
    /// `00:00:00`; only `target - now <= 0` is expired.
    #[must_use]
    pub fn between(target: WallTime, now: WallTime) -> Self {
        Hms::from_duration(target - now).map_or(Self::Expired, Self::Running)
    }

    /// Returns `true` for [`Remaining::Expired`].
    #[must_use]
    pub const fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }
}

/// A set of page elements mirroring the same countdown value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayGroup {
    /// Element id receiving the hours field.
    pub hours: &'static str,
    /// Element id receiving the minutes field.
    pub minutes: &'static str,
    /// Element id receiving the seconds field.
    pub seconds: &'static str,
    /// Selector of the container replaced by the expired rendering.
    pub container: &'static str,
}

/// Configuration for the [`CountdownUpdater`].
#[derive(Clone, Copy, Debug)]
pub struct CountdownConfig {
    /// The fixed point in time being counted down to.
    pub target: WallTime,
    /// Interval between updates.
    pub period: Duration,
    /// Display groups written on each update.
    pub groups: &'static [DisplayGroup],
    /// Markup placed in each group container once the target has passed.
    pub expired_markup: &'static str,
}

/// Writes the countdown into the page's display groups.
pub struct CountdownUpdater<S> {
    config: CountdownConfig,
    surface: S,
    sink: SharedSink,
    expiry_reported: bool,
}

impl<S> fmt::Debug for CountdownUpdater<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownUpdater")
            .field("config", &self.config)
            .field("expiry_reported", &self.expiry_reported)
            .finish_non_exhaustive()
    }
}

impl<S: PageSurface> CountdownUpdater<S> {
    /// Creates an updater that writes into `surface`.
    #[must_use]
    pub fn new(config: CountdownConfig, surface: S) -> Self {
        Self {
            config,
            surface,
            sink: noop_sink(),
            expiry_reported: false,
        }
    }

    /// Reports the first expiry to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    /// Recomputes the countdown for `now` and writes it to every display
    /// group present on the page.
    ///
    /// A group whose hours slot is missing is skipped entirely. Other missing
    /// slots are skipped individually.
    pub fn update(&mut self, now: WallTime) -> Remaining {
        let remaining = Remaining::between(self.config.target, now);
        match remaining {
            Remaining::Expired => {
                let mut containers = 0;
                for group in self.config.groups {
                    containers += self
                        .surface
                        .render_expired(group.container, self.config.expired_markup);
                }
                if !self.expiry_reported {
                    self.expiry_reported = true;
                    self.sink
                        .borrow_mut()
                        .on_countdown_expired(&CountdownExpiredEvent {
                            target: self.config.target,
                            observed_at: now,
                            containers,
                        });
                }
            }
            Remaining::Running(hms) => {
                let [hours, minutes, seconds] = hms.padded_fields();
                for group in self.config.groups {
                    if !self.surface.has_slot(group.hours) {
                        continue;
                    }
                    self.surface.set_slot_text(group.hours, &hours);
                    self.surface.set_slot_text(group.minutes, &minutes);
                    self.surface.set_slot_text(group.seconds, &seconds);
                }
            }
        }
        remaining
    }

    /// Runs one update immediately, then hands the updater to `host` to run
    /// every [`CountdownConfig::period`] for the life of the page.
    pub fn start<H, C>(mut self, host: &H, clock: C) -> Remaining
    where
        S: 'static,
        H: TaskHost + ?Sized,
        C: PageClock + 'static,
    {
        let first = self.update(clock.now());
        let period = self.config.period;
        host.repeat(
            period,
            Box::new(move || {
                self.update(clock.now());
            }),
        );
        first
    }
}
