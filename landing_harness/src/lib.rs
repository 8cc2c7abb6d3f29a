// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory page and virtual-time host for exercising landing page behavior.
//!
//! - [`FakePage`] implements [`PageSurface`] and [`EventSource`] over a small
//!   element model. Tests build one with [`PageBuilder`] and drive it with
//!   the `fire_*` and `click_*` methods.
//! - [`ManualHost`] implements [`TaskHost`] and [`PageClock`] on a clock that
//!   only moves when [`ManualHost::advance`] is called.
//!
//! [`PageSurface`]: landing_core::surface::PageSurface
//! [`EventSource`]: landing_core::surface::EventSource
//! [`TaskHost`]: landing_core::surface::TaskHost
//! [`PageClock`]: landing_core::surface::PageClock

#![no_std]

extern crate alloc;

mod host;
mod page;

pub use host::ManualHost;
pub use page::{ClickTarget, FakePage, PageBuilder};
