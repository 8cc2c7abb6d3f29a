// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contract for hosts.
//!
//! The controllers in this crate never touch a DOM directly. A host provides
//! four capabilities:
//!
//! - **[`PageSurface`]**: reads and writes the rendered page. Every lookup
//!   that may legitimately find nothing reports absence through a `bool`,
//!   an empty `Vec` or a zero count. It never reports an error.
//!
//! - **[`EventSource`]**: registers handlers for page lifecycle events and
//!   user input. Handlers are `'static` and live as long as the page.
//!
//! - **[`TaskHost`]**: schedules repeating and deferred work. There is no
//!   cancellation: a repeating task runs for the life of the page.
//!
//! - **[`PageClock`]**: reads wall-clock time and navigation timing.
//!
//! # Crate boundaries
//!
//! `landing_core` owns the behavior and this contract module.
//! `landing_backend_web` implements the traits on top of `web-sys`, and
//! `landing_harness` implements them on an in-memory page model for tests.
//!
//! Handles such as [`PanelId`] and [`ImageId`] are assigned by the host when
//! it enumerates the page. Core code passes them back without interpreting
//! the value.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::accordion::PanelId;
use crate::finisher::{AnchorId, ImageId};
use crate::interaction::{ClickFacts, ClickQuery, LoadTiming};
use crate::time::{Duration, WallTime};

/// Reads and mutates the rendered page.
///
/// Selectors and identifiers come from [`PageConfig`](crate::config::PageConfig);
/// the surface itself holds no page-specific knowledge.
pub trait PageSurface {
    /// Returns `true` if an element with the given id exists.
    fn has_slot(&self, id: &str) -> bool;

    /// Replaces the text of the element with the given id.
    ///
    /// Returns `false` (and changes nothing) if the element is absent.
    fn set_slot_text(&mut self, id: &str, text: &str) -> bool;

    /// Replaces the contents of every element matching `container` with
    /// `markup`. Returns the number of containers rewritten.
    fn render_expired(&mut self, container: &str, markup: &str) -> usize;

    /// Enumerates the panels matching `item_selector` in document order.
    fn panels(&mut self, item_selector: &str) -> Vec<PanelId>;

    /// Returns `true` if `panel` carries `expanded_class`.
    ///
    /// An unknown handle reads as collapsed.
    fn is_panel_expanded(&self, panel: PanelId, expanded_class: &str) -> bool;

    /// Adds or removes `expanded_class` on `panel`.
    fn set_panel_expanded(&mut self, panel: PanelId, expanded_class: &str, expanded: bool);

    /// Sets the text of every element matching `selector`. Returns the number
    /// of elements written.
    fn fill_placeholders(&mut self, selector: &str, text: &str) -> usize;

    /// Smoothly scrolls the element with the given id to the top of the
    /// viewport. Returns `false` if no such element exists.
    fn scroll_to(&mut self, id: &str) -> bool;

    /// Enumerates the same-page anchors matching `selector`.
    fn anchors(&mut self, selector: &str) -> Vec<AnchorId>;

    /// Enumerates the deferred images matching `selector`.
    fn lazy_images(&mut self, selector: &str) -> Vec<ImageId>;

    /// Starts loading `image` by moving its `deferred_attr` value into `src`
    /// and removing `deferred_attr`.
    ///
    /// Returns `false` if the image carries no deferred source.
    fn begin_image_load(&mut self, image: ImageId, deferred_attr: &str) -> bool;
}

/// Registers handlers for page events.
///
/// Every handler is retained for the lifetime of the page.
pub trait EventSource {
    /// Runs `task` once the page structure is available. If it already is,
    /// `task` runs immediately.
    fn on_ready(&self, task: Box<dyn FnOnce()>);

    /// Runs `task` once the page has fully loaded. If it already has, `task`
    /// runs immediately.
    fn on_load(&self, task: Box<dyn FnOnce()>);

    /// Observes every click on the page.
    ///
    /// The host resolves the click target against `query` and passes the
    /// resulting [`ClickFacts`] to `handler`. Observation never alters the
    /// click's default behavior.
    fn on_click(&self, query: ClickQuery, handler: Box<dyn FnMut(&ClickFacts)>);

    /// Calls `handler` whenever the header (matched by `header_selector`
    /// inside `panel`) is clicked. A panel without a header registers nothing.
    fn on_panel_header(&self, panel: PanelId, header_selector: &str, handler: Box<dyn FnMut()>);

    /// Intercepts clicks on `anchor`: the default navigation is always
    /// prevented and `handler` receives the anchor's `href` attribute.
    fn on_anchor_click(&self, anchor: AnchorId, handler: Box<dyn FnMut(&str)>);

    /// Watches `images` for visibility.
    ///
    /// `handler` is called with each image that becomes visible; when it
    /// returns `true` the image is no longer watched.
    fn observe_images(&self, images: &[ImageId], handler: Box<dyn FnMut(ImageId) -> bool>);
}

/// Schedules work on the host's event loop.
pub trait TaskHost {
    /// Runs `task` every `period`, starting one period from now.
    ///
    /// There is no way to stop a repeating task.
    fn repeat(&self, period: Duration, task: Box<dyn FnMut()>);

    /// Runs `task` on the next turn of the event loop.
    fn defer(&self, task: Box<dyn FnOnce()>);
}

/// Reads time from the host.
pub trait PageClock {
    /// Returns the current wall-clock time.
    fn now(&self) -> WallTime;

    /// Returns the navigation timing of the current page view, if the host
    /// exposes it.
    fn load_timing(&self) -> Option<LoadTiming>;
}
