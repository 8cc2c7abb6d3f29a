// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot work run when the page has fully loaded.
//!
//! [`PageFinisher::finish`] performs three independent steps:
//!
//! 1. Same-page anchors scroll smoothly to their target instead of jumping.
//!    The default jump is always prevented, even when the target is missing.
//! 2. Deferred images start loading the first time they become visible and
//!    are then no longer watched ([`LazyImages`]).
//! 3. Placeholder elements receive fixed literal values ([`Substitution`]).

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::surface::{EventSource, PageSurface};
use crate::time::{CivilDate, WallTime};
use crate::trace::{ContentFilledEvent, ImageLoadEvent, SharedSink, noop_sink};

/// Identifies one same-page anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnchorId(pub u32);

/// Identifies one deferred image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ImageId(pub u32);

/// A literal written into placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticValue {
    /// Plain text.
    Text(&'static str),
    /// A date, rendered in en-US numeric form.
    Date(WallTime),
    /// A whole-unit currency amount, rendered as `{symbol}{amount}`.
    Currency {
        /// Leading currency symbol.
        symbol: &'static str,
        /// Amount in whole units.
        amount: u32,
    },
}

impl fmt::Display for StaticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Text(text) => f.write_str(text),
            Self::Date(time) => write!(f, "{}", CivilDate::from_wall_time(time)),
            Self::Currency { symbol, amount } => write!(f, "{symbol}{amount}"),
        }
    }
}

/// Replaces the text of every element matching `selector` with `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Placeholder selector.
    pub selector: &'static str,
    /// Literal written into each match.
    pub value: StaticValue,
}

/// Configuration for the [`PageFinisher`].
#[derive(Clone, Copy, Debug)]
pub struct FinisherConfig {
    /// Selector of same-page anchors.
    pub anchor_selector: &'static str,
    /// Selector of deferred images.
    pub lazy_image_selector: &'static str,
    /// Attribute holding a deferred image's real source.
    pub deferred_src_attr: &'static str,
    /// Placeholder substitutions, applied in order.
    pub substitutions: &'static [Substitution],
}

/// Returns the element id an `href` points at, if it is a non-empty fragment.
///
/// ```
/// use landing_core::finisher::anchor_target;
///
/// assert_eq!(anchor_target("#faq"), Some("faq"));
/// assert_eq!(anchor_target("#"), None);
/// assert_eq!(anchor_target("/pricing"), None);
/// ```
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Result of following a same-page anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorOutcome {
    /// The target exists and was scrolled into view.
    Scrolled,
    /// The anchor references nothing on the page; nothing happened.
    NoTarget,
}

/// Scrolls to the element `href` references, if any.
pub fn follow_anchor<S: PageSurface + ?Sized>(surface: &mut S, href: &str) -> AnchorOutcome {
    match anchor_target(href) {
        Some(id) if surface.scroll_to(id) => AnchorOutcome::Scrolled,
        _ => AnchorOutcome::NoTarget,
    }
}

/// Fire-once loading for deferred images.
pub struct LazyImages {
    deferred_src_attr: &'static str,
    started: BTreeSet<ImageId>,
    sink: SharedSink,
}

impl LazyImages {
    /// Creates a loader that reads real sources from `deferred_src_attr`.
    #[must_use]
    pub fn new(deferred_src_attr: &'static str, sink: SharedSink) -> Self {
        Self {
            deferred_src_attr,
            started: BTreeSet::new(),
            sink,
        }
    }

    /// Handles `image` becoming visible.
    ///
    /// Starts the load the first time an image is seen. Always returns `true`:
    /// after its first visibility an image no longer needs watching.
    pub fn on_visible<S: PageSurface + ?Sized>(&mut self, surface: &mut S, image: ImageId) -> bool {
        if self.started.insert(image) && surface.begin_image_load(image, self.deferred_src_attr) {
            self.sink
                .borrow_mut()
                .on_image_load(&ImageLoadEvent { image });
        }
        true
    }

    /// Returns `true` if `image` has already been handled.
    #[must_use]
    pub fn is_started(&self, image: ImageId) -> bool {
        self.started.contains(&image)
    }
}

impl fmt::Debug for LazyImages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyImages")
            .field("deferred_src_attr", &self.deferred_src_attr)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

/// Counts of what [`PageFinisher::finish`] set up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinishReport {
    /// Anchors whose clicks are now intercepted.
    pub anchors: usize,
    /// Images now watched for visibility.
    pub images: usize,
    /// Placeholder elements written.
    pub placeholders: usize,
}

/// Runs the page-load conveniences.
pub struct PageFinisher {
    config: FinisherConfig,
    sink: SharedSink,
}

impl fmt::Debug for PageFinisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageFinisher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PageFinisher {
    /// Creates a finisher.
    #[must_use]
    pub fn new(config: FinisherConfig) -> Self {
        Self {
            config,
            sink: noop_sink(),
        }
    }

    /// Reports substitutions and image loads to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Writes every configured substitution. Returns the number of elements
    /// written.
    pub fn fill_placeholders<S: PageSurface + ?Sized>(&self, surface: &mut S) -> usize {
        let mut total = 0;
        for sub in self.config.substitutions {
            let value: String = sub.value.to_string();
            let count = surface.fill_placeholders(sub.selector, &value);
            if count > 0 {
                self.sink.borrow_mut().on_content_filled(&ContentFilledEvent {
                    selector: sub.selector,
                    value: &value,
                    count,
                });
            }
            total += count;
        }
        total
    }

    /// Binds smooth scrolling, starts watching deferred images and fills
    /// placeholders.
    pub fn finish<P>(&self, page: &P) -> FinishReport
    where
        P: PageSurface + EventSource + Clone + 'static,
    {
        let mut surface = page.clone();

        let anchors: Vec<AnchorId> = surface.anchors(self.config.anchor_selector);
        for &anchor in &anchors {
            let mut surface = page.clone();
            page.on_anchor_click(
                anchor,
                Box::new(move |href| {
                    follow_anchor(&mut surface, href);
                }),
            );
        }

        let images = surface.lazy_images(self.config.lazy_image_selector);
        if !images.is_empty() {
            let loader = Rc::new(RefCell::new(LazyImages::new(
                self.config.deferred_src_attr,
                Rc::clone(&self.sink),
            )));
            let mut surface = page.clone();
            page.observe_images(
                &images,
                Box::new(move |image| loader.borrow_mut().on_visible(&mut surface, image)),
            );
        }

        let placeholders = self.fill_placeholders(&mut surface);

        FinishReport {
            anchors: anchors.len(),
            images: images.len(),
            placeholders,
        }
    }
}
