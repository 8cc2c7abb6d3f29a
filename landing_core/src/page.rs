// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring the behaviors to a host.
//!
//! [`PageController::install`] is the page script's entry point. It emits the
//! startup banner and registers everything else against the host's
//! [`EventSource`]:
//!
//! - on ready: the countdown starts, the accordion binds its headers, and
//!   click logging begins;
//! - on load: the page finisher runs, and the load-time measurement is
//!   scheduled for the following task.
//!
//! The behaviors are independent. None reads another's output, and a page
//! missing any of the expected elements simply leaves that behavior idle.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::accordion::AccordionController;
use crate::config::PageConfig;
use crate::countdown::CountdownUpdater;
use crate::finisher::PageFinisher;
use crate::interaction::InteractionLogger;
use crate::surface::{EventSource, PageClock, PageSurface, TaskHost};
use crate::trace::SharedSink;

/// Installs every page behavior.
pub struct PageController {
    config: PageConfig,
    sink: SharedSink,
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PageController {
    /// Creates a controller that reports diagnostics to `sink`.
    #[must_use]
    pub fn new(config: PageConfig, sink: SharedSink) -> Self {
        Self { config, sink }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Emits the banner and registers all behaviors on `page`.
    ///
    /// `page` is both the surface and the event source. `host` and `clock`
    /// are moved into the handlers that need them.
    pub fn install<P, H, C>(self, page: P, host: H, clock: C)
    where
        P: PageSurface + EventSource + Clone + 'static,
        H: TaskHost + Clone + 'static,
        C: PageClock + Clone + 'static,
    {
        let Self { config, sink } = self;
        let logger = InteractionLogger::new(Rc::clone(&sink));
        logger.banner(&config.banner);

        {
            let page = page.clone();
            let sink = Rc::clone(&sink);
            let host = host.clone();
            let clock = clock.clone();
            let logger = logger.clone();
            let ready_page = page.clone();
            ready_page.on_ready(Box::new(move || {
                CountdownUpdater::new(config.countdown, page.clone())
                    .with_sink(Rc::clone(&sink))
                    .start(&host, clock.clone());

                let mut surface = page.clone();
                AccordionController::from_surface(config.accordion, &mut surface)
                    .with_sink(Rc::clone(&sink))
                    .install(surface, &page);

                logger.install(config.clicks, &page);
                logger.measure_after_load(&page, host, clock);
            }));
        }

        let finisher = PageFinisher::new(config.finisher).with_sink(sink);
        let load_page = page.clone();
        page.on_load(Box::new(move || {
            finisher.finish(&load_page);
        }));
    }
}
