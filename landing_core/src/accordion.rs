// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! FAQ accordion.
//!
//! [`AccordionController`] tracks the panels present when it was built. The
//! page holds each panel's state (the expanded class); the controller only
//! reads and writes it. Selecting a panel's header collapses every other
//! expanded panel and toggles the selected one, so after any selection at
//! most one tracked panel is expanded. Panels added to the page later are
//! not tracked.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::surface::{EventSource, PageSurface};
use crate::trace::{PanelToggledEvent, SharedSink, noop_sink};

/// Identifies one collapsible FAQ panel.
///
/// Hosts assign panel IDs when enumerating the page; core treats them as
/// opaque.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PanelId(pub u32);

impl fmt::Debug for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PanelId({})", self.0)
    }
}

/// Whether a panel's answer is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelState {
    /// The panel is open.
    Expanded,
    /// The panel is closed.
    Collapsed,
}

impl PanelState {
    /// Converts an "is expanded" flag.
    #[must_use]
    pub const fn from_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Returns `true` for [`PanelState::Expanded`].
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Selectors for the accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionConfig {
    /// Selector matching each panel.
    pub item_selector: &'static str,
    /// Selector of the clickable header inside a panel.
    pub header_selector: &'static str,
    /// Class marking a panel as expanded.
    pub expanded_class: &'static str,
}

/// Enforces "at most one expanded panel" over a fixed set of panels.
pub struct AccordionController {
    config: AccordionConfig,
    panels: Vec<PanelId>,
    sink: SharedSink,
}

impl fmt::Debug for AccordionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionController")
            .field("config", &self.config)
            .field("panels", &self.panels)
            .finish_non_exhaustive()
    }
}

impl AccordionController {
    /// Creates a controller over an explicit panel set.
    #[must_use]
    pub fn new(config: AccordionConfig, panels: Vec<PanelId>) -> Self {
        Self {
            config,
            panels,
            sink: noop_sink(),
        }
    }

    /// Creates a controller over the panels currently on `surface`.
    #[must_use]
    pub fn from_surface<S: PageSurface + ?Sized>(config: AccordionConfig, surface: &mut S) -> Self {
        let panels = surface.panels(config.item_selector);
        Self::new(config, panels)
    }

    /// Reports selections to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the tracked panels.
    #[must_use]
    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }

    /// Returns the number of tracked panels currently expanded.
    #[must_use]
    pub fn expanded_count<S: PageSurface + ?Sized>(&self, surface: &S) -> usize {
        self.panels
            .iter()
            .filter(|&&p| surface.is_panel_expanded(p, self.config.expanded_class))
            .count()
    }

    /// Handles a selection of `panel`'s header.
    ///
    /// Collapses every other expanded panel, then toggles `panel`. Returns
    /// the panel's new state, or `None` if `panel` is not tracked.
    pub fn select<S: PageSurface + ?Sized>(
        &self,
        surface: &mut S,
        panel: PanelId,
    ) -> Option<PanelState> {
        if !self.panels.contains(&panel) {
            return None;
        }
        let class = self.config.expanded_class;

        let mut collapsed_siblings = 0;
        for &other in &self.panels {
            if other != panel && surface.is_panel_expanded(other, class) {
                surface.set_panel_expanded(other, class, false);
                collapsed_siblings += 1;
            }
        }

        let state = PanelState::from_expanded(!surface.is_panel_expanded(panel, class));
        surface.set_panel_expanded(panel, class, state.is_expanded());

        self.sink.borrow_mut().on_panel_toggled(&PanelToggledEvent {
            panel,
            state,
            collapsed_siblings,
        });
        Some(state)
    }

    /// Registers a header click handler for every tracked panel.
    pub fn install<S, E>(self, surface: S, events: &E)
    where
        S: PageSurface + Clone + 'static,
        E: EventSource + ?Sized,
    {
        let header_selector = self.config.header_selector;
        let this = Rc::new(self);
        for &panel in &this.panels {
            let controller = Rc::clone(&this);
            let mut surface = surface.clone();
            events.on_panel_header(
                panel,
                header_selector,
                Box::new(move || {
                    controller.select(&mut surface, panel);
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use crate::testing::MemorySurface;

    const CONFIG: AccordionConfig = AccordionConfig {
        item_selector: ".faq-item",
        header_selector: ".faq-question",
        expanded_class: "active",
    };

    #[test]
    fn select_expands_collapsed_panel() {
        let mut page = MemorySurface::with_panels(&[false, false, false]);
        let acc = AccordionController::from_surface(CONFIG, &mut page);
        assert_eq!(acc.select(&mut page, PanelId(1)), Some(PanelState::Expanded));
        assert_eq!(page.panels, [false, true, false]);
    }

    #[test]
    fn select_expanded_panel_collapses_it() {
        let mut page = MemorySurface::with_panels(&[false, true, false]);
        let acc = AccordionController::from_surface(CONFIG, &mut page);
        assert_eq!(
            acc.select(&mut page, PanelId(1)),
            Some(PanelState::Collapsed),
            "selection toggles rather than always expanding"
        );
        assert_eq!(page.panels, [false, false, false]);
    }

    #[test]
    fn select_collapses_siblings_even_if_several_start_open() {
        let mut page = MemorySurface::with_panels(&[true, false, true, true]);
        let acc = AccordionController::from_surface(CONFIG, &mut page);
        acc.select(&mut page, PanelId(1));
        assert_eq!(page.panels, [false, true, false, false]);
        assert_eq!(acc.expanded_count(&page), 1);
    }

    #[test]
    fn untracked_panel_is_ignored() {
        let mut page = MemorySurface::with_panels(&[true, false]);
        let acc = AccordionController::new(CONFIG, vec![PanelId(0)]);
        assert_eq!(acc.select(&mut page, PanelId(1)), None);
        assert_eq!(page.panels, [true, false]);
    }

    #[test]
    fn at_most_one_expanded_after_any_sequence() {
        let mut page = MemorySurface::with_panels(&[false; 5]);
        let acc = AccordionController::from_surface(CONFIG, &mut page);
        let clicks = [0, 0, 3, 4, 4, 4, 1, 2, 2, 0, 3, 3];
        for &c in &clicks {
            acc.select(&mut page, PanelId(c));
            assert!(acc.expanded_count(&page) <= 1, "after clicking {c}");
        }
    }
}
