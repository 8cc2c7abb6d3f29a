// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`PageSurface`] for unit tests.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::accordion::PanelId;
use crate::finisher::{AnchorId, ImageId};
use crate::surface::PageSurface;

#[derive(Debug, Default)]
pub(crate) struct MemoryImage {
    pub(crate) deferred: Option<String>,
    pub(crate) src: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct MemorySurface {
    pub(crate) slots: BTreeMap<String, String>,
    pub(crate) containers: BTreeMap<String, String>,
    pub(crate) panels: Vec<bool>,
    pub(crate) placeholders: BTreeMap<String, Vec<String>>,
    pub(crate) scroll_targets: Vec<String>,
    pub(crate) scrolled: Vec<String>,
    pub(crate) anchor_count: u32,
    pub(crate) images: Vec<MemoryImage>,
    pub(crate) slot_writes: usize,
}

impl MemorySurface {
    pub(crate) fn with_slots(ids: &[&str]) -> Self {
        Self {
            slots: ids.iter().map(|id| (id.to_string(), String::new())).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn with_containers(mut self, selectors: &[&str]) -> Self {
        self.containers = selectors
            .iter()
            .map(|s| (s.to_string(), String::new()))
            .collect();
        self
    }

    pub(crate) fn with_panels(expanded: &[bool]) -> Self {
        Self {
            panels: expanded.to_vec(),
            ..Self::default()
        }
    }

    pub(crate) fn slot(&self, id: &str) -> &str {
        self.slots.get(id).map_or("", String::as_str)
    }
}

impl PageSurface for MemorySurface {
    fn has_slot(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    fn set_slot_text(&mut self, id: &str, text: &str) -> bool {
        let Some(slot) = self.slots.get_mut(id) else {
            return false;
        };
        *slot = text.to_string();
        self.slot_writes += 1;
        true
    }

    fn render_expired(&mut self, container: &str, markup: &str) -> usize {
        match self.containers.get_mut(container) {
            Some(c) => {
                *c = markup.to_string();
                1
            }
            None => 0,
        }
    }

    fn panels(&mut self, _item_selector: &str) -> Vec<PanelId> {
        (0_u32..).zip(&self.panels).map(|(i, _)| PanelId(i)).collect()
    }

    fn is_panel_expanded(&self, panel: PanelId, _expanded_class: &str) -> bool {
        self.panels.get(panel.0 as usize).copied().unwrap_or(false)
    }

    fn set_panel_expanded(&mut self, panel: PanelId, _expanded_class: &str, expanded: bool) {
        if let Some(flag) = self.panels.get_mut(panel.0 as usize) {
            *flag = expanded;
        }
    }

    fn fill_placeholders(&mut self, selector: &str, text: &str) -> usize {
        let Some(matches) = self.placeholders.get_mut(selector) else {
            return 0;
        };
        for m in matches.iter_mut() {
            *m = text.to_string();
        }
        matches.len()
    }

    fn scroll_to(&mut self, id: &str) -> bool {
        if self.scroll_targets.iter().any(|t| t == id) {
            self.scrolled.push(id.to_string());
            true
        } else {
            false
        }
    }

    fn anchors(&mut self, _selector: &str) -> Vec<AnchorId> {
        (0..self.anchor_count).map(AnchorId).collect()
    }

    fn lazy_images(&mut self, _selector: &str) -> Vec<ImageId> {
        (0_u32..).zip(&self.images).map(|(i, _)| ImageId(i)).collect()
    }

    fn begin_image_load(&mut self, image: ImageId, _deferred_attr: &str) -> bool {
        let Some(img) = self.images.get_mut(image.0 as usize) else {
            return false;
        };
        match img.deferred.take() {
            Some(src) => {
                img.src = Some(src);
                true
            }
            None => false,
        }
    }
}
