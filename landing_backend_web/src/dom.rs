// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live document as a page surface.
//!
//! [`DomPage`] enumerates panels, anchors and lazy images with
//! `querySelectorAll` and keeps the matched elements in a registry shared by
//! all clones. Handles handed to core code are indices into that registry.
//!
//! Event listeners are never removed. Their closures are leaked with
//! [`Closure::forget`] and live as long as the page.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlAnchorElement, IntersectionObserver, IntersectionObserverEntry,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use landing_core::accordion::PanelId;
use landing_core::finisher::{AnchorId, ImageId};
use landing_core::interaction::{BonusCardFacts, ClickFacts, ClickQuery, CtaFacts};
use landing_core::surface::{EventSource, PageSurface};

#[derive(Default)]
struct Registry {
    panels: Vec<Element>,
    anchors: Vec<Element>,
    images: Vec<Element>,
}

/// The browser document, implementing [`PageSurface`] and [`EventSource`].
///
/// Clones share the same element registry.
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for DomPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("DomPage")
            .field("panels", &registry.panels.len())
            .field("anchors", &registry.anchors.len())
            .field("images", &registry.images.len())
            .finish_non_exhaustive()
    }
}

impl DomPage {
    /// Wraps the document of `window`.
    ///
    /// Returns `None` if the window has no document.
    #[must_use]
    pub fn new(window: Window) -> Option<Self> {
        let document = window.document()?;
        Some(Self {
            window,
            document,
            registry: Rc::new(RefCell::new(Registry::default())),
        })
    }

    /// Returns the wrapped window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn ready_state(&self) -> String {
        self.document.ready_state()
    }

    fn panel(&self, panel: PanelId) -> Option<Element> {
        self.registry.borrow().panels.get(index(panel.0)).cloned()
    }
}

fn index(handle: u32) -> usize {
    usize::try_from(handle).unwrap_or(usize::MAX)
}

/// Replaces `slot` with `elements` and returns one handle per element.
fn register<T>(slot: &mut Vec<Element>, elements: Vec<Element>, handle: fn(u32) -> T) -> Vec<T> {
    *slot = elements;
    (0_u32..).take(slot.len()).map(handle).collect()
}

fn same_element(a: &Element, b: &Element) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Resolves a click target against `query`.
fn click_facts(target: &Element, query: ClickQuery) -> ClickFacts {
    let cta = closest(target, query.cta_selector).map(|cta| CtaFacts {
        href: cta
            .dyn_ref::<HtmlAnchorElement>()
            .map(HtmlAnchorElement::href)
            .or_else(|| cta.get_attribute("href")),
    });
    let bonus_card = closest(target, query.bonus_card_selector).map(|card| BonusCardFacts {
        heading: card
            .query_selector(query.bonus_heading_selector)
            .ok()
            .flatten()
            .and_then(|heading| heading.text_content()),
    });
    ClickFacts { cta, bonus_card }
}

impl PageSurface for DomPage {
    fn has_slot(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_slot_text(&mut self, id: &str, text: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        element.set_text_content(Some(text));
        true
    }

    fn render_expired(&mut self, container: &str, markup: &str) -> usize {
        let containers = self.query_all(container);
        for element in &containers {
            element.set_inner_html(markup);
        }
        containers.len()
    }

    fn panels(&mut self, item_selector: &str) -> Vec<PanelId> {
        let elements = self.query_all(item_selector);
        register(&mut self.registry.borrow_mut().panels, elements, PanelId)
    }

    fn is_panel_expanded(&self, panel: PanelId, expanded_class: &str) -> bool {
        self.panel(panel)
            .is_some_and(|element| element.class_list().contains(expanded_class))
    }

    fn set_panel_expanded(&mut self, panel: PanelId, expanded_class: &str, expanded: bool) {
        let Some(element) = self.panel(panel) else {
            return;
        };
        let classes = element.class_list();
        let _ = if expanded {
            classes.add_1(expanded_class)
        } else {
            classes.remove_1(expanded_class)
        };
    }

    fn fill_placeholders(&mut self, selector: &str, text: &str) -> usize {
        let matches = self.query_all(selector);
        for element in &matches {
            element.set_text_content(Some(text));
        }
        matches.len()
    }

    fn scroll_to(&mut self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn anchors(&mut self, selector: &str) -> Vec<AnchorId> {
        let elements = self.query_all(selector);
        register(&mut self.registry.borrow_mut().anchors, elements, AnchorId)
    }

    fn lazy_images(&mut self, selector: &str) -> Vec<ImageId> {
        let elements = self.query_all(selector);
        register(&mut self.registry.borrow_mut().images, elements, ImageId)
    }

    fn begin_image_load(&mut self, image: ImageId, deferred_attr: &str) -> bool {
        let Some(element) = self.registry.borrow().images.get(index(image.0)).cloned() else {
            return false;
        };
        let Some(src) = element.get_attribute(deferred_attr) else {
            return false;
        };
        let _ = element.set_attribute("src", &src);
        let _ = element.remove_attribute(deferred_attr);
        true
    }
}

impl EventSource for DomPage {
    fn on_ready(&self, task: Box<dyn FnOnce()>) {
        if self.ready_state() != "loading" {
            task();
            return;
        }
        let callback = Closure::once_into_js(move || task());
        let _ = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    }

    fn on_load(&self, task: Box<dyn FnOnce()>) {
        if self.ready_state() == "complete" {
            task();
            return;
        }
        let callback = Closure::once_into_js(move || task());
        let _ = self
            .window
            .add_event_listener_with_callback("load", callback.unchecked_ref());
    }

    fn on_click(&self, query: ClickQuery, mut handler: Box<dyn FnMut(&ClickFacts)>) {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            handler(&click_facts(&target, query));
        }) as Box<dyn FnMut(Event)>);
        let _ = self
            .document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_panel_header(&self, panel: PanelId, header_selector: &str, handler: Box<dyn FnMut()>) {
        let Some(element) = self.panel(panel) else {
            return;
        };
        let Ok(Some(header)) = element.query_selector(header_selector) else {
            return;
        };
        let closure: Closure<dyn FnMut()> = Closure::wrap(handler);
        let _ = header.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_anchor_click(&self, anchor: AnchorId, mut handler: Box<dyn FnMut(&str)>) {
        let Some(element) = self.registry.borrow().anchors.get(index(anchor.0)).cloned() else {
            return;
        };
        let link = element.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            handler(&href);
        }) as Box<dyn FnMut(Event)>);
        let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn observe_images(&self, images: &[ImageId], handler: Box<dyn FnMut(ImageId) -> bool>) {
        let watched: Vec<(ImageId, Element)> = {
            let registry = self.registry.borrow();
            images
                .iter()
                .filter_map(|&id| registry.images.get(index(id.0)).map(|el| (id, el.clone())))
                .collect()
        };
        if watched.is_empty() {
            return;
        }
        let handler = Rc::new(RefCell::new(handler));

        let lookup = watched.clone();
        let on_visible = Rc::clone(&handler);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(&(id, _)) = lookup.iter().find(|(_, el)| same_element(el, &target))
                    else {
                        continue;
                    };
                    if on_visible.borrow_mut()(id) {
                        observer.unobserve(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                for (_, element) in &watched {
                    observer.observe(element);
                }
                callback.forget();
            }
            // Without IntersectionObserver every image counts as visible now.
            Err(_) => {
                for (id, _) in &watched {
                    handler.borrow_mut()(*id);
                }
            }
        }
    }
}
