// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory page model.
//!
//! Elements are matched by exact selector string: an element added with
//! selector `.faq-item` is returned by `panels(".faq-item")` and by nothing
//! else. Elements with an id (slots and sections) are found by that id.
//!
//! Handlers registered through [`EventSource`] are taken out of the model
//! while they run, so they may freely call back into the page.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::mem;

use landing_core::accordion::PanelId;
use landing_core::finisher::{AnchorId, ImageId};
use landing_core::interaction::{BonusCardFacts, ClickFacts, ClickQuery, CtaFacts};
use landing_core::surface::{EventSource, PageSurface};

struct Panel {
    selector: String,
    header: Option<String>,
    classes: BTreeSet<String>,
}

struct Anchor {
    selector: String,
    href: String,
}

struct Image {
    selector: String,
    attrs: BTreeMap<String, String>,
}

type ClickHandler = Box<dyn FnMut(&ClickFacts)>;
type ImageHandler = Box<dyn FnMut(ImageId) -> bool>;

struct Observer {
    watched: BTreeSet<ImageId>,
    handler: ImageHandler,
}

#[derive(Default)]
struct Handlers {
    ready: Vec<Box<dyn FnOnce()>>,
    load: Vec<Box<dyn FnOnce()>>,
    click: Vec<(ClickQuery, ClickHandler)>,
    headers: Vec<(PanelId, Box<dyn FnMut()>)>,
    anchors: Vec<(AnchorId, Box<dyn FnMut(&str)>)>,
    observers: Vec<Observer>,
}

#[derive(Default)]
struct PageModel {
    /// Text content of every element with an id.
    ids: BTreeMap<String, String>,
    /// Inner markup of every container element, by selector.
    containers: BTreeMap<String, Vec<String>>,
    /// Text content of every placeholder element, by selector.
    placeholders: BTreeMap<String, Vec<String>>,
    panels: Vec<Panel>,
    anchors: Vec<Anchor>,
    images: Vec<Image>,
    scrolled: Vec<String>,
    id_writes: usize,
    ready: bool,
    loaded: bool,
    handlers: Handlers,
}

/// One element on the path from a click target up to the document root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TargetElement {
    selector: String,
    href: Option<String>,
    /// Text of the heading inside the element.
    heading: Option<String>,
}

/// The target of a simulated click, as its ancestor path (target first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    path: Vec<TargetElement>,
}

impl ClickTarget {
    /// A click on an element matching none of the tracked selectors.
    #[must_use]
    pub fn unrelated() -> Self {
        Self::default().within(".plain", None, None)
    }

    /// Adds an enclosing element to the path.
    #[must_use]
    pub fn within(mut self, selector: &str, href: Option<&str>, heading: Option<&str>) -> Self {
        self.path.push(TargetElement {
            selector: selector.to_string(),
            href: href.map(ToString::to_string),
            heading: heading.map(ToString::to_string),
        });
        self
    }

    /// Resolves the path against `query` the way a browser's
    /// `closest()` lookup would.
    #[must_use]
    pub fn resolve(&self, query: &ClickQuery) -> ClickFacts {
        let closest = |selector: &str| self.path.iter().find(|el| el.selector == selector);
        ClickFacts {
            cta: closest(query.cta_selector).map(|el| CtaFacts {
                href: el.href.clone(),
            }),
            bonus_card: closest(query.bonus_card_selector).map(|el| BonusCardFacts {
                heading: el.heading.clone(),
            }),
        }
    }
}

/// An in-memory page implementing [`PageSurface`] and [`EventSource`].
///
/// Clones share the same model.
#[derive(Clone, Default)]
pub struct FakePage {
    model: Rc<RefCell<PageModel>>,
}

impl fmt::Debug for FakePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model.borrow();
        f.debug_struct("FakePage")
            .field("ids", &model.ids.len())
            .field("panels", &model.panels.len())
            .field("anchors", &model.anchors.len())
            .field("images", &model.images.len())
            .field("ready", &model.ready)
            .field("loaded", &model.loaded)
            .finish_non_exhaustive()
    }
}

fn index(handle: u32) -> usize {
    usize::try_from(handle).unwrap_or(usize::MAX)
}

fn handles<T, U>(items: &[T], matches: impl Fn(&T) -> bool, handle: fn(u32) -> U) -> Vec<U> {
    (0_u32..)
        .zip(items)
        .filter(|(_, item)| matches(item))
        .map(|(i, _)| handle(i))
        .collect()
}

impl FakePage {
    /// Starts building a page.
    #[must_use]
    pub fn builder() -> PageBuilder {
        PageBuilder::default()
    }

    /// A page with the structure of the ChannelBuilder AI landing page: both
    /// countdown groups, three FAQ items, two in-page links (one dangling),
    /// two lazy images and the three placeholder kinds.
    #[must_use]
    pub fn channel_builder() -> Self {
        Self::builder()
            .slot("hours", "00")
            .slot("minutes", "00")
            .slot("seconds", "00")
            .slot("bonus-hours", "00")
            .slot("bonus-minutes", "00")
            .slot("bonus-seconds", "00")
            .container(".main-countdown")
            .container(".bonus-countdown")
            .panel(".faq-item", Some(".faq-question"), false)
            .panel(".faq-item", Some(".faq-question"), false)
            .panel(".faq-item", Some(".faq-question"), false)
            .section("features")
            .anchor("a[href^=\"#\"]", "#features")
            .anchor("a[href^=\"#\"]", "#missing")
            .lazy_image("img[loading=\"lazy\"]", Some(("data-src", "/img/hero.webp")))
            .lazy_image("img[loading=\"lazy\"]", Some(("data-src", "/img/bonus.webp")))
            .placeholders(".current-date", 1)
            .placeholders(".user-login", 2)
            .placeholders(".total-amount", 1)
            .build()
    }

    // -- driving -----------------------------------------------------------

    /// Fires the ready event. Handlers registered later run immediately.
    pub fn fire_ready(&self) {
        let tasks = {
            let mut model = self.model.borrow_mut();
            model.ready = true;
            mem::take(&mut model.handlers.ready)
        };
        for task in tasks {
            task();
        }
    }

    /// Fires the load event. Handlers registered later run immediately.
    pub fn fire_load(&self) {
        let tasks = {
            let mut model = self.model.borrow_mut();
            model.loaded = true;
            mem::take(&mut model.handlers.load)
        };
        for task in tasks {
            task();
        }
    }

    /// Clicks `target`. Returns the number of click observers notified.
    pub fn click(&self, target: &ClickTarget) -> usize {
        let mut observers = mem::take(&mut self.model.borrow_mut().handlers.click);
        for (query, handler) in &mut observers {
            handler(&target.resolve(query));
        }
        let notified = observers.len();
        let mut model = self.model.borrow_mut();
        observers.append(&mut model.handlers.click);
        model.handlers.click = observers;
        notified
    }

    /// Clicks the header of `panel`. Returns `false` if no handler is bound
    /// to it.
    pub fn click_panel_header(&self, panel: PanelId) -> bool {
        let mut headers = mem::take(&mut self.model.borrow_mut().handlers.headers);
        let mut handled = false;
        for (bound, handler) in &mut headers {
            if *bound == panel {
                handler();
                handled = true;
            }
        }
        let mut model = self.model.borrow_mut();
        headers.append(&mut model.handlers.headers);
        model.handlers.headers = headers;
        handled
    }

    /// Clicks `anchor`. Returns `true` if the default navigation was
    /// prevented.
    pub fn click_anchor(&self, anchor: AnchorId) -> bool {
        let Some(href) = self
            .model
            .borrow()
            .anchors
            .get(index(anchor.0))
            .map(|a| a.href.clone())
        else {
            return false;
        };
        let mut anchors = mem::take(&mut self.model.borrow_mut().handlers.anchors);
        let mut prevented = false;
        for (bound, handler) in &mut anchors {
            if *bound == anchor {
                handler(&href);
                prevented = true;
            }
        }
        let mut model = self.model.borrow_mut();
        anchors.append(&mut model.handlers.anchors);
        model.handlers.anchors = anchors;
        prevented
    }

    /// Scrolls `image` into view, notifying every observer watching it.
    pub fn reveal_image(&self, image: ImageId) {
        let mut observers = mem::take(&mut self.model.borrow_mut().handlers.observers);
        for observer in &mut observers {
            if observer.watched.contains(&image) && (observer.handler)(image) {
                observer.watched.remove(&image);
            }
        }
        let mut model = self.model.borrow_mut();
        observers.append(&mut model.handlers.observers);
        model.handlers.observers = observers;
    }

    // -- inspection --------------------------------------------------------

    /// Returns the text of the element with the given id.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.model.borrow().ids.get(id).cloned()
    }

    /// Returns the number of text writes to id'd elements so far.
    #[must_use]
    pub fn id_writes(&self) -> usize {
        self.model.borrow().id_writes
    }

    /// Returns the inner markup of every container matching `selector`.
    #[must_use]
    pub fn container_markup(&self, selector: &str) -> Vec<String> {
        self.model
            .borrow()
            .containers
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the text of every placeholder matching `selector`.
    #[must_use]
    pub fn placeholder_texts(&self, selector: &str) -> Vec<String> {
        self.model
            .borrow()
            .placeholders
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the panels carrying `class`.
    #[must_use]
    pub fn panels_with_class(&self, class: &str) -> Vec<PanelId> {
        handles(
            &self.model.borrow().panels,
            |p| p.classes.contains(class),
            PanelId,
        )
    }

    /// Returns the ids scrolled to, in order.
    #[must_use]
    pub fn scrolled(&self) -> Vec<String> {
        self.model.borrow().scrolled.clone()
    }

    /// Returns an attribute of `image`.
    #[must_use]
    pub fn image_attr(&self, image: ImageId, name: &str) -> Option<String> {
        self.model
            .borrow()
            .images
            .get(index(image.0))
            .and_then(|img| img.attrs.get(name).cloned())
    }

    /// Returns `true` if some observer is still watching `image`.
    #[must_use]
    pub fn is_watched(&self, image: ImageId) -> bool {
        self.model
            .borrow()
            .handlers
            .observers
            .iter()
            .any(|o| o.watched.contains(&image))
    }

    /// Returns the number of click observers registered.
    #[must_use]
    pub fn click_observers(&self) -> usize {
        self.model.borrow().handlers.click.len()
    }
}

impl PageSurface for FakePage {
    fn has_slot(&self, id: &str) -> bool {
        self.model.borrow().ids.contains_key(id)
    }

    fn set_slot_text(&mut self, id: &str, text: &str) -> bool {
        let mut model = self.model.borrow_mut();
        let Some(slot) = model.ids.get_mut(id) else {
            return false;
        };
        *slot = text.to_string();
        model.id_writes += 1;
        true
    }

    fn render_expired(&mut self, container: &str, markup: &str) -> usize {
        let mut model = self.model.borrow_mut();
        let Some(matches) = model.containers.get_mut(container) else {
            return 0;
        };
        for inner in matches.iter_mut() {
            *inner = markup.to_string();
        }
        matches.len()
    }

    fn panels(&mut self, item_selector: &str) -> Vec<PanelId> {
        handles(
            &self.model.borrow().panels,
            |p| p.selector == item_selector,
            PanelId,
        )
    }

    fn is_panel_expanded(&self, panel: PanelId, expanded_class: &str) -> bool {
        self.model
            .borrow()
            .panels
            .get(index(panel.0))
            .is_some_and(|p| p.classes.contains(expanded_class))
    }

    fn set_panel_expanded(&mut self, panel: PanelId, expanded_class: &str, expanded: bool) {
        let mut model = self.model.borrow_mut();
        let Some(p) = model.panels.get_mut(index(panel.0)) else {
            return;
        };
        if expanded {
            p.classes.insert(expanded_class.to_string());
        } else {
            p.classes.remove(expanded_class);
        }
    }

    fn fill_placeholders(&mut self, selector: &str, text: &str) -> usize {
        let mut model = self.model.borrow_mut();
        let Some(matches) = model.placeholders.get_mut(selector) else {
            return 0;
        };
        for inner in matches.iter_mut() {
            *inner = text.to_string();
        }
        matches.len()
    }

    fn scroll_to(&mut self, id: &str) -> bool {
        let mut model = self.model.borrow_mut();
        if !model.ids.contains_key(id) {
            return false;
        }
        model.scrolled.push(id.to_string());
        true
    }

    fn anchors(&mut self, selector: &str) -> Vec<AnchorId> {
        handles(
            &self.model.borrow().anchors,
            |a| a.selector == selector,
            AnchorId,
        )
    }

    fn lazy_images(&mut self, selector: &str) -> Vec<ImageId> {
        handles(
            &self.model.borrow().images,
            |img| img.selector == selector,
            ImageId,
        )
    }

    fn begin_image_load(&mut self, image: ImageId, deferred_attr: &str) -> bool {
        let mut model = self.model.borrow_mut();
        let Some(img) = model.images.get_mut(index(image.0)) else {
            return false;
        };
        let Some(src) = img.attrs.remove(deferred_attr) else {
            return false;
        };
        img.attrs.insert("src".to_string(), src);
        true
    }
}

impl EventSource for FakePage {
    fn on_ready(&self, task: Box<dyn FnOnce()>) {
        let mut model = self.model.borrow_mut();
        if model.ready {
            drop(model);
            task();
        } else {
            model.handlers.ready.push(task);
        }
    }

    fn on_load(&self, task: Box<dyn FnOnce()>) {
        let mut model = self.model.borrow_mut();
        if model.loaded {
            drop(model);
            task();
        } else {
            model.handlers.load.push(task);
        }
    }

    fn on_click(&self, query: ClickQuery, handler: Box<dyn FnMut(&ClickFacts)>) {
        self.model.borrow_mut().handlers.click.push((query, handler));
    }

    fn on_panel_header(&self, panel: PanelId, header_selector: &str, handler: Box<dyn FnMut()>) {
        let mut model = self.model.borrow_mut();
        let has_header = model
            .panels
            .get(index(panel.0))
            .is_some_and(|p| p.header.as_deref() == Some(header_selector));
        if has_header {
            model.handlers.headers.push((panel, handler));
        }
    }

    fn on_anchor_click(&self, anchor: AnchorId, handler: Box<dyn FnMut(&str)>) {
        let mut model = self.model.borrow_mut();
        if index(anchor.0) < model.anchors.len() {
            model.handlers.anchors.push((anchor, handler));
        }
    }

    fn observe_images(&self, images: &[ImageId], handler: Box<dyn FnMut(ImageId) -> bool>) {
        let mut model = self.model.borrow_mut();
        let count = model.images.len();
        let watched = images
            .iter()
            .copied()
            .filter(|img| index(img.0) < count)
            .collect();
        model.handlers.observers.push(Observer { watched, handler });
    }
}

/// Builds a [`FakePage`].
#[derive(Default)]
pub struct PageBuilder {
    model: PageModel,
}

impl fmt::Debug for PageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageBuilder").finish_non_exhaustive()
    }
}

impl PageBuilder {
    /// Adds an element with `id` and initial text.
    #[must_use]
    pub fn slot(mut self, id: &str, text: &str) -> Self {
        self.model.ids.insert(id.to_string(), text.to_string());
        self
    }

    /// Adds an empty element with `id`, such as a scroll target.
    #[must_use]
    pub fn section(self, id: &str) -> Self {
        self.slot(id, "")
    }

    /// Adds a container element matching `selector`.
    #[must_use]
    pub fn container(mut self, selector: &str) -> Self {
        self.model
            .containers
            .entry(selector.to_string())
            .or_default()
            .push(String::new());
        self
    }

    /// Adds an accordion panel matching `selector`, with a header matching
    /// `header` if given.
    #[must_use]
    pub fn panel(mut self, selector: &str, header: Option<&str>, expanded: bool) -> Self {
        let mut classes = BTreeSet::new();
        if expanded {
            classes.insert("active".to_string());
        }
        self.model.panels.push(Panel {
            selector: selector.to_string(),
            header: header.map(ToString::to_string),
            classes,
        });
        self
    }

    /// Adds a link matching `selector`.
    #[must_use]
    pub fn anchor(mut self, selector: &str, href: &str) -> Self {
        self.model.anchors.push(Anchor {
            selector: selector.to_string(),
            href: href.to_string(),
        });
        self
    }

    /// Adds an image matching `selector`, with an optional deferred source
    /// as `(attribute, url)`.
    #[must_use]
    pub fn lazy_image(mut self, selector: &str, deferred: Option<(&str, &str)>) -> Self {
        let attrs = deferred
            .map(|(attr, src)| (attr.to_string(), src.to_string()))
            .into_iter()
            .collect();
        self.model.images.push(Image {
            selector: selector.to_string(),
            attrs,
        });
        self
    }

    /// Adds `count` empty placeholder elements matching `selector`.
    #[must_use]
    pub fn placeholders(mut self, selector: &str, count: usize) -> Self {
        self.model
            .placeholders
            .entry(selector.to_string())
            .or_default()
            .extend(core::iter::repeat_n(String::new(), count));
        self
    }

    /// Finishes the page. Neither ready nor load has fired yet.
    #[must_use]
    pub fn build(self) -> FakePage {
        FakePage {
            model: Rc::new(RefCell::new(self.model)),
        }
    }
}
