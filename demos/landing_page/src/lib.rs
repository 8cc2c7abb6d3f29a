// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ChannelBuilder AI landing page script.
//!
//! Wires the browser backend into [`PageController`]: the live document as
//! page surface and event source, browser timers as task host, `Date.now()`
//! as clock, and the developer console as diagnostics sink.
//!
//! Build with: `wasm-pack build --target web demos/landing_page`
//!
//! Then serve `demos/landing_page/` and open `index.html` in a browser.
//!
//! [`PageController`]: landing_core::page::PageController

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use wasm_bindgen::prelude::*;

use landing_backend_web::{BrowserClock, ConsoleSink, DomPage, TimerHost};
use landing_core::config::PageConfig;
use landing_core::page::PageController;
use landing_core::trace::share;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let clock = BrowserClock::new(&window);
    let page = DomPage::new(window).ok_or_else(|| JsValue::from_str("no document"))?;

    let (_, sink) = share(ConsoleSink::new());
    PageController::new(PageConfig::channel_builder(), sink).install(page, TimerHost::new(), clock);
    Ok(())
}
