// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` / `setTimeout` task host.
//!
//! [`TimerHost`] schedules core tasks on the browser event loop. Repeating
//! tasks are never cleared: their JS closures are handed to the browser with
//! [`Closure::forget`] and live as long as the page.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use landing_core::surface::TaskHost;
use landing_core::time::Duration;

// Direct global bindings instead of `web_sys::Window` methods: no need to
// fetch (and unwrap) the Window object on every call.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = "now")]
    pub(crate) fn date_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, millis: i32) -> i32;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, millis: i32) -> i32;
}

/// Schedules tasks with the browser's timer functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerHost;

impl TimerHost {
    /// Creates a timer host.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TaskHost for TimerHost {
    fn repeat(&self, period: Duration, task: Box<dyn FnMut()>) {
        let closure: Closure<dyn FnMut()> = Closure::wrap(task);
        set_interval(closure.as_ref(), timer_millis(period));
        closure.forget();
    }

    fn defer(&self, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        set_timeout(&callback, 0);
    }
}

/// Clamps a duration to the `i32` millisecond range timers accept.
fn timer_millis(period: Duration) -> i32 {
    i32::try_from(period.millis().max(0)).unwrap_or(i32::MAX)
}
