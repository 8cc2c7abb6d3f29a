// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as one JSON array, each element an object with a `"kind"` field plus the
//! event's own fields. Times and durations are plain millisecond numbers.

use std::io::{self, Write};

use serde_json::{Value, json};

use landing_core::accordion::PanelState;

use crate::recorder::RecordedEvent;

/// Converts one event to a JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    let kind = event.kind();
    match event {
        RecordedEvent::Banner(e) => json!({
            "kind": kind,
            "product": e.product,
            "version": e.version,
            "last_updated": e.last_updated,
            "author": e.author,
        }),
        RecordedEvent::CtaClick { href } => json!({
            "kind": kind,
            "href": href,
        }),
        RecordedEvent::BonusCard { heading } => json!({
            "kind": kind,
            "heading": heading,
        }),
        RecordedEvent::PageLoad { load_time } => json!({
            "kind": kind,
            "load_time_ms": load_time.millis(),
        }),
        RecordedEvent::CountdownExpired {
            target,
            observed_at,
            containers,
        } => json!({
            "kind": kind,
            "target_ms": target.millis(),
            "observed_at_ms": observed_at.millis(),
            "containers": containers,
        }),
        RecordedEvent::PanelToggled {
            panel,
            state,
            collapsed_siblings,
        } => json!({
            "kind": kind,
            "panel": panel.0,
            "expanded": matches!(state, PanelState::Expanded),
            "collapsed_siblings": collapsed_siblings,
        }),
        RecordedEvent::ContentFilled {
            selector,
            value,
            count,
        } => json!({
            "kind": kind,
            "selector": selector,
            "value": value,
            "count": count,
        }),
        RecordedEvent::ImageLoad { image } => json!({
            "kind": kind,
            "image": image.0,
        }),
    }
}

/// Writes `events` as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let array: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &Value::Array(array))?;
    writeln!(writer)
}
