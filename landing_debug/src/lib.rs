// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for landing page diagnostics.
//!
//! This crate provides [`InteractionSink`](landing_core::trace::InteractionSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: an in-memory log of owned
//!   [`recorder::RecordedEvent`] values.
//! - [`json::export`]: writes a recorded log as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
