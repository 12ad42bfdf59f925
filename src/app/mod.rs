// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Session layer: input events in, render-facing state out.

pub mod message;
pub mod session;

pub use message::{InputEvent, NumericField};
pub use session::{MonitorOverlay, Readouts, Session};
