// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure selection-geometry core: no I/O, no platform concerns.

pub mod mapper;
pub mod selection;
pub mod vec2;
pub mod workstation;

pub use mapper::{CanvasGeometry, CoordinateMapper, Rect, ZoomQuadrant};
pub use selection::{ListenerHandle, Selection, ZoomAnchor};
pub use vec2::Vec2;
pub use workstation::{Monitor, Workstation, WorkstationBounds, WorkstationError};
