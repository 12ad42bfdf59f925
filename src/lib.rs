// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// wallcrop: multi-monitor wallpaper crop selection engine.
//
// The crate owns the selection geometry: the normalized selection model,
// the workstation bounding box, and the mapping between wallpaper,
// workstation, and canvas coordinates. A GUI front end is an external
// collaborator that forwards semantic input events to [`app::Session`] and
// reads selection state back for drawing.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod wallpaper;
