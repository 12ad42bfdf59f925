// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Default selection zoom on session creation (fraction of the wallpaper).
pub const ZOOM_DEFAULT: f64 = 0.75;

/// Smallest selectable zoom; the selection never shrinks below this.
pub const ZOOM_MIN: f64 = 0.1;

/// Zoom step per key press or scroll tick.
pub const ZOOM_SPEED: f64 = 0.01;

/// Movement step per key press, in normalized wallpaper units.
pub const MOVE_SPEED: f64 = 0.01;

/// Scale applied to move/zoom steps when the precise modifier is held.
pub const PRECISE_FACTOR: f64 = 0.1;

/// Target rate for coalesced redraw evaluation, in frames per second.
pub const REDRAW_FPS: u64 = 60;

/// Fixed padding around the letter-boxed wallpaper preview, in pixels.
pub const CANVAS_PADDING: f64 = 20.0;

/// Canvas sizes at or below this are transient pre-layout values and are
/// skipped when recomputing display geometry.
pub const CANVAS_DEGENERATE_SIZE: f64 = 1.0;

/// Distance of the virtual zoom corner used for distance-based zoom
/// direction detection, in canvas pixels.
pub const ZOOM_CORNER_DISTANCE: f64 = 1e9;

/// Decimal places shown in the position/zoom numeric readouts.
pub const READOUT_PRECISION: usize = 3;
