// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Semantic input events forwarded by the GUI collaborator.

use crate::domain::Vec2;

/// Numeric entry fields exposed by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    PositionX,
    PositionY,
    Zoom,
}

/// Discrete semantic events the GUI layer forwards to the session.
///
/// The host translates raw keyboard/pointer/layout callbacks into these;
/// the session never sees platform event types.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    // Directional movement (keyboard).
    MoveLeft { precise: bool },
    MoveRight { precise: bool },
    MoveUp { precise: bool },
    MoveDown { precise: bool },

    // Directional zoom (keyboard, scroll wheel).
    ZoomIn { precise: bool },
    ZoomOut { precise: bool },

    // Absolute entry from a numeric field. Carries the raw text; values
    // that fail to parse do not commit and only refresh the readout.
    CommitField { field: NumericField, text: String },

    // Free-form pan (primary button drag).
    PanDragStart { pointer: Vec2 },
    PanDragEnd,

    // Free-form zoom (secondary button drag).
    ZoomDragStart { pointer: Vec2 },
    ZoomDragEnd,

    // Pointer motion, shared by both drag gestures.
    PointerMoved { pointer: Vec2 },

    // Overlay toggles.
    ToggleMonitorLabels,
    ToggleUnselectedArea,

    // Host layout changes.
    CanvasResized { size: Vec2 },
}
