// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/session.rs
//
// Headless session: applies input events to the selection and exposes the
// render-facing state.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::constant::{READOUT_PRECISION, REDRAW_FPS};
use crate::domain::{
    CanvasGeometry, CoordinateMapper, Rect, Selection, Vec2, Workstation, WorkstationBounds,
    WorkstationError, ZoomAnchor, ZoomQuadrant,
};

use super::message::{InputEvent, NumericField};

/// One monitor outline for the rendering sink, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorOverlay {
    pub rect: Rect,
    pub label: String,
}

/// Formatted values for the position/zoom entry fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    pub position_x: String,
    pub position_y: String,
    pub zoom: String,
}

/// Session state for one wallpaper/workstation pair.
///
/// Owns the selection, the coordinate mapper, the last-known-good canvas
/// geometry, and the pointer drag state. All mutation happens on the event
/// thread through [`Session::handle`]; the rendering collaborator reads
/// state back between events.
pub struct Session {
    workstation: Workstation,
    mapper: CoordinateMapper,
    selection: Selection,
    canvas: Option<CanvasGeometry>,
    dirty: Rc<Cell<bool>>,
    redraw_pending: bool,
    show_monitor_labels: bool,
    show_unselected_area: bool,
    pan_active: bool,
    zoom_drag: Option<ZoomQuadrant>,
    last_pointer: Vec2,
}

impl Session {
    pub fn new(workstation: Workstation, aspect_ratio: f64) -> Result<Self, WorkstationError> {
        let bounds = WorkstationBounds::of(&workstation)?;

        let mut selection = Selection::new(aspect_ratio);
        let dirty = Rc::new(Cell::new(false));
        let dirty_in_listener = Rc::clone(&dirty);
        selection.register_onchange_handler(move || dirty_in_listener.set(true));

        Ok(Self {
            workstation,
            mapper: CoordinateMapper::new(bounds),
            selection,
            canvas: None,
            dirty,
            redraw_pending: false,
            show_monitor_labels: false,
            show_unselected_area: true,
            pan_active: false,
            zoom_drag: None,
            last_pointer: Vec2::ZERO,
        })
    }

    /// Apply one semantic input event.
    ///
    /// Returns `true` when the host should schedule a redraw callback:
    /// the event changed visible state and no redraw is pending yet, so
    /// bursts of input collapse into at most one pending redraw.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MoveLeft { precise } => self.selection.move_left(precise),
            InputEvent::MoveRight { precise } => self.selection.move_right(precise),
            InputEvent::MoveUp { precise } => self.selection.move_up(precise),
            InputEvent::MoveDown { precise } => self.selection.move_down(precise),

            InputEvent::ZoomIn { precise } => {
                self.selection.zoom_increase(precise, ZoomAnchor::Center);
            }
            InputEvent::ZoomOut { precise } => {
                self.selection.zoom_decrease(precise, ZoomAnchor::Center);
            }

            InputEvent::CommitField { field, text } => self.commit_field(field, &text),

            InputEvent::PanDragStart { pointer } => {
                self.pan_active = true;
                self.last_pointer = pointer;
            }
            InputEvent::PanDragEnd => self.pan_active = false,

            InputEvent::ZoomDragStart { pointer } => {
                if let Some(canvas) = self.canvas {
                    self.zoom_drag = Some(CoordinateMapper::zoom_quadrant(
                        pointer,
                        &self.selection,
                        canvas,
                    ));
                }
                self.last_pointer = pointer;
            }
            InputEvent::ZoomDragEnd => self.zoom_drag = None,

            InputEvent::PointerMoved { pointer } => self.pointer_moved(pointer),

            InputEvent::ToggleMonitorLabels => {
                self.show_monitor_labels = !self.show_monitor_labels;
                self.dirty.set(true);
            }
            InputEvent::ToggleUnselectedArea => {
                self.show_unselected_area = !self.show_unselected_area;
                self.dirty.set(true);
            }

            InputEvent::CanvasResized { size } => self.canvas_resized(size),
        }

        if self.dirty.take() {
            self.schedule_redraw()
        } else {
            false
        }
    }

    fn pointer_moved(&mut self, pointer: Vec2) {
        if let Some(canvas) = self.canvas {
            if self.pan_active {
                let delta = CoordinateMapper::pointer_delta_to_normalized(
                    pointer - self.last_pointer,
                    canvas,
                );
                self.selection.move_by(delta, true);
            }

            if let Some(quadrant) = self.zoom_drag {
                let sample = CoordinateMapper::zoom_sample(
                    quadrant,
                    self.last_pointer,
                    pointer,
                    canvas,
                );
                self.selection.zoom_by(sample, quadrant.anchor());
            }
        }

        self.last_pointer = pointer;
    }

    fn commit_field(&mut self, field: NumericField, text: &str) {
        // Non-finite values ("nan", "inf") parse but are not valid entries.
        match text.trim().parse::<f64>().ok().filter(|v| v.is_finite()) {
            Some(value) => {
                let position = self.selection.position();
                match field {
                    NumericField::PositionX => {
                        self.selection.set_position(Vec2::new(value, position.y));
                    }
                    NumericField::PositionY => {
                        self.selection.set_position(Vec2::new(position.x, value));
                    }
                    NumericField::Zoom => self.selection.set_zoom(value, ZoomAnchor::Center),
                }
            }
            None => {
                // Invalid entry does not commit; redraw to restore the
                // last-known-good readout.
                log::debug!("ignoring invalid numeric entry {text:?} for {field:?}");
                self.dirty.set(true);
            }
        }
    }

    fn canvas_resized(&mut self, size: Vec2) {
        match CanvasGeometry::compute(size, self.selection.aspect_ratio()) {
            Some(canvas) => {
                self.canvas = Some(canvas);
                self.dirty.set(true);
            }
            // Transient pre-layout size; keep the prior geometry.
            None => log::debug!("skipping degenerate canvas size {size:?}"),
        }
    }

    fn schedule_redraw(&mut self) -> bool {
        if self.redraw_pending {
            return false;
        }
        self.redraw_pending = true;
        true
    }

    /// Called by the host once the scheduled redraw has run.
    pub fn redraw_complete(&mut self) {
        self.redraw_pending = false;
    }

    /// Interval between redraw evaluations at the target frame rate.
    pub const fn frame_interval() -> Duration {
        Duration::from_millis(1000 / REDRAW_FPS)
    }

    pub fn workstation(&self) -> &Workstation {
        &self.workstation
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn canvas(&self) -> Option<CanvasGeometry> {
        self.canvas
    }

    pub fn show_monitor_labels(&self) -> bool {
        self.show_monitor_labels
    }

    pub fn show_unselected_area(&self) -> bool {
        self.show_unselected_area
    }

    /// Per-monitor canvas rectangles and labels for the rendering sink.
    /// Empty until a usable canvas size has been established.
    pub fn monitor_overlays(&self) -> Vec<MonitorOverlay> {
        let Some(canvas) = self.canvas else {
            return Vec::new();
        };

        self.workstation
            .monitors
            .iter()
            .map(|monitor| MonitorOverlay {
                rect: self.mapper.monitor_canvas_rect(monitor, &self.selection, canvas),
                label: monitor.label(),
            })
            .collect()
    }

    /// Formatted position/zoom values for the numeric entry fields.
    pub fn readouts(&self) -> Readouts {
        let position = self.selection.position();
        Readouts {
            position_x: format!("{:.*}", READOUT_PRECISION, position.x),
            position_y: format!("{:.*}", READOUT_PRECISION, position.y),
            zoom: format!("{:.*}", READOUT_PRECISION, self.selection.zoom()),
        }
    }
}
