// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selection.rs
//
// Normalized selection state: position, zoom, and change notification.

use crate::constant::{MOVE_SPEED, PRECISE_FACTOR, ZOOM_DEFAULT, ZOOM_MIN, ZOOM_SPEED};

use super::vec2::Vec2;

/// Reference point of the selection rectangle held fixed during a zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomAnchor {
    #[default]
    Center,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ZoomAnchor {
    /// Anchor point in `[0,1]²` relative to the selection rectangle.
    pub fn point(self) -> Vec2 {
        match self {
            ZoomAnchor::Center => Vec2::splat(0.5),
            ZoomAnchor::NorthWest => Vec2::new(0.0, 0.0),
            ZoomAnchor::NorthEast => Vec2::new(1.0, 0.0),
            ZoomAnchor::SouthWest => Vec2::new(0.0, 1.0),
            ZoomAnchor::SouthEast => Vec2::new(1.0, 1.0),
        }
    }
}

/// Handle returned by [`Selection::register_onchange_handler`], used to
/// unregister the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

/// The authoritative selection rectangle in normalized wallpaper space.
///
/// `position` is the top-left corner and `zoom` the side length, both in
/// `[0,1]` per axis. Every mutation falls through one clamping choke point:
/// zoom is clamped into `[ZOOM_MIN, 1]` first, then position into
/// `[0, 1 - zoom]` using the already clamped zoom. Out-of-range input is
/// corrected, never rejected; registered listeners are notified exactly once
/// per mutating call.
pub struct Selection {
    position: Vec2,
    zoom: f64,
    // Last values that passed the clamp; non-finite mutation results are
    // rolled back to these.
    committed_position: Vec2,
    committed_zoom: f64,
    aspect_ratio: f64,
    listeners: Vec<(u64, Box<dyn FnMut()>)>,
    next_listener_id: u64,
}

impl Selection {
    /// New selection at default zoom, centered in the wallpaper.
    ///
    /// `aspect_ratio` is the wallpaper's pixel width divided by its height;
    /// it compensates vertical movement so a step covers the same visual
    /// distance on both axes.
    pub fn new(aspect_ratio: f64) -> Self {
        let position = Vec2::splat((1.0 - ZOOM_DEFAULT) / 2.0);
        Self {
            position,
            zoom: ZOOM_DEFAULT,
            committed_position: position,
            committed_zoom: ZOOM_DEFAULT,
            aspect_ratio,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Center of the selection rectangle in normalized wallpaper space.
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.zoom / 2.0)
    }

    /// Subscribe a listener invoked after every mutation. Iteration order
    /// across listeners is unspecified.
    pub fn register_onchange_handler(
        &mut self,
        callback: impl FnMut() + 'static,
    ) -> ListenerHandle {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(callback)));
        ListenerHandle(id)
    }

    /// Remove a previously registered listener. Unknown handles are ignored.
    pub fn unregister_onchange_handler(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|(id, _)| *id != handle.0);
    }

    /// Set the position directly; clamping is the defined correction.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.on_change();
    }

    /// Add `delta` to the position.
    ///
    /// Unless `ignore_aspect_ratio` is set, `delta.y` is scaled by the
    /// aspect ratio first: normalization is independent per axis while the
    /// display enforces one consistent aspect ratio, so an uncompensated
    /// vertical step would cover a different visual distance than a
    /// horizontal one. Pointer drags pass `ignore_aspect_ratio = true`
    /// because their deltas are already in display proportions.
    pub fn move_by(&mut self, mut delta: Vec2, ignore_aspect_ratio: bool) {
        if !ignore_aspect_ratio {
            delta.y *= self.aspect_ratio;
        }
        self.position += delta;
        self.on_change();
    }

    pub fn move_left(&mut self, precise: bool) {
        self.move_by(Vec2::new(-Self::move_step(precise), 0.0), false);
    }

    pub fn move_right(&mut self, precise: bool) {
        self.move_by(Vec2::new(Self::move_step(precise), 0.0), false);
    }

    pub fn move_up(&mut self, precise: bool) {
        self.move_by(Vec2::new(0.0, -Self::move_step(precise)), false);
    }

    pub fn move_down(&mut self, precise: bool) {
        self.move_by(Vec2::new(0.0, Self::move_step(precise)), false);
    }

    /// Set the zoom to an absolute value, anchored at `anchor`.
    pub fn set_zoom(&mut self, zoom: f64, anchor: ZoomAnchor) {
        self.zoom_by(zoom - self.zoom, anchor);
    }

    /// Change the zoom by `delta` while keeping the anchor point of the
    /// selection rectangle visually fixed.
    ///
    /// The fixed point is `position + anchor_point * zoom`, so the position
    /// shifts by `-delta * anchor_point` per axis. The shift is isotropic;
    /// no aspect compensation applies.
    pub fn zoom_by(&mut self, delta: f64, anchor: ZoomAnchor) {
        self.zoom += delta;
        self.position += -anchor.point() * delta;
        self.on_change();
    }

    pub fn zoom_increase(&mut self, precise: bool, anchor: ZoomAnchor) {
        self.zoom_by(Self::zoom_step(precise), anchor);
    }

    pub fn zoom_decrease(&mut self, precise: bool, anchor: ZoomAnchor) {
        self.zoom_by(-Self::zoom_step(precise), anchor);
    }

    fn move_step(precise: bool) -> f64 {
        if precise {
            MOVE_SPEED * PRECISE_FACTOR
        } else {
            MOVE_SPEED
        }
    }

    fn zoom_step(precise: bool) -> f64 {
        if precise {
            ZOOM_SPEED * PRECISE_FACTOR
        } else {
            ZOOM_SPEED
        }
    }

    /// Single clamping choke point all mutations fall through.
    ///
    /// Non-finite components never commit; they roll back to the last
    /// clamped value so NaN from an overflowing delta cannot poison the
    /// state or the clamp bounds. Zoom is clamped before position so a
    /// zoom-out that would imply negative position slack is resolved
    /// before the position clamp runs.
    fn on_change(&mut self) {
        if !self.zoom.is_finite() {
            self.zoom = self.committed_zoom;
        }
        if !self.position.x.is_finite() {
            self.position.x = self.committed_position.x;
        }
        if !self.position.y.is_finite() {
            self.position.y = self.committed_position.y;
        }

        self.zoom = self.zoom.clamp(ZOOM_MIN, 1.0);
        self.position = self
            .position
            .clamp(Vec2::ZERO, Vec2::splat(1.0 - self.zoom));
        self.committed_zoom = self.zoom;
        self.committed_position = self.position;

        for (_, callback) in &mut self.listeners {
            callback();
        }
    }
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("position", &self.position)
            .field("zoom", &self.zoom)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
