// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mapper.rs
//
// Mapping between normalized selection space, physical workstation space,
// and canvas pixel space.

use crate::constant::{CANVAS_DEGENERATE_SIZE, CANVAS_PADDING, ZOOM_CORNER_DISTANCE};

use super::selection::{Selection, ZoomAnchor};
use super::vec2::Vec2;
use super::workstation::{Monitor, WorkstationBounds};

/// Axis-aligned rectangle given by origin (top-left) and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Placement of the letter-boxed wallpaper preview inside the canvas.
///
/// Recomputed whenever the host window resizes; owned by the session and
/// passed into the mapper by value. Canvas sizes reported before the host
/// has established real window dimensions are rejected so the prior
/// geometry stays in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub canvas_size: Vec2,
    pub wallpaper_size: Vec2,
    pub wallpaper_offset: Vec2,
}

impl CanvasGeometry {
    /// Letter-box the wallpaper preview into `canvas_size` minus fixed
    /// padding, preserving the wallpaper aspect ratio.
    ///
    /// Returns `None` for degenerate canvas sizes, which occur transiently
    /// during window construction.
    pub fn compute(canvas_size: Vec2, aspect_ratio: f64) -> Option<Self> {
        if canvas_size.x <= CANVAS_DEGENERATE_SIZE || canvas_size.y <= CANVAS_DEGENERATE_SIZE {
            return None;
        }

        let mut wallpaper_size = Vec2::ZERO;
        wallpaper_size.x = canvas_size.x - 2.0 * CANVAS_PADDING;
        wallpaper_size.y = wallpaper_size.x / aspect_ratio;
        if wallpaper_size.y > canvas_size.y - 2.0 * CANVAS_PADDING {
            wallpaper_size.y = canvas_size.y - 2.0 * CANVAS_PADDING;
            wallpaper_size.x = wallpaper_size.y * aspect_ratio;
        }

        if wallpaper_size.x <= 0.0 || wallpaper_size.y <= 0.0 {
            return None;
        }

        Some(Self {
            canvas_size,
            wallpaper_size,
            wallpaper_offset: (canvas_size - wallpaper_size) / 2.0,
        })
    }
}

/// Canvas quadrant of the pointer relative to the selection center when a
/// zoom drag begins. Names the corner the user is pulling; the anchor held
/// fixed is the diagonally opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomQuadrant {
    pub east: bool,
    pub south: bool,
}

impl ZoomQuadrant {
    /// The selection corner held fixed while this quadrant's corner is
    /// dragged.
    pub fn anchor(self) -> ZoomAnchor {
        match (self.east, self.south) {
            (false, false) => ZoomAnchor::SouthEast,
            (true, false) => ZoomAnchor::SouthWest,
            (false, true) => ZoomAnchor::NorthEast,
            (true, true) => ZoomAnchor::NorthWest,
        }
    }

    /// The quadrant corner projected far outside the canvas, approximating
    /// an asymptotic corner along the drag diagonal.
    fn far_corner(self) -> Vec2 {
        let corner = Vec2::new(
            if self.east { 1.0 } else { 0.0 },
            if self.south { 1.0 } else { 0.0 },
        );
        (corner - Vec2::splat(0.5)) * ZOOM_CORNER_DISTANCE
    }
}

/// Translates between selection, workstation, and canvas coordinates.
///
/// Holds only the static workstation bounds; selection state and canvas
/// geometry are inputs to every query.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    bounds: WorkstationBounds,
}

impl CoordinateMapper {
    pub fn new(bounds: WorkstationBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> WorkstationBounds {
        self.bounds
    }

    /// A monitor's footprint within the full selection-at-zoom-1 extent,
    /// in normalized wallpaper units.
    ///
    /// Each axis is scaled by `zoom / extent`, so monitor overlays shrink
    /// and grow together with the selection: the selection always shows the
    /// same workstation extent, zooming only crops tighter into the
    /// wallpaper.
    pub fn monitor_footprint(&self, monitor: &Monitor, zoom: f64) -> Rect {
        let scale = Vec2::splat(zoom) / self.bounds.extent();
        Rect {
            origin: (monitor.position - self.bounds.min) * scale,
            size: monitor.size * scale,
        }
    }

    /// A monitor's on-screen rectangle over the wallpaper preview.
    pub fn monitor_canvas_rect(
        &self,
        monitor: &Monitor,
        selection: &Selection,
        canvas: CanvasGeometry,
    ) -> Rect {
        let footprint = self.monitor_footprint(monitor, selection.zoom());
        Rect {
            origin: (selection.position() + footprint.origin) * canvas.wallpaper_size
                + canvas.wallpaper_offset,
            size: footprint.size * canvas.wallpaper_size,
        }
    }

    /// A monitor's crop rectangle in normalized wallpaper space (the region
    /// of the wallpaper that ends up on this monitor).
    pub fn monitor_wallpaper_rect(&self, monitor: &Monitor, selection: &Selection) -> Rect {
        let footprint = self.monitor_footprint(monitor, selection.zoom());
        Rect {
            origin: selection.position() + footprint.origin,
            size: footprint.size,
        }
    }

    /// Convert a pointer drag delta in canvas pixels into a normalized
    /// move delta (to be applied with `ignore_aspect_ratio = true`).
    pub fn pointer_delta_to_normalized(delta: Vec2, canvas: CanvasGeometry) -> Vec2 {
        delta / canvas.wallpaper_size
    }

    /// Canvas-space center of the current selection rectangle.
    pub fn selection_center_on_canvas(selection: &Selection, canvas: CanvasGeometry) -> Vec2 {
        selection.center() * canvas.wallpaper_size + canvas.wallpaper_offset
    }

    /// Detect which corner a beginning zoom drag pulls, from the pointer
    /// position relative to the selection center.
    pub fn zoom_quadrant(
        pointer: Vec2,
        selection: &Selection,
        canvas: CanvasGeometry,
    ) -> ZoomQuadrant {
        let center = Self::selection_center_on_canvas(selection, canvas);
        ZoomQuadrant {
            east: pointer.x > center.x,
            south: pointer.y > center.y,
        }
    }

    /// Signed zoom delta for one pointer-move sample of a zoom drag.
    ///
    /// Moving closer to the quadrant's far corner zooms in, farther zooms
    /// out; the magnitude is the drag distance normalized by the displayed
    /// wallpaper's diagonal scale.
    pub fn zoom_sample(
        quadrant: ZoomQuadrant,
        last_pointer: Vec2,
        pointer: Vec2,
        canvas: CanvasGeometry,
    ) -> f64 {
        let far_corner = quadrant.far_corner();
        let direction = if (far_corner - pointer).norm() > (far_corner - last_pointer).norm() {
            -1.0
        } else {
            1.0
        };
        direction * (pointer - last_pointer).norm() / canvas.wallpaper_size.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workstation::Workstation;

    const EPS: f64 = 1e-12;

    fn assert_near(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn side_by_side_mapper() -> (CoordinateMapper, Vec<Monitor>) {
        let monitors = vec![
            Monitor {
                name: "left".to_owned(),
                size: Vec2::new(100.0, 100.0),
                position: Vec2::new(0.0, 0.0),
                resolution: (2560, 1440),
            },
            Monitor {
                name: "right".to_owned(),
                size: Vec2::new(100.0, 100.0),
                position: Vec2::new(100.0, 0.0),
                resolution: (2560, 1440),
            },
        ];
        let workstation = Workstation {
            name: "desk".to_owned(),
            monitors: monitors.clone(),
        };
        let bounds = WorkstationBounds::of(&workstation).unwrap();
        (CoordinateMapper::new(bounds), monitors)
    }

    fn full_zoom_selection() -> Selection {
        let mut selection = Selection::new(2.0);
        selection.set_zoom(1.0, ZoomAnchor::Center);
        selection
    }

    #[test]
    fn side_by_side_monitors_split_the_selection() {
        let (mapper, monitors) = side_by_side_mapper();

        let left = mapper.monitor_footprint(&monitors[0], 1.0);
        assert_eq!(left.origin, Vec2::ZERO);
        assert_eq!(left.size, Vec2::new(0.5, 1.0));

        let right = mapper.monitor_footprint(&monitors[1], 1.0);
        assert_eq!(right.origin, Vec2::new(0.5, 0.0));
        assert_eq!(right.size, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn footprints_scale_with_zoom() {
        let (mapper, monitors) = side_by_side_mapper();

        let right = mapper.monitor_footprint(&monitors[1], 0.5);
        assert_eq!(right.origin, Vec2::new(0.25, 0.0));
        assert_eq!(right.size, Vec2::new(0.25, 0.5));
    }

    #[test]
    fn monitor_canvas_rect_is_offset_and_scaled() {
        let (mapper, monitors) = side_by_side_mapper();
        let selection = full_zoom_selection();
        // Wallpaper twice as wide as tall: an 840x440 canvas letter-boxes
        // into an 800x400 display at offset (20, 20).
        let canvas = CanvasGeometry::compute(Vec2::new(840.0, 440.0), 2.0).unwrap();

        let rect = mapper.monitor_canvas_rect(&monitors[1], &selection, canvas);
        assert_near(rect.origin.x, 20.0 + 0.5 * 800.0);
        assert_near(rect.origin.y, 20.0);
        assert_near(rect.size.x, 400.0);
        assert_near(rect.size.y, 400.0);
    }

    #[test]
    fn wallpaper_rect_tracks_selection_position() {
        let (mapper, monitors) = side_by_side_mapper();
        let mut selection = Selection::new(2.0);
        selection.set_zoom(0.5, ZoomAnchor::Center);
        selection.set_position(Vec2::new(0.2, 0.1));

        let rect = mapper.monitor_wallpaper_rect(&monitors[0], &selection);
        assert_near(rect.origin.x, 0.2);
        assert_near(rect.origin.y, 0.1);
        assert_near(rect.size.x, 0.25);
        assert_near(rect.size.y, 0.5);
    }

    #[test]
    fn letterbox_pads_and_centers_wide_wallpaper() {
        let canvas = CanvasGeometry::compute(Vec2::new(840.0, 1000.0), 2.0).unwrap();
        assert_near(canvas.wallpaper_size.x, 800.0);
        assert_near(canvas.wallpaper_size.y, 400.0);
        assert_near(canvas.wallpaper_offset.x, 20.0);
        assert_near(canvas.wallpaper_offset.y, 300.0);
    }

    #[test]
    fn letterbox_clamps_to_height_when_canvas_is_short() {
        let canvas = CanvasGeometry::compute(Vec2::new(840.0, 240.0), 2.0).unwrap();
        assert_near(canvas.wallpaper_size.y, 200.0);
        assert_near(canvas.wallpaper_size.x, 400.0);
        assert_near(canvas.wallpaper_offset.x, 220.0);
    }

    #[test]
    fn degenerate_canvas_sizes_are_rejected() {
        assert_eq!(CanvasGeometry::compute(Vec2::ZERO, 2.0), None);
        assert_eq!(CanvasGeometry::compute(Vec2::splat(1.0), 2.0), None);
        // Larger than the degenerate threshold but smaller than the padding.
        assert_eq!(CanvasGeometry::compute(Vec2::splat(30.0), 2.0), None);
    }

    #[test]
    fn pointer_delta_normalizes_by_display_size() {
        let canvas = CanvasGeometry::compute(Vec2::new(840.0, 440.0), 2.0).unwrap();
        let delta =
            CoordinateMapper::pointer_delta_to_normalized(Vec2::new(80.0, 40.0), canvas);
        assert_near(delta.x, 0.1);
        assert_near(delta.y, 0.1);
    }

    #[test]
    fn zoom_quadrant_follows_pointer_relative_to_center() {
        let selection = full_zoom_selection();
        let canvas = CanvasGeometry::compute(Vec2::new(840.0, 440.0), 2.0).unwrap();
        // Selection center sits at the display center: (420, 220).

        let nw_pointer = Vec2::new(100.0, 100.0);
        let quadrant = CoordinateMapper::zoom_quadrant(nw_pointer, &selection, canvas);
        assert_eq!(
            quadrant,
            ZoomQuadrant {
                east: false,
                south: false
            }
        );
        // Pulling the nw corner holds the se corner fixed.
        assert_eq!(quadrant.anchor(), ZoomAnchor::SouthEast);

        let se_pointer = Vec2::new(800.0, 400.0);
        let quadrant = CoordinateMapper::zoom_quadrant(se_pointer, &selection, canvas);
        assert_eq!(quadrant.anchor(), ZoomAnchor::NorthWest);
    }

    #[test]
    fn zoom_sample_signs_by_distance_to_far_corner() {
        let canvas = CanvasGeometry::compute(Vec2::new(840.0, 440.0), 2.0).unwrap();
        let quadrant = ZoomQuadrant {
            east: true,
            south: true,
        };

        // Toward the far se corner: zoom in.
        let sample = CoordinateMapper::zoom_sample(
            quadrant,
            Vec2::new(500.0, 300.0),
            Vec2::new(530.0, 340.0),
            canvas,
        );
        assert_near(sample, 50.0 / Vec2::new(800.0, 400.0).norm());

        // Away from it: zoom out.
        let sample = CoordinateMapper::zoom_sample(
            quadrant,
            Vec2::new(530.0, 340.0),
            Vec2::new(500.0, 300.0),
            canvas,
        );
        assert_near(sample, -50.0 / Vec2::new(800.0, 400.0).norm());
    }
}
