// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/workstation.rs
//
// Physical workstation model: monitors and their bounding box.

use thiserror::Error;

use super::vec2::Vec2;

/// A single physical monitor of a workstation.
///
/// Positions and sizes are in workstation-local physical units (millimeters
/// or any consistent unit); the resolution is only used for display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub name: String,
    /// Physical size (width, height).
    pub size: Vec2,
    /// Physical position of the top-left corner.
    pub position: Vec2,
    /// Pixel resolution (width, height).
    pub resolution: (u32, u32),
}

impl Monitor {
    /// Label shown on the monitor overlay: name plus resolution.
    pub fn label(&self) -> String {
        format!(
            "{}\n({}x{})",
            self.name, self.resolution.0, self.resolution.1
        )
    }
}

/// A named workstation: an ordered, non-empty sequence of monitors.
#[derive(Debug, Clone, PartialEq)]
pub struct Workstation {
    pub name: String,
    pub monitors: Vec<Monitor>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkstationError {
    #[error("workstation '{0}' has no monitors configured")]
    NoMonitors(String),
}

/// Physical bounding box enclosing all monitors of a workstation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkstationBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorkstationBounds {
    /// Compute the bounding box over all monitors.
    ///
    /// Monitor configuration is static for the session, so this runs once
    /// per workstation load. An empty monitor list is a configuration error,
    /// never a state to render.
    pub fn of(workstation: &Workstation) -> Result<Self, WorkstationError> {
        if workstation.monitors.is_empty() {
            return Err(WorkstationError::NoMonitors(workstation.name.clone()));
        }

        let mut min = Vec2::splat(f64::INFINITY);
        let mut max = Vec2::splat(f64::NEG_INFINITY);
        for monitor in &workstation.monitors {
            min = min.min(monitor.position);
            max = max.max(monitor.position + monitor.size);
        }

        Ok(Self { min, max })
    }

    /// Physical extent (width, height) of the bounding box.
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }
}
