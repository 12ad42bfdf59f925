// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Workstation settings: TOML schema, search path, loading, validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Monitor, Vec2, Workstation};

/// Name of the settings file searched for in the working directory and in
/// the user configuration directory.
pub const SETTINGS_FILE_NAME: &str = "wallcrop.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no settings file found (searched ./wallcrop.toml and the user config directory)")]
    NotFound,
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no workstations configured")]
    NoWorkstations,
    #[error("workstation '{0}' has no monitors configured")]
    NoMonitors(String),
    #[error("monitor '{monitor}' of workstation '{workstation}' has a non-positive {field}")]
    NonPositiveField {
        workstation: String,
        monitor: String,
        field: &'static str,
    },
    #[error("no workstation named '{0}' in settings")]
    UnknownWorkstation(String),
}

/// One monitor entry of the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorSettings {
    pub name: String,
    /// Physical size (width, height) in workstation-local units.
    pub size: (f64, f64),
    /// Physical position (x, y) of the top-left corner.
    pub position: (f64, f64),
    /// Pixel resolution (width, height).
    pub resolution: (u32, u32),
}

/// One workstation entry of the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkstationSettings {
    pub name: String,
    pub monitors: Vec<MonitorSettings>,
}

/// Root of `wallcrop.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub workstations: Vec<WorkstationSettings>,
}

impl Settings {
    /// Load settings from an explicit path, or search the default locations:
    /// `./wallcrop.toml`, then `wallcrop/wallcrop.toml` under the user
    /// configuration directory.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => Self::search_path().ok_or(SettingsError::NotFound)?,
        };

        log::info!("loading settings from {}", path.display());
        let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let settings: Settings =
            toml::from_str(&content).map_err(|source| SettingsError::Parse { path, source })?;

        settings.validate()?;
        Ok(settings)
    }

    fn search_path() -> Option<PathBuf> {
        let local = PathBuf::from(SETTINGS_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        let user = dirs::config_dir()?.join("wallcrop").join(SETTINGS_FILE_NAME);
        user.is_file().then_some(user)
    }

    /// Validate the loaded settings.
    ///
    /// Configuration failures are fatal at load time; the geometry layer is
    /// only ever handed validated workstations.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.workstations.is_empty() {
            return Err(SettingsError::NoWorkstations);
        }

        for workstation in &self.workstations {
            if workstation.monitors.is_empty() {
                return Err(SettingsError::NoMonitors(workstation.name.clone()));
            }
            for monitor in &workstation.monitors {
                let field = if monitor.size.0 <= 0.0 || monitor.size.1 <= 0.0 {
                    Some("size")
                } else if monitor.resolution.0 == 0 || monitor.resolution.1 == 0 {
                    Some("resolution")
                } else {
                    None
                };
                if let Some(field) = field {
                    return Err(SettingsError::NonPositiveField {
                        workstation: workstation.name.clone(),
                        monitor: monitor.name.clone(),
                        field,
                    });
                }
            }
        }

        Ok(())
    }

    /// Select a workstation by name, or the first one when no name is given.
    pub fn workstation(&self, name: Option<&str>) -> Result<Workstation, SettingsError> {
        let settings = match name {
            Some(name) => self
                .workstations
                .iter()
                .find(|w| w.name == name)
                .ok_or_else(|| SettingsError::UnknownWorkstation(name.to_owned()))?,
            // validate() guarantees at least one workstation.
            None => &self.workstations[0],
        };

        Ok(settings.to_domain())
    }
}

impl WorkstationSettings {
    /// Convert the settings entry into the domain model.
    pub fn to_domain(&self) -> Workstation {
        Workstation {
            name: self.name.clone(),
            monitors: self
                .monitors
                .iter()
                .map(|m| Monitor {
                    name: m.name.clone(),
                    size: Vec2::new(m.size.0, m.size.1),
                    position: Vec2::new(m.position.0, m.position.1),
                    resolution: m.resolution,
                })
                .collect(),
        }
    }
}
