// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// CLI entry point: load settings and wallpaper, build the session, and
// print the per-monitor crop layout for the default centered selection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wallcrop::app::Session;
use wallcrop::config::Settings;
use wallcrop::wallpaper::Wallpaper;

/// Multi-monitor wallpaper crop selection engine.
///
/// Validates the workstation settings, loads the wallpaper, and reports the
/// wallpaper region each monitor would show for the default centered
/// selection. A GUI front end links the library instead of shelling out to
/// this binary.
#[derive(Debug, Parser)]
#[command(name = "wallcrop", version, about)]
struct Args {
    /// Path to the wallpaper image.
    wallpaper: PathBuf,

    /// Overwrite the default settings file path.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Workstation to select from the settings (default: the first one).
    #[arg(short, long)]
    workstation: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    let settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    let workstation = settings.workstation(args.workstation.as_deref())?;

    let wallpaper = Wallpaper::open(&args.wallpaper)
        .with_context(|| format!("failed to load wallpaper {}", args.wallpaper.display()))?;
    let (wall_width, wall_height) = wallpaper.dimensions();
    log::info!(
        "wallpaper {}x{} (aspect ratio {:.3})",
        wall_width,
        wall_height,
        wallpaper.aspect_ratio()
    );

    let session = Session::new(workstation, wallpaper.aspect_ratio())?;
    let selection = session.selection();

    println!(
        "Workstation '{}': {} monitor(s), selection zoom {:.3} at ({:.3}, {:.3})",
        session.workstation().name,
        session.workstation().monitors.len(),
        selection.zoom(),
        selection.position().x,
        selection.position().y,
    );

    for monitor in &session.workstation().monitors {
        let rect = session.mapper().monitor_wallpaper_rect(monitor, selection);
        let x = rect.origin.x * f64::from(wall_width);
        let y = rect.origin.y * f64::from(wall_height);
        let w = rect.size.x * f64::from(wall_width);
        let h = rect.size.y * f64::from(wall_height);
        println!(
            "  {:<12} {}x{}  crop x={:.0} y={:.0} w={:.0} h={:.0}",
            monitor.name, monitor.resolution.0, monitor.resolution.1, x, y, w, h,
        );
    }

    Ok(())
}
