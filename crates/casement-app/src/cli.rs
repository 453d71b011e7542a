use std::path::PathBuf;

use casement_common::ScreenSize;
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Casement: plan and preview window layouts.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute placements for a layout preset over N windows.
    Plan(PlanArgs),
    /// List the built-in layout and window presets.
    Presets,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PlanArgs {
    /// Layout preset name (horizontal, vertical, grid, cascade, split).
    #[arg(short, long, default_value = "grid")]
    pub preset: String,

    /// Number of windows to lay out.
    #[arg(short = 'n', long, default_value_t = 4)]
    pub windows: usize,

    /// Column count for the grid preset.
    #[arg(long)]
    pub columns: Option<usize>,

    /// Screen size as WIDTHxHEIGHT, overriding the config.
    #[arg(long, value_parser = parse_screen)]
    pub screen: Option<ScreenSize>,

    /// Emit the window.transition messages the host would receive.
    #[arg(long)]
    pub animate: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Save the planned group to the persistence cache.
    #[arg(long)]
    pub save: bool,
}

pub fn parse_screen(s: &str) -> Result<ScreenSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse::<u32>().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h.trim().parse::<u32>().map_err(|e| format!("bad height '{h}': {e}"))?;
    if width == 0 || height == 0 {
        return Err("screen dimensions must be positive".into());
    }
    Ok(ScreenSize::new(width, height))
}

pub fn parse() -> Args {
    Args::parse()
}
