//! Subcommand implementations. Each returns the text to print.

use std::fmt::Write as _;
use std::sync::Arc;

use casement_common::{Geometry, Result, ScreenSize, WindowOptions};
use casement_config::CasementConfig;
use casement_windows::{
    FileCache, HostMessage, LayoutOptions, LayoutPresets, RecordingSink, WindowGroupStateManager,
    WindowHandle, WindowManager, WindowPresets,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::cli::PlanArgs;

/// Group name used for planned windows.
pub const PLAN_GROUP: &str = "plan";

#[derive(Debug, Serialize)]
pub struct PlacementRow {
    pub label: String,
    #[serde(flatten)]
    pub geometry: Geometry,
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub preset: String,
    pub screen: ScreenSize,
    pub placements: Vec<PlacementRow>,
    pub messages: Vec<HostMessage>,
}

/// Lay out `args.windows` fresh windows with a preset and report where
/// each one ends up.
pub fn plan(config: &CasementConfig, args: &PlanArgs) -> Result<PlanReport> {
    let sink = Arc::new(RecordingSink::new());
    let mut manager = WindowManager::from_config(config).with_host(sink.clone());
    if let Some(screen) = args.screen {
        manager = manager.with_screen(screen);
    }

    let labels: Vec<String> = (1..=args.windows).map(|i| format!("w{i}")).collect();
    let windows = labels
        .iter()
        .map(|label| (label.clone(), WindowOptions::default()));

    let mut options = LayoutOptions::new();
    if let Some(columns) = args.columns {
        options.insert("columns".into(), json!(columns));
    }

    {
        let mut group = manager.create_group_with_windows(PLAN_GROUP, windows)?;
        group.apply_layout_with_transition(&args.preset, options, args.animate)?;
    }
    debug!(preset = %args.preset, windows = labels.len(), "layout planned");

    if args.save {
        let path = match &config.persistence.cache_path {
            Some(path) => path.clone(),
            None => FileCache::default_path()?,
        };
        let mut states =
            WindowGroupStateManager::from_config(FileCache::new(&path), &config.persistence);
        states.auto_save_all(&mut manager)?;
        info!(path = %path.display(), "planned group saved");
    }

    let placements = labels
        .iter()
        .filter_map(|label| {
            manager.get(label).map(|window| PlacementRow {
                label: label.clone(),
                geometry: window.options().frame_or_default(),
                visible: window.is_visible(),
            })
        })
        .collect();

    Ok(PlanReport {
        preset: args.preset.clone(),
        screen: manager.screen(),
        placements,
        messages: sink.take(),
    })
}

pub fn render_plan(report: &PlanReport, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} on {}x{}",
        report.preset, report.screen.width, report.screen.height
    );
    let _ = writeln!(out, "{:<8} {:>6} {:>6} {:>6} {:>6}", "window", "x", "y", "width", "height");
    for row in &report.placements {
        let g = row.geometry;
        let _ = writeln!(
            out,
            "{:<8} {:>6} {:>6} {:>6} {:>6}",
            row.label, g.x, g.y, g.width, g.height
        );
    }
    for message in &report.messages {
        let _ = writeln!(out, "{}", serde_json::to_string(message)?);
    }
    Ok(out)
}

/// Names of the built-in layout and window presets.
pub fn presets(config: &CasementConfig) -> String {
    let layouts = LayoutPresets::new();
    let windows = WindowPresets::new(config.screen.size());
    let mut out = String::new();
    let _ = writeln!(out, "layout presets: {}", layouts.presets().join(", "));
    let _ = writeln!(out, "window presets: {}", windows.presets().join(", "));
    let transitions: Vec<&str> = config.transitions.presets.keys().map(String::as_str).collect();
    let _ = writeln!(out, "transition presets: {}", transitions.join(", "));
    out
}
