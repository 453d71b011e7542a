//! Named layout functions applied to a list of window labels.
//!
//! A preset only computes [`Placement`]s; applying them is a separate step
//! so the same preset can drive direct application or animated transitions.

use std::collections::{BTreeMap, HashMap};

use casement_common::{GeometryPatch, ScreenSize, WindowError};
use serde_json::{Map, Value};
use tracing::debug;

use crate::geometry;
use crate::handle::{Window, WindowHandle};

/// Free-form parameters passed to a layout preset.
pub type LayoutOptions = Map<String, Value>;

/// Where one window should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub label: String,
    pub geometry: GeometryPatch,
    /// Make the window visible as part of the placement.
    pub show: bool,
}

impl Placement {
    pub fn new(label: impl Into<String>, geometry: impl Into<GeometryPatch>) -> Self {
        Self {
            label: label.into(),
            geometry: geometry.into(),
            show: true,
        }
    }

    pub fn apply_to<H: WindowHandle + ?Sized>(&self, window: &mut H) {
        window.apply_geometry(self.geometry);
        if self.show {
            window.show();
        }
    }
}

/// A layout function: screen, labels in order, options, to placements.
pub type LayoutFn = Box<dyn Fn(ScreenSize, &[String], &LayoutOptions) -> Vec<Placement> + Send + Sync>;

/// Registry of layout presets, seeded with the built-ins.
pub struct LayoutPresets {
    presets: BTreeMap<String, LayoutFn>,
}

impl std::fmt::Debug for LayoutPresets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutPresets")
            .field("presets", &self.presets.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for LayoutPresets {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutPresets {
    pub const BUILT_IN: [&'static str; 5] = ["horizontal", "vertical", "grid", "cascade", "split"];

    pub fn new() -> Self {
        let mut presets = Self {
            presets: BTreeMap::new(),
        };
        presets.install_built_ins();
        presets
    }

    fn install_built_ins(&mut self) {
        self.define("horizontal", |screen, labels, _| {
            place(labels, geometry::horizontal(screen, labels.len()))
        });
        self.define("vertical", |screen, labels, _| {
            place(labels, geometry::vertical(screen, labels.len()))
        });
        self.define("grid", |screen, labels, options| {
            let columns = columns_option(options)
                .unwrap_or_else(|| geometry::square_columns(labels.len()));
            place(labels, geometry::grid(screen, labels.len(), columns))
        });
        self.define("cascade", |_, labels, _| {
            let corners = geometry::cascade(labels.len())
                .into_iter()
                .map(|(x, y)| GeometryPatch::position(x, y));
            place(labels, corners)
        });
        self.define("split", |screen, labels, _| {
            if labels.len() != 2 {
                return Vec::new();
            }
            place(labels, geometry::horizontal(screen, 2))
        });
    }

    /// Register or replace a preset.
    pub fn define<F>(&mut self, name: impl Into<String>, layout: F) -> &mut Self
    where
        F: Fn(ScreenSize, &[String], &LayoutOptions) -> Vec<Placement> + Send + Sync + 'static,
    {
        self.presets.insert(name.into(), Box::new(layout));
        self
    }

    pub fn has_preset(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn remove_preset(&mut self, name: &str) -> bool {
        self.presets.remove(name).is_some()
    }

    /// Drop every custom preset, leaving only the built-ins.
    pub fn clear_presets(&mut self) {
        self.presets.clear();
        self.install_built_ins();
    }

    pub fn presets(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// Run a preset without touching any window.
    pub fn compute(
        &self,
        name: &str,
        screen: ScreenSize,
        labels: &[String],
        options: &LayoutOptions,
    ) -> Result<Vec<Placement>, WindowError> {
        let layout = self
            .presets
            .get(name)
            .ok_or_else(|| WindowError::UnknownLayoutPreset(name.to_string()))?;
        Ok(layout(screen, labels, options))
    }

    /// Compute and apply a preset to the registered windows.
    ///
    /// Unknown presets fail before any window is touched. Placements naming
    /// unregistered labels are skipped.
    pub fn apply(
        &self,
        name: &str,
        screen: ScreenSize,
        labels: &[String],
        options: &LayoutOptions,
        windows: &mut HashMap<String, Window>,
    ) -> Result<usize, WindowError> {
        let placements = self.compute(name, screen, labels, options)?;
        let mut applied = 0;
        for placement in &placements {
            match windows.get_mut(&placement.label) {
                Some(window) => {
                    placement.apply_to(window);
                    applied += 1;
                }
                None => debug!(label = %placement.label, preset = name, "placement for unknown window skipped"),
            }
        }
        Ok(applied)
    }
}

fn place<G: Into<GeometryPatch>>(labels: &[String], frames: impl IntoIterator<Item = G>) -> Vec<Placement> {
    labels
        .iter()
        .zip(frames)
        .map(|(label, frame)| Placement::new(label.clone(), frame))
        .collect()
}

/// The `columns` option, when it is a positive integer.
pub(crate) fn columns_option(options: &LayoutOptions) -> Option<usize> {
    options
        .get("columns")
        .and_then(Value::as_u64)
        .filter(|c| *c > 0)
        .map(|c| c as usize)
}
