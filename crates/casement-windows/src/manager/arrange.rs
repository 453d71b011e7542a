//! Manager-level arrangement over arbitrary label lists.

use casement_common::{Direction, Geometry, WindowError};
use tracing::debug;

use super::{NamedLayout, WindowManager};
use crate::geometry;
use crate::handle::WindowHandle;
use crate::layout_presets::LayoutOptions;

impl WindowManager {
    /// Divide the screen equally among `labels` along `direction`.
    ///
    /// Cells are sized for every label given; unregistered labels are
    /// skipped without consuming a cell.
    pub fn arrange<S: AsRef<str>>(&mut self, labels: &[S], direction: Direction) {
        let frames = match direction {
            Direction::Horizontal => geometry::horizontal(self.screen, labels.len()),
            Direction::Vertical => geometry::vertical(self.screen, labels.len()),
        };
        self.place_existing(labels, frames);
    }

    /// Row-major grid over `labels`.
    pub fn grid<S: AsRef<str>>(&mut self, labels: &[S], columns: usize) {
        let frames = geometry::grid(self.screen, labels.len(), columns);
        self.place_existing(labels, frames);
    }

    fn place_existing<S: AsRef<str>>(&mut self, labels: &[S], frames: Vec<Geometry>) {
        let mut frames = frames.into_iter();
        for label in labels {
            let label = label.as_ref();
            match self.windows.get_mut(label) {
                Some(window) => {
                    if let Some(frame) = frames.next() {
                        window.apply_geometry(frame.into());
                    }
                }
                None => debug!(label, "arrange skipped unknown window"),
            }
        }
    }

    /// Exchange the frames of two windows. Flags are left alone.
    pub fn swap(&mut self, a: &str, b: &str) -> bool {
        let (Some(first), Some(second)) = (self.windows.get(a), self.windows.get(b)) else {
            return false;
        };
        let first_frame = first.options().frame_or_default();
        let second_frame = second.options().frame_or_default();
        if let Some(window) = self.windows.get_mut(a) {
            window.apply_geometry(second_frame.into());
        }
        if let Some(window) = self.windows.get_mut(b) {
            window.apply_geometry(first_frame.into());
        }
        true
    }

    /// Master window on the left, detail taking `ratio` of the width on the right.
    pub fn master_detail(&mut self, master: &str, detail: &str, ratio: f64) -> bool {
        if !self.windows.contains_key(master) || !self.windows.contains_key(detail) {
            return false;
        }
        let (master_frame, detail_frame) = geometry::master_detail(self.screen, ratio);
        if let Some(window) = self.windows.get_mut(master) {
            window.apply_geometry(master_frame.into());
        }
        if let Some(window) = self.windows.get_mut(detail) {
            window.apply_geometry(detail_frame.into());
        }
        true
    }

    /// Apply a layout preset directly to `labels`.
    pub fn apply_layout_preset<S: AsRef<str>>(
        &mut self,
        name: &str,
        labels: &[S],
        options: &LayoutOptions,
    ) -> Result<usize, WindowError> {
        let labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self.layout_presets
            .apply(name, self.screen, &labels, options, &mut self.windows)
    }

    // -- Named layouts --

    pub fn save_layout(&mut self, name: impl Into<String>, layout: NamedLayout) -> &mut Self {
        self.named_layouts.insert(name.into(), layout);
        self
    }

    pub fn remove_layout(&mut self, name: &str) -> bool {
        self.named_layouts.remove(name).is_some()
    }

    pub fn apply_layout(&mut self, name: &str) -> Result<(), WindowError> {
        let layout = self
            .named_layouts
            .get(name)
            .cloned()
            .ok_or_else(|| WindowError::UnknownNamedLayout(name.to_string()))?;
        match &layout {
            NamedLayout::Arrange { windows, direction } => self.arrange(windows, *direction),
            NamedLayout::Grid { windows, columns } => self.grid(windows, *columns),
        }
        debug!(layout = name, "named layout applied");
        Ok(())
    }
}
