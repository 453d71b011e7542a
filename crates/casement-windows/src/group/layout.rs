//! Group-native arrangements and preset-driven layouts.

use casement_common::{Event, GeometryPatch, Result, TransitionOptions};
use serde_json::json;
use tracing::debug;

use super::events::GroupEvent;
use super::GroupMut;
use crate::geometry;
use crate::handle::WindowHandle;
use crate::layout_presets::{LayoutOptions, Placement};
use crate::state::GroupStateRecord;
use crate::transition::WindowTransition;

impl GroupMut<'_> {
    // -- Group-native arrangements --

    pub fn arrange_horizontal(&mut self, animate: bool) -> &mut Self {
        let frames = geometry::horizontal(self.arrange_screen(), self.group.count());
        self.place_members(frames.into_iter().map(Into::into), animate);
        self.record_layout("horizontal", LayoutOptions::new());
        self
    }

    pub fn arrange_vertical(&mut self, animate: bool) -> &mut Self {
        let frames = geometry::vertical(self.arrange_screen(), self.group.count());
        self.place_members(frames.into_iter().map(Into::into), animate);
        self.record_layout("vertical", LayoutOptions::new());
        self
    }

    pub fn arrange_grid(&mut self, columns: usize, animate: bool) -> &mut Self {
        let frames = geometry::grid(self.arrange_screen(), self.group.count(), columns);
        self.place_members(frames.into_iter().map(Into::into), animate);
        let mut options = LayoutOptions::new();
        options.insert("columns".into(), json!(columns.max(1)));
        self.record_layout("grid", options);
        self
    }

    /// Offset members diagonally. Sizes are left alone.
    pub fn arrange_cascade(&mut self, animate: bool) -> &mut Self {
        let corners = geometry::cascade(self.group.count());
        self.place_members(
            corners.into_iter().map(|(x, y)| GeometryPatch::position(x, y)),
            animate,
        );
        self.record_layout("cascade", LayoutOptions::new());
        self
    }

    fn place_members(&mut self, frames: impl Iterator<Item = GeometryPatch>, animate: bool) {
        let manager = &mut *self.manager;
        for (label, frame) in self.group.members.iter().zip(frames) {
            let Some(window) = manager.windows.get_mut(label) else {
                continue;
            };
            if animate {
                WindowTransition::new(window, manager.host.as_ref(), &manager.transition_presets)
                    .layout(frame);
            } else {
                window.apply_geometry(frame);
            }
        }
    }

    fn record_layout(&mut self, layout: &str, options: LayoutOptions) {
        self.group.current_layout = Some(layout.to_string());
        self.group.layout_options = options;
        debug!(group = %self.group.name, layout, members = self.group.count(), "group layout changed");
        self.manager.events.publish(Event::LayoutApplied {
            group: self.group.name.clone(),
            layout: layout.to_string(),
        });
        let event = GroupEvent::LayoutChanged {
            preset: layout.to_string(),
            options: self.group.layout_options.clone(),
        };
        self.group.trigger(&event);
    }

    // -- Layout presets --

    /// Apply a registered layout preset to the members, then persist the
    /// group's state. `options` are merged over the previous ones.
    pub fn apply_layout(&mut self, preset: &str, options: LayoutOptions) -> Result<()> {
        self.run_preset(preset, options, false)
    }

    /// Like [`apply_layout`](Self::apply_layout), after copying the group's
    /// transition settings onto every member with `enabled = animate`.
    pub fn apply_layout_with_transition(
        &mut self,
        preset: &str,
        options: LayoutOptions,
        animate: bool,
    ) -> Result<()> {
        let transition = TransitionOptions {
            enabled: animate,
            ..self.group.transition.clone()
        };
        for label in &self.group.members {
            if let Some(window) = self.manager.windows.get_mut(label) {
                *window.transition_options_mut() = transition.clone();
            }
        }
        self.run_preset(preset, options, animate)
    }

    fn run_preset(&mut self, preset: &str, options: LayoutOptions, animate: bool) -> Result<()> {
        let mut merged = self.group.layout_options.clone();
        merged.extend(options);
        let placements = self.manager.layout_presets.compute(
            preset,
            self.manager.screen,
            &self.group.members,
            &merged,
        )?;
        self.apply_placements(&placements, animate);
        self.record_layout(preset, merged);
        self.persist()?;
        Ok(())
    }

    fn apply_placements(&mut self, placements: &[Placement], animate: bool) {
        let manager = &mut *self.manager;
        for placement in placements {
            let Some(window) = manager.windows.get_mut(&placement.label) else {
                continue;
            };
            if animate {
                WindowTransition::new(window, manager.host.as_ref(), &manager.transition_presets)
                    .layout(placement.geometry);
                if placement.show {
                    window.show();
                }
            } else {
                placement.apply_to(window);
            }
        }
    }

    /// Write the current member state and layout to the group's store.
    pub(super) fn persist(&mut self) -> std::result::Result<(), casement_common::PersistenceError> {
        let windows = self.save_state();
        let record = GroupStateRecord::new(
            windows,
            self.group.current_layout.clone(),
            self.group.layout_options.clone(),
        );
        let name = self.group.name.clone();
        self.group.persisted.save(&name, record)
    }

    /// Apply the `cascade` layout preset.
    pub fn cascade(&mut self) -> Result<()> {
        self.apply_layout("cascade", LayoutOptions::new())
    }

    /// Apply the `split` layout preset. Does nothing unless there are
    /// exactly two members.
    pub fn split(&mut self) -> Result<()> {
        self.apply_layout("split", LayoutOptions::new())
    }

    // -- Sync --

    /// Re-apply this group's layout on another group. Returns `false` when
    /// this group has no layout yet or the target does not exist.
    pub fn sync_layout(&mut self, target: &str) -> Result<bool> {
        self.sync(target, None)
    }

    pub fn sync_layout_with_transition(&mut self, target: &str, animate: bool) -> Result<bool> {
        self.sync(target, Some(animate))
    }

    fn sync(&mut self, target: &str, animate: Option<bool>) -> Result<bool> {
        let Some(layout) = self.group.current_layout.clone() else {
            return Ok(false);
        };
        let options = self.group.layout_options.clone();

        if target == self.group.name {
            match animate {
                Some(animate) => self.apply_layout_with_transition(&layout, options, animate)?,
                None => self.apply_layout(&layout, options)?,
            }
            return Ok(true);
        }

        let Some(mut other) = self.manager.group_mut(target) else {
            debug!(group = %self.group.name, target, "sync target not found");
            return Ok(false);
        };
        match animate {
            Some(animate) => other.apply_layout_with_transition(&layout, options, animate)?,
            None => other.apply_layout(&layout, options)?,
        }
        Ok(true)
    }
}
