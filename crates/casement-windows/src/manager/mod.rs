//! The WindowManager: window registry, groups, named layouts.

mod arrange;
mod groups;
mod types;
mod windows;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::WindowHandle;
    use crate::host::{HostMessage, RecordingSink};
    use crate::layout_presets::LayoutOptions;
    use casement_common::{
        CasementError, Direction, Event, Geometry, GeometryPatch, ScreenSize, WindowError,
        WindowOptions,
    };
    use casement_config::CasementConfig;
    use std::sync::Arc;

    fn manager() -> WindowManager {
        WindowManager::new().with_screen(ScreenSize::new(1000, 800))
    }

    fn frame(mgr: &WindowManager, label: &str) -> Geometry {
        mgr.get(label).unwrap().options().frame_or_default()
    }

    #[test]
    fn create_merges_defaults() {
        let mut mgr = WindowManager::new();
        let window = mgr.create(
            "main",
            WindowOptions {
                width: Some(1024),
                title: Some("Main".into()),
                ..Default::default()
            },
        );
        assert_eq!(window.label(), "main");
        assert_eq!(window.options().width, Some(1024));
        // From the [window] defaults
        assert_eq!(window.options().height, Some(600));
        assert_eq!(window.options().resizable, Some(true));
        assert_eq!(mgr.count(), 1);
    }

    #[test]
    fn create_overwrites_existing_label() {
        let mut mgr = manager();
        mgr.create("a", WindowOptions::default().with_title("first"));
        mgr.create("a", WindowOptions::default().with_title("second"));
        assert_eq!(mgr.count(), 1);
        assert_eq!(mgr.get("a").unwrap().options().title.as_deref(), Some("second"));
    }

    #[test]
    fn from_config_uses_sections() {
        let mut config = CasementConfig::default();
        config.screen.width = 2560;
        config.window.width = 640;
        config.transitions.duration = 900;
        let mut mgr = WindowManager::from_config(&config);
        assert_eq!(mgr.screen().width, 2560);
        let window = mgr.create("a", WindowOptions::default());
        assert_eq!(window.options().width, Some(640));
        assert_eq!(window.transition_options().duration, 900);
        assert_eq!(mgr.window_presets().get("toolbar").unwrap().width, Some(2560));
    }

    #[test]
    fn lookups_return_none_for_missing() {
        let mut mgr = manager();
        assert!(mgr.get("nope").is_none());
        assert!(!mgr.close("nope"));
        assert!(!mgr.focus("nope"));
        assert!(mgr.transition("nope").is_none());
        assert!(mgr.save_window_state("nope").is_none());
        assert!(mgr.group("nope").is_none());
        assert!(!mgr.remove_group("nope"));
    }

    #[test]
    fn create_multiple_and_close_multiple() {
        let mut mgr = manager();
        let labels = mgr.create_multiple(vec![
            ("a", WindowOptions::default()),
            ("b", WindowOptions::default()),
            ("c", WindowOptions::default()),
        ]);
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(mgr.close_multiple(&["a", "b", "zzz"]), 2);
        assert_eq!(mgr.labels(), vec!["c"]);
        mgr.close_all();
        assert_eq!(mgr.count(), 0);
    }

    #[test]
    fn create_from_preset() {
        let mut mgr = manager();
        let dialog = mgr.create_dialog(None).unwrap();
        assert_eq!(dialog.label(), "dialog");
        assert_eq!(dialog.options().width, Some(500));
        assert_eq!(dialog.options().modal, Some(true));

        let side = mgr.create_from_preset("sidebar", Some("nav")).unwrap();
        assert_eq!(side.options().height, Some(800));
        assert!(mgr.get("nav").is_some());
    }

    #[test]
    fn create_from_unknown_preset_creates_nothing() {
        let mut mgr = manager();
        let err = mgr.create_from_preset("bogus", Some("x")).unwrap_err();
        assert_eq!(err, WindowError::UnknownWindowPreset("bogus".into()));
        assert_eq!(mgr.count(), 0);
    }

    #[test]
    fn focus_moves_between_windows() {
        let mut mgr = manager();
        mgr.create("a", WindowOptions::default());
        mgr.create("b", WindowOptions::default());
        assert!(mgr.focus("a"));
        assert!(mgr.focus("b"));
        assert!(!mgr.get("a").unwrap().is_focused());
        assert!(mgr.get("b").unwrap().is_focused());
        assert!(!mgr.focus("ghost"));
        assert!(mgr.get("b").unwrap().is_focused());
    }

    #[test]
    fn arrange_horizontal_and_vertical() {
        let mut mgr = manager();
        mgr.create_multiple(vec![("a", WindowOptions::default()), ("b", WindowOptions::default())]);
        mgr.arrange(&["a", "b"], Direction::Horizontal);
        assert_eq!(frame(&mgr, "b"), Geometry::new(500, 0, 500, 800));
        mgr.arrange(&["a", "b"], Direction::Vertical);
        assert_eq!(frame(&mgr, "b"), Geometry::new(0, 400, 1000, 400));
    }

    #[test]
    fn arrange_skips_unknown_without_consuming_cells() {
        let mut mgr = manager();
        mgr.create("b", WindowOptions::default());
        mgr.arrange(&["ghost", "b"], Direction::Horizontal);
        assert_eq!(frame(&mgr, "b"), Geometry::new(0, 0, 500, 800));
    }

    #[test]
    fn grid_places_in_row_major_order() {
        let mut mgr = manager();
        let labels = ["a", "b", "c"];
        for label in labels {
            mgr.create(label, WindowOptions::default());
        }
        mgr.grid(&labels, 2);
        assert_eq!(frame(&mgr, "c"), Geometry::new(0, 400, 500, 400));
    }

    #[test]
    fn swap_exchanges_geometry_only() {
        let mut mgr = manager();
        mgr.create(
            "a",
            WindowOptions {
                always_on_top: Some(true),
                ..WindowOptions::default().with_geometry(Geometry::new(1, 2, 300, 400))
            },
        );
        mgr.create(
            "b",
            WindowOptions {
                x: Some(50),
                y: Some(60),
                ..Default::default()
            },
        );
        assert!(mgr.swap("a", "b"));
        // b's size came from the [window] defaults
        assert_eq!(frame(&mgr, "a"), Geometry::new(50, 60, 800, 600));
        assert_eq!(frame(&mgr, "b"), Geometry::new(1, 2, 300, 400));
        assert_eq!(mgr.get("a").unwrap().options().always_on_top, Some(true));
        assert!(!mgr.swap("a", "missing"));
    }

    #[test]
    fn swap_defaults_missing_geometry() {
        let mut mgr = manager().with_defaults(WindowOptions::default());
        mgr.create("a", WindowOptions::default().with_geometry(Geometry::new(10, 10, 100, 100)));
        mgr.create("b", WindowOptions::default());
        mgr.swap("a", "b");
        assert_eq!(frame(&mgr, "a"), Geometry::new(0, 0, 800, 600));
    }

    #[test]
    fn master_detail_split() {
        let mut mgr = WindowManager::new();
        mgr.create("m", WindowOptions::default());
        mgr.create("d", WindowOptions::default());
        assert!(mgr.master_detail("m", "d", 0.3));
        assert_eq!(frame(&mgr, "m"), Geometry::new(0, 0, 1344, 1080));
        assert_eq!(frame(&mgr, "d"), Geometry::new(1344, 0, 576, 1080));
        assert!(!mgr.master_detail("m", "ghost", 0.3));
    }

    #[test]
    fn named_layouts() {
        let mut mgr = manager();
        mgr.create("a", WindowOptions::default());
        mgr.create("b", WindowOptions::default());
        mgr.save_layout(
            "side-by-side",
            NamedLayout::Arrange {
                windows: vec!["a".into(), "b".into()],
                direction: Direction::Horizontal,
            },
        );
        mgr.save_layout(
            "stacked",
            NamedLayout::Grid {
                windows: vec!["a".into(), "b".into()],
                columns: 1,
            },
        );
        mgr.apply_layout("side-by-side").unwrap();
        assert_eq!(frame(&mgr, "b").x, 500);
        mgr.apply_layout("stacked").unwrap();
        assert_eq!(frame(&mgr, "b"), Geometry::new(0, 400, 1000, 400));
    }

    #[test]
    fn unknown_named_layout_errors() {
        let mut mgr = manager();
        assert_eq!(
            mgr.apply_layout("nope").unwrap_err(),
            WindowError::UnknownNamedLayout("nope".into())
        );
    }

    #[test]
    fn named_layout_json_shape() {
        let layout: NamedLayout =
            serde_json::from_str(r#"{"grid": {"windows": ["a", "b", "c"]}}"#).unwrap();
        assert_eq!(
            layout,
            NamedLayout::Grid {
                windows: vec!["a".into(), "b".into(), "c".into()],
                columns: 2,
            }
        );
    }

    #[test]
    fn apply_layout_preset_on_manager() {
        let mut mgr = manager();
        mgr.create("a", WindowOptions::default());
        mgr.create("b", WindowOptions::default());
        let applied = mgr
            .apply_layout_preset("split", &["a", "b"], &LayoutOptions::new())
            .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(frame(&mgr, "b"), Geometry::new(500, 0, 500, 800));
        assert!(mgr.get("b").unwrap().is_visible());

        let err = mgr
            .apply_layout_preset("nonexistent", &["a"], &LayoutOptions::new())
            .unwrap_err();
        assert_eq!(err, WindowError::UnknownLayoutPreset("nonexistent".into()));
    }

    #[test]
    fn duplicate_group_is_rejected_until_removed() {
        let mut mgr = manager();
        mgr.create_group("g").unwrap();
        let err = mgr.create_group("g").unwrap_err();
        assert!(matches!(err, CasementError::Window(WindowError::DuplicateGroup(ref n)) if n == "g"));
        assert_eq!(err.to_string(), "window group 'g' already exists");
        assert!(mgr.remove_group("g"));
        assert!(mgr.create_group("g").is_ok());
        assert_eq!(mgr.group_count(), 1);
    }

    #[test]
    fn create_group_with_windows_adds_members() {
        let mut mgr = manager();
        let group = mgr
            .create_group_with_windows(
                "tools",
                vec![("x", WindowOptions::default()), ("y", WindowOptions::default())],
            )
            .unwrap();
        assert_eq!(group.all(), &["x".to_string(), "y".to_string()]);
        drop(group);
        assert_eq!(mgr.get("x").unwrap().options().group.as_deref(), Some("tools"));
        assert!(mgr.has_group("tools"));
    }

    #[test]
    fn closing_a_window_detaches_it_from_groups() {
        let mut mgr = manager();
        mgr.create_group_with_windows(
            "g",
            vec![("a", WindowOptions::default()), ("b", WindowOptions::default())],
        )
        .unwrap();
        mgr.close("a");
        assert_eq!(mgr.group("g").unwrap().all(), &["b".to_string()]);
    }

    #[test]
    fn transition_through_manager_emits_message() {
        let sink = Arc::new(RecordingSink::new());
        let mut mgr = manager().with_host(sink.clone());
        mgr.create("a", WindowOptions::default().with_geometry(Geometry::new(0, 0, 400, 300)));
        mgr.transition("a").unwrap().duration(500).move_to(200, 100);

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        let HostMessage::Transition(msg) = &messages[0];
        assert_eq!(msg.from, GeometryPatch::position(0, 0));
        assert_eq!(msg.to, GeometryPatch::position(200, 100));
        assert_eq!(msg.options.duration, 500);
        assert_eq!(frame(&mgr, "a"), Geometry::new(200, 100, 400, 300));
    }

    #[test]
    fn transition_preset_from_config() {
        let mut mgr = manager();
        mgr.create("a", WindowOptions::default());
        mgr.transition("a").unwrap().use_preset("instant").move_to(5, 5);
        assert!(!mgr.get("a").unwrap().transition_options().enabled);
    }

    #[test]
    fn window_state_through_manager() {
        let mut mgr = manager();
        mgr.create("a", WindowOptions::default().with_geometry(Geometry::new(1, 2, 3, 4)));
        let snapshot = mgr.save_window_state("a").unwrap();
        assert!(mgr.window_state().has("a"));
        mgr.get_mut("a").unwrap().set_position(100, 100);
        mgr.get_mut("a").unwrap().set_fullscreen(true);
        assert!(mgr.restore_window_state("a", &snapshot));
        assert_eq!(frame(&mgr, "a"), Geometry::new(1, 2, 3, 4));
        assert_eq!(mgr.get("a").unwrap().options().fullscreen, Some(false));
    }

    #[test]
    fn lifecycle_events_are_published() {
        let mut mgr = manager();
        let mut rx = mgr.events().subscribe();
        mgr.create("a", WindowOptions::default());
        mgr.create_group("g").unwrap();
        mgr.remove_group("g");
        mgr.close("a");

        let mut seen = Vec::new();
        while let Ok(event) = rx.try_recv() {
            seen.push(event);
        }
        assert!(matches!(&seen[0], Event::WindowCreated(l) if l == "a"));
        assert!(matches!(&seen[1], Event::GroupCreated(g) if g == "g"));
        assert!(matches!(&seen[2], Event::GroupRemoved(g) if g == "g"));
        assert!(matches!(&seen[3], Event::WindowClosed(l) if l == "a"));
    }
}
