mod geometry;
mod options;
mod transition;

pub use geometry::*;
pub use options::*;
pub use transition::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_edges() {
        let g = Geometry::new(100, 50, 800, 600);
        assert_eq!(g.right(), 900);
        assert_eq!(g.bottom(), 650);
    }

    #[test]
    fn adjacent_frames_do_not_overlap() {
        let a = Geometry::new(0, 0, 500, 400);
        let b = Geometry::new(500, 0, 500, 400);
        let c = Geometry::new(499, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn geometry_patch_serializes_only_present_fields() {
        let json = serde_json::to_value(GeometryPatch::position(200, 300)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 200, "y": 300 }));

        let json = serde_json::to_value(GeometryPatch::size(800, 600)).unwrap();
        assert_eq!(json, serde_json::json!({ "width": 800, "height": 600 }));
    }

    #[test]
    fn geometry_patch_fills_from_fallback() {
        let patch = GeometryPatch {
            x: Some(10),
            width: Some(50),
            ..Default::default()
        };
        let full = patch.or(DEFAULT_FRAME);
        assert_eq!(full, Geometry::new(10, 0, 50, 600));
        assert!(GeometryPatch::default().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn screen_size_default_is_nominal_1080p() {
        let screen = ScreenSize::default();
        assert_eq!(screen, ScreenSize::new(1920, 1080));
    }

    #[test]
    fn direction_serialization() {
        let json = serde_json::to_string(&Direction::Vertical).unwrap();
        assert_eq!(json, "\"vertical\"");
        let parsed: Direction = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(parsed, Direction::Horizontal);
    }

    #[test]
    fn options_merge_applies_only_present_fields() {
        let mut base = WindowOptions {
            title: Some("Main".into()),
            width: Some(800),
            height: Some(600),
            resizable: Some(true),
            ..Default::default()
        };
        let update = WindowOptions {
            width: Some(1024),
            resizable: Some(false),
            ..Default::default()
        };
        base.merge(&update);
        assert_eq!(base.title.as_deref(), Some("Main"));
        assert_eq!(base.width, Some(1024));
        assert_eq!(base.height, Some(600));
        assert_eq!(base.resizable, Some(false));
    }

    #[test]
    fn options_use_camel_case_keys() {
        let opts = WindowOptions {
            always_on_top: Some(true),
            skip_taskbar: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "alwaysOnTop": true, "skipTaskbar": true })
        );
    }

    #[test]
    fn options_geometry_accessors() {
        let opts = WindowOptions::default().with_geometry(Geometry::new(1, 2, 3, 4));
        assert_eq!(opts.geometry(), GeometryPatch::from(Geometry::new(1, 2, 3, 4)));

        let empty = WindowOptions::default();
        assert_eq!(empty.frame_or_default(), DEFAULT_FRAME);
    }

    #[test]
    fn transition_defaults() {
        let opts = TransitionOptions::default();
        assert_eq!(opts.duration, 300);
        assert_eq!(opts.easing, "easeInOutCubic");
        assert!(opts.enabled);
    }

    #[test]
    fn transition_override_is_partial() {
        let mut opts = TransitionOptions::default();
        opts.apply_override(&TransitionOverride {
            duration: Some(150),
            ..Default::default()
        });
        assert_eq!(opts.duration, 150);
        assert_eq!(opts.easing, "easeInOutCubic");
        assert!(opts.enabled);

        opts.apply_override(&TransitionOverride {
            easing: Some("linear".into()),
            enabled: Some(false),
            ..Default::default()
        });
        assert_eq!(opts.easing, "linear");
        assert!(!opts.enabled);
    }
}
