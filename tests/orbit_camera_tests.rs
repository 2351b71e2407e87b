use classroom_viewer::camera::{OrbitController, OrbitState, MAX_RADIUS, MIN_RADIUS, PITCH_LIMIT};

#[cfg(test)]
mod orbit_camera_tests {
    use super::*;

    #[test]
    fn test_zoom_sequences_stay_inside_open_interval() {
        let mut orbit = OrbitController::default();

        for _ in 0..30 {
            orbit.apply_zoom(1.0);
            assert!(orbit.state().radius > MIN_RADIUS);
            assert!(orbit.state().radius < MAX_RADIUS);
        }
        assert_eq!(orbit.state().radius, 14.0, "zoom out saturates one short of the bound");

        for _ in 0..30 {
            orbit.apply_zoom(-1.0);
            assert!(orbit.state().radius > MIN_RADIUS);
            assert!(orbit.state().radius < MAX_RADIUS);
        }
        assert_eq!(orbit.state().radius, 6.0, "zoom in saturates one short of the bound");
    }

    #[test]
    fn test_zoom_rejects_the_upper_boundary() {
        let mut orbit = OrbitController::new(OrbitState::new(0.0, 0.0, 14.0));
        orbit.apply_zoom(1.0);
        assert_eq!(orbit.state().radius, 14.0, "candidate 15 lands on the open bound");
    }

    #[test]
    fn test_zoom_rejects_the_lower_boundary() {
        let mut orbit = OrbitController::new(OrbitState::new(0.0, 0.0, 6.0));
        orbit.apply_zoom(-1.0);
        assert_eq!(orbit.state().radius, 6.0, "candidate 5 lands on the open bound");
        orbit.apply_zoom(-1.0);
        assert_eq!(orbit.state().radius, 6.0);
    }

    #[test]
    fn test_zero_sign_zoom_changes_nothing() {
        let mut orbit = OrbitController::new(OrbitState::new(0.3, -0.2, 9.0));
        orbit.apply_zoom(0.0);
        assert_eq!(orbit.state().radius, 9.0);
    }

    #[test]
    fn test_pitch_stays_clamped_across_drag_sequences() {
        let mut orbit = OrbitController::default();
        orbit.begin_drag(0.0, 0.0);

        let mut y = 0.0;
        for step in [500.0, 500.0, -2000.0, 300.0, -50.0, 5000.0] {
            y += step;
            orbit.update_drag(0.0, y);
            assert!(orbit.state().pitch >= -PITCH_LIMIT);
            assert!(orbit.state().pitch <= PITCH_LIMIT);
        }
    }

    #[test]
    fn test_position_distance_equals_radius() {
        // Walk through a pile of reachable states; the spherical
        // reconstruction can never drift off the radius.
        let mut orbit = OrbitController::default();
        orbit.begin_drag(0.0, 0.0);

        for i in 0..50 {
            orbit.update_drag(i as f32 * 37.0, i as f32 * -13.0);
            if i % 7 == 0 {
                orbit.apply_zoom(if i % 2 == 0 { -1.0 } else { 1.0 });
            }
            let distance = orbit.resolve_position().length();
            assert!((distance - orbit.state().radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_drag_before_begin_is_ignored() {
        let mut orbit = OrbitController::default();
        orbit.update_drag(500.0, 500.0);
        assert_eq!(orbit.state().yaw, 0.0);
        assert_eq!(orbit.state().pitch, 0.0);
    }

    #[test]
    fn test_drag_after_end_is_ignored() {
        let mut orbit = OrbitController::default();
        orbit.begin_drag(100.0, 100.0);
        orbit.update_drag(150.0, 100.0);
        let yaw = orbit.state().yaw;

        orbit.end_drag();
        orbit.end_drag(); // idempotent
        orbit.update_drag(900.0, 900.0);
        assert_eq!(orbit.state().yaw, yaw);
    }

    #[test]
    fn test_resolve_position_is_idempotent() {
        let mut orbit = OrbitController::new(OrbitState::new(1.3, 0.4, 8.0));
        orbit.begin_drag(10.0, 10.0);
        orbit.update_drag(42.0, -17.0);

        let first = orbit.resolve_position();
        let second = orbit.resolve_position();
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_radian_drag_scenario() {
        // From (yaw 0, pitch 0, radius 12), a 100px horizontal drag is one
        // radian of yaw.
        let mut orbit = OrbitController::new(OrbitState::new(0.0, 0.0, 12.0));
        orbit.begin_drag(100.0, 100.0);
        orbit.update_drag(200.0, 100.0);

        assert!((orbit.state().yaw - 1.0).abs() < 1e-6);

        let position = orbit.resolve_position();
        assert!((position.x - 10.09).abs() < 0.01);
        assert!((position.z - 6.48).abs() < 0.01);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn test_begin_drag_always_succeeds() {
        let mut orbit = OrbitController::default();
        orbit.begin_drag(-50.0, 1e9);
        assert!(orbit.is_dragging());
        orbit.begin_drag(0.0, 0.0);
        assert!(orbit.is_dragging());
    }
}
