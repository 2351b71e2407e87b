use std::f32::consts::PI;

use classroom_viewer::config::LayoutConfig;
use classroom_viewer::scenes::build_classroom;
use classroom_viewer::types::Shape;

/// Props that exist regardless of the desk grid: floor + grid lines +
/// shell, six light fixtures, three screens, two racks, the professor.
const FIXED_PROPS: usize = 1 + 26 + 5 + 6 + 6 + 12 + 4;
/// Desk + chair + student parts per occupied seat.
const PROPS_PER_DESK: usize = 5 + 6 + 7;

#[cfg(test)]
mod classroom_scene_tests {
    use super::*;

    #[test]
    fn test_default_scene_shape() {
        let (scene, driver) = build_classroom(&LayoutConfig::default());

        assert_eq!(scene.props.len(), FIXED_PROPS + 9 * PROPS_PER_DESK);
        assert_eq!(scene.lights.len(), 6);
        assert_eq!(scene.ambient, 0.3);
        assert_eq!(driver.len(), 1, "only the professor animates");
    }

    #[test]
    fn test_one_head_per_student_plus_professor() {
        let (scene, _) = build_classroom(&LayoutConfig::default());
        assert_eq!(scene.count_of(Shape::Sphere), 9 + 1);
    }

    #[test]
    fn test_grid_size_drives_desk_count() {
        let config = LayoutConfig {
            desk_rows: 2,
            desk_cols: 4,
            ..LayoutConfig::default()
        };
        let (scene, _) = build_classroom(&config);

        assert_eq!(scene.props.len(), FIXED_PROPS + 8 * PROPS_PER_DESK);
        assert_eq!(scene.count_of(Shape::Sphere), 8 + 1);
    }

    #[test]
    fn test_translucent_props_are_exactly_the_shell() {
        let (scene, _) = build_classroom(&LayoutConfig::default());
        // Four walls plus the ceiling; everything else is opaque.
        assert_eq!(scene.translucent_count(), 5);
        for prop in scene.props.iter().filter(|p| p.is_translucent()) {
            assert_eq!(prop.shape, Shape::Cuboid);
            assert_eq!(prop.opacity, 0.3);
        }
    }

    #[test]
    fn test_props_stay_inside_the_room() {
        let (scene, _) = build_classroom(&LayoutConfig::default());
        for prop in &scene.props {
            assert!(prop.position.x.abs() <= 6.1, "x out of room: {:?}", prop.position);
            assert!(prop.position.z.abs() <= 7.55, "z out of room: {:?}", prop.position);
            assert!(prop.position.y >= -0.1 && prop.position.y <= 4.05);
        }
    }

    #[test]
    fn test_screens_and_leds_glow() {
        let (scene, _) = build_classroom(&LayoutConfig::default());
        let emissive = scene.props.iter().filter(|p| p.emissive > 0.0).count();
        // 9 desk monitors, 3 wall panels, 6 light fixtures, plus up to 10
        // rack LEDs whose hashed brightness may land on zero.
        assert!(emissive >= 9 + 3 + 6);
    }

    #[test]
    fn test_professor_pose_is_a_function_of_time() {
        let config = LayoutConfig::default();
        let (mut a, mut driver_a) = {
            let (scene, driver) = build_classroom(&config);
            (scene, driver)
        };
        let (mut b, mut driver_b) = {
            let (scene, driver) = build_classroom(&config);
            (scene, driver)
        };

        // Drive the two scenes along different histories to the same time.
        driver_a.run(0.5, &mut a.props);
        driver_a.run(7.25, &mut a.props);
        driver_b.run(7.25, &mut b.props);

        let start = a.props.len() - 4;
        for i in start..a.props.len() {
            assert_eq!(a.props[i].position, b.props[i].position);
            assert_eq!(a.props[i].rotation, b.props[i].rotation);
        }
    }

    #[test]
    fn test_professor_paces_across_the_front() {
        let (mut scene, mut driver) = build_classroom(&LayoutConfig::default());
        let body = scene.props.len() - 4;

        // At t = pi the pace offset sin(t/2)*3 peaks at +3 from base x = -3.
        driver.run(PI, &mut scene.props);
        assert!(scene.props[body].position.x.abs() < 1e-3);

        // The walk never leaves the pacing strip.
        for i in 0..200 {
            let t = i as f32 * 0.173;
            driver.run(t, &mut scene.props);
            let x = scene.props[body].position.x;
            assert!((-6.01..=0.01).contains(&x), "body strayed to x = {x} at t = {t}");
        }
    }

    #[test]
    fn test_desks_are_centered_on_the_room_axis() {
        let (scene, _) = build_classroom(&LayoutConfig::default());
        // Heads mirror the desk columns, so their x positions must be
        // symmetric around zero (professor head included, at pace start).
        let head_sum: f32 = scene
            .props
            .iter()
            .filter(|p| p.shape == Shape::Sphere)
            .map(|p| p.position.x)
            .sum();
        // Student heads cancel pairwise; the professor's sits at -3.
        assert!((head_sum - (-3.0)).abs() < 1e-4);
    }
}
