// Host-side tests for stadium structure geometry and shared constants.

use stadium_core::structure::*;
use stadium_core::*;

#[test]
fn one_stair_step_per_section_and_row() {
    let config = StadiumConfig::default();
    let steps = stair_steps(&config);
    assert_eq!(steps.len(), (config.sections * config.rows_per_section) as usize);

    let first = steps[0];
    assert!((first.position.x - 42.0).abs() < 1e-4);
    assert!(first.position.y.abs() < 1e-6);
    assert!(first.position.z.abs() < 1e-4);
    assert!((first.yaw + std::f32::consts::FRAC_PI_2).abs() < 1e-6);

    // Last step of the first section climbs with the rows.
    let top = steps[config.rows_per_section as usize - 1];
    assert!((top.position.y - 27.0 * ROW_RISE).abs() < 1e-4);
    assert!((top.planar().length() - (42.0 + 27.0 * 0.6)).abs() < 1e-3);
}

#[test]
fn stairs_sit_on_section_boundaries() {
    let config = StadiumConfig {
        sections: 4,
        rows_per_section: 2,
        ..StadiumConfig::default()
    };
    let steps = stair_steps(&config);
    let second_section = steps[2].planar();
    assert!(second_section.x.abs() < 1e-3);
    assert!(second_section.y > 0.0);
}

#[test]
fn facing_yaw_turns_local_x_along_the_row() {
    for angle in [0.0f32, 0.7, 2.0, -1.3] {
        let m = glam::Mat3::from_rotation_y(facing_yaw(angle));
        let local_x = m * glam::Vec3::X;
        let radial = glam::Vec3::new(angle.cos(), 0.0, angle.sin());
        assert!(local_x.dot(radial).abs() < 1e-5, "angle {angle}");
    }
}

#[test]
fn aisle_rings_every_fifth_row() {
    let config = StadiumConfig::default();
    let rings = aisle_rings(&config);
    assert_eq!(rings.len(), 6);
    let radii: Vec<f32> = rings.iter().map(|r| r.radius).collect();
    for (i, radius) in radii.iter().enumerate() {
        let row = (i * 5) as f32;
        assert!((radius - (30.0 + row * 0.6)).abs() < 1e-4);
        assert!((rings[i].height - row * ROW_RISE).abs() < 1e-4);
    }
}

#[test]
fn flat_map_radii_nest_correctly() {
    let config = StadiumConfig::default();
    assert!(STAGE_RADIUS < field_radius(&config));
    assert!(field_radius(&config) < config.stadium_radius);
    assert!(config.outer_row_radius() < outer_wall_radius_2d(&config));
    assert!(outer_wall_radius_2d(&config) < view_extent(&config));
}

#[test]
fn main_screen_sits_above_the_map() {
    let config = StadiumConfig::default();
    let screen = main_screen(&config);
    assert_eq!(screen.frame.size.x, 25.0);
    assert_eq!(screen.frame.size.y, 8.0);
    assert!((screen.frame.min.x + 12.5).abs() < 1e-6);
    assert!((screen.frame.min.y + view_extent(&config)).abs() < 1e-4);
    assert_eq!(screen.scan_lines.len(), 3);
    assert!(screen.panel.size.x < screen.frame.size.x);
    assert!(screen.label_anchor.y > screen.frame.max().y);
}

#[test]
fn bowl_shell_wraps_the_rows() {
    let config = StadiumConfig::default();
    let shell = bowl_shell(&config);
    assert!(shell.floor_inner_radius < config.stadium_radius);
    assert!(shell.wall_radius > config.outer_row_radius());
    assert!(shell.base_radius > shell.wall_radius);
    assert_eq!(shell.wall_height, STADIUM_HEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_limits_are_consistent() {
    assert!(PHI_MIN > 0.0 && PHI_MIN < PHI_MAX);
    assert!(PHI_MAX < std::f32::consts::FRAC_PI_2);
    assert!(ZOOM_MIN_DISTANCE < camera_start_vec3().length());
    assert!(camera_start_vec3().length() < ZOOM_MAX_DISTANCE);
    assert!(ZOOM_SCALE_EXTENT[0] < 1.0 && ZOOM_SCALE_EXTENT[1] > 1.0);
    assert!(SEAT_DOT_HOVER_RADIUS > SEAT_DOT_RADIUS);
}

#[test]
fn palette_helpers() {
    assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
    assert_eq!(css_hex(COLOR_FILLED), "#4caf50");
    assert_eq!(css_hex(0x000001), "#000001");
}

#[test]
fn stage_light_pulses_around_two() {
    assert!((stage_light_intensity(0.0) - 2.0).abs() < 1e-6);
    let peak = stage_light_intensity(std::f64::consts::FRAC_PI_2 * 1000.0);
    assert!((peak - 2.5).abs() < 1e-5);
    for ms in (0..20_000).step_by(250) {
        let i = stage_light_intensity(ms as f64);
        assert!((1.5..=2.5).contains(&i));
    }
}

#[test]
fn shader_declares_entry_points() {
    assert!(SCENE_WGSL.contains("fn vs_main"));
    assert!(SCENE_WGSL.contains("fn fs_main"));
}
