// Host-side tests for the 3D scene description and mouse controls.
// The native crate is a binary, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/mesh.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use glam::Vec2;
use scene::*;
use stadium_core::*;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

fn seats() -> (StadiumConfig, Vec<Seat>) {
    let config = StadiumConfig::default();
    let mut flip = false;
    let seats = generate_seats_with(&config, || {
        flip = !flip;
        if flip {
            0.0
        } else {
            0.9
        }
    })
    .unwrap();
    (config, seats)
}

#[test]
fn scene_has_one_instance_per_seat_and_step() {
    let (config, seats) = seats();
    let parts = build_scene(&config, &seats);
    let seat_part = parts.iter().find(|p| p.label == SEATS_PART).unwrap();
    assert_eq!(seat_part.instances.len(), seats.len());
    let stairs = parts.iter().find(|p| p.label == "stairs").unwrap();
    assert_eq!(stairs.instances.len(), (config.sections * config.rows_per_section) as usize);
    assert_eq!(parts.iter().filter(|p| p.label == "aisle").count(), 6);
    for part in &parts {
        assert!(!part.mesh.indices.is_empty(), "{} has no triangles", part.label);
    }
}

#[test]
fn seat_instances_use_raked_positions_and_status_colours() {
    let (_, seats) = seats();
    let instances = seat_instances(&seats);
    for (seat, inst) in seats.iter().zip(&instances).take(50) {
        let p = seat.raked();
        assert_eq!(&inst.offset_yaw[..3], &p.to_array()[..]);
        let expected = if seat.is_filled() { COLOR_FILLED } else { COLOR_EMPTY };
        assert_eq!(inst.color, linear_rgba(expected));
    }
}

#[test]
fn linear_conversion_keeps_extremes() {
    assert_eq!(linear_rgba(0x000000), [0.0, 0.0, 0.0, 1.0]);
    let white = linear_rgba(0xffffff);
    for c in &white[..3] {
        assert!((c - 1.0).abs() < 1e-5);
    }
    let mid = linear_rgba(0x808080)[0];
    assert!(mid > 0.2 && mid < 0.23);
}

#[test]
fn title_reports_counts() {
    let stats = OccupancyStats {
        total: 4944,
        filled: 2966,
        empty: 1978,
    };
    let title = window_title(&stats);
    assert!(title.contains("4,944 seats"));
    assert!(title.contains("2,966 filled"));
    assert!(title.contains("1,978 empty"));
    assert!(title.contains("60.0% occupied"));
}

#[test]
fn left_drag_orbits_and_right_drag_pans() {
    let mut camera = OrbitCamera::default();
    let mut mouse = MouseControls::default();
    let start_eye = camera.eye;

    // Moving without a button only tracks the cursor.
    mouse.cursor_moved(Vec2::new(100.0, 100.0), &mut camera);
    mouse.cursor_moved(Vec2::new(150.0, 100.0), &mut camera);
    assert_eq!(camera.eye, start_eye);

    mouse.button(MouseButton::Left, ElementState::Pressed);
    mouse.cursor_moved(Vec2::new(200.0, 100.0), &mut camera);
    assert!((camera.eye.length() - start_eye.length()).abs() < 1e-3);
    assert_ne!(camera.eye, start_eye);
    assert_eq!(camera.target, glam::Vec3::ZERO);
    mouse.button(MouseButton::Left, ElementState::Released);

    mouse.button(MouseButton::Right, ElementState::Pressed);
    mouse.cursor_moved(Vec2::new(250.0, 100.0), &mut camera);
    assert_ne!(camera.target, glam::Vec3::ZERO);
}

#[test]
fn leaving_the_window_ends_drags() {
    let mut camera = OrbitCamera::default();
    let mut mouse = MouseControls::default();
    mouse.button(MouseButton::Left, ElementState::Pressed);
    mouse.cursor_left();
    assert!(!mouse.orbiting && mouse.cursor.is_none());
    mouse.cursor_moved(Vec2::new(10.0, 10.0), &mut camera);
    assert_eq!(camera.eye, camera_start_vec3());
}

#[test]
fn wheel_up_maps_to_negative_dom_delta() {
    assert!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 1.0)) < 0.0);
    assert!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -2.0)) > 0.0);
    let px = winit::dpi::PhysicalPosition::new(0.0, -30.0);
    assert_eq!(wheel_delta_y(MouseScrollDelta::PixelDelta(px)), 30.0);
}
