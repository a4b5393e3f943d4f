// Host-side tests for the top-down zoom transform and seat hover picking.

use glam::Vec2;
use stadium_core::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn fit_centres_and_scales_to_viewport() {
    let config = StadiumConfig::default();
    let t = ZoomTransform::fit(1000.0, 800.0, &config);
    assert_eq!(t.translate, Vec2::new(500.0, 400.0));
    let extent = config.stadium_radius + config.rows_per_section as f32 * config.row_spacing + 5.0;
    assert!((t.scale - 800.0 / (extent * 2.2)).abs() < 1e-4);
    assert!(close(t.apply(Vec2::ZERO), Vec2::new(500.0, 400.0)));

    // The whole extent fits inside the short side.
    let edge = t.apply(Vec2::new(0.0, extent));
    assert!(edge.y < 800.0 && edge.y > 400.0);
}

#[test]
fn invert_undoes_apply() {
    let mut t = ZoomTransform::fit(640.0, 480.0, &StadiumConfig::default());
    t.pan(13.0, -7.0);
    t.zoom_at(Vec2::new(100.0, 50.0), -120.0, WheelDeltaMode::Pixel);
    for p in [Vec2::ZERO, Vec2::new(30.0, -12.5), Vec2::new(-47.0, 3.0)] {
        assert!(close(t.invert(t.apply(p)), p));
    }
}

#[test]
fn zoom_keeps_pointer_anchored() {
    let mut t = ZoomTransform::fit(800.0, 800.0, &StadiumConfig::default());
    let pointer = Vec2::new(620.0, 210.0);
    let world_before = t.invert(pointer);
    t.zoom_at(pointer, -100.0, WheelDeltaMode::Pixel);
    assert!(close(t.invert(pointer), world_before));
}

#[test]
fn wheel_up_zooms_in_and_down_zooms_out() {
    let fit = ZoomTransform::fit(800.0, 600.0, &StadiumConfig::default());
    let centre = Vec2::new(400.0, 300.0);

    let mut t = fit;
    t.zoom_at(centre, -100.0, WheelDeltaMode::Pixel);
    assert!((t.scale / fit.scale - 2f32.powf(0.2)).abs() < 1e-4);

    let mut t = fit;
    t.zoom_at(centre, 3.0, WheelDeltaMode::Line);
    assert!((t.scale / fit.scale - 2f32.powf(-0.15)).abs() < 1e-4);
}

#[test]
fn scale_is_clamped_to_extent_relative_to_fit() {
    let fit = ZoomTransform::fit(800.0, 600.0, &StadiumConfig::default());
    let [lo, hi] = fit.scale_extent();
    assert!((lo - fit.scale * 0.5).abs() < 1e-5);
    assert!((hi - fit.scale * 3.0).abs() < 1e-5);

    let mut t = fit;
    for _ in 0..50 {
        t.zoom_at(Vec2::ZERO, -10.0, WheelDeltaMode::Page);
    }
    assert_eq!(t.scale, hi);
    for _ in 0..50 {
        t.zoom_at(Vec2::ZERO, 10.0, WheelDeltaMode::Page);
    }
    assert_eq!(t.scale, lo);
}

#[test]
fn pan_shifts_translation_only() {
    let mut t = ZoomTransform::fit(800.0, 600.0, &StadiumConfig::default());
    let scale = t.scale;
    t.pan(25.0, -10.0);
    assert_eq!(t.translate, Vec2::new(425.0, 290.0));
    assert_eq!(t.scale, scale);
}

#[test]
fn delta_mode_from_dom_values() {
    assert_eq!(WheelDeltaMode::from_dom(0), WheelDeltaMode::Pixel);
    assert_eq!(WheelDeltaMode::from_dom(1), WheelDeltaMode::Line);
    assert_eq!(WheelDeltaMode::from_dom(2), WheelDeltaMode::Page);
    assert_eq!(WheelDeltaMode::from_dom(9), WheelDeltaMode::Pixel);
}

#[test]
fn hit_test_finds_nearest_seat_within_radius() {
    let seats = generate_seats_with(&StadiumConfig::default(), || 0.0).unwrap();
    let target = &seats[42];
    let probe = target.planar() + Vec2::new(0.05, -0.05);
    assert_eq!(hit_test(&seats, probe, SEAT_DOT_HOVER_RADIUS), Some(42));
}

#[test]
fn hit_test_misses_open_ground() {
    let seats = generate_seats_with(&StadiumConfig::default(), || 0.0).unwrap();
    assert_eq!(hit_test(&seats, Vec2::ZERO, SEAT_DOT_HOVER_RADIUS), None);
    assert_eq!(hit_test(&[], Vec2::new(30.0, 0.0), SEAT_DOT_HOVER_RADIUS), None);
}

#[test]
fn hover_sticks_until_pointer_leaves_enlarged_dot() {
    let seats = generate_seats_with(&StadiumConfig::default(), || 0.0).unwrap();
    // Front row, middle of the first section: clear of the neighbouring arc.
    let centre = seats[9].planar();
    let tangent = centre.normalize().perp();

    // Outside the plain dot nothing is picked up.
    let ring = centre + tangent * 0.4;
    assert_eq!(hover_target(&seats, ring, None), None);

    // Once hovered, the enlarged dot keeps it.
    let picked = hover_target(&seats, centre, None);
    assert_eq!(picked, Some(9));
    assert_eq!(hover_target(&seats, ring, picked), Some(9));

    // Past the enlarged dot it is released.
    let outside = centre + tangent * 0.55;
    assert_eq!(hover_target(&seats, outside, picked), None);
}
