// Host-side tests for the seat export and drag tracking.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod export {
    include!("../src/export.rs");
}
mod input {
    include!("../src/input.rs");
}

use export::*;
use glam::Vec2;
use input::DragState;
use stadium_core::*;

#[test]
fn seat_record_carries_planar_position_and_status() {
    let seats = generate_seats_with(&StadiumConfig::default(), || 0.9).unwrap();
    let seat = &seats[5];
    let record = SeatRecord::from(seat);
    assert_eq!(record.id, seat.id);
    assert_eq!((record.section, record.row, record.seat_number), (1, 1, 6));
    assert_eq!(Vec2::new(record.x, record.y), seat.planar());
    assert!(!record.is_filled);
    assert_eq!(record.status, SeatStatus::Empty);
}

#[test]
fn json_export_uses_camel_case_fields() {
    let config = StadiumConfig {
        sections: 1,
        rows_per_section: 1,
        seats_per_row_base: 4,
        ..StadiumConfig::default()
    };
    let seats = generate_seats_with(&config, || 0.1).unwrap();
    let json = seats_to_json(&seats).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), seats.len());
    let first = &list[0];
    assert_eq!(first["seatNumber"], 1);
    assert_eq!(first["isFilled"], true);
    assert_eq!(first["status"], "filled");
    assert!(first.get("x").is_some() && first.get("y").is_some());
}

#[test]
fn empty_export_is_an_empty_array() {
    assert_eq!(seats_to_json(&[]).unwrap(), "[]");
}

#[test]
fn drag_reports_deltas_only_while_active() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 20.0));
    assert_eq!(drag.advance(Vec2::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(drag.advance(Vec2::new(15.0, 18.0)), Some(Vec2::ZERO));

    drag.end();
    assert_eq!(drag.advance(Vec2::new(40.0, 40.0)), None);
}
