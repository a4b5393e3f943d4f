// Flat seat records for page scripts: planar coordinates plus status, the
// shape the 2D map draws from.

use serde::Serialize;
use stadium_core::{Seat, SeatStatus};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRecord {
    pub id: u32,
    pub section: u32,
    pub row: u32,
    pub seat_number: u32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub is_filled: bool,
    pub status: SeatStatus,
}

impl From<&Seat> for SeatRecord {
    fn from(seat: &Seat) -> Self {
        let p = seat.planar();
        Self {
            id: seat.id,
            section: seat.section,
            row: seat.row,
            seat_number: seat.seat_number,
            x: p.x,
            y: p.y,
            angle: seat.angle,
            is_filled: seat.is_filled(),
            status: seat.status,
        }
    }
}

pub fn seats_to_json(seats: &[Seat]) -> serde_json::Result<String> {
    let records: Vec<SeatRecord> = seats.iter().map(SeatRecord::from).collect();
    serde_json::to_string(&records)
}
