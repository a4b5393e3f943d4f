//! Seat placement on concentric arcs.
//!
//! One generator feeds both frontends. Each [`Seat`] keeps its angle and row
//! radius so the 2D map and the raked 3D bowl project from the same numbers.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::StadiumConfig;
use crate::constants::{AISLE_INTERVAL, FILL_PROBABILITY, ROW_RISE, SECTION_ARC_DEG};
use crate::error::LayoutError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Filled,
    Empty,
}

impl SeatStatus {
    #[inline]
    pub fn from_filled(filled: bool) -> Self {
        if filled {
            SeatStatus::Filled
        } else {
            SeatStatus::Empty
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeatStatus::Filled => "filled",
            SeatStatus::Empty => "empty",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: u32,
    pub section: u32,
    pub row: u32,
    /// Slot within the row, counted before aisle slots were removed.
    pub seat_number: u32,
    /// Placement angle in radians; seats also face along it.
    pub angle: f32,
    pub radius: f32,
    pub status: SeatStatus,
}

impl Seat {
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.status == SeatStatus::Filled
    }

    /// Top-down position.
    #[inline]
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius
    }

    /// Position in the raked bowl: the planar y becomes depth (z) and rows
    /// climb by [`ROW_RISE`].
    #[inline]
    pub fn raked(&self) -> Vec3 {
        let p = self.planar();
        Vec3::new(p.x, (self.row - 1) as f32 * ROW_RISE, p.y)
    }
}

/// Generate the full seat sequence with occupancy drawn from `rng`.
pub fn generate_seats<R: Rng + ?Sized>(
    config: &StadiumConfig,
    rng: &mut R,
) -> Result<Vec<Seat>, LayoutError> {
    generate_seats_with(config, || rng.gen::<f64>())
}

/// Generate the full seat sequence, calling `sample` once per emitted seat.
///
/// `sample` must yield uniform values in `[0, 1)`; a seat is filled when its
/// sample is below [`FILL_PROBABILITY`].
pub fn generate_seats_with<F>(config: &StadiumConfig, mut sample: F) -> Result<Vec<Seat>, LayoutError>
where
    F: FnMut() -> f64,
{
    if let Err(e) = config.validate() {
        log::warn!("[layout] rejected config {:?}: {}", config, e);
        return Err(e);
    }

    let mut seats = Vec::with_capacity(estimated_capacity(config));
    let mut next_id = 1u32;
    let section_step_deg = 360.0 / config.sections as f64;

    for section in 1..=config.sections {
        let section_angle = ((section - 1) as f64 * section_step_deg).to_radians();

        for row in 1..=config.rows_per_section {
            let radius = config.row_radius(row);
            let seats_in_row = config.seats_in_row(row);
            let angle_per_seat = (SECTION_ARC_DEG / seats_in_row as f64).to_radians();
            let half_row = seats_in_row as f64 / 2.0;

            for seat_number in 1..=seats_in_row {
                if seat_number % AISLE_INTERVAL == 0 {
                    continue;
                }
                let angle = section_angle + (seat_number as f64 - half_row) * angle_per_seat;
                let filled = sample() < FILL_PROBABILITY;
                seats.push(Seat {
                    id: next_id,
                    section,
                    row,
                    seat_number,
                    angle: angle as f32,
                    radius,
                    status: SeatStatus::from_filled(filled),
                });
                next_id += 1;
            }
        }
    }

    log::debug!(
        "[layout] generated {} seats across {} sections x {} rows",
        seats.len(),
        config.sections,
        config.rows_per_section
    );
    Ok(seats)
}

/// Seats left in `row` once aisle slots are removed.
#[inline]
pub fn seats_after_aisles(config: &StadiumConfig, row: u32) -> u32 {
    let slots = config.seats_in_row(row);
    slots - slots / AISLE_INTERVAL
}

fn estimated_capacity(config: &StadiumConfig) -> usize {
    let per_section: u32 = (1..=config.rows_per_section)
        .map(|row| seats_after_aisles(config, row))
        .sum();
    per_section as usize * config.sections as usize
}
