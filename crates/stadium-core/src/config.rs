use serde::{Deserialize, Serialize};

use crate::constants::FRONT_ROW_FRACTION;
use crate::error::LayoutError;

/// Shape of the seating bowl.
///
/// Passed explicitly to every generator call; the defaults reproduce the
/// 8-section demo stadium.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StadiumConfig {
    /// Angular wedges around the stadium.
    pub sections: u32,
    /// Rows per wedge, radiating outward.
    pub rows_per_section: u32,
    /// Nominal seat count; the back row gets all of it, the front row about 75%.
    pub seats_per_row_base: u32,
    /// Radius of the innermost row.
    pub stadium_radius: f32,
    /// Radial distance added per row.
    pub row_spacing: f32,
}

impl Default for StadiumConfig {
    fn default() -> Self {
        Self {
            sections: 8,
            rows_per_section: 28,
            seats_per_row_base: 28,
            stadium_radius: 30.0,
            row_spacing: 0.6,
        }
    }
}

impl StadiumConfig {
    /// Check that every section, row and seat count would be non-empty.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.sections == 0 {
            return Err(LayoutError::NoSections);
        }
        if self.rows_per_section == 0 {
            return Err(LayoutError::NoRows);
        }
        if self.seats_per_row_base == 0 {
            return Err(LayoutError::NoSeatsPerRow);
        }
        if !(self.stadium_radius.is_finite() && self.stadium_radius > 0.0) {
            return Err(LayoutError::InvalidRadius(self.stadium_radius));
        }
        if !(self.row_spacing.is_finite() && self.row_spacing > 0.0) {
            return Err(LayoutError::InvalidRowSpacing(self.row_spacing));
        }
        // Row 1 is the narrowest row.
        if self.seats_in_row(1) == 0 {
            return Err(LayoutError::EmptyRow {
                row: 1,
                base: self.seats_per_row_base,
            });
        }
        Ok(())
    }

    /// Seat slots in `row` (1-based) before aisle slots are removed.
    ///
    /// Linear taper from ~75% of the base in the front row to 100% in the
    /// back row, rounded down.
    pub fn seats_in_row(&self, row: u32) -> u32 {
        let base = self.seats_per_row_base as f64;
        let depth = row as f64 / self.rows_per_section as f64;
        (base * (FRONT_ROW_FRACTION + depth * (1.0 - FRONT_ROW_FRACTION))).floor() as u32
    }

    /// Radius of `row` (1-based).
    #[inline]
    pub fn row_radius(&self, row: u32) -> f32 {
        self.stadium_radius + row.saturating_sub(1) as f32 * self.row_spacing
    }

    /// Radius just past the back row.
    #[inline]
    pub fn outer_row_radius(&self) -> f32 {
        self.stadium_radius + self.rows_per_section as f32 * self.row_spacing
    }
}
