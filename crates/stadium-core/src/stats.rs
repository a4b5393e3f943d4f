use crate::layout::Seat;

/// Seat counts shown in the statistics panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccupancyStats {
    pub total: usize,
    pub filled: usize,
    pub empty: usize,
}

impl OccupancyStats {
    pub fn from_seats(seats: &[Seat]) -> Self {
        let filled = seats.iter().filter(|s| s.is_filled()).count();
        Self {
            total: seats.len(),
            filled,
            empty: seats.len() - filled,
        }
    }

    /// Filled share as a percentage; an empty stadium reports 0.
    pub fn occupancy_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.filled as f64 / self.total as f64 * 100.0
    }

    /// Rate with one decimal place, e.g. `"60.0%"`. Ties round up
    /// (`12.25` -> `"12.3%"`), not to even.
    pub fn rate_label(&self) -> String {
        let tenths = (self.occupancy_rate() * 10.0).round() / 10.0;
        format!("{:.1}%", tenths)
    }
}

/// Render a count with comma thousands separators (`5200` -> `"5,200"`).
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
