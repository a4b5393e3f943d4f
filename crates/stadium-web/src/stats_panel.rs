use stadium_core::{format_count, OccupancyStats};
use web_sys as web;

use crate::dom::set_text;

pub const TOTAL_SEATS_ID: &str = "total-seats";
pub const FILLED_SEATS_ID: &str = "filled-seats";
pub const EMPTY_SEATS_ID: &str = "empty-seats";
pub const OCCUPANCY_RATE_ID: &str = "occupancy-rate";

pub fn update(document: &web::Document, stats: &OccupancyStats) {
    set_text(document, TOTAL_SEATS_ID, &format_count(stats.total));
    set_text(document, FILLED_SEATS_ID, &format_count(stats.filled));
    set_text(document, EMPTY_SEATS_ID, &format_count(stats.empty));
    set_text(document, OCCUPANCY_RATE_ID, &stats.rate_label());
}
