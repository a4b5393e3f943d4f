use thiserror::Error;

/// Reasons a [`crate::StadiumConfig`] cannot produce a seat layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("stadium needs at least one section")]
    NoSections,
    #[error("sections need at least one row")]
    NoRows,
    #[error("rows need a base seat count of at least one")]
    NoSeatsPerRow,
    #[error("stadium radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),
    #[error("row spacing must be a positive finite number, got {0}")]
    InvalidRowSpacing(f32),
    #[error("row {row} would hold no seats (base of {base} seats is too small)")]
    EmptyRow { row: u32, base: u32 },
}
