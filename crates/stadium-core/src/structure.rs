//! Non-seat parts of the stadium: stairs, walkways, field, stage, walls and
//! the 2D main screen. Both views place these from the same config.

use glam::{Vec2, Vec3};

use crate::config::StadiumConfig;
use crate::constants::*;

/// One stair step on a section boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StairStep {
    pub position: Vec3,
    /// Rotation about +Y so the step faces the field.
    pub yaw: f32,
}

impl StairStep {
    #[inline]
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }
}

/// Circular walkway between row bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AisleRing {
    pub radius: f32,
    pub height: f32,
}

/// Axis-aligned rectangle in 2D world units (y grows downward on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Rectangle shrunk by `by` on every side.
    #[inline]
    pub fn inset(&self, by: f32) -> Rect {
        Rect {
            min: self.min + Vec2::splat(by),
            size: self.size - Vec2::splat(2.0 * by),
        }
    }
}

/// The 2D main screen with its decorative scan lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pub frame: Rect,
    pub panel: Rect,
    /// Scan lines as `(start, end)` pairs.
    pub scan_lines: Vec<(Vec2, Vec2)>,
    pub label_anchor: Vec2,
}

/// Yaw about +Y that turns a box's local +X tangent to the circle at
/// `angle`, so the box faces the field. Positions put `sin(angle)` on +Z.
#[inline]
pub fn facing_yaw(angle: f32) -> f32 {
    -(angle + std::f32::consts::FRAC_PI_2)
}

pub fn stair_steps(config: &StadiumConfig) -> Vec<StairStep> {
    let mut steps = Vec::with_capacity((config.sections * config.rows_per_section) as usize);
    let base_radius = config.stadium_radius + STAIRS_RADIUS_OFFSET;
    for section in 0..config.sections {
        let angle = (section as f32 * 360.0 / config.sections as f32).to_radians();
        for row in 0..config.rows_per_section {
            let radius = base_radius + row as f32 * config.row_spacing;
            steps.push(StairStep {
                position: Vec3::new(angle.cos() * radius, row as f32 * ROW_RISE, angle.sin() * radius),
                yaw: facing_yaw(angle),
            });
        }
    }
    steps
}

pub fn aisle_rings(config: &StadiumConfig) -> Vec<AisleRing> {
    (0..config.rows_per_section)
        .step_by(AISLE_RING_EVERY as usize)
        .map(|row| AisleRing {
            radius: config.stadium_radius + row as f32 * config.row_spacing,
            height: row as f32 * ROW_RISE,
        })
        .collect()
}

#[inline]
pub fn field_radius(config: &StadiumConfig) -> f32 {
    config.stadium_radius - FIELD_INSET
}

/// Outer wall of the top-down map, just past the back row.
#[inline]
pub fn outer_wall_radius_2d(config: &StadiumConfig) -> f32 {
    config.outer_row_radius() + 2.0
}

/// Radius the 2D viewport has to show.
#[inline]
pub fn view_extent(config: &StadiumConfig) -> f32 {
    config.outer_row_radius() + 5.0
}

pub fn main_screen(config: &StadiumConfig) -> Screen {
    let [w, h] = SCREEN_SIZE;
    let top = -view_extent(config);
    let frame = Rect {
        min: Vec2::new(-w / 2.0, top),
        size: Vec2::new(w, h),
    };
    let scan_lines = (0..3)
        .map(|i| {
            let y = top + 2.0 + i as f32 * 2.0;
            (Vec2::new(-w / 2.0 + 2.0, y), Vec2::new(w / 2.0 - 2.0, y))
        })
        .collect();
    Screen {
        frame,
        panel: frame.inset(0.5),
        scan_lines,
        label_anchor: Vec2::new(0.0, top + h + 1.5),
    }
}

/// Dimensions of the raked bowl's solid parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BowlShell {
    pub floor_inner_radius: f32,
    pub floor_outer_radius: f32,
    pub wall_radius: f32,
    pub wall_height: f32,
    pub base_radius: f32,
}

pub fn bowl_shell(config: &StadiumConfig) -> BowlShell {
    BowlShell {
        floor_inner_radius: field_radius(config),
        floor_outer_radius: config.stadium_radius + FLOOR_OUTER_OFFSET,
        wall_radius: config.stadium_radius + WALL_RADIUS_OFFSET,
        wall_height: STADIUM_HEIGHT,
        base_radius: config.stadium_radius + BASE_RADIUS_OFFSET,
    }
}
