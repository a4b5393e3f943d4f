// Static description of the 3D bowl: which mesh is drawn where, in which
// colour. Built once from the config and the generated seats.

use stadium_core::structure::{aisle_rings, bowl_shell, facing_yaw, stair_steps};
use stadium_core::{
    rgb, OccupancyStats, Seat, StadiumConfig, BASE_THICKNESS, COLOR_BACKGROUND, COLOR_EMPTY,
    COLOR_FIELD, COLOR_FILLED, COLOR_STAGE, COLOR_STAGE_EMISSIVE, COLOR_STAIRS, COLOR_WALL,
    FLOOR_THICKNESS, SEAT_SIZE, STAGE_HEIGHT, STAGE_RADIUS, STEP_SIZE,
};

use crate::mesh::{annulus, cuboid, cylinder, inner_tube, Mesh};

pub const SEATS_PART: &str = "seats";

// Keeps stacked flat surfaces from z-fighting.
const SURFACE_EPSILON: f32 = 0.01;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    /// xyz = offset, w = yaw about +Y
    pub offset_yaw: [f32; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

impl InstanceData {
    fn at(offset: [f32; 3], yaw: f32, color: u32) -> Self {
        Self {
            offset_yaw: [offset[0], offset[1], offset[2], yaw],
            color: linear_rgba(color),
            emissive: [0.0; 4],
        }
    }

    fn with_emissive(mut self, emissive: u32) -> Self {
        self.emissive = linear_rgba(emissive);
        self
    }
}

/// One mesh and every place it is drawn.
pub struct Part {
    pub label: &'static str,
    pub mesh: Mesh,
    pub instances: Vec<InstanceData>,
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Palette entry converted for an sRGB render target.
pub fn linear_rgba(hex: u32) -> [f32; 4] {
    let [r, g, b] = rgb(hex);
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0]
}

pub fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = linear_rgba(COLOR_BACKGROUND);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

pub fn seat_instances(seats: &[Seat]) -> Vec<InstanceData> {
    seats
        .iter()
        .map(|seat| {
            let color = if seat.is_filled() { COLOR_FILLED } else { COLOR_EMPTY };
            InstanceData::at(seat.raked().to_array(), facing_yaw(seat.angle), color)
        })
        .collect()
}

pub fn build_scene(config: &StadiumConfig, seats: &[Seat]) -> Vec<Part> {
    let shell = bowl_shell(config);
    let mut parts = vec![
        Part {
            label: "base",
            mesh: cylinder(shell.base_radius, shell.base_radius, BASE_THICKNESS, 64),
            instances: vec![InstanceData::at(
                [0.0, -BASE_THICKNESS / 2.0 - SURFACE_EPSILON, 0.0],
                0.0,
                COLOR_BACKGROUND,
            )],
        },
        Part {
            label: "floor",
            mesh: cylinder(shell.floor_inner_radius, shell.floor_outer_radius, FLOOR_THICKNESS, 32),
            instances: vec![InstanceData::at([0.0, -FLOOR_THICKNESS / 2.0, 0.0], 0.0, COLOR_FIELD)],
        },
        Part {
            label: "wall",
            mesh: inner_tube(shell.wall_radius, shell.wall_height, 32),
            instances: vec![InstanceData::at([0.0, shell.wall_height / 2.0, 0.0], 0.0, COLOR_WALL)],
        },
        Part {
            label: "stage",
            mesh: cylinder(STAGE_RADIUS, STAGE_RADIUS, STAGE_HEIGHT, 32),
            instances: vec![
                InstanceData::at([0.0, STAGE_HEIGHT / 2.0, 0.0], 0.0, COLOR_STAGE)
                    .with_emissive(COLOR_STAGE_EMISSIVE),
            ],
        },
        Part {
            label: SEATS_PART,
            mesh: cuboid(SEAT_SIZE),
            instances: seat_instances(seats),
        },
        Part {
            label: "stairs",
            mesh: cuboid(STEP_SIZE),
            instances: stair_steps(config)
                .into_iter()
                .map(|step| InstanceData::at(step.position.to_array(), step.yaw, COLOR_STAIRS))
                .collect(),
        },
    ];
    for ring in aisle_rings(config) {
        parts.push(Part {
            label: "aisle",
            mesh: annulus(ring.radius - 0.5, ring.radius + 0.5, 64),
            instances: vec![InstanceData::at(
                [0.0, ring.height + SURFACE_EPSILON, 0.0],
                0.0,
                COLOR_STAIRS,
            )],
        });
    }
    parts
}

pub fn window_title(stats: &OccupancyStats) -> String {
    format!(
        "Stadium Seating (3D) | {} seats | {} filled | {} empty | {} occupied",
        stadium_core::format_count(stats.total),
        stadium_core::format_count(stats.filled),
        stadium_core::format_count(stats.empty),
        stats.rate_label()
    )
}
