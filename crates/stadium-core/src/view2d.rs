use glam::Vec2;

use crate::config::StadiumConfig;
use crate::constants::{SEAT_DOT_HOVER_RADIUS, SEAT_DOT_RADIUS, VIEW_FIT_PADDING, ZOOM_SCALE_EXTENT};
use crate::layout::Seat;
use crate::structure::view_extent;

/// How a wheel event measures `delta_y` (DOM `WheelEvent.deltaMode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => WheelDeltaMode::Line,
            2 => WheelDeltaMode::Page,
            _ => WheelDeltaMode::Pixel,
        }
    }

    fn multiplier(self) -> f32 {
        match self {
            WheelDeltaMode::Pixel => 0.002,
            WheelDeltaMode::Line => 0.05,
            WheelDeltaMode::Page => 1.0,
        }
    }
}

/// World-to-screen mapping of the top-down map: `screen = world * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub translate: Vec2,
    pub scale: f32,
    min_scale: f32,
    max_scale: f32,
}

impl ZoomTransform {
    /// Centre the stadium in a `width` x `height` viewport with some margin.
    pub fn fit(width: f32, height: f32, config: &StadiumConfig) -> Self {
        let scale = width.min(height) / (view_extent(config) * VIEW_FIT_PADDING);
        Self {
            translate: Vec2::new(width / 2.0, height / 2.0),
            scale,
            min_scale: scale * ZOOM_SCALE_EXTENT[0],
            max_scale: scale * ZOOM_SCALE_EXTENT[1],
        }
    }

    #[inline]
    pub fn scale_extent(&self) -> [f32; 2] {
        [self.min_scale, self.max_scale]
    }

    #[inline]
    pub fn apply(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.translate
    }

    #[inline]
    pub fn invert(&self, screen: Vec2) -> Vec2 {
        (screen - self.translate) / self.scale
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.translate += Vec2::new(dx, dy);
    }

    /// Wheel zoom that keeps the world point under `pointer` fixed.
    pub fn zoom_at(&mut self, pointer: Vec2, delta_y: f32, mode: WheelDeltaMode) {
        let factor = 2f32.powf(-delta_y * mode.multiplier());
        self.scale_about(pointer, self.scale * factor);
    }

    /// Set the scale (clamped to the extent) about a screen-space anchor.
    pub fn scale_about(&mut self, anchor: Vec2, scale: f32) {
        let world = self.invert(anchor);
        self.scale = scale.clamp(self.min_scale, self.max_scale);
        self.translate = anchor - world * self.scale;
    }
}

/// Index of the seat nearest to `world`, if one lies within `radius`.
pub fn hit_test(seats: &[Seat], world: Vec2, radius: f32) -> Option<usize> {
    let max_d2 = radius * radius;
    let mut best = None::<(usize, f32)>;
    for (i, seat) in seats.iter().enumerate() {
        let d2 = seat.planar().distance_squared(world);
        if d2 > max_d2 {
            continue;
        }
        match best {
            Some((_, bd)) if d2 >= bd => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}

/// Seat under the pointer: a seat is picked at its dot radius and stays
/// picked until the pointer leaves its enlarged hover dot.
pub fn hover_target(seats: &[Seat], world: Vec2, current: Option<usize>) -> Option<usize> {
    if let Some(seat) = current.and_then(|i| seats.get(i)) {
        if seat.planar().distance(world) <= SEAT_DOT_HOVER_RADIUS {
            return current;
        }
    }
    hit_test(seats, world, SEAT_DOT_RADIUS)
}
