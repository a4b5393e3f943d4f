use glam::Vec3;

// Shared layout and visual tuning constants used by both web and native frontends.

// Seat layout
pub const SECTION_ARC_DEG: f64 = 65.0; // angular arc covered by every row of a section
pub const AISLE_INTERVAL: u32 = 9; // every Nth seat slot in a row is left open as an aisle
pub const FILL_PROBABILITY: f64 = 0.6; // chance that a generated seat is occupied
pub const FRONT_ROW_FRACTION: f64 = 0.75; // front row gets this share of the base seat count
pub const ROW_RISE: f32 = 0.3; // height gained per row in the raked 3D bowl

// Structure
pub const STAIRS_RADIUS_OFFSET: f32 = 12.0; // stairs start this far outside the first row
pub const AISLE_RING_EVERY: u32 = 5; // horizontal walkway every N rows
pub const FIELD_INSET: f32 = 5.0; // field ends this far inside the first row
pub const STAGE_RADIUS: f32 = 8.0;
pub const STAGE_HEIGHT: f32 = 1.0;
pub const STADIUM_HEIGHT: f32 = 15.0; // 3D outer wall height
pub const WALL_RADIUS_OFFSET: f32 = 25.0; // 3D outer wall distance past the first row
pub const FLOOR_OUTER_OFFSET: f32 = 20.0;
pub const FLOOR_THICKNESS: f32 = 0.5;
pub const BASE_RADIUS_OFFSET: f32 = 30.0; // solid base that hides the underside
pub const BASE_THICKNESS: f32 = 2.0;
pub const SCREEN_SIZE: [f32; 2] = [25.0, 8.0]; // 2D main screen width/height

// 3D box sizes (width, height, depth)
pub const SEAT_SIZE: [f32; 3] = [0.5, 0.3, 0.4];
pub const STEP_SIZE: [f32; 3] = [1.2, 0.2, 0.4];

// 2D dot sizes
pub const SEAT_DOT_RADIUS: f32 = 0.3;
pub const SEAT_DOT_HOVER_RADIUS: f32 = 0.5;
pub const STEP_DOT_RADIUS: f32 = 0.4;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [0.0, 20.0, 60.0];
pub const ORBIT_SPEED: f32 = 0.01; // radians per pixel of drag
pub const PAN_SPEED: f32 = 0.1; // world units per pixel of drag
pub const ZOOM_STEP: f32 = 0.1; // fraction of the current distance per wheel notch
pub const PHI_MIN: f32 = 0.3; // keeps the camera above the bowl
pub const PHI_MAX: f32 = 1.4;
pub const ZOOM_MIN_DISTANCE: f32 = 10.0;
pub const ZOOM_MAX_DISTANCE: f32 = 200.0;

// 2D view
pub const VIEW_FIT_PADDING: f32 = 2.2; // viewport holds the stadium extent times this
pub const ZOOM_SCALE_EXTENT: [f32; 2] = [0.5, 3.0]; // relative to the fit scale

// Palette (sRGB hex)
pub const COLOR_BACKGROUND: u32 = 0x1a1a2e;
pub const COLOR_FILLED: u32 = 0x4caf50;
pub const COLOR_FILLED_STROKE: u32 = 0x2e7d32;
pub const COLOR_EMPTY: u32 = 0xf44336;
pub const COLOR_EMPTY_STROKE: u32 = 0xc62828;
pub const COLOR_STAIRS: u32 = 0x9e9e9e;
pub const COLOR_FIELD: u32 = 0x2d5016;
pub const COLOR_FIELD_STROKE: u32 = 0x1a3d0a;
pub const COLOR_WALL: u32 = 0x555555;
pub const COLOR_WALL_STROKE: u32 = 0x333333;
pub const COLOR_STAGE: u32 = 0xff6b6b;
pub const COLOR_STAGE_EMISSIVE: u32 = 0x330000;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const SUN_INTENSITY: f32 = 0.8;
pub const SUN_POSITION: [f32; 3] = [30.0, 30.0, 30.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-30.0, 20.0, -30.0];
pub const STAGE_LIGHT_POSITION: [f32; 3] = [0.0, 5.0, 0.0];
pub const STAGE_LIGHT_RANGE: f32 = 20.0;

/// Stage light intensity at `elapsed_ms` milliseconds; pulses between 1.5 and 2.5.
#[inline]
pub fn stage_light_intensity(elapsed_ms: f64) -> f32 {
    2.0 + (elapsed_ms * 0.001).sin() as f32 * 0.5
}

/// Split a `0xRRGGBB` colour into normalized sRGB components.
#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// CSS `#rrggbb` form of a palette entry.
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0xff_ffff)
}

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::from(CAMERA_START)
}
