use glam::Vec2;
use stadium_core::OrbitCamera;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

// Pixels per wheel line, matching a browser's line-mode scroll.
const PIXELS_PER_LINE: f32 = 100.0;

/// Mouse drag state: left button orbits, right button pans.
#[derive(Default, Clone, Copy, Debug)]
pub struct MouseControls {
    pub cursor: Option<Vec2>,
    pub orbiting: bool,
    pub panning: bool,
}

impl MouseControls {
    pub fn button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.orbiting = pressed,
            MouseButton::Right => self.panning = pressed,
            _ => {}
        }
    }

    /// Track the cursor and drive the camera if a drag is in progress.
    pub fn cursor_moved(&mut self, position: Vec2, camera: &mut OrbitCamera) {
        let previous = self.cursor.replace(position);
        let Some(previous) = previous else {
            return;
        };
        let delta = position - previous;
        if self.panning {
            camera.pan(delta.x, delta.y);
        } else if self.orbiting {
            camera.rotate(delta.x, delta.y);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.orbiting = false;
        self.panning = false;
    }
}

/// Convert a winit scroll to a DOM-style `deltaY` (positive = scroll down =
/// zoom out).
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}
