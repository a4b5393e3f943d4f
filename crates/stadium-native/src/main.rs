mod controls;
mod gpu;
mod mesh;
mod scene;

use glam::Vec2;
use stadium_core::{generate_seats, OccupancyStats, OrbitCamera, StadiumConfig};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use controls::{wheel_delta_y, MouseControls};
use gpu::GpuState;
use scene::{build_scene, seat_instances, window_title, SEATS_PART};

fn log_stats(stats: &OccupancyStats) {
    log::info!(
        "[stats] total={} filled={} empty={} occupancy={}",
        stats.total,
        stats.filled,
        stats.empty,
        stats.rate_label()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = StadiumConfig::default();
    let mut rng = rand::thread_rng();
    let seats = generate_seats(&config, &mut rng)?;
    let stats = OccupancyStats::from_seats(&seats);
    log_stats(&stats);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(window_title(&stats))
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let parts = build_scene(&config, &seats);
    let mut state = pollster::block_on(GpuState::new(&window, &parts))?;
    drop(parts);

    let (w, h) = state.size();
    let mut camera = OrbitCamera::new(1.0);
    camera.resize(w, h);
    let mut mouse = MouseControls::default();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                camera.resize(size.width, size.height);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseInput { state: pressed, button, .. } => mouse.button(button, pressed),
            WindowEvent::CursorMoved { position, .. } => {
                mouse.cursor_moved(Vec2::new(position.x as f32, position.y as f32), &mut camera)
            }
            WindowEvent::CursorLeft { .. } => mouse.cursor_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                camera.zoom(wheel_delta_y(delta));
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(c) if c.eq_ignore_ascii_case("r") => {
                    // Same geometry, fresh occupancy.
                    match generate_seats(&config, &mut rng) {
                        Ok(seats) => {
                            let stats = OccupancyStats::from_seats(&seats);
                            log_stats(&stats);
                            state.update_instances(SEATS_PART, &seat_instances(&seats));
                            state.window.set_title(&window_title(&stats));
                        }
                        Err(e) => log::warn!("[seats] regenerate failed: {e}"),
                    }
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => match state.render(&camera) {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                elwt.exit()
            }
            Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
        },
        _ => {}
    })?;
    Ok(())
}
