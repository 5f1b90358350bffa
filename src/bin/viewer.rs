use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::{UVec2, Vec2};
use log::{debug, error};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowAttributes, WindowId};

use voxel_traverse::view::{CursorHint, InputEvent, MouseButton, ViewController};
use voxel_traverse::visualization::{blit_to_frame, render_scene};
use voxel_traverse::{Grid2d, SceneConfig, load_scene};

const TITLE: &str = "Voxel Traversal";
const FPS_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let scene = match std::env::args().nth(1) {
        Some(path) => load_scene(&path)?,
        None => SceneConfig::default(),
    };

    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(&scene)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}

struct ViewerApp {
    controller: ViewController,
    grid: Grid2d,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    cursor: Vec2,
    frames: u32,
    fps_since: Instant,
}

impl ViewerApp {
    fn new(scene: &SceneConfig) -> Result<Self, voxel_traverse::TraversalError> {
        let controller = ViewController::from_scene(scene);
        let mut grid = Grid2d::new(1, 1)?;
        controller.view().sync_grid(&mut grid)?;
        Ok(Self {
            controller,
            grid,
            window: None,
            pixels: None,
            cursor: Vec2::ZERO,
            frames: 0,
            fps_since: Instant::now(),
        })
    }

    fn apply(&mut self, event: InputEvent) {
        if let Some(hint) = self.controller.handle(event) {
            if let Some(window) = &self.window {
                window.set_cursor(cursor_icon(hint));
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.controller.view().sync_grid(&mut self.grid) {
            error!("failed to resize traversal grid: {err}");
            event_loop.exit();
            return;
        }

        let cells = self.controller.traverse(&self.grid);
        let img = render_scene(self.controller.view(), self.controller.handles(), &cells);

        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        if !blit_to_frame(&img, pixels.frame_mut()) {
            // Frame and viewport disagree until the pending resize lands.
            return;
        }
        if let Err(err) = pixels.render() {
            error!("failed to render frame: {err}");
            event_loop.exit();
            return;
        }

        self.frames += 1;
        let elapsed = self.fps_since.elapsed();
        if elapsed >= FPS_INTERVAL {
            let fps = self.frames as f32 / elapsed.as_secs_f32();
            debug!("{fps:.1} fps, {} cells traversed", cells.len());
            if let Some(window) = &self.window {
                window.set_title(&format!("{TITLE} - {fps:.0} fps"));
            }
            self.frames = 0;
            self.fps_since = Instant::now();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let viewport = self.controller.view().viewport();
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title(TITLE)
                .with_inner_size(PhysicalSize::new(viewport.x, viewport.y)),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let buffer = UVec2::new(size.width.max(1), size.height.max(1));
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = match Pixels::new(buffer.x, buffer.y, surface_texture) {
            Ok(pixels) => pixels,
            Err(err) => {
                error!("failed to create pixels surface: {err}");
                event_loop.exit();
                return;
            }
        };

        self.controller.view_mut().set_viewport(buffer);
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                // Minimised windows report a zero size; keep the last buffer.
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(pixels) = self.pixels.as_mut() {
                    if pixels.resize_buffer(size.width, size.height).is_err() {
                        error!("failed to resize frame buffer to {}x{}", size.width, size.height);
                        event_loop.exit();
                        return;
                    }
                    let _ = pixels.resize_surface(size.width, size.height);
                }
                self.controller
                    .view_mut()
                    .set_viewport(UVec2::new(size.width, size.height));
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                let delta = pos - self.cursor;
                self.cursor = pos;
                self.apply(InputEvent::MouseMove { pos, delta });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button(button);
                let pos = self.cursor;
                let event = match state {
                    ElementState::Pressed => InputEvent::MouseDown { button, pos },
                    ElementState::Released => InputEvent::MouseUp { button, pos },
                };
                self.apply(event);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => scroll_lines(y as f64),
                    MouseScrollDelta::PixelDelta(pos) => scroll_lines(pos.y),
                };
                if lines != 0 {
                    self.apply(InputEvent::Scroll(lines));
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Space) => self.apply(InputEvent::ResetView),
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    Key::Character(ref c) if c.eq_ignore_ascii_case("s") => {
                        self.apply(InputEvent::ToggleSegment)
                    }
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

/// One zoom step per wheel event, whatever the platform's scroll units.
fn scroll_lines(y: f64) -> i32 {
    if y > 0.0 {
        1
    } else if y < 0.0 {
        -1
    } else {
        0
    }
}

fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Arrow => CursorIcon::Default,
        CursorHint::Hand => CursorIcon::Pointer,
        CursorHint::Move => CursorIcon::Move,
    }
}
