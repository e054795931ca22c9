//! Interactive solid-of-revolution sculptor.
//!
//! The window is split in two: the left half shows the revolved solid, the
//! right half is the 2D profile editor.
//!
//! Controls:
//! - Left mouse drag (editor half): Grab and move the nearest control point
//! - Right click (editor half): Remove the nearest control point (keeps 4)
//! - Left mouse drag (solid half): Rotate camera
//! - Scroll wheel: Zoom in/out
//! - P: Add a control point at the profile origin
//! - 0 / 9: Increase / decrease refinement depth (within 1..=10)
//! - Escape: Quit

mod camera;
mod mesh_gpu;
mod renderer;

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use camera::OrbitCamera;
use mesh_gpu::{GpuMesh, OverlayStrip};
use renderer::Renderer;

use lathe::nalgebra::Point3;
use lathe::session::SculptSession;

/// Overlay colors: control polygon and refined curve.
const CONTROL_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const CURVE_COLOR: [f32; 3] = [0.0, 1.0, 1.0];

/// Application state.
struct App {
    /// The editing session: control polygon, depth, sweep configuration.
    session: SculptSession,
    /// The window (created after resume).
    window: Option<Arc<Window>>,
    /// The renderer (created after window).
    renderer: Option<Renderer>,
    /// The camera for the solid viewport.
    camera: OrbitCamera,
    /// Control point currently being dragged, if any.
    dragged_point: Option<usize>,
    /// Whether a camera-orbit drag is in progress.
    orbiting: bool,
    /// Last cursor position, in physical pixels.
    cursor: PhysicalPosition<f64>,
    /// Last cursor position seen during an orbit drag.
    last_orbit_pos: Option<PhysicalPosition<f64>>,
}

impl App {
    fn new() -> Self {
        Self {
            session: SculptSession::new(),
            window: None,
            renderer: None,
            camera: OrbitCamera::default(),
            dragged_point: None,
            orbiting: false,
            cursor: PhysicalPosition::new(0.0, 0.0),
            last_orbit_pos: None,
        }
    }

    /// True if the cursor is over the profile-editor (right) half.
    fn cursor_in_editor(&self) -> bool {
        let Some(window) = &self.window else {
            return false;
        };
        self.cursor.x >= f64::from(window.inner_size().width) / 2.0
    }

    /// Map the cursor to editor coordinates: the right half spans
    /// [-1, 1] × [-1, 1] with +y up.
    fn cursor_editor_pos(&self) -> (f64, f64) {
        let Some(window) = &self.window else {
            return (0.0, 0.0);
        };
        let size = window.inner_size();
        let width = f64::from(size.width);
        let height = f64::from(size.height);

        let x = (self.cursor.x - width * 0.75) / (width * 0.25);
        let y = (self.cursor.y - height * 0.5) / (-height * 0.5);
        (x, y)
    }

    fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Lathe")
            .with_inner_size(winit::dpi::LogicalSize::new(1200, 600));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let renderer = pollster::block_on(Renderer::new(window.clone()));

        log::info!(
            "Session ready: {} control points, depth {}",
            self.session.control_points().len(),
            self.session.depth()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(ref mut renderer) = self.renderer {
                    renderer.resize(new_size);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.logical_key {
                        Key::Named(NamedKey::Escape) => {
                            event_loop.exit();
                        }
                        Key::Character(ref c) if c == "p" || c == "P" => {
                            self.session.add_point(Point3::new(0.0, 0.0, 0.0));
                            log::info!(
                                "Added control point ({} total)",
                                self.session.control_points().len()
                            );
                            self.request_redraw();
                        }
                        Key::Character(ref c) if c == "0" => {
                            self.session.increase_depth();
                            log::info!("Refinement depth: {}", self.session.depth());
                            self.request_redraw();
                        }
                        Key::Character(ref c) if c == "9" => {
                            self.session.decrease_depth();
                            log::info!("Refinement depth: {}", self.session.depth());
                            self.request_redraw();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => {
                    if self.cursor_in_editor() {
                        let (x, y) = self.cursor_editor_pos();
                        self.dragged_point = self.session.nearest_point(x, y);
                    } else {
                        self.orbiting = true;
                    }
                }
                (MouseButton::Left, ElementState::Released) => {
                    self.dragged_point = None;
                    self.orbiting = false;
                    self.last_orbit_pos = None;
                }
                (MouseButton::Right, ElementState::Pressed) => {
                    if self.cursor_in_editor() {
                        let (x, y) = self.cursor_editor_pos();
                        if let Some(index) = self.session.nearest_point(x, y) {
                            match self.session.remove_point(index) {
                                Ok(()) => {
                                    log::info!(
                                        "Removed control point {} ({} remain)",
                                        index,
                                        self.session.control_points().len()
                                    );
                                    self.request_redraw();
                                }
                                Err(err) => log::info!("{err}"),
                            }
                        }
                    }
                }
                _ => {}
            },

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;

                if let Some(index) = self.dragged_point {
                    let (x, y) = self.cursor_editor_pos();
                    if self.session.move_point(index, x, y).is_ok() {
                        self.request_redraw();
                    }
                } else if self.orbiting {
                    if let Some(last) = self.last_orbit_pos {
                        let dx = position.x - last.x;
                        let dy = position.y - last.y;

                        let sensitivity = 0.005;
                        self.camera
                            .rotate(-dx as f32 * sensitivity, dy as f32 * sensitivity);
                        self.request_redraw();
                    }
                    self.last_orbit_pos = Some(position);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };

                self.camera.zoom(1.0 - scroll * 0.1);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(ref mut renderer) = self.renderer else {
                    return;
                };

                // Full pipeline rebuild from the live session, every frame.
                let buffers = self.session.rebuild();
                let mesh = GpuMesh::from_buffers(renderer.device(), &buffers);

                let control = OverlayStrip::from_points(
                    renderer.device(),
                    self.session.control_points(),
                    CONTROL_COLOR,
                );
                let curve = OverlayStrip::from_points(
                    renderer.device(),
                    &self.session.refined_curve(),
                    CURVE_COLOR,
                );

                match renderer.render(mesh.as_ref(), control.as_ref(), curve.as_ref(), &self.camera)
                {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        if let Some(ref window) = self.window {
                            renderer.resize(window.inner_size());
                        }
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory");
                        event_loop.exit();
                    }
                    Err(e) => {
                        log::error!("Render error: {:?}", e);
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Request continuous redraws for smooth interaction
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
