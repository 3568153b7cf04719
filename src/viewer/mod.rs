//! Interactive window: egui side panel driving a [`Session`], with the rendered
//! scene shown as a texture.

mod gpu;
pub mod panel;

use std::sync::Arc;

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

pub use gpu::GpuSurface;
pub use panel::{PanelResponse, PanelStatus};

use crate::frame::RenderedFrame;
use crate::session::{Controls, Session};

const INITIAL_WINDOW_WIDTH: u32 = 1400;
const INITIAL_WINDOW_HEIGHT: u32 = 900;

pub struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuSurface>,
    session: Session,
    controls: Controls,
    texture: Option<egui::TextureHandle>,
    status: PanelStatus,
    pending: PanelResponse,
    needs_render: bool,
}

impl ViewerApp {
    pub fn new(session: Session, controls: Controls) -> Self {
        let status = PanelStatus {
            object_count: session.scene().len(),
            angles: controls.camera().view_angles(),
            error: None,
        };

        Self {
            window: None,
            gpu: None,
            session,
            controls,
            texture: None,
            status,
            pending: PanelResponse::default(),
            needs_render: true,
        }
    }

    /// Run an interaction cycle if the last UI pass asked for one
    fn run_cycle(&mut self) {
        let response = std::mem::take(&mut self.pending);
        if !(response.needs_render() || self.needs_render) {
            return;
        }

        match self.session.interact(&self.controls, response.add) {
            Ok(frame) => {
                self.show_frame(&frame);
                self.needs_render = false;
            }
            Err(e) => {
                // Retried on the next control change
                error!("Interaction failed: {:#}", e);
                self.status.error = Some(format!("{:#}", e));
                self.needs_render = false;
            }
        }
    }

    fn show_frame(&mut self, frame: &RenderedFrame) {
        self.status = PanelStatus {
            object_count: frame.object_count,
            angles: frame.angles,
            error: None,
        };

        let Some(gpu) = &self.gpu else {
            return;
        };
        let image = egui::ColorImage::from_rgb(
            [frame.image.width as usize, frame.image.height as usize],
            &frame.image.pixels,
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(gpu.egui_ctx().load_texture(
                    "scene",
                    image,
                    egui::TextureOptions::LINEAR,
                ))
            }
        }
    }

    fn redraw(&mut self) {
        let (Some(gpu), Some(window)) = (&mut self.gpu, &self.window) else {
            return;
        };

        let controls = &mut self.controls;
        let status = &self.status;
        let texture = self.texture.as_ref();
        let pending = &mut self.pending;

        let result = gpu.render(window, |ctx| {
            let response = panel::show_controls(ctx, controls, status);
            *pending = pending.merge(response);
            panel::show_scene(ctx, texture);
        });
        if let Err(e) = result {
            error!("Render error: {:#}", e);
        }

        self.run_cycle();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(panel::TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let gpu = match pollster::block_on(GpuSurface::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                error!("Failed to initialize GPU surface: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        info!("Viewer started with {} objects", self.session.scene().len());
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.needs_render = true;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(gpu), Some(window)) = (&mut self.gpu, &self.window) {
            if gpu.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RenderOptions;

    fn failing_app() -> ViewerApp {
        let options = RenderOptions {
            width: 0,
            height: 0,
            axes: false,
        };
        ViewerApp::new(Session::new(options), Controls::default())
    }

    #[test]
    fn test_failed_cycle_waits_for_next_change() {
        let mut app = failing_app();
        app.run_cycle();
        assert!(app.status.error.is_some());
        assert!(!app.needs_render);

        // Idle frames do not retry
        app.status.error = None;
        app.run_cycle();
        assert!(app.status.error.is_none());

        app.pending = PanelResponse {
            changed: true,
            add: false,
        };
        app.run_cycle();
        assert!(app.status.error.is_some());
    }

    #[test]
    fn test_cycle_without_window_updates_status() {
        let options = RenderOptions {
            width: 160,
            height: 120,
            axes: false,
        };
        let mut app = ViewerApp::new(Session::new(options), Controls::default());
        app.pending = PanelResponse {
            changed: false,
            add: true,
        };
        app.run_cycle();

        assert_eq!(app.status.object_count, 1);
        assert!(app.status.error.is_none());
        assert!(!app.needs_render);
        assert!(app.texture.is_none());
    }
}
