//! Tiny Frontend - Hello Demo
//!
//! One window, one button. Clicking the button presents a native modal
//! dialog with a fixed greeting. The interesting part is the threading
//! contract: every widget and surface is touched only from the event-loop
//! thread, and cross-thread callers go through the UI-task dispatcher.

#![warn(missing_docs)]

mod dialogs;
mod gpu;
mod logging_setup;
mod ui;
mod window;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};

use tinyfront_core::{GreetingAction, LogConfig, UiDispatcher, UiTaskQueue};

use crate::dialogs::NativeDialogs;
use crate::gpu::GpuContext;
use crate::window::MainWindow;

/// User event that wakes the event loop when a UI task was queued from
/// another thread.
#[derive(Debug, Clone, Copy)]
struct UiWake;

/// The main application state.
struct App {
    /// GPU device, queue, and instance.
    gpu: GpuContext,
    /// The one top-level window.
    main_window: MainWindow,
    /// The egui context.
    egui_context: egui::Context,
    /// The egui-winit integration state.
    egui_state: egui_winit::State,
    /// The egui renderer.
    egui_renderer: egui_wgpu::Renderer,
    /// Queue of tasks scheduled onto the UI thread.
    ui_tasks: UiTaskQueue,
    /// The greeting action wired to the button.
    greeting: GreetingAction,
}

impl App {
    /// Builds the window, GPU state, and egui integration.
    ///
    /// Runs inside the first event-loop callback, so everything here is
    /// constructed on the GUI thread.
    fn new(event_loop: &ActiveEventLoop, proxy: EventLoopProxy<UiWake>) -> Result<Self> {
        let gpu = pollster::block_on(GpuContext::new())
            .context("Failed to initialize GPU context")?;
        let main_window =
            MainWindow::create(event_loop, &gpu).context("Failed to create main window")?;

        let egui_context = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_context.clone(),
            egui::ViewportId::ROOT,
            main_window.window.as_ref(),
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            main_window.surface_config.format,
            egui_wgpu::RendererOptions::default(),
        );

        // The dispatcher is bound to this (the GUI) thread; cross-thread
        // callers enqueue and the proxy wakes the loop to drain.
        let (dispatcher, ui_tasks) = UiDispatcher::new();
        dispatcher.set_waker(move || {
            let _ = proxy.send_event(UiWake);
        });
        let greeting = GreetingAction::new(dispatcher, Arc::new(NativeDialogs));

        main_window.window.request_redraw();

        Ok(Self {
            gpu,
            main_window,
            egui_context,
            egui_state,
            egui_renderer,
            ui_tasks,
            greeting,
        })
    }

    /// Handles a single event from the loop.
    fn handle_event(&mut self, event: Event<UiWake>, elwt: &ActiveEventLoop) {
        match event {
            Event::WindowEvent { window_id, event } => {
                if window_id != self.main_window.window.id() {
                    return;
                }

                let response = self
                    .egui_state
                    .on_window_event(&self.main_window.window, &event);
                if response.repaint {
                    self.main_window.window.request_redraw();
                }

                match event {
                    WindowEvent::CloseRequested => {
                        info!("Main window closed, exiting");
                        elwt.exit();
                    }
                    WindowEvent::Resized(size) => {
                        self.main_window.resize(&self.gpu, size);
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.render() {
                            error!("Render error: {e:#}");
                        }
                    }
                    _ => (),
                }
            }
            Event::UserEvent(UiWake) => {
                self.ui_tasks.drain();
            }
            Event::AboutToWait => {
                self.ui_tasks.drain();
                elwt.set_control_flow(ControlFlow::Wait);
            }
            Event::LoopExiting => {
                info!("Event loop exiting");
            }
            _ => (),
        }
    }

    /// Renders one egui frame to the window surface.
    fn render(&mut self) -> Result<()> {
        let frame = match self.main_window.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.main_window.reconfigure(&self.gpu);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(&self.main_window.window);
        let full_output = self
            .egui_context
            .run(raw_input, |ctx| ui::draw(ctx, &self.greeting));
        self.egui_state
            .handle_platform_output(&self.main_window.window, full_output.platform_output);

        let tris = self
            .egui_context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.gpu.device, &self.gpu.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.main_window.surface_config.width,
                self.main_window.surface_config.height,
            ],
            pixels_per_point: self.main_window.window.scale_factor() as f32,
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("tinyfront encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui render pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();

        let wants_repaint = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|out| out.repaint_delay.is_zero())
            .unwrap_or(false);
        if wants_repaint {
            self.main_window.window.request_redraw();
        }

        Ok(())
    }
}

/// The main entry point for the application.
fn main() -> Result<()> {
    let _log_guard = logging_setup::init(&LogConfig::default())?;

    info!("Tinyfront session started");

    let event_loop = EventLoop::<UiWake>::with_user_event()
        .build()
        .context("Failed to create event loop")?;
    let proxy = event_loop.create_proxy();
    let mut app: Option<App> = None;

    #[allow(deprecated)]
    event_loop.run(move |event, elwt| {
        // All construction happens here, on the event-loop thread, never
        // in main() directly.
        if app.is_none() {
            app = Some(App::new(elwt, proxy.clone()).expect("Failed to create App"));
            info!("--- Entering Main Event Loop ---");
        }

        if let Some(app_ref) = &mut app {
            app_ref.handle_event(event, elwt);
        }
    })?;

    Ok(())
}
