//! Main window
//!
//! Builds the one top-level window and owns its rendering surface. The
//! window is created hidden, centered on its monitor, and only then shown,
//! so it never flashes at the platform's default position.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::gpu::GpuContext;

/// Title of the main window.
pub const WINDOW_TITLE: &str = "Tiny Frontend - Hello Demo";

/// Requested inner size of the main window, in logical pixels.
pub const WINDOW_SIZE: (f64, f64) = (800.0, 600.0);

/// The application's only window, with its surface and configuration.
pub struct MainWindow {
    pub window: Arc<Window>,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
}

impl MainWindow {
    /// Creates, centers, and shows the main window.
    pub fn create(event_loop: &ActiveEventLoop, gpu: &GpuContext) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
            .with_visible(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        if let Some(monitor) = window.current_monitor() {
            let position =
                centered_position(monitor.position(), monitor.size(), window.outer_size());
            window.set_outer_position(position);
        }

        let surface = gpu.create_surface(window.clone())?;
        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &surface_config);

        window.set_visible(true);
        info!(
            "Created main window '{}' at {}x{} (logical)",
            WINDOW_TITLE, WINDOW_SIZE.0, WINDOW_SIZE.1
        );

        Ok(Self {
            window,
            surface,
            surface_config,
        })
    }

    /// Reconfigures the surface for a new physical size.
    pub fn resize(&mut self, gpu: &GpuContext, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.surface.configure(&gpu.device, &self.surface_config);
    }

    /// Re-applies the current surface configuration.
    ///
    /// Used when the surface reports itself lost or outdated.
    pub fn reconfigure(&self, gpu: &GpuContext) {
        self.surface.configure(&gpu.device, &self.surface_config);
    }
}

/// Position that centers a window of `window_size` on the given monitor.
fn centered_position(
    monitor_origin: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let x = monitor_origin.x + (monitor_size.width.saturating_sub(window_size.width) / 2) as i32;
    let y = monitor_origin.y + (monitor_size.height.saturating_sub(window_size.height) / 2) as i32;
    PhysicalPosition::new(x, y)
}
