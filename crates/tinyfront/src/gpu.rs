//! GPU context
//!
//! Thin wgpu initialization for a single egui window. Modern backends
//! (Vulkan, Metal, DX12) are tried first; GL is a last resort because its
//! eager EGL/GLX initialization can panic on systems without a display.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

/// Errors during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// No usable adapter was offered by any backend.
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    /// The adapter refused to hand out a device.
    #[error("failed to request GPU device")]
    Device(#[from] wgpu::RequestDeviceError),
    /// A rendering surface could not be created for the window.
    #[error("failed to create surface")]
    Surface(#[from] wgpu::CreateSurfaceError),
}

/// Device, queue, and instance shared by everything that draws.
pub struct GpuContext {
    pub instance: wgpu::Instance,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Creates a GPU context, preferring non-GL backends.
    pub async fn new() -> Result<Self, GpuError> {
        let safe_backends = wgpu::Backends::all() & !wgpu::Backends::GL;
        match Self::with_backends(safe_backends).await {
            Ok(context) => Ok(context),
            Err(e) => {
                warn!("GPU init failed on primary backends ({e}), falling back to GL");
                Self::with_backends(wgpu::Backends::GL).await
            }
        }
    }

    async fn with_backends(backends: wgpu::Backends) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok()
            .ok_or(GpuError::NoAdapter)?;

        let adapter_info = adapter.get_info();
        info!(
            "Selected adapter: {} ({:?})",
            adapter_info.name, adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("tinyfront device"),
                ..Default::default()
            })
            .await?;

        Ok(Self {
            instance,
            device,
            queue,
        })
    }

    /// Creates a surface for the given window.
    pub fn create_surface(
        &self,
        window: Arc<winit::window::Window>,
    ) -> Result<wgpu::Surface<'static>, GpuError> {
        Ok(self.instance.create_surface(window)?)
    }
}
