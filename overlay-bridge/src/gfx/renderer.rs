//! Surface setup and egui painting.
//!
//! Every frame starts from a fully transparent clear, so only what egui
//! paints covers the desktop underneath the window.

use std::sync::Arc;

use anyhow::Context;
use egui::{ClippedPrimitive, TexturesDelta};
use egui_wgpu::{Renderer, RendererOptions, ScreenDescriptor};
use wgpu::{
    Backends, CompositeAlphaMode, Device, DeviceDescriptor, Instance, InstanceDescriptor,
    PowerPreference, Queue, RequestAdapterOptions, Surface, SurfaceConfiguration, TextureFormat,
    TextureUsages, TextureViewDescriptor,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Device, surface and the egui paint pipeline for one window.
pub struct GpuState {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
    renderer: Renderer,
}

impl GpuState {
    /// Blocks until an adapter and device are available for `window`.
    pub fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no GPU adapter can present to the overlay window")?;
        let info = adapter.get_info();
        tracing::info!(adapter = %info.name, backend = ?info.backend, "GPU ready");

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("overlay"),
            ..Default::default()
        }))?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_format(&caps.formats).context("surface offers no texture format")?;
        let alpha_mode = pick_alpha_mode(&caps.alpha_modes);
        if alpha_mode == CompositeAlphaMode::Opaque {
            tracing::warn!("no transparent compositing available; the overlay will be opaque");
        }

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(&device, format, RendererOptions::default());

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn max_texture_side(&self) -> usize {
        self.device.limits().max_texture_dimension_2d as usize
    }

    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Uploads `textures`, paints `primitives` and presents. Returns
    /// `Ok(false)` when the surface had to be reconfigured and the frame was
    /// dropped.
    pub fn paint(
        &mut self,
        primitives: &[ClippedPrimitive],
        textures: &TexturesDelta,
        pixels_per_point: f32,
    ) -> anyhow::Result<bool> {
        for (id, delta) in &textures.set {
            self.renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.free_textures(textures);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => anyhow::bail!("GPU out of memory"),
            Err(e) => {
                tracing::warn!("skipping frame: {e:?}");
                self.free_textures(textures);
                return Ok(false);
            }
        };
        let view = frame.texture.create_view(&TextureViewDescriptor::default());

        let screen = ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point,
        };
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("overlay-frame"),
            });
        let mut commands = self.renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            primitives,
            &screen,
        );

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("overlay-egui"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.renderer
                .render(&mut pass.forget_lifetime(), primitives, &screen);
        }

        commands.push(encoder.finish());
        self.queue.submit(commands);
        frame.present();
        self.free_textures(textures);
        Ok(true)
    }

    fn free_textures(&mut self, textures: &TexturesDelta) {
        for id in &textures.free {
            self.renderer.free_texture(id);
        }
    }
}

/// egui blends in gamma space, so a linear (non-sRGB) target comes first.
fn pick_format(available: &[TextureFormat]) -> Option<TextureFormat> {
    available
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| available.first())
        .copied()
}

/// Modes that keep the transparent clear see-through, best first.
fn pick_alpha_mode(available: &[CompositeAlphaMode]) -> CompositeAlphaMode {
    [
        CompositeAlphaMode::PreMultiplied,
        CompositeAlphaMode::PostMultiplied,
        CompositeAlphaMode::Inherit,
    ]
    .into_iter()
    .find(|m| available.contains(m))
    .or_else(|| available.first().copied())
    .unwrap_or(CompositeAlphaMode::Auto)
}
