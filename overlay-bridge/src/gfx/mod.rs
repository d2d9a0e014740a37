//! GPU side: a wgpu surface that egui-wgpu paints into.

mod renderer;

pub use renderer::GpuState;
