pub mod gl;
pub mod shaders;
pub mod pipeline;

pub use gl::GlContext;
pub use pipeline::RenderPipeline;
