//! Ready-made implementations of [Renderer](crate::render::Renderer).

mod text_renderer;
pub use text_renderer::*;
