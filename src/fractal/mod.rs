/// Módulo do fractal
/// Iteração de escape, buffer de pixels e renderer

pub mod escape;
pub mod frame;
pub mod mandelbrot;

pub use frame::Frame;
pub use mandelbrot::{MandelbrotRenderer, RenderError};
