/// RMandel - núcleo do visualizador
/// Paleta, iteração de escape e apresentação GPU

pub mod config;
pub mod fractal;
pub mod palette;
pub mod renderer;
