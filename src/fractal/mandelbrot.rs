/// Renderer do conjunto de Mandelbrot
/// Função pura de (paleta, configuração, largura, altura)

use rayon::prelude::*;
use thiserror::Error;

use super::escape::palette_index;
use super::frame::{Frame, Surface};
use crate::config::RenderConfig;
use crate::palette::{Palette, PaletteEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("superfície degenerada {width}x{height}, nada a desenhar")]
    DegenerateSurface { width: u32, height: u32 },
}

pub struct MandelbrotRenderer {
    palette: Palette,
    config: RenderConfig,
}

impl MandelbrotRenderer {
    pub fn new(palette: Palette, config: RenderConfig) -> Self {
        Self { palette, config }
    }

    /// Cor de uma contagem de escape
    pub fn color_for(&self, count: u32) -> PaletteEntry {
        if self.config.is_inside(count) {
            PaletteEntry::BLACK
        } else {
            self.palette
                .get(palette_index(count, self.config.palette_offset))
        }
    }

    /// Cor do pixel (i, j) no espaço do plano (j cresce para cima)
    fn color_at(&self, i: u32, j: u32, width: u32, height: u32) -> PaletteEntry {
        self.color_for(self.config.escape_at(i, j, width, height))
    }

    /// Limpa a superfície e pinta cada pixel uma única vez
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        check_dimensions(width, height)?;

        surface.clear(PaletteEntry::BLACK);
        for i in 0..width {
            for j in 0..height {
                // Eixo imaginário cresce para cima
                surface.set_pixel(i, height - 1 - j, self.color_at(i, j, width, height));
            }
        }
        Ok(())
    }

    /// Renderiza em um frame existente, linhas em paralelo
    pub fn render_into(
        &self,
        frame: &mut Frame,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        check_dimensions(width, height)?;

        frame.resize(width, height);
        frame
            .pixels_mut()
            .par_chunks_exact_mut(width as usize)
            .enumerate()
            .for_each(|(row, pixels)| {
                let j = height - 1 - row as u32;
                for (i, pixel) in pixels.iter_mut().enumerate() {
                    *pixel = self.color_at(i as u32, j, width, height).to_rgba();
                }
            });
        Ok(())
    }

    /// Renderiza em um frame novo
    pub fn render_frame(&self, width: u32, height: u32) -> Result<Frame, RenderError> {
        let mut frame = Frame::new(0, 0);
        self.render_into(&mut frame, width, height)?;
        Ok(frame)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::DegenerateSurface { width, height });
    }
    Ok(())
}
