/// Buffer de pixels RGBA onde o fractal é desenhado
/// Linha 0 é o topo da imagem

use crate::palette::PaletteEntry;

/// Superfície de desenho que o renderer sabe pintar
pub trait Surface {
    /// Preenche a superfície inteira com uma cor
    fn clear(&mut self, color: PaletteEntry);
    /// Pinta um pixel; coordenadas fora da superfície são ignoradas
    fn set_pixel(&mut self, x: u32, y: u32, color: PaletteEntry);
}

/// Frame RGBA8 em memória
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pixels: Vec<[u8; 4]>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![PaletteEntry::BLACK.to_rgba(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Redimensiona o frame; o conteúdo anterior é descartado
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, PaletteEntry::BLACK.to_rgba());
        self.width = width;
        self.height = height;
    }

    /// Retorna o pixel (x, y) como RGBA; None fora do frame, como em set_pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Pixels em ordem de linha, para preenchimento direto
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut self.pixels
    }

    /// Bytes crus para upload na GPU
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Surface for Frame {
    fn clear(&mut self, color: PaletteEntry) {
        self.pixels.fill(color.to_rgba());
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: PaletteEntry) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = color.to_rgba();
        }
    }
}
