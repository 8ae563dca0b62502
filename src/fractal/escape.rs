/// Iteração z = z² + c e mapeamento de pixels para o plano complexo

use crate::config::{RenderConfig, Viewport};

/// Número complexo em precisão dupla
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// z² + c
    #[inline(always)]
    pub fn square_add(self, c: Complex) -> Complex {
        Complex {
            re: self.re * self.re - self.im * self.im + c.re,
            im: 2.0 * self.re * self.im + c.im,
        }
    }

    /// |z|²
    #[inline(always)]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Viewport {
    /// Converte o pixel (i, j) de um grid width x height em coordenada complexa.
    /// O chamador garante width > 0 e height > 0.
    pub fn map(&self, i: u32, j: u32, width: u32, height: u32) -> Complex {
        Complex {
            re: (self.real_max - self.real_min) / width as f64 * i as f64 + self.real_min,
            im: (self.imag_max - self.imag_min) / height as f64 * j as f64 + self.imag_min,
        }
    }
}

/// Conta iterações até |z|² ultrapassar `diverge`, limitado a `max_iter`
#[inline(always)]
pub fn escape_count(c: Complex, max_iter: u32, diverge: f64) -> u32 {
    let mut z = Complex::ZERO;
    let mut count = 0;
    while count < max_iter {
        z = z.square_add(c);
        count += 1;
        if z.norm_sqr() > diverge {
            break;
        }
    }
    count
}

/// Índice da paleta para uma contagem que escapou, sempre em 0..=255
#[inline(always)]
pub fn palette_index(count: u32, offset: u32) -> u8 {
    count.saturating_add(offset).min(u8::MAX as u32) as u8
}

impl RenderConfig {
    /// Contagem de escape do pixel (i, j)
    pub fn escape_at(&self, i: u32, j: u32, width: u32, height: u32) -> u32 {
        let c = self.viewport.map(i, j, width, height);
        escape_count(c, self.max_iterations, self.diverge)
    }

    /// Contagem igual ao máximo significa ponto dentro do conjunto
    pub fn is_inside(&self, count: u32) -> bool {
        count >= self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DIVERGE, MAX_ITERATIONS, PALETTE_OFFSET};

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_count(Complex::ZERO, MAX_ITERATIONS, DIVERGE), MAX_ITERATIONS);
    }

    #[test]
    fn test_outside_radius_two_escapes() {
        let points = [
            Complex::new(2.5, 0.0),
            Complex::new(-2.1, 0.0),
            Complex::new(0.0, 3.0),
            Complex::new(1.5, 1.5),
            Complex::new(-1.9, -1.9),
        ];
        for c in points {
            let count = escape_count(c, MAX_ITERATIONS, DIVERGE);
            assert!(count >= 1 && count < MAX_ITERATIONS, "{c:?} -> {count}");
        }
        // Primeira iteração já passa do limite
        assert_eq!(escape_count(Complex::new(3.0, 0.0), MAX_ITERATIONS, DIVERGE), 1);
    }

    #[test]
    fn test_boundary_is_not_divergence() {
        // c = -2 fica preso em z = 2, |z|² = 4 nunca é estritamente maior
        assert_eq!(escape_count(Complex::new(-2.0, 0.0), MAX_ITERATIONS, DIVERGE), MAX_ITERATIONS);
    }

    #[test]
    fn test_count_respects_max() {
        for max in [0, 1, 10, 256] {
            let count = escape_count(Complex::new(-0.5, 0.0), max, DIVERGE);
            assert_eq!(count, max);
        }
    }

    #[test]
    fn test_palette_index_clamped() {
        for count in 0..=MAX_ITERATIONS {
            let idx = palette_index(count, PALETTE_OFFSET);
            assert_eq!(idx as u32, (count + PALETTE_OFFSET).min(255));
        }
        assert_eq!(palette_index(u32::MAX, PALETTE_OFFSET), 255);
    }

    #[test]
    fn test_viewport_corners() {
        let vp = Viewport::default();
        assert_eq!(vp.map(0, 0, 640, 480), Complex::new(-2.0, -1.5));
        let c = vp.map(320, 240, 640, 480);
        assert!((c.re + 0.5).abs() < 1e-12);
        assert!(c.im.abs() < 1e-12);
    }
}
