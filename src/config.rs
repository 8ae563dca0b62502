/// Configurações do RMandel
/// Constantes do plano complexo e parâmetros de renderização

/// Dimensões padrão da janela
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Janela do plano complexo
pub const REAL_MIN: f64 = -2.0;
pub const REAL_MAX: f64 = 1.0;
pub const IMAG_MIN: f64 = -1.5;
pub const IMAG_MAX: f64 = 1.5;

/// Limite de |z|² a partir do qual o ponto diverge
pub const DIVERGE: f64 = 4.0;

/// Número máximo de iterações por pixel
pub const MAX_ITERATIONS: u32 = 256;

/// Deslocamento aplicado à contagem antes de indexar a paleta
pub const PALETTE_OFFSET: u32 = 5;

/// Quantidade de cores da paleta
pub const PALETTE_SIZE: usize = 256;

/// Cor de fundo (preto)
pub const BG_COLOR: [u8; 3] = [0, 0, 0];

/// Região retangular do plano complexo amostrada pelo grid de pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            real_min: REAL_MIN,
            real_max: REAL_MAX,
            imag_min: IMAG_MIN,
            imag_max: IMAG_MAX,
        }
    }
}

/// Parâmetros passados ao renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub diverge: f64,
    pub palette_offset: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_iterations: MAX_ITERATIONS,
            diverge: DIVERGE,
            palette_offset: PALETTE_OFFSET,
        }
    }
}
