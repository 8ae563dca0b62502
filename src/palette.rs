/// Tabela de cores da visualização
/// Carrega 256 triplas RGB de um arquivo texto

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::PALETTE_SIZE;

/// Paleta padrão embutida no binário
const BUNDLED_PALETTE: &str = include_str!("../assets/paleta.pal");

/// Uma cor da paleta
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaletteEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteEntry {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Cor como RGBA opaco
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

impl From<[u8; 3]> for PaletteEntry {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("falha ao ler paleta {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("linha {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("linha {line}: componente inválido {token:?} (esperado inteiro 0..=255)")]
    InvalidComponent { line: usize, token: String },
    #[error("paleta incompleta: {found} cores de {}", PALETTE_SIZE)]
    TooFewEntries { found: usize },
    #[error("paleta com mais de {} cores", PALETTE_SIZE)]
    TooManyEntries,
}

/// Paleta imutável com exatamente PALETTE_SIZE cores
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: [PaletteEntry; PALETTE_SIZE],
}

impl Palette {
    /// Carrega a paleta de um arquivo
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let palette = Self::parse(BufReader::new(file)).map_err(|e| match e {
            PaletteError::Io { source, .. } => PaletteError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log::info!("Paleta carregada de {}", path.display());
        Ok(palette)
    }

    /// Paleta padrão, independente do diretório de trabalho
    pub fn bundled() -> Result<Self, PaletteError> {
        Self::parse(Cursor::new(BUNDLED_PALETTE))
    }

    /// Lê uma tripla "r g b" por linha, na ordem do arquivo
    pub fn parse(reader: impl BufRead) -> Result<Self, PaletteError> {
        let mut entries = [PaletteEntry::BLACK; PALETTE_SIZE];
        let mut found = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| PaletteError::Io {
                path: PathBuf::new(),
                source,
            })?;

            // Linhas vazias (ex.: newline final) são ignoradas
            if line.trim().is_empty() {
                continue;
            }

            if found == PALETTE_SIZE {
                return Err(PaletteError::TooManyEntries);
            }

            entries[found] = parse_line(&line, line_no)?;
            found += 1;
        }

        if found < PALETTE_SIZE {
            return Err(PaletteError::TooFewEntries { found });
        }

        Ok(Self { entries })
    }

    /// Retorna a cor no índice; u8 garante que o índice está no intervalo
    pub fn get(&self, index: u8) -> PaletteEntry {
        self.entries[index as usize]
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<PaletteEntry, PaletteError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(PaletteError::Malformed {
            line: line_no,
            reason: format!("esperados 3 inteiros, encontrados {}", tokens.len()),
        });
    }

    let mut rgb = [0u8; 3];
    for (slot, token) in rgb.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| PaletteError::InvalidComponent {
            line: line_no,
            token: token.to_string(),
        })?;
    }

    Ok(PaletteEntry::from(rgb))
}

#[cfg(test)]
pub(crate) fn gradient_text() -> String {
    (0..PALETTE_SIZE)
        .map(|i| format!("{} {} {}\n", i, 255 - i, i / 2))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_palette() {
        let palette = Palette::parse(Cursor::new(gradient_text())).unwrap();
        for i in 0..PALETTE_SIZE {
            let expected = PaletteEntry::new(i as u8, (255 - i) as u8, (i / 2) as u8);
            assert_eq!(palette.get(i as u8), expected);
        }
    }

    #[test]
    fn test_extra_whitespace_and_trailing_blank_line() {
        let mut text = String::new();
        for i in 0..PALETTE_SIZE {
            text.push_str(&format!("  {}\t{}   {}  \n", i, i, i));
        }
        text.push('\n');
        let palette = Palette::parse(Cursor::new(text)).unwrap();
        assert_eq!(palette.get(200), PaletteEntry::new(200, 200, 200));
    }

    #[test]
    fn test_too_few_entries() {
        let text: String = gradient_text().lines().take(100).map(|l| format!("{l}\n")).collect();
        match Palette::parse(Cursor::new(text)) {
            Err(PaletteError::TooFewEntries { found }) => assert_eq!(found, 100),
            other => panic!("esperado TooFewEntries, obtido {other:?}"),
        }
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(
            Palette::parse(Cursor::new("")),
            Err(PaletteError::TooFewEntries { found: 0 })
        ));
    }

    #[test]
    fn test_too_many_entries() {
        let text = format!("{}1 2 3\n", gradient_text());
        assert!(matches!(
            Palette::parse(Cursor::new(text)),
            Err(PaletteError::TooManyEntries)
        ));
    }

    #[test]
    fn test_non_integer_token() {
        let text = gradient_text().replacen("3 252 1", "3 abc 1", 1);
        match Palette::parse(Cursor::new(text)) {
            Err(PaletteError::InvalidComponent { line, token }) => {
                assert_eq!(line, 4);
                assert_eq!(token, "abc");
            }
            other => panic!("esperado InvalidComponent, obtido {other:?}"),
        }
    }

    #[test]
    fn test_component_out_of_range() {
        let text = gradient_text().replacen("0 255 0", "0 256 0", 1);
        assert!(matches!(
            Palette::parse(Cursor::new(text)),
            Err(PaletteError::InvalidComponent { line: 1, .. })
        ));
    }

    #[test]
    fn test_wrong_token_count() {
        let text = gradient_text().replacen("1 254 0", "1 254", 1);
        assert!(matches!(
            Palette::parse(Cursor::new(text)),
            Err(PaletteError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("rmandel-nao-existe.pal");
        let _ = std::fs::remove_file(&path);
        match Palette::load(&path) {
            Err(PaletteError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("esperado Io, obtido {other:?}"),
        }
    }

    #[test]
    fn test_bundled_palette_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/paleta.pal");
        assert_eq!(Palette::bundled().unwrap(), Palette::load(path).unwrap());
    }

    #[test]
    fn test_bundled_palette_ignores_working_dir() {
        let cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(std::env::temp_dir()).unwrap();
        let palette = Palette::bundled();
        std::env::set_current_dir(cwd).unwrap();
        assert!(palette.is_ok());
    }

    #[test]
    fn test_size_errors_mention_table_size() {
        let size = PALETTE_SIZE.to_string();
        assert!(PaletteError::TooFewEntries { found: 3 }.to_string().contains(&size));
        assert!(PaletteError::TooManyEntries.to_string().contains(&size));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rmandel-{}.pal", std::process::id()));
        std::fs::write(&path, gradient_text()).unwrap();
        let palette = Palette::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(palette.unwrap().get(10), PaletteEntry::new(10, 245, 5));
    }
}
