use crate::error::{FontUnavailable, TextError};
use std::path::PathBuf;
use std::sync::Arc;

lazy_static! {
    static ref DEFAULT_FONT: Result<Arc<FontResource>, FontUnavailable> = init_default_font();
}

/// Environment variable naming a font file to use instead of the bundled face.
pub const FONT_PATH_ENV: &str = "IMGG_FONT_PATH";
/// Environment variable overriding the rasterization resolution.
pub const FONT_DPI_ENV: &str = "IMGG_FONT_DPI";

const DEFAULT_DPI: u32 = 72;

// Monospaced so that the fixed font metrics reported to layout code hold
const BUNDLED_FONT: &[u8] = include_bytes!("../fonts/dejavu-sans-mono/DejaVuSansMono.ttf");

/// Where the font bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file on disk.
    File(PathBuf),
    /// Font bytes already in memory.
    Data(Arc<Vec<u8>>),
    /// A family installed on the system (`monospace`, `sans-serif` and
    /// `serif` select the generic families).
    System(String),
    /// The DejaVu Sans Mono face compiled into the library.
    Bundled,
}

/// Font selection and rasterization resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    pub source: FontSource,
    pub dpi: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            source: FontSource::Bundled,
            dpi: DEFAULT_DPI,
        }
    }
}

impl FontConfig {
    /// Configuration from `IMGG_FONT_PATH` and `IMGG_FONT_DPI`, falling back
    /// to the bundled face at 72 dpi.
    pub fn from_env() -> Self {
        let source = match std::env::var_os(FONT_PATH_ENV) {
            Some(path) if !path.is_empty() => FontSource::File(PathBuf::from(path)),
            _ => FontSource::Bundled,
        };
        let dpi = match std::env::var(FONT_DPI_ENV) {
            Ok(value) => match value.trim().parse::<u32>() {
                Ok(dpi) if dpi > 0 => dpi,
                _ => {
                    log::warn!("Ignoring invalid {}={:?}", FONT_DPI_ENV, value);
                    DEFAULT_DPI
                }
            },
            Err(_) => DEFAULT_DPI,
        };
        Self { source, dpi }
    }
}

/// A parsed font file shared read-only by all rendering sessions.
#[derive(Debug, Clone)]
pub struct FontResource {
    data: Arc<Vec<u8>>,
    index: u32,
    dpi: u32,
    family: String,
    units_per_em: u16,
}

impl FontResource {
    /// Load and validate the font described by `config`.
    pub fn load(config: &FontConfig) -> Result<Self, TextError> {
        let (data, index) = match &config.source {
            FontSource::File(path) => (Arc::new(std::fs::read(path)?), 0),
            FontSource::Data(data) => (data.clone(), 0),
            FontSource::System(family) => load_system_font(family)?,
            FontSource::Bundled => (Arc::new(BUNDLED_FONT.to_vec()), 0),
        };
        Self::from_data(data, index, config.dpi)
    }

    /// Validate font bytes and wrap them as a resource.
    pub fn from_data(data: Arc<Vec<u8>>, index: u32, dpi: u32) -> Result<Self, TextError> {
        let face = ttf_parser::Face::parse(&data, index)?;
        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
            .find_map(|name| name.to_string())
            .unwrap_or_default();
        let units_per_em = face.units_per_em();
        Ok(Self {
            data,
            index,
            dpi: dpi.max(1),
            family,
            units_per_em,
        })
    }

    /// The bundled DejaVu Sans Mono face at 72 dpi.
    pub fn bundled() -> Result<Self, TextError> {
        Self::load(&FontConfig::default())
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub(crate) fn face(&self) -> Result<ttf_parser::Face<'_>, TextError> {
        Ok(ttf_parser::Face::parse(&self.data, self.index)?)
    }
}

fn load_system_font(family: &str) -> Result<(Arc<Vec<u8>>, u32), TextError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let families = [match family {
        "monospace" => fontdb::Family::Monospace,
        "sans-serif" => fontdb::Family::SansSerif,
        "serif" => fontdb::Family::Serif,
        name => fontdb::Family::Name(name),
    }];
    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| TextError::FontNotFound(family.to_string()))?;
    db.with_face_data(id, |data, index| (Arc::new(data.to_vec()), index))
        .ok_or_else(|| TextError::FontNotFound(family.to_string()))
}

fn init_default_font() -> Result<Arc<FontResource>, FontUnavailable> {
    let config = FontConfig::from_env();
    match FontResource::load(&config) {
        Ok(font) => {
            log::info!(
                "Loaded font {:?} ({} units/em) at {} dpi",
                font.family(),
                font.units_per_em(),
                font.dpi()
            );
            Ok(Arc::new(font))
        }
        Err(err) => {
            log::error!(
                "Failed to load font from {:?}: {}; text will not be drawn",
                config.source,
                err
            );
            Err(err.into())
        }
    }
}

/// The process-wide font, loaded on first use from [`FontConfig::from_env`].
///
/// A load failure is logged once and then reported by every call.
pub fn default_font() -> Result<Arc<FontResource>, FontUnavailable> {
    DEFAULT_FONT.clone()
}

/// Whether the process-wide font loaded.
pub fn font_available() -> bool {
    DEFAULT_FONT.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_font_loads() {
        let font = FontResource::bundled().unwrap();
        assert_eq!(font.family(), "DejaVu Sans Mono");
        assert_eq!(font.units_per_em(), 2048);
        assert_eq!(font.dpi(), 72);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let config = FontConfig {
            source: FontSource::File(PathBuf::from("/nonexistent/imgg/font.ttf")),
            dpi: 72,
        };
        assert!(matches!(FontResource::load(&config), Err(TextError::Io(_))));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();
        let config = FontConfig {
            source: FontSource::File(file.path().to_path_buf()),
            dpi: 72,
        };
        let err = FontResource::load(&config).unwrap_err();
        assert!(matches!(err, TextError::Parse(_)));
        let unavailable = FontUnavailable::from(err);
        assert!(unavailable.reason.contains("parse"));
    }

    #[test]
    fn test_data_source_shares_bytes() {
        let bytes = Arc::new(BUNDLED_FONT.to_vec());
        let config = FontConfig {
            source: FontSource::Data(bytes.clone()),
            dpi: 96,
        };
        let font = FontResource::load(&config).unwrap();
        assert!(Arc::ptr_eq(&font.data, &bytes));
        assert_eq!(font.dpi(), 96);
    }
}
