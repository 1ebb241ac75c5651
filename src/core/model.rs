// IconGen - core/model.rs
//
// Transient artifacts of one generation run. Nothing here is persisted
// beyond the files the paths point at.

use crate::util::constants;
use crate::util::error::RenderError;
use std::path::{Path, PathBuf};

/// A named SVG input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorSource {
    /// Path to the SVG file.
    pub path: PathBuf,

    /// File stem used to name every output (`tray-icon` for `tray-icon.svg`).
    pub base_name: String,
}

impl VectorSource {
    /// Build a source from its path, deriving the base name from the file stem.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let path = path.into();
        let base_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| RenderError::InvalidSourceName { path: path.clone() })?;
        Ok(Self { path, base_name })
    }

    /// `<dir>/<base>-<size>.png`
    pub fn raster_path(&self, dir: &Path, size: u32) -> PathBuf {
        dir.join(format!(
            "{}-{size}.{}",
            self.base_name,
            constants::RASTER_EXTENSION
        ))
    }

    /// `<dir>/<base>.ico`
    pub fn ico_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.base_name, constants::ICO_EXTENSION))
    }

    /// `<dir>/<base>.icns`
    pub fn icns_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.base_name, constants::ICNS_EXTENSION))
    }
}

/// One square raster rendered from a vector source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterInstance {
    /// SVG the raster was rendered from.
    pub source: PathBuf,

    /// Where the PNG was written.
    pub path: PathBuf,

    /// Width and height in pixels.
    pub size: u32,
}

/// Everything produced for a single vector source.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub source: VectorSource,

    /// Rasters in size-list order.
    pub rasters: Vec<RasterInstance>,

    pub ico_path: PathBuf,

    /// Number of images embedded in the `.ico`.
    pub ico_entries: usize,

    pub icns_path: PathBuf,

    /// ICNS slot identifiers written, in raster order.
    pub icns_slots: Vec<&'static str>,
}
