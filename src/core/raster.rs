// IconGen - core/raster.rs
//
// SVG -> square PNG rendering via resvg.
//
// The X and Y scale factors are computed independently so the output is
// always exactly `size` x `size`, whatever the SVG's own aspect ratio.

use crate::core::model::RasterInstance;
use crate::util::error::RenderError;
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Renders vector sources to PNG files.
///
/// Holds the font database so system fonts are scanned once per run rather
/// than once per raster.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Create a rasterizer, optionally loading system fonts so `<text>`
    /// elements render.
    pub fn new(load_system_fonts: bool) -> Self {
        let mut db = usvg::fontdb::Database::new();
        if load_system_fonts {
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "System fonts loaded");
        }
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Render `source` at `size` x `size` and write it as PNG to `output`,
    /// replacing any existing file.
    pub fn rasterize(
        &self,
        source: &Path,
        size: u32,
        output: &Path,
    ) -> Result<RasterInstance, RenderError> {
        let svg_data = fs::read(source).map_err(|e| RenderError::SourceRead {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut opt = usvg::Options::default();
        // Relative hrefs (embedded images, stylesheets) resolve next to the SVG.
        opt.resources_dir = fs::canonicalize(source)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        opt.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_data(&svg_data, &opt).map_err(|e| RenderError::SvgParse {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RenderError::InvalidSize {
            path: source.to_path_buf(),
            size,
        })?;
        let scale_x = size as f32 / tree.size().width();
        let scale_y = size as f32 / tree.size().height();
        let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let png = pixmap.encode_png().map_err(|e| RenderError::PngEncode {
            path: output.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(output, png).map_err(|e| RenderError::OutputWrite {
            path: output.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            source = %source.display(),
            output = %output.display(),
            size,
            "Rendered raster"
        );

        Ok(RasterInstance {
            source: source.to_path_buf(),
            path: output.to_path_buf(),
            size,
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(true)
    }
}
