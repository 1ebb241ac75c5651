// IconGen - core/pipeline.rs
//
// The driver: for every source, render each size, then pack the `.ico`
// from the leading rasters and the `.icns` from all of them.
//
// Strictly sequential. The first failure aborts the run; outputs of sources
// that already finished are left in place.

use crate::core::icns_packer::pack_icns;
use crate::core::ico_packer::pack_ico;
use crate::core::model::{IconSet, VectorSource};
use crate::core::raster::Rasterizer;
use crate::platform;
use crate::util::constants;
use crate::util::error::Result;
use std::path::{Path, PathBuf};

// =============================================================================
// Configuration
// =============================================================================

/// Inputs of a generation run. `Default` is the fixed production setup.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Source file names, resolved against `input_dir`, processed in order.
    pub sources: Vec<PathBuf>,

    /// Directory the sources are looked up in.
    pub input_dir: PathBuf,

    /// Directory every output is written to. Created if absent.
    pub output_dir: PathBuf,

    /// Square sizes rendered per source, in order.
    pub sizes: Vec<u32>,

    /// Load system fonts so `<text>` in the sources renders.
    pub load_system_fonts: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            sources: constants::SOURCE_FILES.iter().map(PathBuf::from).collect(),
            input_dir: PathBuf::from(constants::DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            sizes: constants::ICON_SIZES.to_vec(),
            load_system_fonts: true,
        }
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Generate rasters, `.ico` and `.icns` for one source into `output_dir`.
///
/// `output_dir` must already exist.
pub fn generate_icons(
    rasterizer: &Rasterizer,
    source: &Path,
    output_dir: &Path,
    sizes: &[u32],
) -> Result<IconSet> {
    let source = VectorSource::new(source)?;
    tracing::info!(source = %source.path.display(), "Generating icons");

    let mut rasters = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let out = source.raster_path(output_dir, size);
        rasters.push(rasterizer.rasterize(&source.path, size, &out)?);
    }
    let raster_paths: Vec<PathBuf> = rasters.iter().map(|r| r.path.clone()).collect();

    let ico_path = source.ico_path(output_dir);
    let ico_count = constants::ICO_ENTRY_COUNT.min(raster_paths.len());
    let ico_entries = pack_ico(&raster_paths[..ico_count], &ico_path)?;

    let icns_path = source.icns_path(output_dir);
    let icns_slots = pack_icns(&raster_paths, &icns_path)?;

    Ok(IconSet {
        source,
        rasters,
        ico_path,
        ico_entries,
        icns_path,
        icns_slots,
    })
}

/// Run the full pipeline over every configured source.
pub fn run(config: &GenerateConfig) -> Result<Vec<IconSet>> {
    platform::fs::ensure_dir(&config.output_dir)?;
    let rasterizer = Rasterizer::new(config.load_system_fonts);

    let mut sets = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        let path = config.input_dir.join(source);
        let set = generate_icons(&rasterizer, &path, &config.output_dir, &config.sizes)?;
        tracing::info!(
            source = %set.source.base_name,
            rasters = set.rasters.len(),
            ico_entries = set.ico_entries,
            icns_entries = set.icns_slots.len(),
            "Source complete"
        );
        sets.push(set);
    }
    Ok(sets)
}
