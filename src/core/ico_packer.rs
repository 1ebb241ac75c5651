// IconGen - core/ico_packer.rs
//
// Windows multi-size icon (.ico) assembly.
//
// Entries are written in the order given; by convention the first entry is
// the default icon, so callers pass the smallest size first.

use crate::util::error::PackError;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Largest edge length an ICO directory entry can record.
const MAX_ICO_DIMENSION: u32 = 256;

/// Pack `rasters` into a single `.ico` at `output`, each at its native size.
///
/// Returns the number of entries written.
pub fn pack_ico(rasters: &[PathBuf], output: &Path) -> Result<usize, PackError> {
    if rasters.is_empty() {
        return Err(PackError::EmptyInput {
            output: output.to_path_buf(),
        });
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for path in rasters {
        let rgba = image::open(path)
            .map_err(|e| PackError::ImageOpen {
                path: path.clone(),
                source: e,
            })?
            .into_rgba8();
        let (width, height) = rgba.dimensions();
        if width > MAX_ICO_DIMENSION || height > MAX_ICO_DIMENSION {
            return Err(PackError::IcoEncode {
                path: path.clone(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{width}x{height} exceeds the {MAX_ICO_DIMENSION}px ICO limit"),
                ),
            });
        }

        let img = IconImage::from_rgba_data(width, height, rgba.into_raw());
        let entry = IconDirEntry::encode(&img).map_err(|e| PackError::IcoEncode {
            path: path.clone(),
            source: e,
        })?;
        icon_dir.add_entry(entry);
        tracing::debug!(path = %path.display(), width, height, "ICO layer");
    }

    let write_err = |e| PackError::Write {
        path: output.to_path_buf(),
        source: e,
    };
    let mut writer = BufWriter::new(File::create(output).map_err(write_err)?);
    icon_dir.write(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    let count = icon_dir.entries().len();
    tracing::info!(output = %output.display(), entries = count, "Wrote ICO");
    Ok(count)
}
