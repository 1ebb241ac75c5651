// IconGen - core/icns_packer.rs
//
// macOS multi-size icon (.icns) assembly.
//
// Each raster is placed in the element type mapped from its pixel width in
// `constants::ICNS_SLOTS`. Rasters whose width has no mapping are skipped
// without error, so the size list can grow without breaking the packer.

use crate::util::constants;
use crate::util::error::PackError;
use icns::{IconFamily, IconType, OSType, PixelFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Slot identifier for a raster of `size` pixels, if one is mapped.
pub fn slot_for_size(size: u32) -> Option<&'static str> {
    constants::ICNS_SLOTS
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, slot)| *slot)
}

/// The encoder's icon type for a four-character slot identifier.
pub fn icon_type_for_slot(slot: &str) -> Option<IconType> {
    let code: [u8; 4] = slot.as_bytes().try_into().ok()?;
    IconType::from_ostype(OSType(code))
}

/// Pack every mapped raster in `rasters` into a `.icns` at `output`.
///
/// Returns the slots written, in input order. The file is written even when
/// no raster matched.
pub fn pack_icns(rasters: &[PathBuf], output: &Path) -> Result<Vec<&'static str>, PackError> {
    let mut family = IconFamily::new();
    let mut slots = Vec::new();

    for path in rasters {
        let (width, _) = image::image_dimensions(path).map_err(|e| PackError::ImageOpen {
            path: path.clone(),
            source: e,
        })?;
        let Some(slot) = slot_for_size(width) else {
            tracing::debug!(path = %path.display(), width, "No ICNS slot for size; skipping");
            continue;
        };
        let icon_type = icon_type_for_slot(slot).ok_or(PackError::UnsupportedSlot { slot })?;

        let rgba = image::open(path)
            .map_err(|e| PackError::ImageOpen {
                path: path.clone(),
                source: e,
            })?
            .into_rgba8();
        let (w, h) = rgba.dimensions();
        let encode_err = |e| PackError::IcnsEncode {
            path: path.clone(),
            slot,
            source: e,
        };
        let img = icns::Image::from_data(PixelFormat::RGBA, w, h, rgba.into_raw())
            .map_err(encode_err)?;
        family
            .add_icon_with_type(&img, icon_type)
            .map_err(encode_err)?;

        tracing::debug!(path = %path.display(), slot, "ICNS element");
        slots.push(slot);
    }

    let write_err = |e| PackError::Write {
        path: output.to_path_buf(),
        source: e,
    };
    let mut writer = BufWriter::new(File::create(output).map_err(write_err)?);
    family.write(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::info!(output = %output.display(), slots = ?slots, "Wrote ICNS");
    Ok(slots)
}
