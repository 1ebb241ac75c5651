// IconGen - util/constants.rs
//
// Single source of truth for the hard-coded source list, size list and
// container layouts.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "IconGen";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Inputs and outputs
// =============================================================================

/// Vector sources processed on every run, looked up in the input directory.
pub const SOURCE_FILES: &[&str] = &["tray-icon.svg", "tray-icon-recording.svg"];

/// Default input directory (the working directory).
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Default output directory, created on demand.
pub const DEFAULT_OUTPUT_DIR: &str = "assets";

/// Extension of every generated raster file.
pub const RASTER_EXTENSION: &str = "png";

/// Extension of the Windows multi-size container.
pub const ICO_EXTENSION: &str = "ico";

/// Extension of the macOS multi-size container.
pub const ICNS_EXTENSION: &str = "icns";

// =============================================================================
// Sizes and container layouts
// =============================================================================

/// Square pixel sizes rendered for every source, smallest first.
pub const ICON_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512, 1024];

/// Number of leading rasters (by list position) packed into the `.ico`.
///
/// With `ICON_SIZES` this selects 16/32/64/128; the first one is the
/// default icon.
pub const ICO_ENTRY_COUNT: usize = 4;

/// Pixel width -> ICNS element type. Rasters of any other width are left out
/// of the `.icns`.
pub const ICNS_SLOTS: &[(u32, &str)] = &[
    (16, "icp4"),
    (32, "icp5"),
    (64, "icp6"),
    (128, "ic07"),
    (256, "ic08"),
    (512, "ic09"),
    (1024, "ic10"),
];

// =============================================================================
// Logging
// =============================================================================

/// Log level used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Line printed to stdout once every source has been processed.
pub const COMPLETION_MESSAGE: &str = "Icon generation complete!";
