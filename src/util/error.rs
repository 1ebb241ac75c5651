// IconGen - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant carries the path it failed on so the abort message points at
// the offending file.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all IconGen operations.
/// Errors are categorised by the pipeline stage that produced them.
#[derive(Debug)]
pub enum IconGenError {
    /// Rendering a vector source to a raster failed.
    Render(RenderError),

    /// Packing rasters into an icon container failed.
    Pack(PackError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for IconGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "Render error: {e}"),
            Self::Pack(e) => write!(f, "Pack error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IconGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Pack(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors raised while rasterizing a vector source.
#[derive(Debug)]
pub enum RenderError {
    /// The SVG file could not be read.
    SourceRead { path: PathBuf, source: io::Error },

    /// The SVG file could not be parsed.
    SvgParse {
        path: PathBuf,
        source: resvg::usvg::Error,
    },

    /// The source path has no usable file stem to name outputs after.
    InvalidSourceName { path: PathBuf },

    /// A pixmap of the requested size could not be allocated (e.g. size 0).
    InvalidSize { path: PathBuf, size: u32 },

    /// The rendered pixmap could not be encoded as PNG.
    PngEncode { path: PathBuf, reason: String },

    /// The PNG could not be written to the output path.
    OutputWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceRead { path, source } => {
                write!(f, "Cannot read SVG '{}': {source}", path.display())
            }
            Self::SvgParse { path, source } => {
                write!(f, "Cannot parse SVG '{}': {source}", path.display())
            }
            Self::InvalidSourceName { path } => write!(
                f,
                "Source '{}' has no file name to derive outputs from",
                path.display()
            ),
            Self::InvalidSize { path, size } => write!(
                f,
                "Cannot render '{}' at {size}x{size}: invalid raster size",
                path.display()
            ),
            Self::PngEncode { path, reason } => {
                write!(f, "Cannot encode PNG '{}': {reason}", path.display())
            }
            Self::OutputWrite { path, source } => {
                write!(f, "Cannot write PNG '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceRead { source, .. } => Some(source),
            Self::SvgParse { source, .. } => Some(source),
            Self::OutputWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RenderError> for IconGenError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Pack errors
// ---------------------------------------------------------------------------

/// Errors raised while assembling an `.ico` or `.icns` container.
#[derive(Debug)]
pub enum PackError {
    /// No rasters were given, so there is no default icon.
    EmptyInput { output: PathBuf },

    /// A raster could not be opened or decoded.
    ImageOpen {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A raster could not be encoded as an ICO directory entry.
    IcoEncode { path: PathBuf, source: io::Error },

    /// A raster was rejected by the ICNS encoder (e.g. size/slot mismatch).
    IcnsEncode {
        path: PathBuf,
        slot: &'static str,
        source: io::Error,
    },

    /// A slot identifier is not an ICNS element type the encoder knows.
    UnsupportedSlot { slot: &'static str },

    /// The finished container could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { output } => write!(
                f,
                "No rasters given for '{}'; at least one image is required",
                output.display()
            ),
            Self::ImageOpen { path, source } => {
                write!(f, "Cannot open raster '{}': {source}", path.display())
            }
            Self::IcoEncode { path, source } => {
                write!(f, "Cannot encode ICO entry from '{}': {source}", path.display())
            }
            Self::IcnsEncode { path, slot, source } => write!(
                f,
                "Cannot encode '{}' as ICNS '{slot}': {source}",
                path.display()
            ),
            Self::UnsupportedSlot { slot } => {
                write!(f, "ICNS slot '{slot}' is not supported by the encoder")
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write container '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageOpen { source, .. } => Some(source),
            Self::IcoEncode { source, .. } => Some(source),
            Self::IcnsEncode { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PackError> for IconGenError {
    fn from(e: PackError) -> Self {
        Self::Pack(e)
    }
}

/// Convenience type alias for IconGen results.
pub type Result<T> = std::result::Result<T, IconGenError>;
