//! Image output for rasterized strips.
//!
//! Encoding is delegated to the `image` crate. Only PNG and TGA are
//! supported; the format is chosen from the destination's extension.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{GradError, Result};

use super::PixelBuffer;

/// An image container gradstrip can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Tga,
}

impl OutputFormat {
    /// Resolve a format from a file extension (case-insensitive, leading
    /// dot optional).
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext = ext.trim().trim_start_matches('.');
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "tga" => Ok(OutputFormat::Tga),
            _ => Err(GradError::UnsupportedOutputFormat {
                format: ext.to_string(),
            }),
        }
    }

    /// Resolve a format from a destination path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// The canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Tga => "tga",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Tga => ImageFormat::Tga,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encode a buffer as RGBA8 in the given format.
pub fn encode(buffer: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>> {
    let img = buffer.to_image();
    let mut bytes = Cursor::new(Vec::new());

    img.write_to(&mut bytes, format.image_format())
        .map_err(|e| GradError::Encode {
            message: format!("Failed to encode {}: {}", format, e),
        })?;

    Ok(bytes.into_inner())
}

/// Encode a buffer and write it to `destination`.
///
/// The format comes from the destination's extension. Parent directories
/// are created as needed. Returns the path written.
pub fn write_image(buffer: &PixelBuffer, destination: Option<&Path>) -> Result<PathBuf> {
    let path = destination.ok_or_else(|| GradError::MissingOutputDestination {
        strip: "unnamed strip".to_string(),
    })?;
    let format = OutputFormat::from_path(path)?;
    let bytes = encode(buffer, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GradError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, bytes).map_err(|e| GradError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write {}: {}", format, e),
    })?;

    Ok(path.to_path_buf())
}
