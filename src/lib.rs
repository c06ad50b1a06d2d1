//! gradstrip - Gradient strip texture generator
//!
//! A library for rasterizing colour gradient definitions into strip
//! textures and encoding them as PNG or TGA.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use discovery::{discover_strip_files, is_strip_file};
pub use error::{GradError, Result};
pub use parser::{load_strip_file, parse_strip_file};
pub use render::{encode, rasterize, write_image, OutputFormat, PixelBuffer};
pub use types::{
    AlphaKey, ColorKey, Colour, Gradient, GradientSet, InterpolationMode, Orientation,
    StripDefinition, StripLayout,
};
