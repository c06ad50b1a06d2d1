//! Core domain types for gradstrip.
//!
//! - `Colour` - 8-bit RGBA pixel values
//! - `Gradient` / `GradientSet` - colour and alpha key curves
//! - `StripLayout` - orientation and extents of a rasterized strip
//! - `StripDefinition` - a loaded strip with its output settings

mod colour;
mod gradient;
mod layout;
mod strip;

pub use colour::Colour;
pub use gradient::{AlphaKey, ColorKey, Gradient, GradientSet, InterpolationMode};
pub use layout::{Orientation, StripLayout, MAX_EXTENT, MIN_LENGTH};
pub use strip::{StripDefinition, DEFAULT_FORMAT};
