//! Rendering module for gradstrip.
//!
//! This module rasterizes gradient sets into pixel buffers and encodes
//! them as PNG or TGA.

mod encode;
mod strip;

pub use encode::{encode, write_image, OutputFormat};
pub use strip::{rasterize, PixelBuffer};
