//! Strip rasterizer - converts gradient sets to pixel buffers.
//!
//! Each gradient becomes one band of the strip. The gradient is evaluated
//! once per sample along the strip and the colour is repeated across the
//! band's thickness.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::types::{Colour, GradientSet, Orientation, StripLayout};

/// A rasterized strip - a grid of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels in row-major order, row 0 at the top.
    pixels: Vec<Colour>,

    /// Width in pixels.
    width: u32,

    /// Height in pixels.
    height: u32,
}

impl PixelBuffer {
    /// Create a transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Colour::TRANSPARENT; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.pixels[i] = colour;
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer.
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }

    /// Copy into an `image` buffer for encoding.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[self.index(x, y)].to_rgba())
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Rasterize a gradient set into a strip.
///
/// Horizontal strips stack the last gradient in the top band; vertical
/// strips put the first gradient in the leftmost band. An empty set is
/// rasterized as the fallback gradient.
pub fn rasterize(gradients: &GradientSet, layout: &StripLayout) -> PixelBuffer {
    let gradients = gradients.effective();
    let bands = gradients.len() as u32;
    let thickness = layout.thickness();

    let (width, height) = layout.dimensions(gradients.len());
    let mut buffer = PixelBuffer::new(width, height);

    for (g, gradient) in gradients.iter().enumerate() {
        let band = match layout.orientation() {
            Orientation::Horizontal => bands - 1 - g as u32,
            Orientation::Vertical => g as u32,
        };
        let start = band * thickness;

        for i in 0..layout.length() {
            let colour = Colour::from_srgba(gradient.evaluate(layout.sample_time(i)));

            for across in start..start + thickness {
                match layout.orientation() {
                    Orientation::Horizontal => buffer.set(i, across, colour),
                    Orientation::Vertical => buffer.set(across, i, colour),
                }
            }
        }
    }

    buffer
}
