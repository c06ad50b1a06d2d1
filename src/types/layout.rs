//! Strip layout: orientation and extents of a rasterized strip.

use std::fmt;

use serde::Deserialize;

use crate::error::{GradError, Result};

/// Smallest number of samples along a strip.
pub const MIN_LENGTH: u32 = 2;

/// Largest length or thickness a strip may have.
pub const MAX_EXTENT: u32 = 16384;

/// Which image axis the gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Gradient runs left to right; bands are stacked in rows.
    #[default]
    Horizontal,
    /// Gradient runs along rows; bands are stacked in columns.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Orientation and extents of a strip.
///
/// `length` is the number of samples along the gradient axis, `thickness`
/// the number of pixels each gradient band spans across it. The
/// constructors guarantee `length >= 2` and `thickness >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    orientation: Orientation,
    length: u32,
    thickness: u32,
    reverse: bool,
}

impl StripLayout {
    /// Create a layout, rejecting extents outside `[2, 16384]` for length
    /// and `[1, 16384]` for thickness.
    pub fn new(orientation: Orientation, length: u32, thickness: u32, reverse: bool) -> Result<Self> {
        if !(MIN_LENGTH..=MAX_EXTENT).contains(&length) {
            return Err(GradError::InvalidLayout {
                message: format!("length {} is outside {}..={}", length, MIN_LENGTH, MAX_EXTENT),
            });
        }
        if !(1..=MAX_EXTENT).contains(&thickness) {
            return Err(GradError::InvalidLayout {
                message: format!("thickness {} is outside 1..={}", thickness, MAX_EXTENT),
            });
        }

        Ok(Self {
            orientation,
            length,
            thickness,
            reverse,
        })
    }

    /// Create a layout, clamping extents into their valid ranges.
    pub fn clamped(orientation: Orientation, length: u32, thickness: u32, reverse: bool) -> Self {
        Self {
            orientation,
            length: length.clamp(MIN_LENGTH, MAX_EXTENT),
            thickness: thickness.clamp(1, MAX_EXTENT),
            reverse,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Image dimensions `(width, height)` for `bands` stacked gradients.
    pub fn dimensions(&self, bands: usize) -> (u32, u32) {
        let across = self.thickness * bands as u32;
        match self.orientation {
            Orientation::Horizontal => (self.length, across),
            Orientation::Vertical => (across, self.length),
        }
    }

    /// Gradient time for sample `i` along the strip.
    ///
    /// Horizontal strips run 0 -> 1 unless reversed; vertical strips run
    /// 1 -> 0 from row 0 unless reversed.
    pub fn sample_time(&self, i: u32) -> f32 {
        let t = i as f32 / (self.length - 1) as f32;
        let flip = match self.orientation {
            Orientation::Horizontal => self.reverse,
            Orientation::Vertical => !self.reverse,
        };
        if flip {
            1.0 - t
        } else {
            t
        }
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::clamped(Orientation::Horizontal, 256, 1, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_degenerate() {
        assert!(matches!(
            StripLayout::new(Orientation::Horizontal, 1, 1, false),
            Err(GradError::InvalidLayout { .. })
        ));
        assert!(matches!(
            StripLayout::new(Orientation::Vertical, 4, 0, false),
            Err(GradError::InvalidLayout { .. })
        ));
        assert!(StripLayout::new(Orientation::Vertical, MAX_EXTENT + 1, 1, false).is_err());
        assert!(StripLayout::new(Orientation::Horizontal, 2, 1, false).is_ok());
    }

    #[test]
    fn test_clamped() {
        let layout = StripLayout::clamped(Orientation::Horizontal, 0, 0, false);
        assert_eq!(layout.length(), 2);
        assert_eq!(layout.thickness(), 1);

        let layout = StripLayout::clamped(Orientation::Horizontal, 100_000, 20_000, true);
        assert_eq!(layout.length(), MAX_EXTENT);
        assert_eq!(layout.thickness(), MAX_EXTENT);
        assert!(layout.reverse());
    }

    #[test]
    fn test_dimensions() {
        let h = StripLayout::new(Orientation::Horizontal, 64, 4, false).unwrap();
        assert_eq!(h.dimensions(3), (64, 12));

        let v = StripLayout::new(Orientation::Vertical, 64, 4, false).unwrap();
        assert_eq!(v.dimensions(3), (12, 64));
    }

    #[test]
    fn test_sample_time_polarity() {
        let h = StripLayout::new(Orientation::Horizontal, 5, 1, false).unwrap();
        assert_eq!(h.sample_time(0), 0.0);
        assert_eq!(h.sample_time(1), 0.25);
        assert_eq!(h.sample_time(4), 1.0);

        let h_rev = StripLayout::new(Orientation::Horizontal, 5, 1, true).unwrap();
        assert_eq!(h_rev.sample_time(0), 1.0);
        assert_eq!(h_rev.sample_time(4), 0.0);

        let v = StripLayout::new(Orientation::Vertical, 5, 1, false).unwrap();
        assert_eq!(v.sample_time(0), 1.0);
        assert_eq!(v.sample_time(4), 0.0);

        let v_rev = StripLayout::new(Orientation::Vertical, 5, 1, true).unwrap();
        assert_eq!(v_rev.sample_time(0), 0.0);
        assert_eq!(v_rev.sample_time(4), 1.0);
    }
}
