//! Strip file parser.
//!
//! Parses `.strip.yaml` files into `StripDefinition` instances. A file may
//! hold several YAML documents separated by `---`; each document is one
//! strip.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{GradError, Result};
use crate::types::{
    AlphaKey, ColorKey, Colour, Gradient, GradientSet, InterpolationMode, Orientation,
    StripDefinition, StripLayout, MAX_EXTENT, MIN_LENGTH,
};

fn default_length() -> i64 {
    256
}

fn default_thickness() -> i64 {
    1
}

/// A strip document as written in YAML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStrip {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    output: Option<PathBuf>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    orientation: Orientation,
    #[serde(default = "default_length")]
    length: i64,
    #[serde(default = "default_thickness")]
    thickness: i64,
    #[serde(default)]
    reverse: bool,
    #[serde(default)]
    gradients: Vec<RawGradient>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGradient {
    #[serde(default)]
    mode: InterpolationMode,
    #[serde(default)]
    colors: Vec<RawColorKey>,
    #[serde(default)]
    alphas: Vec<RawAlphaKey>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColorKey {
    time: f32,
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAlphaKey {
    time: f32,
    alpha: f32,
}

/// Parse a strip file into one or more strips.
///
/// Empty documents are skipped; a file with no strips at all is an error.
pub fn parse_strip_file(source: &str) -> Result<Vec<StripDefinition>> {
    let mut strips = Vec::new();

    for document in serde_yaml::Deserializer::from_str(source) {
        let index = strips.len();
        let value = serde_yaml::Value::deserialize(document).map_err(|e| GradError::Parse {
            message: format!("Invalid YAML in strip {}: {}", index + 1, e),
            help: None,
        })?;

        if value.is_null() {
            continue;
        }

        let raw: RawStrip = serde_yaml::from_value(value).map_err(|e| GradError::Parse {
            message: format!("Invalid strip {}: {}", index + 1, e),
            help: Some("See `gradstrip build --help` for the strip file format".to_string()),
        })?;

        strips.push(build_strip(raw, index)?);
    }

    if strips.is_empty() {
        return Err(GradError::Parse {
            message: "No strip definitions found".to_string(),
            help: Some("Add a strip with `name:` and `gradients:`".to_string()),
        });
    }

    Ok(strips)
}

fn build_strip(raw: RawStrip, index: usize) -> Result<StripDefinition> {
    let mut warnings = Vec::new();

    let length = clamp_extent("length", raw.length, MIN_LENGTH, &mut warnings);
    let thickness = clamp_extent("thickness", raw.thickness, 1, &mut warnings);
    let layout = StripLayout::new(raw.orientation, length, thickness, raw.reverse)?;

    let gradients = raw
        .gradients
        .into_iter()
        .map(build_gradient)
        .collect::<Result<Vec<_>>>()?;

    if gradients.is_empty() {
        warnings.push("no gradients given, using the default red-green-blue gradient".to_string());
    }

    Ok(StripDefinition {
        name: raw.name,
        index,
        gradients: GradientSet::new(gradients),
        layout,
        output: raw.output,
        format: raw.format,
        warnings,
    })
}

fn build_gradient(raw: RawGradient) -> Result<Gradient> {
    let colors = raw
        .colors
        .into_iter()
        .map(|key| {
            let colour = Colour::from_hex(&key.color)?;
            if !colour.is_opaque() {
                return Err(GradError::Parse {
                    message: format!("Colour key {} has an alpha component", key.color),
                    help: Some("Colour keys are RGB; use alpha keys for opacity".to_string()),
                });
            }
            Ok(ColorKey::new(key.time, colour.to_srgb()))
        })
        .collect::<Result<Vec<_>>>()?;

    let alphas = raw
        .alphas
        .into_iter()
        .map(|key| AlphaKey::new(key.time, key.alpha))
        .collect();

    Gradient::new(colors, alphas, raw.mode)
}

fn clamp_extent(field: &str, value: i64, min: u32, warnings: &mut Vec<String>) -> u32 {
    let clamped = value.clamp(min as i64, MAX_EXTENT as i64);
    if clamped != value {
        warnings.push(format!("{} {} clamped to {}", field, value, clamped));
    }
    clamped as u32
}
