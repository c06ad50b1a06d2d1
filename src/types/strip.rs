//! Strip definition: everything needed to build and export one strip.

use std::path::{Path, PathBuf};

use super::{GradientSet, StripLayout};

/// Default output format when a strip names itself but not a format.
pub const DEFAULT_FORMAT: &str = "png";

/// A parsed strip, ready to rasterize.
#[derive(Debug, Clone)]
pub struct StripDefinition {
    /// Strip name, used to derive the output file name.
    pub name: Option<String>,
    /// Position of the strip within its source file (0-based).
    pub index: usize,
    pub gradients: GradientSet,
    pub layout: StripLayout,
    /// Explicit output path.
    pub output: Option<PathBuf>,
    /// Output format used with `name` when `output` is absent.
    pub format: Option<String>,
    /// Adjustments made while loading (e.g. clamped extents).
    pub warnings: Vec<String>,
}

impl StripDefinition {
    /// Create an unnamed strip with no output settings.
    pub fn new(gradients: GradientSet, layout: StripLayout) -> Self {
        Self {
            name: None,
            index: 0,
            gradients,
            layout,
            output: None,
            format: None,
            warnings: Vec::new(),
        }
    }

    /// Human-readable label for status output.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("strip #{}", self.index + 1),
        }
    }

    /// Resolve where this strip should be written.
    ///
    /// An explicit `output` wins (relative paths are joined onto
    /// `output_dir`); otherwise `<output_dir>/<name>.<format>`. Unnamed
    /// strips without `output` have no destination.
    pub fn destination(&self, output_dir: &Path) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output_dir.join(output));
        }

        self.name.as_ref().map(|name| {
            let format = self.format.as_deref().unwrap_or(DEFAULT_FORMAT);
            output_dir.join(format!("{}.{}", name, format))
        })
    }
}
