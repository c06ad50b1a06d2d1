//! Parser for gradstrip definition files.
//!
//! Strip files (`.strip.yaml`) hold one or more YAML documents, each
//! describing a strip: its layout, output settings and gradients.
//!
//! # Usage
//!
//! ```ignore
//! use gradstrip::parser::load_strip_file;
//!
//! for strip in load_strip_file("ramps/fire.strip.yaml".as_ref())? {
//!     println!("Found: {}", strip.label());
//! }
//! ```

mod strip;

use std::fs;
use std::path::Path;

use crate::error::{GradError, Result};
use crate::types::StripDefinition;

pub use strip::parse_strip_file;

/// Read and parse a strip file.
pub fn load_strip_file(path: &Path) -> Result<Vec<StripDefinition>> {
    let source = fs::read_to_string(path).map_err(|e| GradError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    parse_strip_file(&source).map_err(|e| match e {
        GradError::Parse { message, help } => GradError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}
