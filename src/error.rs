use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gradstrip operations
#[derive(Error, Diagnostic, Debug)]
pub enum GradError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gradstrip::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gradstrip::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gradstrip::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid layout: {message}")]
    #[diagnostic(
        code(gradstrip::layout),
        help("length must be at least 2 and thickness at least 1")
    )]
    InvalidLayout { message: String },

    #[error("Gradient has no {kind} keys")]
    #[diagnostic(
        code(gradstrip::gradient::empty),
        help("Every gradient needs at least one colour key and one alpha key")
    )]
    EmptyGradient { kind: &'static str },

    #[error("Unsupported output format: '{format}'")]
    #[diagnostic(
        code(gradstrip::encode::format),
        help("Supported output formats are png and tga")
    )]
    UnsupportedOutputFormat { format: String },

    #[error("No output destination for {strip}")]
    #[diagnostic(
        code(gradstrip::encode::destination),
        help("Set `name` or `output` in the strip definition")
    )]
    MissingOutputDestination { strip: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(gradstrip::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(gradstrip::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, GradError>;
