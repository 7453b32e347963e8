use quantize_dither::{BufferError, DitherError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Invalid quantizer: {0}")]
    Dither(#[from] DitherError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    #[error("Image too large: {width}x{height} (max {max} pixels)")]
    ImageTooLarge { width: u32, height: u32, max: u64 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] BufferError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
}
