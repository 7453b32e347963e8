pub mod config;

pub use config::{AppConfig, ChannelOrderConfig, PresetConfig, PresetSummary, QuantizerConfig};
