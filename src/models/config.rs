use crate::assets::AssetLoader;
use crate::error::ConfigError;
use quantize_dither::{ChannelOrder, DitherError, Ditherer, Palette, Quantizer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Preset used when none is requested
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Named palettes as lists of hex colors
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<String>>,

    /// Named quantizer presets
    #[serde(default)]
    pub presets: BTreeMap<String, PresetConfig>,
}

fn default_preset() -> String {
    "rgb-2bit".to_string()
}

/// A quantizer plus its pre-processing
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PresetConfig {
    pub quantizer: QuantizerConfig,

    /// Convert to luminance greyscale before quantizing
    #[serde(default)]
    pub greyscale: bool,

    #[serde(default)]
    pub description: Option<String>,
}

/// Quantizer selection as written in YAML, tagged by `kind`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuantizerConfig {
    Threshold,
    Greyscale {
        bits: u8,
    },
    PerChannel {
        bits: u8,
        #[serde(default)]
        channel_order: ChannelOrderConfig,
    },
    /// Either a named palette or inline colors; the name wins if both are set.
    Palette {
        #[serde(default)]
        palette: Option<String>,
        #[serde(default)]
        colors: Vec<String>,
    },
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrderConfig {
    #[default]
    Rgb,
    Rbg,
}

impl From<ChannelOrderConfig> for ChannelOrder {
    fn from(order: ChannelOrderConfig) -> Self {
        match order {
            ChannelOrderConfig::Rgb => ChannelOrder::Rgb,
            ChannelOrderConfig::Rbg => ChannelOrder::Rbg,
        }
    }
}

/// One line of `fsdither presets` output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PresetSummary {
    pub name: String,
    pub description: Option<String>,
    /// Quantizer description, or the reason it failed to build
    pub quantizer: String,
    pub greyscale: bool,
    pub valid: bool,
    pub default: bool,
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        presets = config.presets.len(),
                        palettes = config.palettes.len(),
                        default_preset = %config.default_preset,
                        "Loaded configuration"
                    );
                    config.warn_invalid_presets();
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    fn warn_invalid_presets(&self) {
        if !self.presets.contains_key(&self.default_preset) {
            tracing::warn!(preset = %self.default_preset, "Default preset is not defined");
        }
        for (name, preset) in &self.presets {
            if let Err(e) = self.build_quantizer(&preset.quantizer) {
                tracing::warn!(preset = %name, %e, "Preset will fail to build");
            }
        }
    }

    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Result<&PresetConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Look up a named palette and validate its colors
    pub fn palette(&self, name: &str) -> Result<Palette, ConfigError> {
        let colors = self
            .palettes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPalette(name.to_string()))?;
        Ok(Palette::from_hex(colors).map_err(DitherError::from)?)
    }

    /// Build the quantizer described by `config`
    pub fn build_quantizer(&self, config: &QuantizerConfig) -> Result<Quantizer, ConfigError> {
        let quantizer = match config {
            QuantizerConfig::Threshold => Quantizer::threshold(),
            QuantizerConfig::Greyscale { bits } => {
                Quantizer::greyscale(*bits).map_err(DitherError::from)?
            }
            QuantizerConfig::PerChannel {
                bits,
                channel_order,
            } => Quantizer::per_channel_ordered(*bits, (*channel_order).into())
                .map_err(DitherError::from)?,
            QuantizerConfig::Palette {
                palette: Some(name),
                ..
            } => Quantizer::nearest(self.palette(name)?),
            QuantizerConfig::Palette {
                palette: None,
                colors,
            } => Quantizer::nearest(Palette::from_hex(colors).map_err(DitherError::from)?),
        };
        Ok(quantizer)
    }

    /// Build a ready-to-use ditherer from a preset
    pub fn build_ditherer(&self, preset_name: &str) -> Result<Ditherer, ConfigError> {
        let preset = self.preset(preset_name)?;
        self.ditherer_for(preset)
    }

    /// Build a ditherer from a preset that need not be stored in this config
    pub fn ditherer_for(&self, preset: &PresetConfig) -> Result<Ditherer, ConfigError> {
        let quantizer = self.build_quantizer(&preset.quantizer)?;
        Ok(Ditherer::new(quantizer).greyscale(preset.greyscale))
    }

    /// Summaries of every preset, sorted by name
    pub fn preset_summaries(&self) -> Vec<PresetSummary> {
        self.presets
            .iter()
            .map(|(name, preset)| {
                let (quantizer, valid) = match self.build_quantizer(&preset.quantizer) {
                    Ok(q) => (q.describe(), true),
                    Err(e) => (e.to_string(), false),
                };
                PresetSummary {
                    name: name.clone(),
                    description: preset.description.clone(),
                    quantizer,
                    greyscale: preset.greyscale,
                    valid,
                    default: *name == self.default_preset,
                }
            })
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut palettes = BTreeMap::new();
        palettes.insert(
            "mono".to_string(),
            vec!["#000000".to_string(), "#FFFFFF".to_string()],
        );

        let mut presets = BTreeMap::new();
        presets.insert(
            "rgb-2bit".to_string(),
            PresetConfig {
                quantizer: QuantizerConfig::PerChannel {
                    bits: 2,
                    channel_order: ChannelOrderConfig::Rgb,
                },
                greyscale: false,
                description: Some("Four levels per channel".to_string()),
            },
        );
        presets.insert(
            "mono-threshold".to_string(),
            PresetConfig {
                quantizer: QuantizerConfig::Threshold,
                greyscale: true,
                description: Some("Luminance threshold at 128".to_string()),
            },
        );
        presets.insert(
            "mono".to_string(),
            PresetConfig {
                quantizer: QuantizerConfig::Palette {
                    palette: Some("mono".to_string()),
                    colors: Vec::new(),
                },
                greyscale: false,
                description: Some("Nearest of black and white".to_string()),
            },
        );

        Self {
            default_preset: default_preset(),
            palettes,
            presets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantize_dither::{Quantize, Rgb8};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_preset, "rgb-2bit");
        assert!(config.presets.contains_key("rgb-2bit"));
        assert!(config.palettes.contains_key("mono"));
    }

    #[test]
    fn test_default_config_presets_all_build() {
        let config = AppConfig::default();
        for name in config.presets.keys() {
            assert!(config.build_ditherer(name).is_ok(), "preset {name}");
        }
    }

    #[test]
    fn test_default_preset_function() {
        assert_eq!(default_preset(), "rgb-2bit");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
default_preset: dots
palettes:
  bw: ["#000", "#fff"]
presets:
  dots:
    quantizer:
      kind: palette
      palette: bw
  grey:
    greyscale: true
    quantizer:
      kind: greyscale
      bits: 3
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_preset, "dots");
        assert_eq!(config.presets.len(), 2);
        assert!(config.presets["grey"].greyscale);
        assert!(!config.presets["dots"].greyscale);
        assert_eq!(
            config.presets["grey"].quantizer,
            QuantizerConfig::Greyscale { bits: 3 }
        );
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.default_preset, "rgb-2bit");
        assert!(config.presets.is_empty());
        assert!(config.palettes.is_empty());
    }

    #[test]
    fn test_deserialize_channel_order() {
        let yaml = "kind: per_channel\nbits: 2\nchannel_order: rbg\n";
        let q: QuantizerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            q,
            QuantizerConfig::PerChannel {
                bits: 2,
                channel_order: ChannelOrderConfig::Rbg
            }
        );
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let result: Result<QuantizerConfig, _> = serde_yaml::from_str("kind: ordered\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_yaml_parse_error() {
        let err = AppConfig::from_yaml("presets: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_preset_unknown() {
        let config = AppConfig::default();
        let err = config.preset("sepia").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(name) if name == "sepia"));
    }

    #[test]
    fn test_palette_unknown() {
        let config = AppConfig::default();
        assert!(matches!(
            config.palette("pastel"),
            Err(ConfigError::UnknownPalette(_))
        ));
    }

    #[test]
    fn test_palette_with_bad_hex() {
        let mut config = AppConfig::default();
        config
            .palettes
            .insert("broken".to_string(), vec!["#GG0000".to_string()]);
        assert!(matches!(
            config.palette("broken"),
            Err(ConfigError::Dither(_))
        ));
    }

    #[test]
    fn test_build_quantizer_inline_colors() {
        let config = AppConfig::default();
        let q = config
            .build_quantizer(&QuantizerConfig::Palette {
                palette: None,
                colors: vec!["#FF0000".to_string(), "#0000FF".to_string()],
            })
            .unwrap();
        assert_eq!(q.quantize(Rgb8::new(200, 0, 60)), Rgb8::RED);
    }

    #[test]
    fn test_build_quantizer_named_palette_wins_over_colors() {
        let config = AppConfig::default();
        let q = config
            .build_quantizer(&QuantizerConfig::Palette {
                palette: Some("mono".to_string()),
                colors: vec!["#FF0000".to_string()],
            })
            .unwrap();
        assert_eq!(q, Quantizer::nearest(Palette::black_white()));
    }

    #[test]
    fn test_build_quantizer_empty_inline_palette_fails() {
        let config = AppConfig::default();
        let err = config
            .build_quantizer(&QuantizerConfig::Palette {
                palette: None,
                colors: Vec::new(),
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::Dither(_)));
    }

    #[test]
    fn test_build_quantizer_bad_bits() {
        let config = AppConfig::default();
        for bits in [0, 9] {
            assert!(config
                .build_quantizer(&QuantizerConfig::Greyscale { bits })
                .is_err());
        }
    }

    #[test]
    fn test_build_quantizer_swapped_channels() {
        let config = AppConfig::default();
        let q = config
            .build_quantizer(&QuantizerConfig::PerChannel {
                bits: 2,
                channel_order: ChannelOrderConfig::Rbg,
            })
            .unwrap();
        assert_eq!(q.quantize(Rgb8::new(0, 255, 0)), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn test_build_ditherer_applies_greyscale() {
        let config = AppConfig::default();
        let ditherer = config.build_ditherer("mono-threshold").unwrap();
        assert!(ditherer.is_greyscale());
        assert_eq!(ditherer.quantizer(), &Quantizer::Threshold);
    }

    #[test]
    fn test_preset_summaries_flag_default_and_invalid() {
        let mut config = AppConfig::default();
        config.presets.insert(
            "broken".to_string(),
            PresetConfig {
                quantizer: QuantizerConfig::PerChannel {
                    bits: 12,
                    channel_order: ChannelOrderConfig::Rgb,
                },
                greyscale: false,
                description: None,
            },
        );

        let summaries = config.preset_summaries();
        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["broken", "mono", "mono-threshold", "rgb-2bit"]);

        let broken = &summaries[0];
        assert!(!broken.valid);
        let default = summaries.iter().find(|s| s.default).unwrap();
        assert_eq!(default.name, "rgb-2bit");
        assert_eq!(default.quantizer, "2-bit per channel");
    }
}
