use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use quantize_dither::{ImageBuffer, View};
use serde::Serialize;

use crate::error::{ConfigError, RenderError};
use crate::models::{AppConfig, ChannelOrderConfig, PresetConfig, QuantizerConfig};
use crate::rendering::{decode_png, encode_png};

/// Command-line overrides applied on top of a preset
#[derive(Debug, Clone, Default)]
pub struct QuantizerOverrides {
    /// 1-bit threshold (takes priority over everything else)
    pub threshold: bool,
    /// Palette name, or comma-separated hex colors
    pub palette: Option<String>,
    /// Per-channel reduction with this many bits
    pub bits: Option<u8>,
    pub greyscale: bool,
    pub swap_green_blue: bool,
}

/// One render: which input, which preset, where each view goes
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub input: PathBuf,
    /// Preset name; the config's default preset when `None`
    pub preset: Option<String>,
    pub overrides: QuantizerOverrides,
    pub outputs: Vec<(View, PathBuf)>,
}

/// A view that was written to disk
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WrittenView {
    pub view: String,
    pub path: String,
    pub bytes: usize,
}

/// Per-stage timings in milliseconds
#[derive(Debug, Clone, Serialize, Default)]
pub struct Timings {
    pub decode_ms: f64,
    pub render_ms: f64,
    pub encode_ms: f64,
}

/// Summary of a finished render
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub input: String,
    pub preset: String,
    pub quantizer: String,
    pub greyscale: bool,
    pub width: usize,
    pub height: usize,
    /// Distinct colors in the source, quantized and dithered views
    pub source_colors: usize,
    pub quantized_colors: usize,
    pub dithered_colors: usize,
    /// Mean RGB of the source and dithered views
    pub source_mean: Option<[f64; 3]>,
    pub dithered_mean: Option<[f64; 3]>,
    pub outputs: Vec<WrittenView>,
    pub timings: Timings,
}

/// Pipeline that orchestrates decode → quantize/dither → encode
pub struct RenderPipeline {
    config: Arc<AppConfig>,
}

impl RenderPipeline {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve the preset for a request, with overrides applied
    pub fn resolve_preset(
        &self,
        preset: Option<&str>,
        overrides: &QuantizerOverrides,
    ) -> Result<(String, PresetConfig), ConfigError> {
        let name = preset.unwrap_or(&self.config.default_preset).to_string();
        let mut resolved = self.config.preset(&name)?.clone();

        if overrides.threshold {
            resolved.quantizer = QuantizerConfig::Threshold;
        } else if let Some(ref palette) = overrides.palette {
            resolved.quantizer = palette_override(palette);
        } else if let Some(bits) = overrides.bits {
            resolved.quantizer = QuantizerConfig::PerChannel {
                bits,
                channel_order: ChannelOrderConfig::Rgb,
            };
        }

        if overrides.swap_green_blue {
            match resolved.quantizer {
                QuantizerConfig::PerChannel {
                    ref mut channel_order,
                    ..
                } => *channel_order = ChannelOrderConfig::Rbg,
                _ => {
                    tracing::warn!(
                        preset = %name,
                        "Green/blue swap only applies to per-channel quantizers, ignoring"
                    );
                }
            }
        }
        if overrides.greyscale {
            resolved.greyscale = true;
        }

        Ok((name, resolved))
    }

    /// Run a render request end to end
    pub fn run(&self, request: &RenderRequest) -> Result<RenderReport, RenderError> {
        let _span = tracing::info_span!("render", input = %request.input.display()).entered();

        let (preset_name, preset) =
            self.resolve_preset(request.preset.as_deref(), &request.overrides)?;
        let ditherer = self.config.ditherer_for(&preset)?;

        let started = Instant::now();
        let bytes = std::fs::read(&request.input).map_err(|source| RenderError::ReadInput {
            path: request.input.display().to_string(),
            source,
        })?;
        let image = decode_png(&bytes)?;
        let decode_ms = elapsed_ms(started);

        let started = Instant::now();
        let views = ditherer.render(&image);
        let render_ms = elapsed_ms(started);

        tracing::info!(
            preset = %preset_name,
            quantizer = %ditherer.quantizer().describe(),
            width = views.width(),
            height = views.height(),
            render_ms,
            "Rendered views"
        );

        let started = Instant::now();
        let mut outputs = Vec::with_capacity(request.outputs.len());
        for (view, path) in &request.outputs {
            outputs.push(write_view(*view, views.get(*view), path)?);
        }
        let encode_ms = elapsed_ms(started);

        Ok(RenderReport {
            input: request.input.display().to_string(),
            preset: preset_name,
            quantizer: ditherer.quantizer().describe(),
            greyscale: ditherer.is_greyscale(),
            width: views.width(),
            height: views.height(),
            source_colors: views.source.distinct_colors(),
            quantized_colors: views.quantized.distinct_colors(),
            dithered_colors: views.dithered.distinct_colors(),
            source_mean: views.source.mean_color(),
            dithered_mean: views.dithered.mean_color(),
            outputs,
            timings: Timings {
                decode_ms,
                render_ms,
                encode_ms,
            },
        })
    }
}

/// `--palette` accepts a palette name or a comma-separated list of hex colors
fn palette_override(value: &str) -> QuantizerConfig {
    if value.contains(',') || value.starts_with('#') {
        QuantizerConfig::Palette {
            palette: None,
            colors: value
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
        }
    } else {
        QuantizerConfig::Palette {
            palette: Some(value.to_string()),
            colors: Vec::new(),
        }
    }
}

fn write_view(view: View, image: &ImageBuffer, path: &Path) -> Result<WrittenView, RenderError> {
    let png = encode_png(image)?;
    std::fs::write(path, &png).map_err(|source| RenderError::WriteOutput {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(%view, path = %path.display(), bytes = png.len(), "Wrote view");
    Ok(WrittenView {
        view: view.to_string(),
        path: path.display().to_string(),
        bytes: png.len(),
    })
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
