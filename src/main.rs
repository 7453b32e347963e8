use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fsdither::assets::AssetLoader;
use fsdither::models::AppConfig;
use fsdither::services::{QuantizerOverrides, RenderPipeline, RenderRequest};
use quantize_dither::View;

#[derive(Parser)]
#[command(name = "fsdither")]
#[command(about = "Color quantization and Floyd-Steinberg dithering for PNG images")]
struct Cli {
    /// Config file (overrides the CONFIG_FILE env var)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize and dither a PNG image
    Render {
        /// Input PNG file
        input: PathBuf,

        /// Output path for the dithered image [default: <input>-dithered.png]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the directly quantized image (no error diffusion)
        #[arg(long)]
        quantized: Option<PathBuf>,

        /// Also write the pre-processed source image
        #[arg(long)]
        source: Option<PathBuf>,

        /// Preset from the config file
        #[arg(short, long)]
        preset: Option<String>,

        /// Reduce each channel to this many bits (1-8)
        #[arg(short, long)]
        bits: Option<u8>,

        /// Palette name, or comma-separated hex colors (e.g. "#000,#FFF,#F00")
        #[arg(long)]
        palette: Option<String>,

        /// 1-bit black/white threshold at 128
        #[arg(long)]
        threshold: bool,

        /// Convert to luminance greyscale before quantizing
        #[arg(long)]
        greyscale: bool,

        /// Exchange green and blue after per-channel reduction
        #[arg(long)]
        swap_green_blue: bool,

        /// Print the render report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured presets and palettes
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract the embedded default config for customization
    Init {
        /// Destination path [default: CONFIG_FILE or ./config.yaml]
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fsdither=warn,quantize_dither=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let loader = AssetLoader::new(config_file);

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            quantized,
            source,
            preset,
            bits,
            palette,
            threshold,
            greyscale,
            swap_green_blue,
            json,
        }) => {
            let output = output.unwrap_or_else(|| default_output(&input));
            let mut outputs = vec![(View::Dithered, output)];
            if let Some(path) = quantized {
                outputs.push((View::Quantized, path));
            }
            if let Some(path) = source {
                outputs.push((View::Source, path));
            }
            let request = RenderRequest {
                input,
                preset,
                overrides: QuantizerOverrides {
                    threshold,
                    palette,
                    bits,
                    greyscale,
                    swap_green_blue,
                },
                outputs,
            };
            run_render_command(&loader, &request, json)
        }
        Some(Commands::Presets { json }) => run_presets_command(&loader, json),
        Some(Commands::Init { path, force }) => run_init_command(&loader, path.as_deref(), force),
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

/// `photo.png` → `photo-dithered.png`, next to the input
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}-dithered.png"))
}

/// Render an input PNG to the requested views
fn run_render_command(
    loader: &AssetLoader,
    request: &RenderRequest,
    json: bool,
) -> anyhow::Result<()> {
    let config = Arc::new(AppConfig::load_from_assets(loader));
    let pipeline = RenderPipeline::new(config);

    let report = pipeline
        .run(request)
        .with_context(|| format!("Failed to render {}", request.input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Rendered {} ({}x{}) with {} [{}]",
        report.input, report.width, report.height, report.quantizer, report.preset
    );
    println!(
        "  Colors: {} source, {} quantized, {} dithered",
        report.source_colors, report.quantized_colors, report.dithered_colors
    );
    for written in &report.outputs {
        println!("  {:<9} {} ({} bytes)", written.view, written.path, written.bytes);
    }

    Ok(())
}

/// List presets and palettes
fn run_presets_command(loader: &AssetLoader, json: bool) -> anyhow::Result<()> {
    let config = AppConfig::load_from_assets(loader);
    let presets = config.preset_summaries();

    if json {
        let value = serde_json::json!({
            "default_preset": config.default_preset,
            "presets": presets,
            "palettes": config.palettes,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Presets:");
    for preset in &presets {
        let marker = if preset.default { "*" } else { " " };
        let grey = if preset.greyscale { ", greyscale" } else { "" };
        println!("{marker} {:<18} {}{grey}", preset.name, preset.quantizer);
        if let Some(ref description) = preset.description {
            println!("    {description}");
        }
    }

    println!("\nPalettes:");
    for (name, colors) in &config.palettes {
        println!("  {:<18} {}", name, colors.join(" "));
    }

    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(loader: &AssetLoader, path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let report = loader
        .init_config(path, force)
        .context("Failed to extract config")?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = AppConfig::load_from_assets(loader);

    println!("fsdither v{VERSION}");
    println!("Color quantization and Floyd-Steinberg dithering\n");

    println!("Configuration:");
    println!("  Source:         {}", loader.config_source());
    println!("  Presets:        {}", config.presets.len());
    println!("  Palettes:       {}", config.palettes.len());
    println!("  Default preset: {}", config.default_preset);

    println!("\nCommands:");
    println!("  fsdither render <input.png>   Dither an image");
    println!("  fsdither presets              List presets and palettes");
    println!("  fsdither init                 Extract the default config");
    println!("\nRun 'fsdither --help' for more details.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_next_to_input() {
        assert_eq!(
            default_output(Path::new("/tmp/photos/cat.png")),
            PathBuf::from("/tmp/photos/cat-dithered.png")
        );
        assert_eq!(
            default_output(Path::new("cat.png")),
            PathBuf::from("cat-dithered.png")
        );
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "fsdither",
            "render",
            "in.png",
            "--bits",
            "2",
            "--swap-green-blue",
            "--quantized",
            "q.png",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                input,
                bits,
                swap_green_blue,
                quantized,
                ..
            }) => {
                assert_eq!(input, PathBuf::from("in.png"));
                assert_eq!(bits, Some(2));
                assert!(swap_green_blue);
                assert_eq!(quantized, Some(PathBuf::from("q.png")));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["fsdither", "presets", "--config", "my.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
    }
}
