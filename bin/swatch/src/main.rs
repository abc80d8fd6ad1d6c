//! Command line front end for pigment: classify sampled colors, measure the
//! distance between them and render product swatches.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgb, RgbImage};
use log::info;
use pigment::{
    classify::Classifier,
    config::Config,
    render::Format,
    swatch::{order_by_lightness, resolve_product_swatch, Overlay},
    Color,
};

/// Classify colors against the ISCC-NBS system and build product swatches.
#[derive(Parser, Debug)]
#[command(name = "swatch", version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log classification details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the closest ISCC-NBS category of each color
    Classify {
        /// Colors as hex strings or rgb() functions
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the perceptual distance between two colors
    Distance { a: String, b: String },

    /// Print a color in one or every notation
    Convert {
        color: String,

        /// rgb, hex, lab, lch, hsl, oklab or oklch
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Resolve three samples into a classified product swatch (JSON)
    Swatch {
        /// Exactly three sampled colors, in any order
        #[arg(num_args = 3, required = true)]
        samples: Vec<String>,

        /// Finish overlay of the product
        #[arg(long)]
        overlay: Option<String>,

        /// Also render the swatch gradient to this image
        #[arg(short, long, value_name = "PNG")]
        output: Option<PathBuf>,
    },
}

const WIDTH: u32 = 600;
const HEIGHT: u32 = 100;

fn parse_color(value: &str) -> Result<Color> {
    value
        .parse::<Color>()
        .with_context(|| format!("could not parse color \"{value}\""))
}

/// Render the gradient lightest -> base -> darkest, interpolated in Oklab.
fn render_gradient(start: &Color, base: &Color, end: &Color) -> RgbImage {
    let mut img = RgbImage::new(WIDTH, HEIGHT);

    img.enumerate_rows_mut().for_each(|(_, pixels)| {
        for (x, _, pixel) in pixels {
            let t = x as f64 / (WIDTH - 1) as f64;

            let c = if t < 0.5 {
                start.interpolate(base, t * 2.0)
            } else {
                base.interpolate(end, (t - 0.5) * 2.0)
            };

            *pixel = Rgb([
                c.red().round() as u8,
                c.green().round() as u8,
                c.blue().round() as u8,
            ]);
        }
    });

    img
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("could not load configuration {}", path.display()))?,
        None => Config::default(),
    };
    let classifier = Classifier::from_config(&config)?;

    match args.command {
        Command::Classify { colors, json } => {
            for value in colors {
                let color = parse_color(&value)?;
                let data = color.classify(&classifier)?;

                if json {
                    println!("{}", serde_json::to_string(&data)?);
                } else {
                    let hues = data
                        .color_range
                        .hues()
                        .map(|hue| hue.name())
                        .collect::<Vec<_>>();
                    println!(
                        "{}\t{}\t[{}]\t{}",
                        color.to_hex(),
                        data.iscc_nbs_category,
                        hues.join(", "),
                        data.analogous.join(", ")
                    );
                }
            }

            info!("cache: {:?}", classifier.cache().stats());
        }

        Command::Distance { a, b } => {
            let d = pigment::distance_with(
                classifier.weights(),
                &parse_color(&a)?,
                &parse_color(&b)?,
            )?;
            println!("{d:.6}");
        }

        Command::Convert { color, format } => {
            let color = parse_color(&color)?;
            match format {
                Some(format) => println!("{}", color.render(format.parse::<Format>()?)),
                None => {
                    for format in Format::ALL {
                        println!("{format:>6}  {}", color.render(format));
                    }
                }
            }
        }

        Command::Swatch {
            samples,
            overlay,
            output,
        } => {
            let samples = samples
                .iter()
                .map(|s| parse_color(s))
                .collect::<Result<Vec<_>>>()?;
            let samples: [Color; 3] = samples
                .try_into()
                .map_err(|_| anyhow::anyhow!("expected exactly three samples"))?;

            let mut resolved = resolve_product_swatch(&classifier, samples)?;
            if let Some(overlay) = overlay {
                resolved.swatch = resolved.swatch.with_overlay(overlay.parse::<Overlay>()?);
            }

            println!("{}", serde_json::to_string_pretty(&resolved)?);

            if let Some(path) = output {
                let [start, base, end] = order_by_lightness(samples);

                render_gradient(&start, &base, &end)
                    .save(&path)
                    .with_context(|| format!("could not write image to {}", path.display()))?;
                info!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}
