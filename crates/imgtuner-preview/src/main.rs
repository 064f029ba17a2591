//! Apply one named transform to a local image file and write the result,
//! optionally side by side with the original for before/after comparison.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use image::DynamicImage;
use imgtuner_ops::{Dimensions, adjust, filter};

/// Preview an imgtuner transform on a local image.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input image path.
    input: PathBuf,

    /// Output image path (format inferred from the extension).
    #[arg(short, long)]
    output: PathBuf,

    /// Transform to apply.
    #[arg(long, value_enum, default_value_t = Op::Color)]
    op: Op,

    /// Resize the result to WIDTHxHEIGHT (exact, no aspect preservation).
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    size: Option<String>,

    /// Strength parameter: sigma for blur/sharpen, offset for
    /// brightness, percentage for contrast. Ignored by the other ops.
    #[arg(long, default_value_t = 2.0)]
    amount: f32,

    /// Write the original and the result side by side.
    #[arg(long)]
    compare: bool,
}

/// Transforms the preview tool can apply.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Op {
    Color,
    Grayscale,
    Binary,
    Brightness,
    Contrast,
    Blur,
    Sharpen,
    Edge,
    Invert,
}

impl Op {
    fn apply(self, image: &DynamicImage, amount: f32) -> DynamicImage {
        match self {
            Self::Color => DynamicImage::ImageRgb8(image.to_rgb8()),
            Self::Grayscale => {
                DynamicImage::ImageLuma8(imgtuner_ops::grayscale::to_luminance(image))
            }
            Self::Binary => DynamicImage::ImageLuma8(imgtuner_ops::threshold::binarize(
                &imgtuner_ops::grayscale::to_luminance(image),
                imgtuner_ops::threshold::BINARY_LEVEL,
            )),
            #[allow(clippy::cast_possible_truncation)]
            Self::Brightness => adjust::brightness(image, amount as i32),
            Self::Contrast => adjust::contrast(image, amount),
            Self::Blur => filter::blur(image, amount),
            Self::Sharpen => filter::sharpen(image, amount, 2),
            Self::Edge => DynamicImage::ImageLuma8(filter::edge(image, 50.0, 150.0)),
            Self::Invert => filter::invert(image),
        }
    }
}

/// Parse `--size WIDTHxHEIGHT`.
fn parse_size(s: &str) -> Result<Dimensions, String> {
    let (w_str, h_str) = s
        .split_once('x')
        .ok_or_else(|| format!("size must be 'WIDTHxHEIGHT', got: '{s}'"))?;
    let width: u32 = w_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{w_str}': {e}"))?;
    let height: u32 = h_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{h_str}': {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("size must be positive, got {width}x{height}"));
    }
    Ok(Dimensions::new(width, height))
}

/// Paste the original and the result side by side on an RGB canvas.
fn side_by_side(original: &DynamicImage, result: &DynamicImage) -> DynamicImage {
    let gap = 4u32;
    let width = original.width() + gap + result.width();
    let height = original.height().max(result.height());
    let mut canvas = image::RgbImage::from_pixel(width, height, image::Rgb([32, 32, 32]));
    image::imageops::replace(&mut canvas, &original.to_rgb8(), 0, 0);
    image::imageops::replace(
        &mut canvas,
        &result.to_rgb8(),
        i64::from(original.width() + gap),
        0,
    );
    DynamicImage::ImageRgb8(canvas)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let original = image::open(&args.input)?;
    let mut result = args.op.apply(&original, args.amount);

    if let Some(size) = &args.size {
        let target = parse_size(size)?;
        result = imgtuner_ops::resize::resize_to(&result, target);
    }

    let output = if args.compare {
        side_by_side(&original, &result)
    } else {
        result
    };
    output.save(&args.output)?;

    println!(
        "{} -> {} ({:?}, {}x{})",
        args.input.display(),
        args.output.display(),
        args.op,
        output.width(),
        output.height(),
    );
    Ok(())
}
