use clap::Parser;
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result, bail};
use rand::Rng;
use garment_colour_wasm::{ColourMatch, ColourPalette, Rgb, analyse_colour, hex_to_rgb, match_colour, rgb_to_hex};
use serde_json::json;

/// Name the dominant colour of garment photos (background already removed).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image paths (transparent background expected)
    inputs: Vec<PathBuf>,

    /// Hex colours to match directly, e.g. `--hex 3366CC,#FA0A0A`
    #[arg(short = 'x', long, value_delimiter = ',')]
    hex: Vec<String>,

    /// Match this many random colours against the palette
    #[arg(short, long)]
    random: Option<usize>,

    /// Print one JSON object per line
    #[arg(short, long)]
    json: bool,

    /// Show true-colour swatches next to each result
    #[arg(short, long)]
    swatch: bool,
}

fn swatch(rgb: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m  \x1b[0m", rgb.red, rgb.green, rgb.blue)
}

fn report(args: &Args, source: &str, rgb: Rgb, matched: Option<&ColourMatch>) -> Result<()> {
    let hex = rgb_to_hex(rgb);
    if args.json {
        println!("{}", json!({ "source": source, "dominant": hex, "colour": matched }));
        return Ok(());
    }

    let Some(m) = matched else {
        println!("{source}: {hex} -> no match");
        return Ok(());
    };
    if args.swatch {
        let matched_rgb = hex_to_rgb(&m.value).context("palette entry is not a valid colour")?;
        println!("{source}: {} {hex} -> {}\t{}", swatch(rgb), m.name, swatch(matched_rgb));
    } else {
        println!("{source}: {hex} -> {} ({})", m.name, m.value);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.inputs.is_empty() && args.hex.is_empty() && args.random.is_none() {
        bail!("nothing to do: pass image paths, --hex or --random");
    }
    let palette = ColourPalette::standard();

    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        let garment = analyse_colour(&bytes, palette)
            .with_context(|| format!("colour analysis failed for {}", input.display()))?;
        report(&args, &input.display().to_string(), garment.dominant, garment.colour.as_ref())?;
    }

    for hex in &args.hex {
        let rgb = hex_to_rgb(hex.trim()).with_context(|| format!("parsing --hex {hex}"))?;
        report(&args, hex.trim(), rgb, match_colour(rgb, palette).as_ref())?;
    }

    if let Some(n) = args.random {
        let mut rng = rand::rng();
        for _ in 0..n {
            let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
            report(&args, "random", rgb, match_colour(rgb, palette).as_ref())?;
        }
    }

    tracing::info!(
        images = args.inputs.len(),
        hex = args.hex.len(),
        random = args.random.unwrap_or(0),
        "done"
    );
    Ok(())
}
