use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tlc_analyzer_rs::logger;
use tlc_analyzer_rs::tlc_engine::{
    AnalysisSession, EngineConfig, LabelOrientation, SourceReader, TiffSourceReader,
};

use tracing::{info, warn};

/// Measure Rf values and a lane profile on a TLC plate photo.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Plate image (PNG, JPEG, BMP or TIFF)
    input: PathBuf,

    /// Decode with the TIFF reader (16-bit scanner exports)
    #[arg(long)]
    tiff: bool,

    /// Clockwise rotation applied after loading, multiple of 90
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    rotate: i32,

    /// Origin line row
    #[arg(long)]
    origin: Option<i32>,

    /// Solvent front row
    #[arg(long)]
    front: Option<i32>,

    /// Spot position as X,Y; repeatable
    #[arg(long = "spot", value_parser = parse_point)]
    spots: Vec<(i32, i32)>,

    /// Lane centre column for the intensity profile
    #[arg(long)]
    lane: Option<i32>,

    /// Lane band width in pixels
    #[arg(long, default_value_t = 20)]
    lane_width: u32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    brightness: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    contrast: i32,

    /// Binarise at this gray level before profiling
    #[arg(long)]
    threshold: Option<u8>,

    /// Decimals for Rf output
    #[arg(long, default_value_t = 2)]
    decimals: usize,

    /// Rotate labels 90°
    #[arg(long)]
    vertical_labels: bool,

    /// Write the spot table here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_point(s: &str) -> std::result::Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("bad X in '{}': {}", s, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y in '{}': {}", s, e))?;
    Ok((x, y))
}

fn run<R: SourceReader>(mut session: AnalysisSession<R>, args: &Args) -> Result<()> {
    let (width, height) = session
        .load_file(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    info!("Loaded {}x{}", width, height);

    if args.rotate != 0 && !session.rotate(args.rotate) {
        bail!("rotation must be a multiple of 90, got {}", args.rotate);
    }

    if let Some(y) = args.origin {
        session.set_origin_y(y);
    }
    if let Some(y) = args.front {
        session.set_front_y(y);
    }
    if args.origin.is_some() && args.origin == args.front {
        warn!("Origin and front coincide; Rf is undefined");
    }
    for &(x, y) in &args.spots {
        session.add_spot(x, y);
    }

    session.set_brightness(args.brightness);
    session.set_contrast(args.contrast);
    if let Some(t) = args.threshold {
        session.set_threshold(true, t);
    }

    if let Some(x) = args.lane {
        session.set_lane_x(x);
        session.set_lane_width(args.lane_width);
        if let Some(profile) = session.profile() {
            let peak = profile
                .iter()
                .min_by(|a, b| a.intensity.total_cmp(&b.intensity));
            info!("Lane profile: {} rows", profile.len());
            if let Some(p) = peak {
                info!(
                    "Darkest row {} (distance {:.3}, intensity {:.1})",
                    p.row, p.distance, p.intensity
                );
            }
        }
    }

    match &args.out {
        Some(path) => session.export_csv_file(path)?,
        None => session.export_csv(std::io::stdout().lock())?,
    }

    Ok(())
}

fn main() -> Result<()> {
    logger::init();
    let args = Args::parse();

    info!("Starting tlc-analyzer...");

    let config = EngineConfig::builder()
        .label_decimals(args.decimals)
        .lane_width(args.lane_width)
        .label_orientation(if args.vertical_labels {
            LabelOrientation::Vertical
        } else {
            LabelOrientation::Horizontal
        })
        .build();

    if args.tiff {
        run(AnalysisSession::with_reader(TiffSourceReader, config), &args)
    } else {
        run(AnalysisSession::new(config), &args)
    }
}
