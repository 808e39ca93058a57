use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use cover_colors_wasm::{
    CoverConfig, DominantColorConfig, Region, cover_colors_bytes, dominant_colors_bytes, parse_hex,
    to_hex,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RegionArg {
    All,
    Border,
    Interior,
}

impl From<RegionArg> for Region {
    fn from(r: RegionArg) -> Self {
        match r {
            RegionArg::All => Region::All,
            RegionArg::Border => Region::Border,
            RegionArg::Interior => Region::Interior,
        }
    }
}

/// Extract dominant colors (or a cover-art palette) from images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Thumbnail size (longest side) the colors are computed from
    #[arg(short, long, default_value_t = 64)]
    size: u32,

    /// Maximum number of colors
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,

    /// YUV distance under which pixels join a cluster
    #[arg(long, default_value_t = 16.0)]
    cluster_threshold: f64,

    /// Minimum YUV distance between consecutive picks
    #[arg(long, default_value_t = 32.0)]
    separation_threshold: f64,

    /// Hex color to keep away from, e.g. "#FFFFFF"
    #[arg(short = 'x', long)]
    exclude: Option<String>,

    /// YUV distance within which colors count as the excluded one
    #[arg(long, default_value_t = 48.0)]
    exclude_threshold: f64,

    /// Pixels to sample from
    #[arg(short, long, value_enum, default_value_t = RegionArg::All)]
    region: RegionArg,

    /// Print a background + accents palette instead (`--count` accents).
    /// The background is taken from the border, so `--region` and `--exclude` do not apply.
    #[arg(long, conflicts_with_all = ["region", "exclude"])]
    cover: bool,

    /// Emit JSON instead of one line per image
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let exclude = args
        .exclude
        .as_deref()
        .map(parse_hex)
        .transpose()
        .context("invalid --exclude color")?;

    let dominant = DominantColorConfig {
        count: args.count,
        cluster_threshold: args.cluster_threshold,
        separation_threshold: args.separation_threshold,
        exclude_threshold: args.exclude_threshold,
    };
    let cover = CoverConfig {
        size: args.size,
        accents: args.count,
        dominant,
    };

    let mut reports = Vec::new();
    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        info!(path = %input.display(), bytes = bytes.len(), "processing image");

        let report = if args.cover {
            let palette = cover_colors_bytes(&bytes, &cover)
                .with_context(|| format!("cover palette failed for {}", input.display()))?;
            let accents: Vec<String> = palette.accents.iter().map(|c| to_hex(*c)).collect();
            json!({
                "path": input.display().to_string(),
                "background": palette.background.map(to_hex),
                "accents": accents,
            })
        } else {
            let region = args.region.into();
            let colors = dominant_colors_bytes(&bytes, args.size, region, &dominant, exclude)
                .with_context(|| format!("color extraction failed for {}", input.display()))?;
            let colors: Vec<String> = colors.into_iter().map(to_hex).collect();
            json!({
                "path": input.display().to_string(),
                "colors": colors,
            })
        };

        if args.json {
            reports.push(report);
        } else {
            println!("{}: {}", input.display(), plain_line(&report));
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn plain_line(report: &serde_json::Value) -> String {
    let join = |v: &serde_json::Value| {
        v.as_array()
            .map(|a| a.iter().filter_map(|c| c.as_str()).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    };
    match report.get("colors") {
        Some(colors) => join(colors),
        None => format!(
            "background {} accents {}",
            report["background"].as_str().unwrap_or("-"),
            join(&report["accents"])
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_rejects_region_and_exclude() {
        let parse = |extra: &[&str]| {
            Args::try_parse_from(["cover-colors", "a.png"].iter().chain(extra))
        };
        assert!(parse(&["--cover", "--region", "border"]).is_err());
        assert!(parse(&["--cover", "-x", "#FFFFFF"]).is_err());
        assert!(parse(&["--cover", "-n", "2"]).is_ok());
        assert!(parse(&["--region", "interior"]).is_ok());
    }
}
