use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use quickhull::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "qhull")]
#[command(about = "Convex hulls of planar point sets (QuickHull)")]
struct Cmd {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Two whitespace-separated numbers per line
    Text,
    /// Header row with `x` and `y` columns
    Csv,
    /// `x` and `y` columns
    Parquet,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    /// Exclude only points equal to a line endpoint
    Exact,
    /// Exclude points sharing an endpoint's x
    SameX,
}

impl From<Filter> for EndpointFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Exact => EndpointFilter::Exact,
            Filter::SameX => EndpointFilter::SameX,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull of a point file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        #[arg(long, value_enum, default_value_t = Filter::Exact)]
        filter: Filter,
        /// Print JSON instead of the text listing
        #[arg(long)]
        json: bool,
        /// Write output here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build the hull of a random disk cloud
    Random {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON view of a `HullResult`.
#[derive(Debug, Serialize)]
struct HullReport {
    points: Vec<[f64; 2]>,
    hull: Vec<[f64; 2]>,
    area: f64,
    degenerate: bool,
}

impl From<&HullResult> for HullReport {
    fn from(r: &HullResult) -> Self {
        let xy = |ps: &[Point]| -> Vec<[f64; 2]> { ps.iter().map(|p| [p.x, p.y]).collect() };
        Self {
            points: xy(r.all_points()),
            hull: xy(r.hull()),
            area: r.area(),
            degenerate: r.is_degenerate(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_max_level(cmd.log)
        .with_target(false)
        .init();
    match cmd.action {
        Action::Hull {
            input,
            format,
            filter,
            json,
            out,
        } => hull(&input, format, filter, json, out.as_deref()),
        Action::Random {
            count,
            seed,
            radius,
            json,
            out,
        } => random(count, seed, radius, json, out.as_deref()),
        Action::Report => report(),
    }
}

fn value_name<T: ValueEnum>(v: T) -> String {
    v.to_possible_value()
        .map(|p| p.get_name().to_string())
        .unwrap_or_default()
}

fn load(input: &Path, format: Format) -> Result<Vec<Point>> {
    match format {
        Format::Text => {
            read_points_file(input).with_context(|| format!("reading {}", input.display()))
        }
        Format::Csv => table::read_points_csv(input),
        Format::Parquet => table::read_points_parquet(input),
    }
}

fn hull(input: &Path, format: Format, filter: Filter, json: bool, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), ?format, ?filter, "hull");
    let points = load(input, format)?;
    let cfg = HullCfg {
        endpoint_filter: filter.into(),
    };
    let result = HullResult::construct_from_source_with(points, cfg)
        .with_context(|| format!("building hull of {}", input.display()))?;
    tracing::info!(
        points = result.all_points().len(),
        vertices = result.hull().len(),
        area = result.area(),
        "hull_built"
    );
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "format": value_name(format),
        "filter": value_name(filter),
    });
    emit(&render(&result, json)?, out, Payload::new("hull", params))
}

fn random(count: usize, seed: u64, radius: f64, json: bool, out: Option<&Path>) -> Result<()> {
    tracing::info!(count, seed, radius, "random");
    let cfg = CloudCfg {
        count,
        shape: CloudShape::Disk { radius },
        grid: None,
    };
    let points = draw_cloud(cfg, ReplayToken::new(seed, 0));
    let result = HullResult::construct_from_source(points).context("building hull of random cloud")?;
    let params = serde_json::json!({ "count": count, "seed": seed, "radius": radius });
    emit(&render(&result, json)?, out, Payload::new("random", params))
}

fn render(result: &HullResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&HullReport::from(result))?)
    } else {
        Ok(result.describe())
    }
}

/// Print `text`, or write it to `out` with a provenance sidecar.
fn emit(text: &str, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, format!("{text}\n")).with_context(|| format!("writing {}", out.display()))?;
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "quickhull_version": quickhull::VERSION,
        "cli_version": env!("CARGO_PKG_VERSION"),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square_with_center() -> HullResult {
        HullResult::construct([(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0), (1.0, 1.0)])
            .unwrap()
    }

    #[test]
    fn json_report_shape() {
        let text = render(&square_with_center(), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["points"].as_array().unwrap().len(), 5);
        assert_eq!(v["hull"][1], serde_json::json!([0.0, 2.0]));
        assert_eq!(v["area"], 4.0);
        assert_eq!(v["degenerate"], false);
    }

    #[test]
    fn hull_command_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.txt");
        fs::write(&input, "0 0\n4 0\n2 3\n0 2\n").unwrap();
        let out = dir.path().join("res").join("hull.txt");
        hull(&input, Format::Text, Filter::SameX, false, Some(&out)).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.ends_with("Area: 6\n"));
        assert!(dir.path().join("res").join("hull.provenance.json").exists());
    }

    #[test]
    fn malformed_text_input_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, "0 0\n4\n").unwrap();
        let err = hull(&input, Format::Text, Filter::Exact, false, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HullError>(),
            Some(HullError::MalformedInput { line: 2, .. })
        ));
    }
}
