use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hexgen::geom::LimitMode;
use hexgen::layout_file::{read_layout, write_layout, Delimiter};
use hexgen::tiling::{generate, generate_par, Layout, TilingParams};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "hexgen")]
#[command(about = "Hexagonal gateway/station layouts for wireless network simulations")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Tile an area, write `<output>.txt`, `<output>.svg` and a provenance sidecar
    Generate(GenerateArgs),
    /// Redraw an existing position file
    Render {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Hexagon size the file was generated with (for the rhombus outlines)
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
    },
    /// Print a JSON summary of a position file
    Report {
        #[arg(long)]
        from: PathBuf,
    },
}

#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Hexagon side length in meters
    #[arg(long, default_value_t = 100.0)]
    radius: f64,
    /// Width of the area in meters
    #[arg(long, default_value_t = 1000.0)]
    xaxis: f64,
    /// Height of the area in meters
    #[arg(long, default_value_t = 1000.0)]
    yaxis: f64,
    /// Station points per gateway
    #[arg(long, default_value_t = 6)]
    wireless: usize,
    /// Base name for the image and text output
    #[arg(long, default_value = "rand-hex")]
    output: String,
    /// RNG seed; drawn at random when absent
    #[arg(long)]
    seed: Option<u64>,
    /// Sector-1 half-plane limit: 0 none, 1 left of center, 2 right of center
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    limit: u8,
    /// Coordinate separator in the position file
    #[arg(long, value_enum, default_value_t = DelimiterArg::Space)]
    delimiter: DelimiterArg,
    /// Sample gateways in parallel
    #[arg(long)]
    parallel: bool,
    /// Skip the SVG image
    #[arg(long)]
    no_image: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DelimiterArg {
    Space,
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(d: DelimiterArg) -> Self {
        match d {
            DelimiterArg::Space => Delimiter::Space,
            DelimiterArg::Comma => Delimiter::Comma,
        }
    }
}

impl GenerateArgs {
    fn tiling_params(&self) -> Result<TilingParams> {
        let limit = LimitMode::from_code(self.limit)
            .with_context(|| format!("limit must be 0, 1 or 2 (got {})", self.limit))?;
        Ok(TilingParams {
            radius: self.radius,
            xaxis: self.xaxis,
            yaxis: self.yaxis,
            stations_per_gateway: self.wireless,
            limit,
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate(args) => {
            let out = run_generate(&args)?;
            tracing::info!(
                text = %out.text.display(),
                image = ?out.image,
                sidecar = %out.sidecar.display(),
                gateways = out.layout.gateways.len(),
                stations = out.layout.stations.len(),
                "done"
            );
            Ok(())
        }
        Action::Render { from, out, radius } => rerender(&from, &out, radius),
        Action::Report { from } => report(&from),
    }
}

/// Files written by one `generate` run.
#[derive(Debug)]
struct Outputs {
    text: PathBuf,
    image: Option<PathBuf>,
    sidecar: PathBuf,
    layout: Layout,
}

fn run_generate(args: &GenerateArgs) -> Result<Outputs> {
    let params = args.tiling_params()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        radius = params.radius,
        xaxis = params.xaxis,
        yaxis = params.yaxis,
        wireless = params.stations_per_gateway,
        limit = params.limit.code(),
        seed,
        parallel = args.parallel,
        "generate"
    );

    let layout = if args.parallel {
        generate_par(&params, seed)
    } else {
        generate(&params, seed)
    }
    .context("generating layout")?;
    tracing::debug!(
        gateways = layout.gateways.len(),
        stations = layout.stations.len(),
        "layout_ready"
    );

    let text = PathBuf::from(format!("{}.txt", args.output));
    ensure_parent(&text)?;
    let file = File::create(&text).with_context(|| format!("creating {}", text.display()))?;
    let mut writer = BufWriter::new(file);
    write_layout(&mut writer, &layout, args.delimiter.into())
        .with_context(|| format!("writing {}", text.display()))?;
    tracing::debug!(path = %text.display(), "positions_written");

    let image = if args.no_image {
        None
    } else {
        let path = PathBuf::from(format!("{}.svg", args.output));
        render::render_svg(&path, &layout, params.radius)
            .with_context(|| format!("rendering {}", path.display()))?;
        tracing::debug!(path = %path.display(), "image_written");
        Some(path)
    };

    let mut payload = provenance::Payload::new(serde_json::json!({
        "radius": params.radius,
        "xaxis": params.xaxis,
        "yaxis": params.yaxis,
        "wireless": params.stations_per_gateway,
        "seed": seed,
        "limit": params.limit.code(),
        "delimiter": format!("{:?}", args.delimiter).to_lowercase(),
        "gateways": layout.gateways.len(),
    }));
    if let Some(path) = &image {
        payload = payload.with_output(path);
    }
    let sidecar = provenance::write_sidecar(&text, payload)?;

    Ok(Outputs {
        text,
        image,
        sidecar,
        layout,
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn load(from: &Path) -> Result<Layout> {
    let file = File::open(from).with_context(|| format!("opening {}", from.display()))?;
    read_layout(BufReader::new(file)).with_context(|| format!("reading {}", from.display()))
}

fn rerender(from: &Path, out: &Path, radius: f64) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), radius, "render");
    let layout = load(from)?;
    ensure_parent(out)?;
    render::render_svg(out, &layout, radius)
        .with_context(|| format!("rendering {}", out.display()))
}

#[derive(Debug, Serialize)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

#[derive(Debug, Serialize)]
struct Summary {
    code_rev: String,
    xaxis: f64,
    yaxis: f64,
    gateways: usize,
    stations_per_gateway: usize,
    stations: usize,
    station_bounds: Option<Bounds>,
}

fn summarize(layout: &Layout) -> Summary {
    let station_bounds = (!layout.stations.is_empty()).then(|| {
        layout.stations.iter().fold(
            Bounds {
                min_x: f64::INFINITY,
                min_y: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |b, p| Bounds {
                min_x: b.min_x.min(p.x),
                min_y: b.min_y.min(p.y),
                max_x: b.max_x.max(p.x),
                max_y: b.max_y.max(p.y),
            },
        )
    });
    Summary {
        code_rev: provenance::current_git_rev(),
        xaxis: layout.xaxis,
        yaxis: layout.yaxis,
        gateways: layout.gateways.len(),
        stations_per_gateway: layout.stations_per_gateway,
        stations: layout.stations.len(),
        station_bounds,
    }
}

fn report(from: &Path) -> Result<()> {
    let layout = load(from)?;
    println!("{}", serde_json::to_string_pretty(&summarize(&layout))?);
    Ok(())
}
