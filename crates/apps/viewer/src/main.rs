use std::env;
use std::fs;
use std::path::PathBuf;

use compute::{CatalogSummary, MagnitudeFilter};
use formats::EventCatalog;
use foundation::geo::GeoPoint;
use layers::{LayerStack, StarfieldConfig};
use scene::{CameraPosition, ViewState, camera_position};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Everything the rendering collaborator needs for one frame.
#[derive(Debug, Serialize)]
struct RenderBundle {
    year: i32,
    magnitude_range: [f64; 2],
    view: ViewState,
    camera: CameraPosition,
    summary: CatalogSummary,
    layers: LayerStack,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        eprintln!("hint: the catalog must be a CSV with Date, Latitude, Longitude and Magnitude columns");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "render" => cmd_render(args),
        "stats" => cmd_stats(args),
        _ => Err(usage()),
    }
}

struct RenderArgs {
    input: PathBuf,
    year: Option<i32>,
    mag_min: Option<f64>,
    mag_max: Option<f64>,
    stars: usize,
    seed: Option<u64>,
    out: Option<PathBuf>,
}

fn parse_render_args(args: Vec<String>) -> Result<RenderArgs, String> {
    if args.is_empty() {
        return Err(usage());
    }

    let mut parsed = RenderArgs {
        input: PathBuf::from(&args[0]),
        year: None,
        mag_min: None,
        mag_max: None,
        stars: layers::starfield::STAR_COUNT,
        seed: None,
        out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--year" => {
                parsed.year = Some(flag_value(&args, &mut i, "--year")?);
            }
            "--mag-min" => {
                parsed.mag_min = Some(flag_value(&args, &mut i, "--mag-min")?);
            }
            "--mag-max" => {
                parsed.mag_max = Some(flag_value(&args, &mut i, "--mag-max")?);
            }
            "--stars" => {
                parsed.stars = flag_value(&args, &mut i, "--stars")?;
            }
            "--seed" => {
                parsed.seed = Some(flag_value(&args, &mut i, "--seed")?);
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("--out requires a path".to_string());
                }
                parsed.out = Some(PathBuf::from(&args[i]));
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn flag_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, String> {
    *i += 1;
    if *i >= args.len() {
        return Err(format!("{flag} requires a value"));
    }
    args[*i]
        .parse::<T>()
        .map_err(|_| format!("{flag}: cannot parse {:?}", args[*i]))
}

fn cmd_render(args: Vec<String>) -> Result<(), String> {
    let args = parse_render_args(args)?;

    let catalog = EventCatalog::from_csv_path(&args.input)
        .map_err(|e| format!("load {:?}: {e}", args.input))?;
    info!(
        events = catalog.len(),
        dropped = catalog.dropped_rows,
        "catalog loaded"
    );

    let (min_year, _) = catalog
        .year_range()
        .ok_or_else(|| "catalog has no usable rows".to_string())?;
    let (min_mag, max_mag) = catalog
        .magnitude_range()
        .ok_or_else(|| "catalog has no usable rows".to_string())?;

    // Slider defaults: earliest year, full magnitude range.
    let year = args.year.unwrap_or(min_year);
    let lo = args.mag_min.unwrap_or(min_mag);
    let hi = args.mag_max.unwrap_or(max_mag);

    let filter = MagnitudeFilter::new(year, lo, hi);
    let selected = filter.apply(&catalog);
    let summary = CatalogSummary::of(selected.iter().copied());
    info!(
        year,
        count = summary.count,
        mean_magnitude = summary.mean_magnitude,
        "filter applied"
    );

    let view = ViewState::default();
    let camera = camera_position(GeoPoint::new(view.longitude, view.latitude), view.zoom);
    let stack = LayerStack::build(
        selected.iter().copied(),
        StarfieldConfig {
            count: args.stars,
            seed: args.seed,
        },
    );

    let bundle = RenderBundle {
        year,
        magnitude_range: [lo, hi],
        view,
        camera,
        summary,
        layers: stack,
    };

    let payload = serde_json::to_string_pretty(&bundle).map_err(|e| format!("json: {e}"))?;
    match &args.out {
        Some(path) => {
            fs::write(path, payload).map_err(|e| format!("write {path:?}: {e}"))?;
            info!(out = %path.display(), "render bundle written");
        }
        None => println!("{payload}"),
    }
    Ok(())
}

fn cmd_stats(args: Vec<String>) -> Result<(), String> {
    if args.len() != 1 {
        return Err(usage());
    }

    let input = PathBuf::from(&args[0]);
    let catalog =
        EventCatalog::from_csv_path(&input).map_err(|e| format!("load {input:?}: {e}"))?;

    let summary = CatalogSummary::of(&catalog.events);
    println!("events: {}", summary.count);
    println!("dropped rows: {}", catalog.dropped_rows);
    if let Some((min_year, max_year)) = catalog.year_range() {
        println!("years: {min_year}..={max_year}");
    }
    if let Some((lo, hi)) = catalog.magnitude_range() {
        println!("magnitude: {lo:.1}..={hi:.1}");
    }
    if let Some(mean) = summary.mean_magnitude {
        println!("mean magnitude: {mean:.2}");
    }
    Ok(())
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "quakeglobe".to_string());
    format!(
        "Usage:\n  {exe} render <catalog.csv> [--year Y] [--mag-min LO] [--mag-max HI] [--stars N] [--seed S] [--out FILE]\n  {exe} stats <catalog.csv>\n\nNotes:\n- Year defaults to the earliest in the catalog; magnitude bounds default to the catalog's full range.\n- Rows with unparseable dates are dropped and counted, not errors.\n- `render` writes the frame's render bundle (view state + layers) as JSON to --out or stdout.\n"
    )
}
