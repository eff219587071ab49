use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tsbar_rs::api::{BarChartLayout, BarChartSettings, BarSeries, CartesianCoordinateSystem};
use tsbar_rs::core::{PlotArea, TimeScale, ValueScaleTuning, Viewport};
use tsbar_rs::render::JsonRenderer;
use tsbar_rs::telemetry;

/// Chart description read from the input file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BarFixture {
    viewport: Viewport,
    #[serde(default)]
    plot_area: Option<PlotArea>,
    time_range: [f64; 2],
    #[serde(default)]
    visible_time_range: Option<[f64; 2]>,
    #[serde(default)]
    settings: BarChartSettings,
    series: Vec<BarSeries>,
}

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_tracing_with_filter("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let fixture: BarFixture =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let layout = BarChartLayout::new(fixture.settings)
        .and_then(|layout| layout.with_series(fixture.series))
        .map_err(|err| err.to_string())?;

    let mut time_scale = TimeScale::new(fixture.time_range[0], fixture.time_range[1])
        .map_err(|err| err.to_string())?;
    if let Some([start, end]) = fixture.visible_time_range {
        time_scale
            .set_visible_range(start, end)
            .map_err(|err| err.to_string())?;
    }
    let value_scale = layout
        .fit_value_scale(ValueScaleTuning::default())
        .map_err(|err| err.to_string())?;
    let plot = match fixture.plot_area {
        Some(plot) => plot,
        None => PlotArea::from_viewport(fixture.viewport).map_err(|err| err.to_string())?,
    };
    let coords = CartesianCoordinateSystem::new(time_scale, value_scale, fixture.viewport, plot)
        .map_err(|err| err.to_string())?;

    let mut renderer = JsonRenderer::default();
    layout
        .render(&coords, &mut renderer)
        .map_err(|err| err.to_string())?;
    let json = renderer.to_json().map_err(|err| err.to_string())?;

    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut output = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => input = Some(PathBuf::from(next_value(&mut args, "--input")?)),
            "--output" => output = Some(PathBuf::from(next_value(&mut args, "--output")?)),
            "--help" | "-h" => {
                return Err(
                    "usage: render_bar_fixture --input <fixture.json> [--output <shapes.json>]"
                        .to_owned(),
                );
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(Args {
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}
