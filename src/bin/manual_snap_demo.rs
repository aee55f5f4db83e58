use extrema_detector::config::manual::{self, SelectionConfig};
use extrema_detector::io::{
    format_differences_csv, format_differences_text, format_extrema_text, read_xy,
    write_json_file, write_text_file, XySeries,
};
use extrema_detector::manual::{nearest_point, snap_selections, Selection, SelectionSet};
use extrema_detector::pairing::{pair_differences, DifferenceSummary};
use extrema_detector::types::{DifferencePair, Extrema, ExtremumKind};
use log::warn;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = manual::load_config(Path::new(&config_path))?;

    let series = read_xy(&config.input)?;
    let selections = build_selections(&series, &config.selections);
    let extrema = snap_selections(&series.y, &selections, &config.snap);
    let pairs = pair_differences(&extrema);

    println!(
        "{}: {} samples, {} picks -> {} maxima / {} minima (radius {})",
        config.input.display(),
        series.len(),
        selections.len(),
        extrema.maxima.len(),
        extrema.minima.len(),
        config.snap.radius
    );

    if let Some(path) = &config.output.result_json {
        let report = ManualReport {
            selections: &selections,
            summary: DifferenceSummary::from_pairs(&pairs),
            extrema: &extrema,
            differences: &pairs,
        };
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }
    if let Some(path) = &config.output.result_text {
        write_text_file(path, &format_extrema_text("Snapped extrema", &extrema))?;
        println!("Saved extrema to {}", path.display());
    }
    if let Some(path) = &config.output.differences_text {
        write_text_file(path, &format_differences_text(&pairs))?;
        println!("Saved differences to {}", path.display());
    }
    if let Some(path) = &config.output.differences_csv {
        write_text_file(path, &format_differences_csv(&pairs))?;
        println!("Saved differences to {}", path.display());
    }

    Ok(())
}

fn build_selections(series: &XySeries, config: &SelectionConfig) -> SelectionSet {
    let mut set = SelectionSet::default();
    let by_index = [
        (ExtremumKind::Max, &config.maxima),
        (ExtremumKind::Min, &config.minima),
    ];
    for (kind, indices) in by_index {
        for &index in indices {
            match (series.x.get(index), series.y.get(index)) {
                (Some(&x), Some(&y)) => {
                    set.add(kind, Selection::new(index, x, y));
                }
                _ => warn!("{kind} selection {index} is outside the sequence"),
            }
        }
    }
    let by_point = [
        (ExtremumKind::Max, &config.maxima_points),
        (ExtremumKind::Min, &config.minima_points),
    ];
    for (kind, points) in by_point {
        for &[x, y] in points {
            match nearest_point(&series.x, &series.y, x, y, config.pick_radius) {
                Some(selection) => {
                    set.add(kind, selection);
                }
                None => warn!("{kind} point ({x}, {y}) is not near any sample"),
            }
        }
    }
    set
}

fn usage() -> String {
    "Usage: manual_snap_demo <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManualReport<'a> {
    selections: &'a SelectionSet,
    extrema: &'a Extrema,
    differences: &'a [DifferencePair],
    summary: Option<DifferenceSummary>,
}
