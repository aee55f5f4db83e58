use extrema_detector::config::detect;
use extrema_detector::io::{
    format_differences_csv, format_differences_text, format_extrema_text, read_xy,
    write_json_file, write_text_file,
};
use extrema_detector::pairing::{pair_differences, DifferenceSummary};
use extrema_detector::ExtremaDetector;
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
    let config = detect::load_config(Path::new(&config_path))?;
    let request = config
        .detection
        .resolve()
        .map_err(|e| format!("Invalid detection config: {e}"))?;

    let series = read_xy(&config.input)?;
    let detector = ExtremaDetector::new(request).with_candidates(config.output.include_candidates);
    let report = detector.detect_with_diagnostics(&series.y);
    let result = &report.result;

    println!(
        "{}: {} samples, method {} (requested {}), {} maxima / {} minima, {:.3} ms",
        config.input.display(),
        series.len(),
        result.method,
        result.requested,
        result.extrema.maxima.len(),
        result.extrema.minima.len(),
        report.trace.timings.total_ms
    );

    let pairs = pair_differences(&result.extrema);
    if let Some(summary) = DifferenceSummary::from_pairs(&pairs) {
        println!(
            "{} max/min pairs, mean difference {:.6}",
            summary.count, summary.mean
        );
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }
    if let Some(path) = &config.output.result_text {
        let heading = format!("Local extrema ({})", result.method);
        write_text_file(path, &format_extrema_text(&heading, &result.extrema))?;
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

fn usage() -> String {
    "Usage: extrema_demo <config.json>".to_string()
}
