//! I/O helpers for sequences, reports and JSON.
//!
//! - `parse_sequence` / `read_sequence`: one number per line.
//! - `parse_xy` / `read_xy`: `X` and `Y` labelled sections.
//! - `write_json_file` / `write_text_file`: write to disk, creating parent
//!   directories.
//! - `format_*`: human-readable tables and CSV for extrema and pairings.
use crate::pairing::DifferenceSummary;
use crate::types::{DifferencePair, Extrema, Extremum};
use log::warn;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Parse one number per line. Blank lines are ignored, other unparsable
/// lines are skipped with a warning.
pub fn parse_sequence(text: &str) -> Vec<f64> {
    let mut values = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => warn!("skipping non-numeric line {}: {line:?}", lineno + 1),
        }
    }
    values
}

/// Read a sequence file, see [`parse_sequence`].
pub fn read_sequence(path: &Path) -> Result<Vec<f64>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    Ok(parse_sequence(&text))
}

/// X/Y samples of equal length.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct XySeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl XySeries {
    /// Series whose X is the zero-based sample index.
    pub fn indexed(y: Vec<f64>) -> Self {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// Parse a file with an `X` label line followed by X values and a `Y` label
/// line followed by Y values (labels are case-insensitive).
///
/// Non-numeric lines inside a section are ignored. Without X values the
/// zero-based index is used; both series are truncated to the shorter one.
pub fn parse_xy(text: &str) -> XySeries {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let is_x = |l: &str| l.eq_ignore_ascii_case("x");
    let is_y = |l: &str| l.eq_ignore_ascii_case("y");
    let x_start = lines.iter().rposition(|l| is_x(l)).map(|i| i + 1);
    let y_start = lines.iter().rposition(|l| is_y(l)).map(|i| i + 1);

    let numbers = |section: &[&str]| -> Vec<f64> {
        section
            .iter()
            .filter_map(|l| l.parse::<f64>().ok())
            .collect()
    };

    let mut x = match x_start {
        Some(start) => {
            let section = &lines[start..];
            let end = section.iter().position(|l| is_y(l)).unwrap_or(section.len());
            numbers(&section[..end])
        }
        None => Vec::new(),
    };
    let mut y = match y_start {
        Some(start) => numbers(&lines[start..]),
        None => Vec::new(),
    };

    if x.is_empty() && !y.is_empty() {
        return XySeries::indexed(y);
    }
    let len = x.len().min(y.len());
    x.truncate(len);
    y.truncate(len);
    XySeries { x, y }
}

/// Read an X/Y file. Files without a `Y` section are read as a plain
/// sequence with index X.
pub fn read_xy(path: &Path) -> Result<XySeries, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let has_y_label = text.lines().any(|l| l.trim().eq_ignore_ascii_case("y"));
    if has_y_label {
        Ok(parse_xy(&text))
    } else {
        Ok(XySeries::indexed(parse_sequence(&text)))
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text_file(path: &Path, text: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, text).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

/// Numbered listing of maxima then minima under `heading`.
pub fn format_extrema_text(heading: &str, extrema: &Extrema) -> String {
    let mut output = String::new();
    output.push_str(heading);
    output.push('\n');
    output.push_str(&"═".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "maxima: {}  minima: {}\n",
        extrema.maxima.len(),
        extrema.minima.len()
    ));
    push_listing(&mut output, "Local maxima", &extrema.maxima);
    push_listing(&mut output, "Local minima", &extrema.minima);
    output
}

fn push_listing(output: &mut String, title: &str, list: &[Extremum]) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for (i, e) in list.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. index: {:>4}, value: {:>12.8}\n",
            i + 1,
            e.index,
            e.value
        ));
    }
    if list.is_empty() {
        output.push_str("  none found\n");
    }
}

/// Table of max/min pairs followed by their summary statistics.
pub fn format_differences_text(pairs: &[DifferencePair]) -> String {
    let mut output = String::new();
    output.push_str("Max - min differences\n");
    output.push_str(&"═".repeat(60));
    output.push('\n');
    for p in pairs {
        output.push_str(&format!(
            "pair {:>2}: max({:>4}, {:>10.6}) - min({:>4}, {:>10.6}) = {:>10.6}\n",
            p.pair_number, p.max_index, p.max_value, p.min_index, p.min_value, p.difference
        ));
    }
    match DifferenceSummary::from_pairs(pairs) {
        Some(s) => {
            output.push_str(&"─".repeat(60));
            output.push('\n');
            output.push_str(&format!("pairs:   {}\n", s.count));
            output.push_str(&format!("mean:    {:.6}\n", s.mean));
            output.push_str(&format!("max:     {:.6}\n", s.max));
            output.push_str(&format!("min:     {:.6}\n", s.min));
            output.push_str(&format!("std dev: {:.6}\n", s.std_dev));
        }
        None => output.push_str("  no max/min pairs\n"),
    }
    output
}

/// CSV with one row per pair.
pub fn format_differences_csv(pairs: &[DifferencePair]) -> String {
    let mut output =
        String::from("pair_number,max_index,max_value,min_index,min_value,difference\n");
    for p in pairs {
        output.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.pair_number, p.max_index, p.max_value, p.min_index, p.min_value, p.difference
        ));
    }
    output
}
