//! Output formatting: table, JSON, YAML, plain.
//!
//! Tables are built from the row view models the controllers render;
//! structured formats serialize the records themselves.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{builder::Builder, settings::Style};

use cadastro_core::RowViewModel;

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled on stderr.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a listing in the chosen format.
///
/// - `table`: one rounded table from `headers` + `rows`
/// - `json` / `json-compact` / `yaml`: the records via serde
/// - `plain`: each row's target id, or its first cell, one per line
pub fn render_list<T>(
    format: OutputFormat,
    headers: &[String],
    rows: &[RowViewModel],
    records: &[T],
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => render_table(headers, rows.iter().map(|r| r.cells.clone())),
        OutputFormat::Json => render_json(records, false),
        OutputFormat::JsonCompact => render_json(records, true),
        OutputFormat::Yaml => render_yaml(records),
        OutputFormat::Plain => rows
            .iter()
            .map(|row| match row.target {
                Some(id) => id.to_string(),
                None => row.cells.first().cloned().unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render read-only text lines (the address overlay).
pub fn render_lines(format: OutputFormat, title: &str, lines: &[String]) -> String {
    match format {
        OutputFormat::Table => render_table(
            &[title.to_owned()],
            lines.iter().map(|line| vec![line.clone()]),
        ),
        OutputFormat::Json => render_json(lines, false),
        OutputFormat::JsonCompact => render_json(lines, true),
        OutputFormat::Yaml => render_yaml(lines),
        OutputFormat::Plain => lines.join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
pub fn render_single<T>(format: OutputFormat, data: &T, detail_fn: impl Fn(&T) -> String) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table | OutputFormat::Plain => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print a success notice to stderr.
pub fn print_notice(message: &str, color: bool, quiet: bool) {
    if quiet {
        return;
    }
    if color {
        eprintln!("{} {message}", "✓".green().bold());
    } else {
        eprintln!("✓ {message}");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table(headers: &[String], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().cloned());
    for cells in rows {
        builder.push_record(cells);
    }
    builder.build().with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.expect("serialization should not fail")
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
