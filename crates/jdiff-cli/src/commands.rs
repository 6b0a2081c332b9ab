use std::fs;
use std::path::Path;

use anyhow::Context;
use jdiff_diff::{diff_code, diff_values_with, flatten_with, split_changes, DiffMode};
use jdiff_render::{Layout, SideSummary};
use serde_json::{json, Value};

use crate::cli::*;
use crate::output::{code_panels, line_table, structural_panels, RowWindow};
use crate::settings::Settings;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let out = match cli.command {
        Command::Diff(args) => {
            let old = read_json(&args.old)?;
            let new = read_json(&args.new)?;
            compare(&old, &new, args.mode, &args.view, &settings, cli.format)?
        }
        Command::Changes(args) => {
            let changes = read_json(&args.file)?;
            let (old, new) = split_changes(&changes)
                .with_context(|| format!("splitting change set {}", args.file.display()))?;
            compare(&old, &new, args.mode, &args.view, &settings, cli.format)?
        }
        Command::Flatten(args) => cmd_flatten(&args, &settings, cli.format)?,
    };
    print!("{out}");
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Diff two documents and format the result.
pub fn compare(
    old: &Value,
    new: &Value,
    mode: Option<Mode>,
    view: &ViewArgs,
    settings: &Settings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut render = settings.render.clone();
    if let Some(title) = &view.old_title {
        render.titles.old = title.clone();
    }
    if let Some(title) = &view.new_title {
        render.titles.new = title.clone();
    }
    let rows = RowWindow {
        offset: view.offset,
        rows: view.rows,
    };

    let mut config = settings.diff.clone();
    match mode {
        Some(Mode::Code) => {
            let diff = diff_code(old, new)?;
            return match format {
                OutputFormat::Text => Ok(code_panels(&diff, &render, rows)),
                OutputFormat::Json => {
                    let (left, right) = SideSummary::code(&diff, &render.titles);
                    to_json(&json!({
                        "mode": "code",
                        "layout": Layout::for_sides(diff.left.len(), diff.right.len(), render.virtualize_threshold),
                        "left": { "summary": left, "lines": diff.left },
                        "right": { "summary": right, "lines": diff.right },
                    }))
                }
            };
        }
        Some(Mode::Smart) => config.mode = DiffMode::Smart,
        Some(Mode::Whole) => config.mode = DiffMode::Whole,
        None => {}
    }

    let diff = diff_values_with(old, new, &config)?;
    match format {
        OutputFormat::Text => Ok(structural_panels(&diff, &render, rows)),
        OutputFormat::Json => to_json(&json!({
            "mode": config.mode,
            "layout": Layout::for_sides(diff.left.len(), diff.right.len(), render.virtualize_threshold),
            "left": { "summary": SideSummary::left(&diff, &render.titles), "lines": diff.left },
            "right": { "summary": SideSummary::right(&diff, &render.titles), "lines": diff.right },
        })),
    }
}

fn cmd_flatten(args: &FlattenArgs, settings: &Settings, format: OutputFormat) -> anyhow::Result<String> {
    let value = read_json(&args.file)?;
    let lines = flatten_with(&value, &settings.diff)?;
    match format {
        OutputFormat::Text => Ok(line_table(&lines)),
        OutputFormat::Json => to_json(&lines),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
