use std::fmt::Write;
use std::ops::Range;

use colored::{ColoredString, Colorize};
use jdiff_diff::{CodeDiff, CodeLine, StructuralDiff};
use jdiff_render::{
    render_side, window, Background, Layout, RenderConfig, RenderedLine, Segment, SegmentKind,
    SensitiveKind, SideSummary, Viewport,
};
use jdiff_types::{ChangeType, Line, Side};

/// Which rows of each side to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowWindow {
    pub offset: Option<usize>,
    pub rows: Option<usize>,
}

impl RowWindow {
    /// Rows to print for a side with `total` lines.
    ///
    /// An explicit offset or row count always windows the output. Otherwise a
    /// virtualized layout shows the first `virtualize_threshold` rows and a
    /// full layout shows everything. A terminal does not scroll the window,
    /// so no overscan is applied.
    pub fn range(&self, total: usize, layout: Layout, config: &RenderConfig) -> Range<usize> {
        let viewport = Viewport {
            overscan: 0,
            ..config.viewport()
        };
        match (self.offset, self.rows, layout) {
            (None, None, Layout::Full) => 0..total,
            (None, None, Layout::Virtualized) => {
                viewport.visible_rows(total, 0, config.virtualize_threshold)
            }
            (offset, rows, _) => viewport.visible_rows(
                total,
                offset.unwrap_or(0),
                rows.unwrap_or(config.virtualize_threshold),
            ),
        }
    }
}

/// Both panels of a structural diff as terminal text.
pub fn structural_panels(diff: &StructuralDiff, config: &RenderConfig, rows: RowWindow) -> String {
    let layout = Layout::for_sides(diff.left.len(), diff.right.len(), config.virtualize_threshold);
    let panels = [
        (Side::Left, SideSummary::left(diff, &config.titles)),
        (Side::Right, SideSummary::right(diff, &config.titles)),
    ];

    let mut out = String::new();
    for (side, summary) in panels {
        let lines = diff.side(side);
        let range = rows.range(lines.len(), layout, config);
        let rendered = render_side(window(lines, range.clone()), side, config);

        let _ = writeln!(out, "{}", heading(side, &summary));
        for line in &rendered {
            let _ = writeln!(out, "{}", paint_line(line));
        }
        if range != (0..lines.len()) {
            let _ = writeln!(out, "{}", window_note(&range, lines.len()));
        }
    }
    out
}

/// Both panels of a code diff as terminal text.
pub fn code_panels(diff: &CodeDiff, config: &RenderConfig, rows: RowWindow) -> String {
    let layout = Layout::for_sides(diff.left.len(), diff.right.len(), config.virtualize_threshold);
    let (left, right) = SideSummary::code(diff, &config.titles);

    let mut out = String::new();
    for (side, summary, lines) in [(Side::Left, left, &diff.left), (Side::Right, right, &diff.right)] {
        let range = rows.range(lines.len(), layout, config);
        let _ = writeln!(out, "{}", heading(side, &summary));
        for line in window(lines, range.clone()) {
            let _ = writeln!(out, "{}", paint_code_line(line));
        }
        if range != (0..lines.len()) {
            let _ = writeln!(out, "{}", window_note(&range, lines.len()));
        }
    }
    out
}

/// Flattened lines as a table: number, kind, path, content.
pub fn line_table(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        let kind = if line.is_value() { "value" } else { "structural" };
        let path = if line.path.is_root() { "$" } else { line.path.as_str() };
        let _ = writeln!(
            out,
            "{:>4}  {:<10}  {:<32}  {}",
            line.line_number,
            kind,
            path,
            line.content
        );
    }
    out
}

fn heading(side: Side, summary: &SideSummary) -> String {
    let marker = match side {
        Side::Left => "---".red(),
        Side::Right => "+++".green(),
    };
    format!("{} {} ({})", marker, summary.title.bold(), summary.label())
}

fn window_note(range: &Range<usize>, total: usize) -> ColoredString {
    if range.is_empty() {
        format!("  … no rows in window ({total} total)").dimmed()
    } else {
        format!("  … rows {}-{} of {}", range.start + 1, range.end, total).dimmed()
    }
}

pub fn paint_line(line: &RenderedLine) -> String {
    let body: String = line
        .segments
        .iter()
        .map(|s| paint_segment(s, line.background).to_string())
        .collect();
    let badge = match line.sensitive() {
        Some(SensitiveKind::Masked) => " [sensitive]".yellow(),
        Some(SensitiveKind::Redacted) => " [redacted]".red(),
        None => "".normal(),
    };
    format!(
        "{} {} {}{}",
        format!("{:>4}", line.line_number).dimmed(),
        paint_glyph(line.glyph),
        body,
        badge
    )
}

fn paint_glyph(glyph: char) -> ColoredString {
    match glyph {
        '-' => "-".red().bold(),
        '+' => "+".green().bold(),
        other => other.to_string().normal(),
    }
}

fn paint_segment(segment: &Segment, background: Background) -> ColoredString {
    let text = segment.text.as_str();
    let painted = match segment.kind {
        SegmentKind::Indent => text.normal(),
        SegmentKind::Key => text.blue(),
        SegmentKind::Colon | SegmentKind::Bracket | SegmentKind::Comma => text.dimmed(),
        SegmentKind::String => text.green(),
        SegmentKind::Number => text.cyan(),
        SegmentKind::Boolean => text.purple(),
        SegmentKind::Null => text.bright_black(),
    };
    match (segment.emphasized, background) {
        (true, Background::Removed) => painted.on_red(),
        (true, Background::Added) => painted.on_green(),
        _ => painted,
    }
}

fn paint_code_line(line: &CodeLine) -> String {
    let number = format!("{:>4}", line.line_number).dimmed();
    match line.change {
        ChangeType::Removed => format!("{} {} {}", number, "-".red().bold(), line.text.red()),
        ChangeType::Added => format!("{} {} {}", number, "+".green().bold(), line.text.green()),
        _ => format!("{}   {}", number, line.text),
    }
}
