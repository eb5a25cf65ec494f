//! Horizontal bar charts drawn as rows of block characters.
//!
//! Every row shares one linear value axis, so bars of different rows line up
//! and floating (waterfall) segments can start away from zero.

use cbaplan_core::analysis::{TornadoResult, Waterfall};
use cbaplan_core::{ProjectId, Scenario};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::report::Report;
use crate::util::format::{format_delta, format_millions, format_rate};
use crate::util::styles::{
    HEADER_COLOR, HELP_COLOR, HIGHLIGHT_COLOR, chart_block, project_color, value_color,
};

const LABEL_WIDTH: usize = 30;
const VALUE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Axis,
    Fill(Color),
}

/// Linear mapping of values onto `width` character columns
#[derive(Debug, Clone, Copy)]
struct ValueAxis {
    lo: f64,
    hi: f64,
    width: usize,
}

impl ValueAxis {
    /// Axis covering every value and zero
    fn spanning(values: impl IntoIterator<Item = f64>, width: usize) -> Self {
        let (lo, hi) = values
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let hi = if hi > lo { hi } else { lo + 1.0 };
        Self {
            lo,
            hi,
            width: width.max(2),
        }
    }

    fn col(&self, value: f64) -> usize {
        let t = ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        (t * (self.width - 1) as f64).round() as usize
    }

    fn row(&self) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; self.width];
        cells[self.col(0.0)] = Cell::Axis;
        cells
    }

    /// Fill the columns between `from` and `to`
    fn fill(&self, cells: &mut [Cell], from: f64, to: f64, color: Color) {
        if from == to {
            return;
        }
        let (a, b) = (self.col(from.min(to)), self.col(from.max(to)));
        for cell in &mut cells[a..=b] {
            *cell = Cell::Fill(color);
        }
    }
}

fn cell_spans(cells: &[Cell]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < cells.len() {
        let run = cells[i..].iter().take_while(|c| **c == cells[i]).count();
        let span = match cells[i] {
            Cell::Empty => Span::raw(" ".repeat(run)),
            Cell::Axis => Span::styled("│".repeat(run), Style::default().fg(HELP_COLOR)),
            Cell::Fill(color) => Span::styled("█".repeat(run), Style::default().fg(color)),
        };
        spans.push(span);
        i += run;
    }
    spans
}

fn bar_line(label: &str, cells: &[Cell], value_text: String, text_color: Color) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(
        "{:<width$} ",
        truncate(label, LABEL_WIDTH),
        width = LABEL_WIDTH
    ))];
    spans.extend(cell_spans(cells));
    spans.push(Span::styled(
        format!(" {:>width$}", value_text, width = VALUE_WIDTH),
        Style::default().fg(text_color),
    ));
    Line::from(spans)
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn bar_columns(area: Rect) -> usize {
    (area.width as usize).saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 4)
}

/// Grouped bars of each headline scenario for both projects
pub fn render_scenarios(frame: &mut Frame, area: Rect, report: &Report) {
    let table = &report.scenarios;
    let values = Scenario::ALL
        .iter()
        .flat_map(|s| ProjectId::ALL.map(|p| table.get(p, *s).unwrap_or(0.0)));
    let axis = ValueAxis::spanning(values, bar_columns(area));

    let mut lines = Vec::new();
    for scenario in Scenario::ALL {
        lines.push(Line::from(Span::styled(
            scenario.name(),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        for project in ProjectId::ALL {
            let value = table.get(project, scenario).unwrap_or(0.0);
            let mut cells = axis.row();
            axis.fill(&mut cells, 0.0, value, project_color(project));
            lines.push(bar_line(
                project.project().short_name,
                &cells,
                format_millions(value),
                value_color(value),
            ));
        }
        lines.push(Line::from(""));
    }

    let title = format!("Scenario NPV at {}", format_rate(table.rate));
    frame.render_widget(Paragraph::new(lines).block(chart_block(&title)), area);
}

/// Tornado bars ranked by swing; left segment is the low bound, right the high
pub fn render_tornado(frame: &mut Frame, area: Rect, result: &TornadoResult) {
    let ranked = result.ranked();
    let values = ranked.iter().flat_map(|(_, bar)| [bar.low, bar.high]);
    let axis = ValueAxis::spanning(values, bar_columns(area));

    let mut lines = vec![Line::from(Span::styled(
        format!("Base NPV {}", format_millions(result.base_npv)),
        Style::default().fg(HELP_COLOR),
    ))];
    lines.push(Line::from(""));

    for (param, bar) in &ranked {
        let mut cells = axis.row();
        axis.fill(&mut cells, 0.0, bar.low, value_color(bar.low));
        axis.fill(&mut cells, 0.0, bar.high, value_color(bar.high));
        let text = format!("{} / {}", format_delta(bar.low), format_delta(bar.high));
        lines.push(bar_line(param.label(), &cells, text, HELP_COLOR));
    }

    let title = format!("Tornado: {}", result.project.project().name);
    frame.render_widget(Paragraph::new(lines).block(chart_block(&title)), area);
}

/// Pessimistic base, the floating step bars and the optimistic total
pub fn render_waterfall(frame: &mut Frame, area: Rect, wf: &Waterfall) {
    let levels = std::iter::once(wf.base)
        .chain(wf.steps.iter().map(|s| s.bottom + s.delta))
        .chain(std::iter::once(wf.total));
    let axis = ValueAxis::spanning(levels, bar_columns(area));
    let color = project_color(wf.project);

    let mut lines = Vec::with_capacity(wf.steps.len() + 2);

    let mut cells = axis.row();
    axis.fill(&mut cells, 0.0, wf.base, color);
    lines.push(bar_line("Pessimistic Base", &cells, format_millions(wf.base), color));

    for bar in &wf.steps {
        let mut cells = axis.row();
        axis.fill(&mut cells, bar.bottom, bar.bottom + bar.delta, value_color(bar.delta));
        lines.push(bar_line(
            bar.step.label(),
            &cells,
            format_delta(bar.delta),
            value_color(bar.delta),
        ));
    }

    let mut cells = axis.row();
    axis.fill(&mut cells, 0.0, wf.total, HIGHLIGHT_COLOR);
    lines.push(bar_line(
        "Optimistic Total",
        &cells,
        format_millions(wf.total),
        HIGHLIGHT_COLOR,
    ));

    let title = format!("Waterfall: {}", wf.project.project().name);
    frame.render_widget(Paragraph::new(lines).block(chart_block(&title)), area);
}
