use cbaplan_core::ProjectId;
use cbaplan_core::analysis::BreakEvenTable;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
};

use crate::util::format::format_percentage;
use crate::util::styles::{chart_block, project_color};

/// Grouped bars of the break-even adoption factor, one group per named rate
pub fn render_break_even(frame: &mut Frame, area: Rect, table: &BreakEvenTable) {
    let groups: Vec<(String, Vec<Bar>)> = table
        .rows
        .iter()
        .map(|row| {
            let bars = ProjectId::ALL
                .iter()
                .map(|project| {
                    let threshold = row.thresholds.get(project).copied().unwrap_or(0.0);
                    let style = Style::default().fg(project_color(*project));
                    Bar::default()
                        // per mille
                        .value((threshold * 1000.0).round().max(0.0) as u64)
                        .text_value(format_percentage(threshold))
                        .style(style)
                        .value_style(style.reversed())
                })
                .collect();
            (row.label.clone(), bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(chart_block("Break-even adoption (share of expected benefit)"))
        .bar_width(9)
        .bar_gap(1)
        .group_gap(4);

    for (label, bars) in &groups {
        chart = chart.data(BarGroup::default().label(Line::from(label.clone())).bars(bars));
    }

    frame.render_widget(chart, area);
}
