use cbaplan_core::ProjectId;
use cbaplan_core::analysis::DiscountSweep;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
};

use crate::util::format::format_millions;
use crate::util::styles::{HIGHLIGHT_COLOR, chart_block, project_color};

/// Base-case NPV of both projects against the discount rate (in percent)
pub fn render_discount_sweep(frame: &mut Frame, area: Rect, sweep: &DiscountSweep) {
    let series: Vec<(ProjectId, Vec<(f64, f64)>)> = ProjectId::ALL
        .iter()
        .map(|&project| {
            let points = sweep
                .rates
                .iter()
                .zip(sweep.series(project))
                .map(|(r, v)| (r * 100.0, *v))
                .collect();
            (project, points)
        })
        .collect();

    let highlighted: Vec<(f64, f64)> = series
        .iter()
        .flat_map(|(_, points)| sweep.highlighted.iter().filter_map(|&i| points.get(i).copied()))
        .collect();

    let mut datasets: Vec<Dataset> = series
        .iter()
        .map(|(project, points)| {
            Dataset::default()
                .name(project.project().short_name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(project_color(*project)))
                .data(points)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .name("0.8% / 3% / 5.7%")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(HIGHLIGHT_COLOR))
            .data(&highlighted),
    );

    let x_max = sweep.rates.iter().copied().fold(0.0_f64, f64::max) * 100.0;
    let (y_min, y_max) = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let padding = (y_max - y_min).abs().max(1.0) * 0.1;
    let y_min = if y_min < 0.0 { y_min - padding } else { 0.0 };
    let y_max = y_max + padding;

    let x_axis = Axis::default()
        .title("Discount rate (%)".dark_gray())
        .bounds([0.0, x_max])
        .labels(vec![
            Span::raw("0%"),
            Span::raw(format!("{:.1}%", x_max / 2.0)),
            Span::raw(format!("{:.1}%", x_max)),
        ]);

    let y_axis = Axis::default()
        .title("NPV".dark_gray())
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format_millions(y_min)),
            Span::raw(format_millions((y_min + y_max) / 2.0)),
            Span::raw(format_millions(y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(chart_block("NPV sensitivity to discount rate"))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
