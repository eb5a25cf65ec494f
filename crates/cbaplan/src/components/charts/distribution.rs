//! Histogram of a sampled NPV distribution.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::report::NpvDistribution;
use crate::util::format::{format_millions, format_percentage};
use crate::util::styles::{HELP_COLOR, HIGHLIGHT_COLOR, NEGATIVE_COLOR, chart_block, project_color};

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Rows used by the summary header and the axis labels
const RESERVED_ROWS: usize = 3;

/// Character for a column of `bar_h` eighths in the row starting at `row_base`
fn bar_char(bar_h: usize, row_base: usize) -> &'static str {
    if bar_h >= row_base + 8 {
        BIN_CHARS[8]
    } else if bar_h > row_base {
        BIN_CHARS[bar_h - row_base]
    } else {
        BIN_CHARS[0]
    }
}

pub fn render_npv_distribution(frame: &mut Frame, area: Rect, dist: &NpvDistribution) {
    let block = chart_block(&format!(
        "Monte Carlo NPV: {}",
        dist.project.project().name
    ));
    let inner = block.inner(area);
    let height = (inner.height as usize).saturating_sub(RESERVED_ROWS);
    let hist = &dist.histogram;
    let bins = hist.counts.len();

    if height < 2 || bins == 0 || (inner.width as usize) < bins {
        let msg = Paragraph::new("Area too small")
            .style(Style::default().fg(HELP_COLOR))
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let s = &dist.summary;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("mean {}  ", format_millions(s.mean)),
                Style::default().fg(HIGHLIGHT_COLOR),
            ),
            Span::raw(format!(
                "p5 {}  p50 {}  p95 {}  ",
                format_millions(s.p5),
                format_millions(s.p50),
                format_millions(s.p95)
            )),
            Span::styled(
                format!("P(NPV<0) {}", format_percentage(s.prob_negative)),
                Style::default().fg(NEGATIVE_COLOR),
            ),
        ]),
        Line::from(""),
    ];

    let col_width = (inner.width as usize / bins).max(1);
    let max_count = hist.max_count().max(1);
    let height_units = height * 8;
    let bar_heights: Vec<usize> = hist
        .counts
        .iter()
        .map(|&c| ((c as f64 / max_count as f64) * height_units as f64).round() as usize)
        .collect();
    let colors: Vec<Color> = (0..bins)
        .map(|i| {
            if hist.center(i) < 0.0 {
                NEGATIVE_COLOR
            } else {
                project_color(dist.project)
            }
        })
        .collect();

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let spans: Vec<Span> = bar_heights
            .iter()
            .zip(&colors)
            .map(|(&bar_h, &color)| {
                Span::styled(
                    bar_char(bar_h, row_base).repeat(col_width),
                    Style::default().fg(color),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let lo = hist.edges.first().copied().unwrap_or(0.0);
    let hi = hist.edges.last().copied().unwrap_or(0.0);
    let lo_label = format_millions(lo);
    let hi_label = format_millions(hi);
    let gap = (bins * col_width).saturating_sub(lo_label.chars().count() + hi_label.chars().count());
    lines.push(Line::from(vec![
        Span::styled(lo_label, Style::default().fg(HELP_COLOR)),
        Span::raw(" ".repeat(gap)),
        Span::styled(hi_label, Style::default().fg(HELP_COLOR)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Placeholder for a chart without data
pub fn render_missing(frame: &mut Frame, area: Rect, title: &str) {
    let msg = Paragraph::new("No data")
        .style(Style::default().fg(HELP_COLOR))
        .block(chart_block(title));
    frame.render_widget(msg, area);
}
