//! Common styling utilities for chart components

use cbaplan_core::ProjectId;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Color of the patient-specific virtual care series
pub const PROJECT1_COLOR: Color = Color::Rgb(0x44, 0x72, 0xC4);

/// Color of the hospital simulation series
pub const PROJECT2_COLOR: Color = Color::Rgb(0xED, 0x7D, 0x31);

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Color of highlighted discount rates and totals
pub const HIGHLIGHT_COLOR: Color = Color::Yellow;

pub fn project_color(project: ProjectId) -> Color {
    match project {
        ProjectId::PatientVirtualCare => PROJECT1_COLOR,
        ProjectId::HospitalSimulation => PROJECT2_COLOR,
    }
}

/// Get the appropriate color for an NPV (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Bordered block with a title, used around every chart
pub fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", title)).fg(HEADER_COLOR))
}
