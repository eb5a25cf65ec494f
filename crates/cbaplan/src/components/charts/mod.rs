//! Chart rendering components, one per viewer tab.

pub mod bars;
pub mod break_even;
pub mod discount;
pub mod distribution;

use ratatui::{Frame, layout::Rect};

use crate::state::{TabId, ViewState};

/// Render the chart of the active tab
pub fn render_active_chart(frame: &mut Frame, area: Rect, state: &ViewState) {
    let report = &state.report;
    match state.active_tab {
        TabId::Scenarios => bars::render_scenarios(frame, area, report),
        TabId::Discount => discount::render_discount_sweep(frame, area, &report.discount),
        TabId::BreakEven => break_even::render_break_even(frame, area, &report.break_even),
        TabId::Tornado => bars::render_tornado(frame, area, report.tornado.get(state.project)),
        TabId::Waterfall => match report.waterfall(state.project) {
            Some(wf) => bars::render_waterfall(frame, area, wf),
            None => distribution::render_missing(frame, area, "Waterfall"),
        },
        TabId::MonteCarlo => match report.distribution(state.project) {
            Some(dist) => distribution::render_npv_distribution(frame, area, dist),
            None => distribution::render_missing(frame, area, "Monte Carlo"),
        },
    }
}
