use super::{Component, EventResult};
use crate::state::ViewState;
use crate::util::format::format_rate;
use crate::util::styles::{HELP_COLOR, project_color};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &ViewState) -> &'static str {
        if state.active_tab.is_per_project() {
            "1-6/Tab: switch chart | p: switch project | q: quit"
        } else {
            "1-6/Tab: switch chart | q: quit"
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut ViewState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &ViewState) {
        let mut spans = vec![Span::styled(
            format!("rate {} ", format_rate(state.report.settings.discount_rate)),
            Style::default().fg(HELP_COLOR),
        )];
        if state.active_tab.is_per_project() {
            spans.push(Span::styled(
                format!("[{}] ", state.project.project().short_name),
                Style::default().fg(project_color(state.project)),
            ));
        }
        spans.push(Span::styled(
            Self::help_text(state),
            Style::default().fg(HELP_COLOR),
        ));

        let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
