use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::charts::render_active_chart;
use crate::components::status_bar::StatusBar;
use crate::components::tab_bar::TabBar;
use crate::components::{Component, EventResult};
use crate::report::Report;
use crate::state::ViewState;

/// Read-only chart viewer over a computed report
pub struct App {
    state: ViewState,
    tab_bar: TabBar,
    status_bar: StatusBar,
}

impl App {
    pub fn new(report: Report) -> Self {
        Self {
            state: ViewState::new(report),
            tab_bar: TabBar,
            status_bar: StatusBar,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("chart viewer started");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Chart
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        render_active_chart(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let result = match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => EventResult::Exit,
            KeyCode::Esc => EventResult::Exit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Exit
            }
            KeyCode::Char('p') if self.state.active_tab.is_per_project() => {
                self.state.toggle_project();
                EventResult::Handled
            }
            _ => match self.tab_bar.handle_key(key_event, &mut self.state) {
                EventResult::NotHandled => self.status_bar.handle_key(key_event, &mut self.state),
                other => other,
            },
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalysisSettings, MonteCarloSettings};
    use crate::state::TabId;
    use cbaplan_core::ProjectId;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let settings = AnalysisSettings {
            monte_carlo: MonteCarloSettings {
                samples: 300,
                seed: 0,
            },
            ..Default::default()
        };
        App::new(Report::compute(&settings).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_keys_switch_tabs_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.state().active_tab, TabId::Tornado);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().active_tab, TabId::Waterfall);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state().project, ProjectId::HospitalSimulation);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state().project, ProjectId::HospitalSimulation);

        assert!(!app.state().exit);
        press(&mut app, KeyCode::Esc);
        assert!(app.state().exit);
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = app();
        let expected = [
            "Scenario NPV at 0.8%",
            "NPV sensitivity to discount rate",
            "Break-even adoption",
            "Uptake Rate",
            "Pessimistic Base",
            "P(NPV<0)",
        ];
        for (tab, text) in TabId::ALL.into_iter().zip(expected) {
            app.state.switch_tab(tab);
            let content = screen(&mut app);
            assert!(content.contains(text), "{} tab missing {text:?}", tab.name());
            assert!(content.contains("[1] Scenarios"));
        }
    }

    #[test]
    fn test_scenario_values_on_screen() {
        let mut app = app();
        let content = screen(&mut app);
        assert!(content.contains("€18.3m"));
        assert!(content.contains("€59.8m"));
    }
}
