//! Modal alert dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::controller::Alerter;

/// The currently open alert, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    message: Option<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while an alert is displayed.
    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Closes the alert.
    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Enter or Esc closes the alert; other keys are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.dismiss();
        }
    }
}

impl Alerter for AlertState {
    fn alert(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

/// Renders the alert centered over `area`.
#[mutants::skip]
pub fn draw_alert(state: &AlertState, frame: &mut Frame, area: Rect) {
    let Some(message) = state.message() else {
        return;
    };

    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let block = Block::default()
        .title(" Помилка ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Enter: OK").style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn alert_opens_with_message() {
        let mut state = AlertState::new();
        state.alert("boom");
        assert!(state.is_open());
        assert_eq!(state.message(), Some("boom"));
    }

    #[test]
    fn enter_dismisses() {
        let mut state = AlertState::new();
        state.alert("boom");
        state.handle_key(press(KeyCode::Enter));
        assert!(!state.is_open());
    }

    #[test]
    fn esc_dismisses() {
        let mut state = AlertState::new();
        state.alert("boom");
        state.handle_key(press(KeyCode::Esc));
        assert!(!state.is_open());
    }

    #[test]
    fn other_keys_keep_alert_open() {
        let mut state = AlertState::new();
        state.alert("boom");
        state.handle_key(press(KeyCode::Char('x')));
        assert!(state.is_open());
    }

    #[test]
    fn renders_message_when_open() {
        let mut state = AlertState::new();
        state.alert("request failed");
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_alert(&state, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
        }
        assert!(output.contains("request failed"));
    }
}
