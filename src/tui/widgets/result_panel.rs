//! Result container: hidden until the first successful calculation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::controller::{RenderedResult, ResultLine, ResultView, Visibility};

/// Holds the latest rendered result and whether it is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPanel {
    content: RenderedResult,
    visibility: Visibility,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &RenderedResult {
        &self.content
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }
}

impl ResultView for ResultPanel {
    fn set_content(&mut self, result: RenderedResult) {
        self.content = result;
    }

    fn show(&mut self) {
        self.visibility = Visibility::Shown;
    }
}

fn to_line(line: &ResultLine, width: u16) -> Line<'static> {
    match line {
        ResultLine::Heading(h) => Line::from(Span::styled(
            *h,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        ResultLine::Figure { label, value, unit } => Line::from(vec![
            Span::styled(*label, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {value} {unit}")),
        ]),
        ResultLine::Rule => Line::from(Span::styled(
            "─".repeat(usize::from(width)),
            Style::default().fg(Color::DarkGray),
        )),
        ResultLine::Text(t) => Line::from(t.clone()),
    }
}

/// Renders the panel. Draws nothing while hidden.
#[mutants::skip]
pub fn draw_result_panel(panel: &ResultPanel, frame: &mut Frame, area: Rect) {
    if !panel.is_shown() {
        return;
    }
    let block = Block::default()
        .title(" Результат ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let width = block.inner(area).width;

    let mut lines = Vec::new();
    for line in panel.content.lines() {
        if matches!(line, ResultLine::Rule | ResultLine::Text(_)) && lines.len() > 1 {
            lines.push(Line::from(""));
        }
        lines.push(to_line(line, width));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
