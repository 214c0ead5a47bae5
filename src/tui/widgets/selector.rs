//! System-type selector.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{SYSTEM_TYPE_FIELD, SystemType};

/// Label of the selector.
const LABEL: &str = "Тип силової установки";
/// Shown when nothing is selected.
const PLACEHOLDER: &str = "— оберіть —";

/// Cycles through "nothing", then each [`SystemType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemTypeSelector {
    selected: Option<SystemType>,
}

impl SystemTypeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the value is submitted under.
    pub fn name(&self) -> &'static str {
        SYSTEM_TYPE_FIELD
    }

    pub fn selected(&self) -> Option<SystemType> {
        self.selected
    }

    /// Submitted value: the wire string, or `""` when nothing is selected.
    pub fn value(&self) -> &'static str {
        self.selected.map_or("", |t| t.as_str())
    }

    /// Text shown for the current option.
    pub fn display(&self) -> &'static str {
        self.selected.map_or(PLACEHOLDER, |t| t.label())
    }

    /// Moves to the next option, wrapping around.
    pub fn select_next(&mut self) {
        let options = Self::options();
        let i = self.position(&options);
        self.selected = options[(i + 1) % options.len()];
    }

    /// Moves to the previous option, wrapping around.
    pub fn select_prev(&mut self) {
        let options = Self::options();
        let i = self.position(&options);
        self.selected = options[(i + options.len() - 1) % options.len()];
    }

    fn options() -> Vec<Option<SystemType>> {
        std::iter::once(None)
            .chain(SystemType::all().iter().copied().map(Some))
            .collect()
    }

    fn position(&self, options: &[Option<SystemType>]) -> usize {
        options
            .iter()
            .position(|o| *o == self.selected)
            .unwrap_or(0)
    }
}

/// Renders the selector on one line.
#[mutants::skip]
pub fn draw_selector(selector: &SystemTypeSelector, focused: bool, frame: &mut Frame, area: Rect) {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let line = Line::from(vec![
        Span::styled(format!(" {LABEL}: "), style),
        Span::styled(format!("◀ {} ▶", selector.display()), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        let selector = SystemTypeSelector::new();
        assert_eq!(selector.selected(), None);
        assert_eq!(selector.value(), "");
        assert_eq!(selector.display(), PLACEHOLDER);
    }

    #[test]
    fn next_cycles_through_all_options() {
        let mut selector = SystemTypeSelector::new();
        selector.select_next();
        assert_eq!(selector.value(), "electric");
        selector.select_next();
        assert_eq!(selector.value(), "ice");
        selector.select_next();
        assert_eq!(selector.value(), "");
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut selector = SystemTypeSelector::new();
        selector.select_prev();
        assert_eq!(selector.selected(), Some(SystemType::Ice));
    }

    #[test]
    fn name_is_system_type() {
        assert_eq!(SystemTypeSelector::new().name(), "system_type");
    }
}
