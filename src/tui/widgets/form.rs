//! Text fields grouped into panels that can be shown or hidden.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::{FieldGroupView, Visibility};

/// A single named text input.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Name the value is submitted under.
    pub name: &'static str,
    /// Display label shown to the left of the input.
    pub label: &'static str,
    /// Current text value.
    pub value: String,
}

impl FormField {
    /// Creates an empty field.
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
        }
    }
}

/// A titled group of fields with its own visibility.
///
/// Hidden groups keep their values and still submit them.
#[derive(Debug, Clone)]
pub struct FieldGroupPanel {
    title: &'static str,
    fields: Vec<FormField>,
    visibility: Visibility,
}

impl FieldGroupPanel {
    /// Creates a group from `(name, label)` pairs.
    pub fn new(
        title: &'static str,
        fields: &[(&'static str, &'static str)],
        visibility: Visibility,
    ) -> Self {
        Self {
            title,
            fields: fields
                .iter()
                .map(|&(name, label)| FormField::new(name, label))
                .collect(),
            visibility,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the group has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns the value of the field named `name`.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Appends a character to the field at `index`.
    pub fn insert_char(&mut self, index: usize, ch: char) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character of the field at `index`.
    pub fn delete_char(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value.pop();
        }
    }

    /// Iterates over `(name, value)` pairs in field order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|f| (f.name, f.value.as_str()))
    }

    /// Rows needed to draw this group, borders included; zero when hidden.
    pub fn height(&self) -> u16 {
        if self.is_shown() {
            self.fields.len() as u16 + 2
        } else {
            0
        }
    }
}

impl FieldGroupView for FieldGroupPanel {
    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

/// Renders a group, highlighting the field at `focus` if any. Draws nothing when hidden.
#[mutants::skip]
pub fn draw_group(group: &FieldGroupPanel, focus: Option<usize>, frame: &mut Frame, area: Rect) {
    if !group.is_shown() {
        return;
    }

    let border_color = if focus.is_some() {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {} ", group.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let label_width = group
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = group
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_focused = focus == Some(i);
            let label_style = if is_focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            let mut spans = vec![
                Span::styled(format!("{:<label_width$}  ", field.label), label_style),
                Span::raw(field.value.as_str()),
            ];
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
