//! Configuration screen — aircraft parameters, system type, and the two propulsion groups.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::{Visibility, on_system_type_change};
use crate::model::FormData;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{FieldGroupPanel, SystemTypeSelector, draw_group, draw_selector};

static AIRFRAME_FIELDS: &[(&str, &str)] = &[
    ("air_density", "Густина повітря, кг/м³"),
    ("cruise_speed", "Крейсерська швидкість, м/с"),
    ("wing_area", "Площа крила, м²"),
    ("drag_coefficient", "Коефіцієнт опору Cd"),
    ("prop_pitch", "Крок гвинта, дюйми"),
    ("rpm", "Оберти гвинта, RPM"),
];

static ELECTRIC_FIELDS: &[(&str, &str)] = &[
    ("battery_capacity", "Ємність батареї, Вт·год"),
    ("system_efficiency", "ККД системи (0–1)"),
];

static ICE_FIELDS: &[(&str, &str)] = &[
    ("fuel_mass", "Маса палива, кг"),
    ("prop_efficiency", "ККД гвинта (0–1)"),
    ("engine_power_kw", "Потужність двигуна, кВт"),
    ("bsfc", "BSFC, г/(кВт·год)"),
];

/// A focusable element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Airframe(usize),
    Selector,
    Electric(usize),
    Ice(usize),
}

/// State for the configuration screen.
#[derive(Debug, Clone)]
pub struct ConfigureState {
    airframe: FieldGroupPanel,
    selector: SystemTypeSelector,
    electric: FieldGroupPanel,
    ice: FieldGroupPanel,
    focus: usize,
}

impl Default for ConfigureState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigureState {
    /// Creates an empty form with no system type selected and both propulsion groups hidden.
    pub fn new() -> Self {
        Self {
            airframe: FieldGroupPanel::new("Планер і гвинт", AIRFRAME_FIELDS, Visibility::Shown),
            selector: SystemTypeSelector::new(),
            electric: FieldGroupPanel::new("Електросистема", ELECTRIC_FIELDS, Visibility::Hidden),
            ice: FieldGroupPanel::new("ДВЗ", ICE_FIELDS, Visibility::Hidden),
            focus: 0,
        }
    }

    /// Focusable elements in order. Fields of hidden groups are skipped.
    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = (0..self.airframe.len()).map(Focus::Airframe).collect();
        order.push(Focus::Selector);
        if self.electric.is_shown() {
            order.extend((0..self.electric.len()).map(Focus::Electric));
        }
        if self.ice.is_shown() {
            order.extend((0..self.ice.len()).map(Focus::Ice));
        }
        order
    }

    /// Returns the focused element.
    pub fn focus(&self) -> Focus {
        let order = self.focus_order();
        order
            .get(self.focus)
            .copied()
            .unwrap_or(Focus::Airframe(0))
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_order().len();
    }

    fn focus_prev(&mut self) {
        let len = self.focus_order().len();
        self.focus = (self.focus + len - 1) % len;
    }

    fn group_mut(&mut self, focus: Focus) -> Option<(&mut FieldGroupPanel, usize)> {
        match focus {
            Focus::Airframe(i) => Some((&mut self.airframe, i)),
            Focus::Electric(i) => Some((&mut self.electric, i)),
            Focus::Ice(i) => Some((&mut self.ice, i)),
            Focus::Selector => None,
        }
    }

    fn insert_char(&mut self, ch: char) {
        if let Some((group, i)) = self.group_mut(self.focus()) {
            group.insert_char(i, ch);
        }
    }

    fn delete_char(&mut self) {
        if let Some((group, i)) = self.group_mut(self.focus()) {
            group.delete_char(i);
        }
    }

    /// Applies the selector's current value to the propulsion groups.
    fn system_type_changed(&mut self) {
        on_system_type_change(self.selector.value(), &mut self.electric, &mut self.ice);
    }

    /// Returns the system-type selector.
    pub fn selector(&self) -> &SystemTypeSelector {
        &self.selector
    }

    pub fn airframe(&self) -> &FieldGroupPanel {
        &self.airframe
    }

    pub fn electric(&self) -> &FieldGroupPanel {
        &self.electric
    }

    pub fn ice(&self) -> &FieldGroupPanel {
        &self.ice
    }

    /// Captures every field, hidden groups included, in display order.
    pub fn form_data(&self) -> FormData {
        let mut data: FormData = self.airframe.entries().collect();
        data.append(self.selector.name(), self.selector.value());
        for (name, value) in self.electric.entries().chain(self.ice.entries()) {
            data.append(name, value);
        }
        data
    }
}

impl ScreenState for ConfigureState {
    /// Handles a key event. Enter is consumed here and turned into a submit.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let on_selector = self.focus() == Focus::Selector;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                Action::None
            }
            KeyCode::Right | KeyCode::Char(' ') if on_selector => {
                self.selector.select_next();
                self.system_type_changed();
                Action::None
            }
            KeyCode::Left if on_selector => {
                self.selector.select_prev();
                self.system_type_changed();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Enter => Action::Submit(self.form_data()),
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the configuration screen.
#[mutants::skip]
pub fn draw_configure(state: &ConfigureState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Конфігурація БПЛА ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [airframe_area, selector_area, electric_area, ice_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(state.airframe.height()),
            Constraint::Length(1),
            Constraint::Length(state.electric.height()),
            Constraint::Length(state.ice.height()),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let focus = state.focus();
    let (airframe_focus, electric_focus, ice_focus) = match focus {
        Focus::Airframe(i) => (Some(i), None, None),
        Focus::Electric(i) => (None, Some(i), None),
        Focus::Ice(i) => (None, None, Some(i)),
        Focus::Selector => (None, None, None),
    };

    draw_group(&state.airframe, airframe_focus, frame, airframe_area);
    draw_selector(&state.selector, focus == Focus::Selector, frame, selector_area);
    draw_group(&state.electric, electric_focus, frame, electric_area);
    draw_group(&state.ice, ice_focus, frame, ice_area);

    let footer = Paragraph::new(Line::from(
        "Tab: next  ←/→: system type  Enter: calculate  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
