use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::client::CalculationEndpoint;
use crate::controller::{SubmissionHandler, SubmitOutcome, present_outcome};
use crate::model::FormData;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ConfigureState, HelpState, draw_configure, draw_help};
use super::widgets::{AlertState, ResultPanel, draw_alert, draw_result_panel};

/// How long the event loop waits for a key before checking for responses.
const TICK: Duration = Duration::from_millis(50);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter parameters and submit them.
    Configure,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
///
/// UI state is only touched from the event loop. Requests run on the tokio
/// runtime and report back over a channel; outcomes are applied in the order
/// they arrive.
pub struct App<E> {
    screen: Screen,
    configure: ConfigureState,
    help: HelpState,
    result: ResultPanel,
    alert: AlertState,
    handler: Arc<SubmissionHandler<E>>,
    runtime: Handle,
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
    in_flight: usize,
    should_quit: bool,
}

impl<E> App<E>
where
    E: CalculationEndpoint + Send + Sync + 'static,
{
    /// Creates a new `App` on the [`Screen::Configure`] screen; requests are spawned on `runtime`.
    pub fn new(handler: SubmissionHandler<E>, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Configure,
            configure: ConfigureState::new(),
            help: HelpState::new(),
            result: ResultPanel::new(),
            alert: AlertState::new(),
            handler: Arc::new(handler),
            runtime,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll key → dispatch → apply finished requests.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            self.drain_outcomes();
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Configure => {
                let [form_area, result_area] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(main_area);
                draw_configure(&self.configure, frame, form_area);
                draw_result_panel(&self.result, frame, result_area);
            }
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        if self.in_flight > 0 {
            let status = Paragraph::new(format!(" Запитів у роботі: {}", self.in_flight))
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(status, status_area);
        }

        draw_alert(&self.alert, frame, frame.area());
    }

    /// Handles a key event: the open alert first, then global keys, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.alert.is_open() {
            self.alert.handle_key(key);
            return;
        }

        let action = match self.screen {
            Screen::Configure => self.configure.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                debug!(?screen, "navigate");
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::Submit(form) => self.dispatch(form),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Spawns one request for `form`. Earlier requests are neither cancelled nor awaited.
    fn dispatch(&mut self, form: FormData) {
        self.in_flight += 1;
        let handler = Arc::clone(&self.handler);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = handler.submit(&form).await;
            // The receiver lives as long as the app; a send error means we are shutting down.
            let _ = tx.send(outcome);
        });
    }

    /// Applies every outcome that has arrived, without waiting.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Waits for the next outcome and applies it.
    pub async fn next_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        present_outcome(outcome, &mut self.result, &mut self.alert);
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the number of requests still waiting for a response.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn configure(&self) -> &ConfigureState {
        &self.configure
    }

    pub fn result(&self) -> &ResultPanel {
        &self.result
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }
}
