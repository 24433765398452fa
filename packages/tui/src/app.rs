use crate::events::{AppEvent, EventHandler};
use crate::form::FieldKind;
use crate::state::{AppState, CtrlCAction};
use crate::submit::spawn_submit;
use crate::ui;
use adstudio_core::{CampaignBrief, Editor, RecommendationService, SubmitTicket};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// Lines moved by one PageUp/PageDown in the plan view
const PLAN_SCROLL_STEP: u16 = 5;

/// What the event loop should do after a key press
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    /// Run a submit for this ticket in the background
    Submit {
        ticket: SubmitTicket,
        brief: CampaignBrief,
    },
    Quit,
}

/// Main TUI application struct
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    service: Arc<dyn RecommendationService>,
    tick_rate_ms: u64,
}

impl App {
    pub fn new(
        editor: Editor,
        service: Arc<dyn RecommendationService>,
        endpoint: impl Into<String>,
        tick_rate_ms: u64,
    ) -> Self {
        Self {
            state: AppState::new(editor, endpoint),
            should_quit: false,
            service,
            tick_rate_ms,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut event_handler = EventHandler::new(self.tick_rate_ms);
        info!("Editor started against {}", self.state.endpoint);

        // Main event loop
        while !self.should_quit {
            terminal.draw(|frame| {
                ui::render(frame, &self.state);
            })?;

            if let Some(event) = event_handler.next().await {
                match event {
                    AppEvent::Key(key_event) => {
                        if key_event.kind == KeyEventKind::Press {
                            match self.handle_key_event(key_event) {
                                KeyOutcome::Submit { ticket, brief } => {
                                    self.start_submit(ticket, brief, event_handler.sender());
                                }
                                KeyOutcome::Quit => self.quit(),
                                KeyOutcome::Handled | KeyOutcome::Ignored => {}
                            }
                        }
                    }
                    AppEvent::Tick => {}
                    AppEvent::SubmitFinished { ticket, outcome } => {
                        self.state.finish_submit(ticket, outcome);
                    }
                }
            }
        }

        Ok(())
    }

    fn start_submit(
        &self,
        ticket: SubmitTicket,
        brief: CampaignBrief,
        sender: &UnboundedSender<AppEvent>,
    ) {
        spawn_submit(Arc::clone(&self.service), brief, ticket, sender.clone());
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(outcome) = self.handle_control_key(key.code) {
                return outcome;
            }
        }

        match key.code {
            KeyCode::F(5) => return self.submit(),
            KeyCode::Tab | KeyCode::Down => return handled(self.state.focus_next()),
            KeyCode::BackTab | KeyCode::Up => return handled(self.state.focus_previous()),
            KeyCode::PageUp => {
                self.state.scroll_plan_up(PLAN_SCROLL_STEP);
                return KeyOutcome::Handled;
            }
            KeyCode::PageDown => {
                self.state.scroll_plan_down(PLAN_SCROLL_STEP);
                return KeyOutcome::Handled;
            }
            _ => {}
        }

        let Some(kind) = self.state.focused_field().map(|f| f.kind()) else {
            return KeyOutcome::Ignored;
        };
        match kind {
            FieldKind::Select => match key.code {
                KeyCode::Left => handled(self.state.cycle_select(false)),
                KeyCode::Right | KeyCode::Char(' ') => handled(self.state.cycle_select(true)),
                KeyCode::Enter => handled(self.state.focus_next()),
                _ => KeyOutcome::Ignored,
            },
            FieldKind::Multi => match key.code {
                KeyCode::Left => handled(self.state.move_option_cursor(false)),
                KeyCode::Right => handled(self.state.move_option_cursor(true)),
                KeyCode::Char(' ') | KeyCode::Enter => handled(self.state.toggle_option()),
                _ => KeyOutcome::Ignored,
            },
            FieldKind::Tags => self.handle_tag_key(key),
            FieldKind::Text | FieldKind::Number | FieldKind::CommaList => match key.code {
                KeyCode::Enter => handled(self.state.focus_next()),
                _ => handled(self.state.handle_text_event(&Event::Key(key))),
            },
        }
    }

    fn handle_control_key(&mut self, code: KeyCode) -> Option<KeyOutcome> {
        let outcome = match code {
            KeyCode::Char('c') => match self.state.handle_ctrl_c_key() {
                CtrlCAction::ClearInput => KeyOutcome::Handled,
                CtrlCAction::QuitApplication => KeyOutcome::Quit,
            },
            KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('n') => {
                self.state.add_persona();
                KeyOutcome::Handled
            }
            KeyCode::Char('d') => handled(self.state.remove_focused_persona()),
            KeyCode::Char('r') => {
                self.state.reset_to_default();
                KeyOutcome::Handled
            }
            KeyCode::Char('p') => {
                self.state.reset_personas();
                KeyOutcome::Handled
            }
            _ => return None,
        };
        Some(outcome)
    }

    fn handle_tag_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Enter => handled(self.state.commit_tag()),
            KeyCode::Left if shift => handled(self.state.move_tag_selection(false)),
            KeyCode::Right if shift => handled(self.state.move_tag_selection(true)),
            KeyCode::Backspace | KeyCode::Delete if self.state.input().value().is_empty() => {
                handled(self.state.remove_selected_tag())
            }
            _ => handled(self.state.handle_text_event(&Event::Key(key))),
        }
    }

    fn submit(&mut self) -> KeyOutcome {
        match self.state.begin_submit() {
            Some((ticket, brief)) => KeyOutcome::Submit { ticket, brief },
            None => {
                debug!("Submit ignored while a request is loading");
                KeyOutcome::Ignored
            }
        }
    }
}

fn handled(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Handled
    } else {
        KeyOutcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;
    use adstudio_core::{BriefField, PersonaField, RecommendationResult, SubmitError};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct Offline;

    #[async_trait]
    impl RecommendationService for Offline {
        async fn segment(
            &self,
            _brief: &CampaignBrief,
        ) -> Result<RecommendationResult, SubmitError> {
            Err(SubmitError::Transport("offline".to_string()))
        }
    }

    fn new_app() -> App {
        App::new(Editor::default(), Arc::new(Offline), "/api", 250)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = new_app();
        assert_eq!(app.handle_key_event(key(KeyCode::Tab)), KeyOutcome::Handled);
        assert_eq!(
            app.state.focused_field(),
            Some(FieldId::Brief(BriefField::ValueProp))
        );
        assert_eq!(app.handle_key_event(key(KeyCode::BackTab)), KeyOutcome::Handled);
        assert_eq!(app.handle_key_event(key(KeyCode::BackTab)), KeyOutcome::Ignored);
    }

    #[test]
    fn test_submit_only_once_while_loading() {
        let mut app = new_app();
        let outcome = app.handle_key_event(ctrl('s'));
        let KeyOutcome::Submit { ticket, brief } = outcome else {
            panic!("expected a submit, got {:?}", outcome);
        };
        assert_eq!(&brief, app.state.brief());
        assert!(app.state.editor.is_loading());
        assert_eq!(app.handle_key_event(key(KeyCode::F(5))), KeyOutcome::Ignored);

        app.state
            .finish_submit(ticket, Err(SubmitError::Transport("offline".to_string())));
        assert!(matches!(
            app.handle_key_event(key(KeyCode::F(5))),
            KeyOutcome::Submit { .. }
        ));
    }

    #[test]
    fn test_discard_stale_allows_resubmit_while_loading() {
        let mut app = App::new(
            Editor::new(adstudio_core::ResponsePolicy::DiscardSuperseded),
            Arc::new(Offline),
            "/api",
            250,
        );
        assert!(matches!(app.handle_key_event(ctrl('s')), KeyOutcome::Submit { .. }));
        let outcome = app.handle_key_event(key(KeyCode::F(5)));
        let KeyOutcome::Submit { ticket, .. } = outcome else {
            panic!("expected a second submit, got {:?}", outcome);
        };
        assert_eq!(ticket.generation(), 2);
    }

    #[test]
    fn test_persona_shortcuts() {
        let mut app = new_app();
        app.handle_key_event(ctrl('n'));
        assert_eq!(app.state.brief().personas.len(), 2);
        app.handle_key_event(ctrl('d'));
        assert_eq!(app.state.brief().personas.len(), 1);
        app.handle_key_event(ctrl('n'));
        app.handle_key_event(ctrl('n'));
        app.handle_key_event(ctrl('p'));
        assert_eq!(app.state.brief().personas.len(), 1);
    }

    #[test]
    fn test_tag_keys() {
        let mut app = new_app();
        app.state.set_focus(FieldId::Persona {
            index: 0,
            field: PersonaField::Goals,
        });
        for c in "envío gratis".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.handle_key_event(key(KeyCode::Enter)), KeyOutcome::Handled);
        assert_eq!(
            app.state.brief().personas[0].goals.last().map(String::as_str),
            Some("envío gratis")
        );

        let before = app.state.brief().personas[0].goals.len();
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.state.brief().personas[0].goals.len(), before - 1);
    }

    #[test]
    fn test_select_and_multi_keys() {
        let mut app = new_app();
        app.state.set_focus(FieldId::Brief(BriefField::Language));
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.state.brief().language, "en");

        app.state.set_focus(FieldId::Brief(BriefField::Platform));
        app.handle_key_event(key(KeyCode::Char(' ')));
        assert_eq!(app.state.brief().platform.len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert_eq!(app.handle_key_event(ctrl('q')), KeyOutcome::Quit);

        let mut app = new_app();
        app.state.set_focus(FieldId::Brief(BriefField::Objective));
        assert_eq!(app.handle_key_event(ctrl('c')), KeyOutcome::Handled);
        assert_eq!(app.handle_key_event(ctrl('c')), KeyOutcome::Quit);
    }

    #[tokio::test]
    async fn test_run_submit_reports_through_channel() {
        let app = new_app();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut editor = Editor::default();
        let (ticket, brief) = editor.begin_submit();

        app.start_submit(ticket, brief, &tx);

        match rx.recv().await {
            Some(AppEvent::SubmitFinished { outcome, .. }) => {
                assert_eq!(outcome, Err(SubmitError::Transport("offline".to_string())));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
