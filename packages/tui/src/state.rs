use crate::form::{field_view, form_fields, initial_text, FieldId, FieldKind, FieldView};
use adstudio_core::constants::{GENDER_OPTIONS, LANGUAGE_OPTIONS};
use adstudio_core::fields::{append_tag, remove_tag, split_comma_list, toggle, NumericInput};
use adstudio_core::{
    BriefField, BriefUpdate, CampaignBrief, Editor, Objective, Persona, PersonaField,
    PersonaUpdate, Platform, RecommendationResult, ResponsePolicy, SubmitError, SubmitTicket,
};
use crossterm::event::Event;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Application state management
#[derive(Debug)]
pub struct AppState {
    pub editor: Editor,
    /// Resolved endpoint shown in the status bar
    pub endpoint: String,
    /// Index into `form_fields` of the focused field
    focus: usize,
    /// Edit buffer of the focused text-like field, or the pending tag text
    input: Input,
    /// Highlighted option of a focused multi-select
    option_cursor: usize,
    /// Tag targeted by delete in a focused tag field
    selected_tag: Option<usize>,
    plan_scroll: u16,
    /// Lines of the pretty-printed plan, counted once per stored result
    plan_lines: u16,
    /// Track last Ctrl+C key press for double Ctrl+C quit detection
    last_ctrl_c_time: Option<Instant>,
    /// Timeout for double Ctrl+C detection (1000ms)
    ctrl_c_timeout: Duration,
}

/// Result of a Ctrl+C press
#[derive(Debug, Clone, PartialEq)]
pub enum CtrlCAction {
    /// First press: the current edit buffer was cleared
    ClearInput,
    /// Second press within the timeout
    QuitApplication,
}

impl AppState {
    pub fn new(editor: Editor, endpoint: impl Into<String>) -> Self {
        let mut state = Self {
            editor,
            endpoint: endpoint.into(),
            focus: 0,
            input: Input::default(),
            option_cursor: 0,
            selected_tag: None,
            plan_scroll: 0,
            plan_lines: 0,
            last_ctrl_c_time: None,
            ctrl_c_timeout: Duration::from_millis(1000),
        };
        state.load_focused_field();
        state
    }

    pub fn brief(&self) -> &CampaignBrief {
        self.editor.brief()
    }

    pub fn fields(&self) -> Vec<FieldId> {
        form_fields(self.brief())
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.fields().get(self.focus).copied()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn selected_tag(&self) -> Option<usize> {
        self.selected_tag
    }

    pub fn plan_scroll(&self) -> u16 {
        self.plan_scroll
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) -> bool {
        if self.focus + 1 < self.fields().len() {
            self.focus += 1;
            self.load_focused_field();
            true
        } else {
            false
        }
    }

    /// Move focus to the previous field
    pub fn focus_previous(&mut self) -> bool {
        if self.focus > 0 {
            self.focus -= 1;
            self.load_focused_field();
            true
        } else {
            false
        }
    }

    pub fn set_focus(&mut self, field: FieldId) -> bool {
        match self.fields().iter().position(|f| *f == field) {
            Some(index) => {
                self.focus = index;
                self.load_focused_field();
                true
            }
            None => false,
        }
    }

    /// Reload the edit buffer from the brief, clamping focus into range
    fn load_focused_field(&mut self) {
        let fields = self.fields();
        if self.focus >= fields.len() {
            self.focus = fields.len().saturating_sub(1);
        }
        self.option_cursor = 0;
        self.selected_tag = None;
        self.input = match fields.get(self.focus) {
            Some(field) => Input::new(initial_text(self.brief(), *field)),
            None => Input::default(),
        };
    }

    /// Route a key event into the edit buffer of a text-like field
    ///
    /// Every change is pushed into the brief at once; tag fields only edit
    /// their pending text until [`AppState::commit_tag`].
    pub fn handle_text_event(&mut self, event: &Event) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        let kind = field.kind();
        if !kind.uses_text_input() {
            return false;
        }
        let before = self.input.value().to_string();
        if self.input.handle_event(event).is_none() {
            return false;
        }
        if kind != FieldKind::Tags && self.input.value() != before {
            let text = self.input.value().to_string();
            self.apply_text(field, &text);
        }
        true
    }

    fn apply_text(&mut self, field: FieldId, text: &str) {
        match field {
            FieldId::Brief(brief_field) => {
                let change = match brief_field {
                    BriefField::ProductName => BriefUpdate::ProductName(text.to_string()),
                    BriefField::ValueProp => BriefUpdate::ValueProp(text.to_string()),
                    BriefField::Website => BriefUpdate::Website(text.to_string()),
                    BriefField::LandingPath => BriefUpdate::LandingPath(text.to_string()),
                    BriefField::LocationCountries => {
                        BriefUpdate::LocationCountries(split_comma_list(text))
                    }
                    BriefField::LocationCities => {
                        BriefUpdate::LocationCities(split_comma_list(text))
                    }
                    BriefField::BudgetDaily => {
                        BriefUpdate::BudgetDaily(NumericInput::parse(text).budget())
                    }
                    BriefField::Promo => BriefUpdate::Promo(if text.is_empty() {
                        None
                    } else {
                        Some(text.to_string())
                    }),
                    _ => return,
                };
                self.editor.update(change);
            }
            FieldId::Persona { index, field } => {
                let change = match field {
                    PersonaField::Name => PersonaUpdate::Name(text.to_string()),
                    PersonaField::AgeMin => PersonaUpdate::AgeMin(NumericInput::parse(text)),
                    PersonaField::AgeMax => PersonaUpdate::AgeMax(NumericInput::parse(text)),
                    _ => return,
                };
                self.editor.update_persona_field(index, change);
            }
        }
    }

    /// Step a select field to the next or previous option, wrapping around
    pub fn cycle_select(&mut self, forward: bool) -> bool {
        match self.focused_field() {
            Some(FieldId::Brief(BriefField::Objective)) => {
                let options: Vec<Objective> = Objective::iter().collect();
                let current = options
                    .iter()
                    .position(|o| *o == self.brief().objective)
                    .unwrap_or(0);
                let next = step(current, options.len(), forward);
                self.editor.update(BriefUpdate::Objective(options[next]));
                true
            }
            Some(FieldId::Brief(BriefField::Language)) => {
                let next = match LANGUAGE_OPTIONS
                    .iter()
                    .position(|l| *l == self.brief().language)
                {
                    Some(current) => step(current, LANGUAGE_OPTIONS.len(), forward),
                    None => 0,
                };
                self.editor
                    .update(BriefUpdate::Language(LANGUAGE_OPTIONS[next].to_string()));
                true
            }
            _ => false,
        }
    }

    /// Move the highlighted option of a multi-select
    pub fn move_option_cursor(&mut self, forward: bool) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if field.kind() != FieldKind::Multi {
            return false;
        }
        let len = field.options().len();
        if len == 0 {
            return false;
        }
        self.option_cursor = step(self.option_cursor.min(len - 1), len, forward);
        true
    }

    /// Toggle the highlighted option of a multi-select
    pub fn toggle_option(&mut self) -> bool {
        match self.focused_field() {
            Some(FieldId::Brief(BriefField::Platform)) => {
                let Some(option) = Platform::iter().nth(self.option_cursor) else {
                    return false;
                };
                let next = toggle(&self.brief().platform, &option);
                self.editor.update(BriefUpdate::Platform(next));
                true
            }
            Some(FieldId::Persona {
                index,
                field: PersonaField::Genders,
            }) => {
                let (Some(persona), Some(option)) = (
                    self.brief().personas.get(index),
                    GENDER_OPTIONS.get(self.option_cursor),
                ) else {
                    return false;
                };
                let next = toggle(&persona.genders, &option.to_string());
                self.editor
                    .update_persona_field(index, PersonaUpdate::Genders(next));
                true
            }
            _ => false,
        }
    }

    fn focused_tags(&self) -> Option<(usize, PersonaField, Vec<String>)> {
        let focused = self.focused_field()?;
        match focused {
            FieldId::Persona { index, field } if focused.kind() == FieldKind::Tags => {
                let persona = self.brief().personas.get(index)?;
                Some((index, field, persona.list(field)?.to_vec()))
            }
            _ => None,
        }
    }

    /// Append the pending text as a tag and clear it; blank text is ignored
    pub fn commit_tag(&mut self) -> bool {
        let Some((index, field, tags)) = self.focused_tags() else {
            return false;
        };
        let Some(next) = append_tag(&tags, self.input.value()) else {
            return false;
        };
        if let Some(change) = Persona::list_update(field, next) {
            self.editor.update_persona_field(index, change);
        }
        self.input.reset();
        self.selected_tag = None;
        true
    }

    /// Delete the selected tag, or the last one when none is selected
    pub fn remove_selected_tag(&mut self) -> bool {
        let Some((index, field, tags)) = self.focused_tags() else {
            return false;
        };
        if tags.is_empty() {
            return false;
        }
        let position = self.selected_tag.unwrap_or(tags.len() - 1).min(tags.len() - 1);
        if let Some(change) = Persona::list_update(field, remove_tag(&tags, position)) {
            self.editor.update_persona_field(index, change);
        }
        let remaining = tags.len() - 1;
        self.selected_tag = match self.selected_tag {
            Some(_) if remaining > 0 => Some(position.min(remaining - 1)),
            _ => None,
        };
        true
    }

    /// Move the tag selection left or right
    pub fn move_tag_selection(&mut self, forward: bool) -> bool {
        let Some((_, _, tags)) = self.focused_tags() else {
            return false;
        };
        if tags.is_empty() {
            return false;
        }
        let current = self.selected_tag.unwrap_or(tags.len() - 1);
        self.selected_tag = Some(step(current, tags.len(), forward));
        true
    }

    /// Append a persona and focus its name
    pub fn add_persona(&mut self) {
        self.editor.add_persona();
        let index = self.brief().personas.len() - 1;
        self.set_focus(FieldId::Persona {
            index,
            field: PersonaField::Name,
        });
    }

    /// Remove the persona containing the focused field
    pub fn remove_focused_persona(&mut self) -> bool {
        let Some(index) = self.focused_field().and_then(|f| f.persona_index()) else {
            return false;
        };
        self.editor.remove_persona(index);
        self.load_focused_field();
        true
    }

    pub fn reset_personas(&mut self) {
        self.editor.reset_personas();
        self.load_focused_field();
    }

    pub fn reset_to_default(&mut self) {
        self.editor.reset_to_default();
        self.load_focused_field();
    }

    /// Start a submit
    ///
    /// Under [`ResponsePolicy::LastResponseWins`] a submit is refused while one
    /// is loading, like a disabled button. Under
    /// [`ResponsePolicy::DiscardSuperseded`] it starts anyway and the pending
    /// request's response is dropped when it arrives.
    pub fn begin_submit(&mut self) -> Option<(SubmitTicket, CampaignBrief)> {
        if self.editor.is_loading() && self.editor.policy() == ResponsePolicy::LastResponseWins {
            return None;
        }
        Some(self.editor.begin_submit())
    }

    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<RecommendationResult, SubmitError>,
    ) {
        let succeeded = outcome.is_ok();
        if self.editor.finish_submit(ticket, outcome) && succeeded {
            self.plan_scroll = 0;
            self.plan_lines = self
                .editor
                .result()
                .map(|r| u16::try_from(r.plan_pretty().lines().count()).unwrap_or(u16::MAX))
                .unwrap_or(0);
        }
    }

    pub fn scroll_plan_up(&mut self, lines: u16) {
        self.plan_scroll = self.plan_scroll.saturating_sub(lines);
    }

    pub fn scroll_plan_down(&mut self, lines: u16) {
        let max = self.plan_lines.saturating_sub(1);
        self.plan_scroll = self.plan_scroll.saturating_add(lines).min(max);
    }

    /// View of any field, for the renderers
    pub fn view_of(&self, field: FieldId) -> Option<FieldView> {
        field_view(self.brief(), field)
    }

    /// Handle Ctrl+C: first press clears the buffer, a second one in time quits
    pub fn handle_ctrl_c_key(&mut self) -> CtrlCAction {
        let now = Instant::now();
        let buffer_was_empty = self.input.value().is_empty();

        if let Some(last_time) = self.last_ctrl_c_time {
            if buffer_was_empty && now.duration_since(last_time) <= self.ctrl_c_timeout {
                self.last_ctrl_c_time = None;
                return CtrlCAction::QuitApplication;
            }
        }

        if buffer_was_empty {
            self.last_ctrl_c_time = Some(now);
        } else {
            // Clearing text restarts the quit sequence
            self.last_ctrl_c_time = None;
            self.input.reset();
            if let Some(field) = self.focused_field() {
                if field.kind() != FieldKind::Tags {
                    self.apply_text(field, "");
                }
            }
        }
        CtrlCAction::ClearInput
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
