use crate::form::{FieldId, FieldKind};
use crate::state::AppState;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

/// Status bar widget that displays context-aware information
pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Mode indicator: loading wins over the focused widget kind
    fn get_mode_info(&self) -> Option<(String, Style)> {
        if self.state.editor.is_loading() {
            return Some((
                "LOADING".to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let kind = self.state.focused_field()?.kind();
        let (text, color) = match kind {
            FieldKind::Text | FieldKind::CommaList => ("EDIT", Color::Green),
            FieldKind::Number => ("NUMBER", Color::Green),
            FieldKind::Select => ("SELECT", Color::Cyan),
            FieldKind::Multi => ("MULTI", Color::Cyan),
            FieldKind::Tags => ("TAGS", Color::Magenta),
        };
        Some((
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    }

    /// Where the focus is, plus the endpoint submits go to
    fn get_navigation_breadcrumb(&self) -> String {
        let location = match self.state.focused_field() {
            Some(FieldId::Brief(field)) => format!(" Brief › {}", field.label()),
            Some(FieldId::Persona { index, field }) => {
                let name = self
                    .state
                    .brief()
                    .personas
                    .get(index)
                    .map(|p| p.name.as_str())
                    .unwrap_or_default();
                format!(" Segment {} ({}) › {}", index + 1, name, field.label())
            }
            None => " Brief".to_string(),
        };
        format!("{} • {}", location, self.state.endpoint)
    }

    /// Get context-aware keyboard shortcuts
    fn get_shortcuts(&self) -> String {
        let field_keys = match self.state.focused_field().map(|f| f.kind()) {
            Some(FieldKind::Select) => "←→: Choose",
            Some(FieldKind::Multi) => "←→: Move • Space: Toggle",
            Some(FieldKind::Tags) => "Enter: Add • ⇧←→: Pick • Bksp: Delete",
            _ => "Type to edit",
        };
        format!(
            "{} • Tab: Next • Ctrl+S: Generate • Ctrl+N/D: Segment • Ctrl+Q: Quit",
            field_keys
        )
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode_info = self.get_mode_info();
        let breadcrumb = self.get_navigation_breadcrumb();
        let shortcuts = self.get_shortcuts();

        let chunks = if let Some((ref mode_text, _)) = mode_info {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(mode_text.len() as u16 + 2),
                    Constraint::Min(20),
                    Constraint::Length(shortcuts.chars().count() as u16),
                ])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(20),
                    Constraint::Length(shortcuts.chars().count() as u16),
                ])
                .split(area)
        };

        let mut current_chunk = 0;

        if let Some((mode_text, mode_style)) = mode_info {
            Paragraph::new(format!(" {} ", mode_text))
                .style(mode_style)
                .block(Block::default())
                .render(chunks[current_chunk], buf);
            current_chunk += 1;
        }

        Paragraph::new(breadcrumb)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default())
            .render(chunks[current_chunk], buf);
        current_chunk += 1;

        Paragraph::new(shortcuts)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default())
            .render(chunks[current_chunk], buf);
    }
}
