use crate::form::{FieldId, FieldKind, FieldView};
use crate::state::AppState;
use adstudio_core::PersonaField;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Renders the brief as a scrolling column of labelled fields
pub struct BriefFormWidget<'a> {
    state: &'a AppState,
}

/// Rows taken by one field, including its label and persona header
pub fn field_height(field: FieldId) -> u16 {
    let header = match field {
        FieldId::Persona {
            field: PersonaField::Name,
            ..
        } => 1,
        _ => 0,
    };
    let body = match field.kind() {
        FieldKind::Tags => 4,
        _ => 3,
    };
    header + 1 + body
}

/// Heading above a persona card; blank names fall back to the position
pub fn persona_heading(name: &str, index: usize) -> String {
    let name = name.trim();
    if name.is_empty() {
        format!("── Segment {} ──", index + 1)
    } else {
        format!("── {} ──", name)
    }
}

/// Range of fields to draw so that `focus` is visible within `available` rows
pub fn visible_range(heights: &[u16], focus: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let focus = focus.min(heights.len() - 1);

    // Walk back from the focused field while everything still fits
    let mut start = focus;
    let mut used = heights[focus];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    let mut end = focus + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    (start, end)
}

impl<'a> BriefFormWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Campaign brief ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fields = self.state.fields();
        let heights: Vec<u16> = fields.iter().map(|f| field_height(*f)).collect();
        let (start, end) = visible_range(&heights, self.state.focus_index(), inner.height);

        let mut y = inner.y;
        for index in start..end {
            let height = heights[index];
            if y + height > inner.bottom() {
                break;
            }
            let field_area = Rect::new(inner.x, y, inner.width, height);
            self.render_field(frame, field_area, fields[index], index == self.state.focus_index());
            y += height;
        }

        if self.state.brief().personas.is_empty() && y + 2 <= inner.bottom() {
            let hint = Paragraph::new("No segments. Ctrl+N adds one.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, Rect::new(inner.x, y + 1, inner.width, 1));
        }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: FieldId, is_current: bool) {
        let mut area = area;
        if let FieldId::Persona {
            index,
            field: PersonaField::Name,
        } = field
        {
            let name = self
                .state
                .brief()
                .personas
                .get(index)
                .map(|p| p.name.as_str())
                .unwrap_or_default();
            let header = Paragraph::new(persona_heading(name, index)).style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(header, Rect::new(area.x, area.y, area.width, 1));
            area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        }

        let label_style = if is_current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        frame.render_widget(
            Paragraph::new(format!("{}: ", field.label())).style(label_style),
            Rect::new(area.x, area.y, area.width, 1),
        );

        let input_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        let border_style = if is_current {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let view = self.state.view_of(field);
        match (field.kind(), view) {
            (FieldKind::Tags, Some(FieldView::Tags(tags))) => {
                let selected = if is_current {
                    self.state.selected_tag()
                } else {
                    None
                };
                let chips = tag_line(&tags, selected);
                let pending = if is_current {
                    self.state.input().value().to_string()
                } else {
                    String::new()
                };
                let paragraph = Paragraph::new(vec![
                    chips,
                    Line::from(vec![
                        Span::styled("+ ", Style::default().fg(Color::DarkGray)),
                        Span::raw(pending),
                    ]),
                ])
                .block(block);
                frame.render_widget(paragraph, input_area);
                if is_current {
                    let cursor_x = self.state.input().visual_cursor() as u16 + 2;
                    frame.set_cursor_position((input_area.x + 1 + cursor_x, input_area.y + 2));
                }
            }
            (kind, _) if kind.uses_text_input() && is_current => {
                let input = self.state.input();
                let width = input_area.width.max(3).saturating_sub(2) as usize;
                let scroll = input.visual_scroll(width);
                let paragraph = Paragraph::new(input.value())
                    .style(Style::default().bg(Color::Blue).fg(Color::White))
                    .scroll((0, scroll as u16))
                    .block(block);
                frame.render_widget(paragraph, input_area);

                let cursor_x = input.visual_cursor().max(scroll) - scroll;
                frame.set_cursor_position((input_area.x + 1 + cursor_x as u16, input_area.y + 1));
            }
            (_, Some(FieldView::Text(value))) => {
                let paragraph = Paragraph::new(value)
                    .style(Style::default().fg(Color::White))
                    .block(block);
                frame.render_widget(paragraph, input_area);
            }
            (_, Some(FieldView::Select { options, selected })) => {
                let current = selected
                    .and_then(|i| options.get(i).cloned())
                    .unwrap_or_else(|| "(none)".to_string());
                let style = if is_current {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let line = Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(current, style),
                    Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
                ]);
                frame.render_widget(Paragraph::new(line).block(block), input_area);
            }
            (_, Some(FieldView::Multi { options, selected })) => {
                let cursor = if is_current {
                    Some(self.state.option_cursor())
                } else {
                    None
                };
                frame.render_widget(
                    Paragraph::new(multi_line(&options, &selected, cursor)).block(block),
                    input_area,
                );
            }
            _ => frame.render_widget(block, input_area),
        }
    }
}

fn tag_line(tags: &[String], selected: Option<usize>) -> Line<'static> {
    if tags.is_empty() {
        return Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)));
    }
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        let style = if Some(i) == selected {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("[{}]", tag), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn multi_line(options: &[String], selected: &[bool], cursor: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, option) in options.iter().enumerate() {
        let mark = if selected.get(i).copied().unwrap_or(false) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if Some(i) == cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{} {}", mark, option), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adstudio_core::{BriefField, Editor, PersonaUpdate};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                BriefFormWidget::new(state).render(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut rendered = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                rendered.push_str(buffer[(x, y)].symbol());
            }
        }
        rendered
    }

    #[test]
    fn test_persona_heading() {
        assert_eq!(persona_heading("General 25-45", 0), "── General 25-45 ──");
        assert_eq!(persona_heading("  ", 2), "── Segment 3 ──");
        assert_eq!(persona_heading("", 0), "── Segment 1 ──");
    }

    #[test]
    fn test_persona_card_shows_its_name() {
        let mut state = AppState::new(Editor::default(), "/api");
        state.set_focus(FieldId::Persona {
            index: 0,
            field: PersonaField::Name,
        });
        assert!(render_to_string(&state).contains("── General 25-45 ──"));

        state
            .editor
            .update_persona_field(0, PersonaUpdate::Name(String::new()));
        assert!(render_to_string(&state).contains("── Segment 1 ──"));
    }

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(FieldId::Brief(BriefField::ProductName)), 4);
        assert_eq!(
            field_height(FieldId::Persona {
                index: 0,
                field: PersonaField::Name
            }),
            5
        );
        assert_eq!(
            field_height(FieldId::Persona {
                index: 0,
                field: PersonaField::Pains
            }),
            5
        );
    }

    #[test]
    fn test_visible_range_keeps_focus_in_view() {
        let heights = vec![4; 10];
        assert_eq!(visible_range(&heights, 0, 12), (0, 3));
        assert_eq!(visible_range(&heights, 5, 12), (3, 6));
        assert_eq!(visible_range(&heights, 9, 12), (7, 10));
        assert_eq!(visible_range(&heights, 2, 100), (0, 10));
        assert_eq!(visible_range(&[], 0, 10), (0, 0));
    }

    #[test]
    fn test_multi_line_marks_selection() {
        let line = multi_line(
            &["google".to_string(), "meta".to_string()],
            &[true, false],
            Some(1),
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[x] google  [ ] meta  ");
    }
}
