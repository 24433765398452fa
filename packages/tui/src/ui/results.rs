use crate::state::AppState;
use crate::ui::preview::{FeedPreview, SearchPreview};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Status lines above the previews: loading, error and brief hints
///
/// Each state is independent, so a stale result stays visible next to the
/// loading indicator.
pub fn status_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if state.editor.is_loading() {
        lines.push(Line::from(Span::styled(
            "Generating...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(error) = state.editor.error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }
    for warning in state.brief().warnings() {
        lines.push(Line::from(Span::styled(
            format!("! {}", warning),
            Style::default().fg(Color::LightYellow),
        )));
    }
    if let Some(url) = state
        .editor
        .result()
        .and_then(|r| r.download_url.as_deref())
    {
        lines.push(Line::from(vec![
            Span::styled("Download: ", Style::default().fg(Color::Gray)),
            Span::styled(url.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }
    lines
}

/// Render the right-hand panel: status, previews and the plan
pub fn render_with_area(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recommendation ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = status_lines(state);
    let result = state.editor.result();
    let search = SearchPreview::new(result.and_then(|r| r.search_card()));
    let feed = FeedPreview::new(result.and_then(|r| r.feed_card()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(status.len() as u16),
            Constraint::Length(search.height()),
            Constraint::Length(feed.height()),
            Constraint::Min(3),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), chunks[0]);
    frame.render_widget(search, chunks[1]);
    frame.render_widget(feed, chunks[2]);

    let plan = match result {
        Some(result) => result.plan_pretty(),
        None => "Press Ctrl+S to generate a plan.".to_string(),
    };
    let plan_paragraph = Paragraph::new(plan)
        .scroll((state.plan_scroll(), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Plan (PgUp/PgDn) ")
                .border_style(Style::default().fg(Color::Gray)),
        );
    frame.render_widget(plan_paragraph, chunks[3]);
}
