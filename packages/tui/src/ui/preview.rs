// ABOUTME: Mock ad previews for the search and feed cards of a recommendation
// ABOUTME: An absent card renders nothing and takes no height

use adstudio_core::{FeedCard, SearchCard};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Search-result style preview: url, path, title, description
pub struct SearchPreview<'a> {
    card: Option<&'a SearchCard>,
}

impl<'a> SearchPreview<'a> {
    pub fn new(card: Option<&'a SearchCard>) -> Self {
        Self { card }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let Some(card) = self.card else {
            return Vec::new();
        };
        let path = card
            .path
            .as_deref()
            .map(|p| format!(" › {}", p.trim_start_matches('/')))
            .unwrap_or_default();
        vec![
            Line::from(vec![
                Span::styled(text(&card.url), Style::default().fg(Color::Green)),
                Span::styled(path, Style::default().fg(Color::Green)),
            ]),
            Line::from(Span::styled(
                text(&card.title),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(text(&card.description)),
        ]
    }

    /// Rows needed including the border
    pub fn height(&self) -> u16 {
        match self.card {
            Some(_) => self.lines().len() as u16 + 2,
            None => 0,
        }
    }
}

impl<'a> Widget for SearchPreview<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.card.is_none() {
            return;
        }
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Google Search ")
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .render(area, buf);
    }
}

/// Social feed style preview with an image placeholder
pub struct FeedPreview<'a> {
    card: Option<&'a FeedCard>,
}

impl<'a> FeedPreview<'a> {
    pub fn new(card: Option<&'a FeedCard>) -> Self {
        Self { card }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let Some(card) = self.card else {
            return Vec::new();
        };
        vec![
            Line::from(text(&card.primary_text)),
            Line::from(Span::styled(
                format!("[ {} ]", card.image_label()),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                text(&card.headline),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(text(&card.description)),
            Line::from(vec![
                Span::styled(
                    text(&card.cta),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(text(&card.url), Style::default().fg(Color::DarkGray)),
            ]),
        ]
    }

    pub fn height(&self) -> u16 {
        match self.card {
            Some(_) => self.lines().len() as u16 + 2,
            None => 0,
        }
    }
}

impl<'a> Widget for FeedPreview<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.card.is_none() {
            return;
        }
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Meta Feed ")
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .render(area, buf);
    }
}
