pub mod preview;
pub mod results;
pub mod widgets;

use crate::state::AppState;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use widgets::{BriefFormWidget, StatusBarWidget};

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &AppState) {
    // Create layout with status bar at bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area (flexible)
            Constraint::Length(1), // Status bar (fixed height)
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[0]);

    BriefFormWidget::new(state).render(frame, columns[0]);
    results::render_with_area(frame, state, columns[1]);

    frame.render_widget(StatusBarWidget::new(state), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use adstudio_core::Editor;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_full_screen_renders_form_and_panel() {
        let state = AppState::new(Editor::default(), "http://localhost:8000/api");
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut rendered = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                rendered.push_str(buffer[(x, y)].symbol());
            }
        }
        assert!(rendered.contains("Campaign brief"));
        assert!(rendered.contains("iPhone 14 128GB"));
        assert!(rendered.contains("Recommendation"));
        assert!(rendered.contains("Ctrl+S"));
    }
}
