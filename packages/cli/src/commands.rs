// ABOUTME: The two adstudio commands: the interactive editor and a one-shot submit
// ABOUTME: Both build the HTTP client from Config and drive an Editor

use crate::output::render_result;
use adstudio_client::ApiClient;
use adstudio_config::Config;
use adstudio_core::{Editor, ResponsePolicy};
use anyhow::{anyhow, Result};
use colored::*;
use crossterm::{execute, terminal};
use std::sync::Arc;
use tracing::info;

/// Response policy selected by the configuration
pub fn response_policy(config: &Config) -> ResponsePolicy {
    if config.discard_stale_responses {
        ResponsePolicy::DiscardSuperseded
    } else {
        ResponsePolicy::LastResponseWins
    }
}

/// HTTP client for the configured service
pub fn build_client(config: &Config) -> Result<ApiClient> {
    let base_url = config.api_base_url()?;
    info!("Recommendation service at {}", base_url);
    Ok(ApiClient::with_timeout(base_url, config.http_timeout)?)
}

/// Send the default brief once and print the previews and plan
///
/// Returns an error carrying the editor's message when the submit failed.
pub async fn run_submit(config: &Config) -> Result<String> {
    let client = build_client(config)?;
    let mut editor = Editor::new(response_policy(config));

    for warning in editor.brief().warnings() {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }

    editor.submit(&client).await;

    match (editor.error(), editor.result()) {
        (Some(error), _) => Err(anyhow!("{}", error)),
        (None, Some(result)) => Ok(render_result(result)),
        (None, None) => Err(anyhow!("No recommendation received")),
    }
}

/// Launch the interactive editor on the alternate screen
pub async fn run_tui(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let endpoint = client.segment_url();
    let mut app = adstudio_tui::App::new(
        Editor::new(response_policy(config)),
        Arc::new(client),
        endpoint,
        config.tick_rate_ms,
    );

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Run the application with proper cleanup
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if there was an error
    let cleanup_result = (|| -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    })();

    if let Err(cleanup_error) = cleanup_result {
        eprintln!("Terminal cleanup error: {}", cleanup_error);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_policy_follows_config() {
        let mut config = Config::default();
        assert_eq!(response_policy(&config), ResponsePolicy::LastResponseWins);
        config.discard_stale_responses = true;
        assert_eq!(response_policy(&config), ResponsePolicy::DiscardSuperseded);
    }

    #[test]
    fn test_build_client_resolves_relative_base() {
        let config = Config {
            api_base: "/api".to_string(),
            api_origin: "http://localhost:8000".to_string(),
            ..Config::default()
        };
        let client = build_client(&config).unwrap();
        assert_eq!(client.segment_url(), "http://localhost:8000/api/ads/segment");
    }

    #[test]
    fn test_build_client_rejects_unsupported_scheme() {
        let config = Config {
            api_base: "ftp://example.com/api".to_string(),
            ..Config::default()
        };
        assert!(build_client(&config).is_err());
    }
}
