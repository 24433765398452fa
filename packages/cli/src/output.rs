// ABOUTME: Plain-terminal rendering of a recommendation for `adstudio submit`
// ABOUTME: Mirrors the TUI previews: absent cards print nothing

use adstudio_core::{FeedCard, RecommendationResult, SearchCard};
use colored::*;

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

pub fn search_card_lines(card: Option<&SearchCard>) -> Vec<String> {
    let Some(card) = card else {
        return Vec::new();
    };
    let url = match card.path.as_deref() {
        Some(path) => format!("{} › {}", or_empty(&card.url), path.trim_start_matches('/')),
        None => or_empty(&card.url).to_string(),
    };
    vec![
        format!("{}", "Google Search".cyan().bold()),
        format!("  {}", url.green()),
        format!("  {}", or_empty(&card.title).blue().bold()),
        format!("  {}", or_empty(&card.description)),
    ]
}

pub fn feed_card_lines(card: Option<&FeedCard>) -> Vec<String> {
    let Some(card) = card else {
        return Vec::new();
    };
    vec![
        format!("{}", "Meta Feed".cyan().bold()),
        format!("  {}", or_empty(&card.primary_text)),
        format!("  {}", format!("[ {} ]", card.image_label()).dimmed()),
        format!("  {}", or_empty(&card.headline).bold()),
        format!("  {}", or_empty(&card.description)),
        format!(
            "  {} {}",
            or_empty(&card.cta).black().on_cyan(),
            or_empty(&card.url).dimmed()
        ),
    ]
}

/// Previews, download link and pretty-printed plan
pub fn render_result(result: &RecommendationResult) -> String {
    let mut lines = search_card_lines(result.search_card());
    lines.extend(feed_card_lines(result.feed_card()));
    if let Some(url) = &result.download_url {
        lines.push(format!("{} {}", "Download:".cyan(), url));
    }
    lines.push(format!("{}", "Plan".cyan().bold()));
    lines.push(result.plan_pretty());
    lines.join("\n")
}
