use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::IMAGE_PLACEHOLDER;

/// Response of the segmentation endpoint
///
/// Every field is optional and unknown fields are ignored, so partial or
/// extended responses still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Opaque plan document, displayed verbatim
    #[serde(default)]
    pub plan: Option<Value>,
    #[serde(default)]
    pub preview: Option<AdPreview>,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdPreview {
    #[serde(default)]
    pub google_search_card: Option<SearchCard>,
    #[serde(default)]
    pub meta_feed_card: Option<FeedCard>,
}

/// Draft of a search results ad
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCard {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Draft of a social feed ad
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedCard {
    #[serde(default)]
    pub image_prompt: Option<String>,
    #[serde(default)]
    pub primary_text: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cta: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl FeedCard {
    /// Image prompt, or the product placeholder when missing or blank
    pub fn image_label(&self) -> &str {
        match self.image_prompt.as_deref() {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => IMAGE_PLACEHOLDER,
        }
    }
}

impl RecommendationResult {
    pub fn search_card(&self) -> Option<&SearchCard> {
        self.preview.as_ref()?.google_search_card.as_ref()
    }

    pub fn feed_card(&self) -> Option<&FeedCard> {
        self.preview.as_ref()?.meta_feed_card.as_ref()
    }

    /// Plan as pretty-printed JSON; `{}` when the response had none
    pub fn plan_pretty(&self) -> String {
        let empty = Value::Object(Default::default());
        let plan = match &self.plan {
            Some(Value::Null) | None => &empty,
            Some(plan) => plan,
        };
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }
}
