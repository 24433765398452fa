// ABOUTME: Fixed defaults and option lists for campaign briefs
// ABOUTME: Shared by the editor transitions, the field widgets and the TUI

/// Age used when the minimum age input is cleared or unreadable
pub const DEFAULT_AGE_MIN: u32 = 18;

/// Age used when the maximum age input is cleared or unreadable
pub const DEFAULT_AGE_MAX: u32 = 65;

/// Age range the recommendation service accepts
pub const SERVICE_AGE_RANGE: std::ops::RangeInclusive<u32> = 13..=100;

/// Prefix for the name of personas appended with `add_persona`
pub const PERSONA_NAME_PREFIX: &str = "Segmento";

/// Path of the segmentation endpoint, relative to the API base
pub const SEGMENT_ENDPOINT: &str = "/ads/segment";

/// Language codes offered by the language selector
pub const LANGUAGE_OPTIONS: [&str; 4] = ["es", "en", "pt", "other"];

/// Gender values offered by the persona gender selector
pub const GENDER_OPTIONS: [&str; 3] = ["male", "female", "unknown"];

/// Placeholder shown in feed previews without an image prompt
pub const IMAGE_PLACEHOLDER: &str = "Imagen del producto";

// Default persona
pub const DEFAULT_PERSONA_NAME: &str = "General 25-45";
pub const DEFAULT_PERSONA_AGE_MIN: u32 = 25;
pub const DEFAULT_PERSONA_AGE_MAX: u32 = 45;
pub const DEFAULT_PERSONA_GENDERS: &[&str] = &["unknown"];
pub const DEFAULT_PERSONA_PAINS: &[&str] = &["no tiene celular actualizado"];
pub const DEFAULT_PERSONA_GOALS: &[&str] = &["mejorar rendimiento"];
pub const DEFAULT_PERSONA_INTERESTS: &[&str] = &["Tecnología", "Apple", "iOS"];
pub const DEFAULT_PERSONA_KEYWORDS: &[&str] = &["iphone 14", "comprar iphone", "iphone 14 precio"];

// Default brief
pub const DEFAULT_PRODUCT_NAME: &str = "iPhone 14 128GB";
pub const DEFAULT_VALUE_PROP: &str = "Garantía oficial y envío en 24hs";
pub const DEFAULT_WEBSITE: &str = "https://libertyclub.io/";
pub const DEFAULT_LANDING_PATH: &str = "/iphone-14";
pub const DEFAULT_COUNTRIES: &[&str] = &["AR"];
pub const DEFAULT_CITIES: &[&str] = &["Buenos Aires"];
pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_BUDGET_DAILY: f64 = 50.0;
pub const DEFAULT_PROMO: &str = "12x sin interés y envío gratis";

/// Convert a constant string list into owned strings
pub fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
