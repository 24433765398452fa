// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across AdStudio

// Recommendation service
pub const ADSTUDIO_API_BASE: &str = "ADSTUDIO_API_BASE";
pub const ADSTUDIO_API_ORIGIN: &str = "ADSTUDIO_API_ORIGIN";

// HTTP client
pub const ADSTUDIO_HTTP_TIMEOUT_SECS: &str = "ADSTUDIO_HTTP_TIMEOUT_SECS";

// Submit behaviour
pub const ADSTUDIO_DISCARD_STALE_RESPONSES: &str = "ADSTUDIO_DISCARD_STALE_RESPONSES";

// Terminal UI
pub const ADSTUDIO_TICK_RATE_MS: &str = "ADSTUDIO_TICK_RATE_MS";
pub const ADSTUDIO_LOG_FILE: &str = "ADSTUDIO_LOG_FILE";

// Logging filter read by tracing-subscriber
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
