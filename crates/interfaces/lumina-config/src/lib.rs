//! Central configuration constants for runtime defaults.

/// Environment variable holding the completion-service API key.
pub const API_KEY_ENV: &str = "LUMINA_API_KEY";

/// Environment variable overriding the completion-service endpoint.
pub const ASSISTANT_URL_ENV: &str = "LUMINA_ASSISTANT_URL";

/// Environment variable overriding the path shown at startup.
pub const START_PATH_ENV: &str = "LUMINA_START_PATH";

/// Default chat-completions endpoint.
pub const DEFAULT_ASSISTANT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model requested from the completion service.
pub const ASSISTANT_MODEL: &str = "gpt-4o-mini";

/// Per-request timeout for completion calls, in seconds.
pub const ASSISTANT_TIMEOUT_SECS: u64 = 60;

/// Sampling temperature for assistant replies.
pub const ASSISTANT_TEMPERATURE: f32 = 0.7;

/// Greeting seeded into a fresh chat transcript.
pub const CHAT_WELCOME: &str =
    "Hi there! I'm your Lumina AI stylist. Looking for something specific or need a gift idea?";

/// Reply shown in place of an answer when the completion service fails.
pub const CHAT_FALLBACK: &str =
    "I'm currently offline. Please check your internet connection or try again later.";

/// Number of products on the home screen's featured row.
pub const FEATURED_COUNT: usize = 4;

/// Order value above which shipping is free, in dollars.
pub const FREE_SHIPPING_THRESHOLD: f64 = 100.0;

/// Path the interface opens on unless overridden via `START_PATH_ENV`.
pub fn start_path() -> String {
    std::env::var(START_PATH_ENV).unwrap_or_else(|_| "/".to_string())
}
