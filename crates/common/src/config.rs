use std::time::Duration;

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default polling interval in seconds.
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the homework API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL (overridable for testing)
    pub telegram_api_url: String,

    /// Pause between polling cycles
    pub retry_time: Duration,

    /// Timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

// Tokens stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_time", &self.retry_time)
            .field("http_timeout", &self.http_timeout)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// A `.env` file is not read here; the binary loads it before logging starts.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values count as missing for the required credentials.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("{key} environment variable is required"))
        };

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            endpoint: lookup("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_time: positive_secs(&lookup, "RETRY_TIME_SECS", DEFAULT_RETRY_TIME_SECS)?,
            http_timeout: positive_secs(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        })
    }
}

/// Parse a duration in whole seconds. Zero is rejected: a zero interval polls
/// without pause and a zero timeout fails every request.
fn positive_secs<F>(lookup: &F, key: &str, default: u64) -> anyhow::Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse()
        .map_err(|_| anyhow::anyhow!("{key} must be a valid u64"))?;

    if secs == 0 {
        anyhow::bail!("{key} must be a positive u64");
    }
    Ok(Duration::from_secs(secs))
}
