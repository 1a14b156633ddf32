/// Client configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FATOOR_ADMIN_USER | akram | Admin panel username |
/// | FATOOR_ADMIN_PASS | akram171 | Admin panel password |
/// | LOG_LEVEL | info | Tracing level filter |
/// | CHANNEL_CAPACITY | 64 | Broadcast capacity of the in-process gateway |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// The admin credential pair is a placeholder gate for a trusted office, not
/// a security boundary; defaults mirror the values the office already uses.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin panel username
    pub admin_username: String,
    /// Admin panel password
    pub admin_password: String,
    /// Tracing level filter
    pub log_level: String,
    /// Broadcast channel capacity for gateway subscriptions
    pub channel_capacity: usize,
    /// Running environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            admin_username: std::env::var("FATOOR_ADMIN_USER").unwrap_or_else(|_| "akram".into()),
            admin_password: std::env::var("FATOOR_ADMIN_PASS")
                .unwrap_or_else(|_| "akram171".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            channel_capacity: std::env::var("CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(64),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_username: "akram".into(),
            admin_password: "akram171".into(),
            log_level: "info".into(),
            channel_capacity: 64,
            environment: "development".into(),
        }
    }
}
