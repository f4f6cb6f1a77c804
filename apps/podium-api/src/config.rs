/// Podium API configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file holding the question list.
    pub questions_path: String,
    /// Path to the static speakers JSON file.
    pub speakers_path: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables. Every variable has a
    /// default, so an empty environment yields a runnable config.
    pub fn from_env() -> Self {
        Self {
            questions_path: std::env::var("QUESTIONS_PATH")
                .unwrap_or_else(|_| "data/questions.json".to_string()),
            speakers_path: std::env::var("SPEAKERS_PATH")
                .unwrap_or_else(|_| "speakers.json".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5500),
        }
    }
}
