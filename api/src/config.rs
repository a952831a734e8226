use std::env;

/// Default remote houses feed
const DEFAULT_UPSTREAM_URL: &str = "https://wizard-world-api.herokuapp.com/houses";

#[derive(Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,
    /// Remote URL serving the raw houses JSON array
    pub upstream_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
        }
    }
}
