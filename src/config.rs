use std::env;

/// Sentinel used when no API key is configured. Keeps startup alive; every
/// upstream call will then fail and surface as a 502.
pub const MISSING_KEY: &str = "MISSING_KEY";

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment once, at startup.
    pub fn from_env() -> Self {
        let api_key = match env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => {
                tracing::info!(key = %mask_key(&key), "Gemini API key loaded");
                key
            }
            _ => {
                tracing::error!(
                    "GEMINI_API_KEY is missing from the environment; \
                     every Gemini call will fail until it is set"
                );
                MISSING_KEY.to_string()
            }
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { api_key, port }
    }
}

/// Keep only the first and last few characters for log output.
fn mask_key(key: &str) -> String {
    if key.len() >= 8 {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_hides_middle() {
        assert_eq!(mask_key("AIzaSyExample1234"), "AIza...1234");
    }

    #[test]
    fn test_mask_key_short_values() {
        assert_eq!(mask_key("abc"), "****");
        assert_eq!(mask_key(""), "****");
    }
}
