//! Server configuration
//!
//! All settings come from environment variables. The provider API key
//! is required; the client constructors fail at startup when it is
//! missing. Everything else has a sensible default.

use ai_core::ChatConfig;
use ai_speech::SpeechConfig;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Chat-completion provider settings
    pub chat: ChatConfig,
    /// Speech provider settings
    pub speech: SpeechConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `HOST`, `PORT`, `OPENAI_API_KEY`,
    /// `OPENAI_BASE_URL`, `OPENAI_MODEL`. An unparseable `PORT` falls
    /// back to the default with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut server = ServerConfig::default();
        if let Ok(host) = std::env::var("HOST") {
            server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => server.port = port,
                Err(_) => tracing::warn!(port = %port, "Invalid PORT value, using default"),
            }
        }

        let api_key = std::env::var("OPENAI_API_KEY").ok();

        let mut chat = ChatConfig {
            api_key: api_key.clone(),
            ..ChatConfig::default()
        };
        let mut speech = SpeechConfig {
            api_key,
            ..SpeechConfig::default()
        };

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            chat.base_url.clone_from(&base_url);
            speech.base_url = base_url;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            chat.model = model;
        }

        Self {
            server,
            chat,
            speech,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn app_config_has_debug() {
        let config = AppConfig {
            server: ServerConfig::default(),
            chat: ChatConfig::default(),
            speech: SpeechConfig::default(),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("AppConfig"));
    }
}
