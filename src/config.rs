use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub main_backend_url: String,
    pub analytics_backend_url: String,
    pub enable_logging: bool,
    pub request_timeout_ms: u32,
    pub download_pause_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            main_backend_url: "https://mog-sqj7.onrender.com".to_string(),
            analytics_backend_url: "https://mog-analytics.onrender.com".to_string(),
            enable_logging: true,
            request_timeout_ms: 10_000,
            download_pause_ms: 300,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            main_backend_url: option_env!("MAIN_BACKEND_URL")
                .map(normalize_url)
                .unwrap_or(defaults.main_backend_url),
            analytics_backend_url: option_env!("ANALYTICS_BACKEND_URL")
                .map(normalize_url)
                .unwrap_or(defaults.analytics_backend_url),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            request_timeout_ms: option_env!("REQUEST_TIMEOUT_MS")
                .unwrap_or("10000").parse().unwrap_or(defaults.request_timeout_ms),
            download_pause_ms: option_env!("DOWNLOAD_PAUSE_MS")
                .unwrap_or("300").parse().unwrap_or(defaults.download_pause_ms),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Quita la barra final para poder concatenar rutas que empiezan con `/`
fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_url_strips_trailing_slash() {
        assert_eq!(normalize_url("https://mog-sqj7.onrender.com/"), "https://mog-sqj7.onrender.com");
        assert_eq!(normalize_url(" http://localhost:5000 "), "http://localhost:5000");
    }

    #[test]
    fn defaults_point_to_both_backends() {
        let config = AppConfig::default();
        assert!(config.main_backend_url.contains("mog-sqj7"));
        assert!(config.analytics_backend_url.contains("mog-analytics"));
        assert_eq!(config.request_timeout_ms, 10_000);
    }
}
