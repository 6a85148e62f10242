use quickpoll_errors::AppError;
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;
pub const STATIC_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin that `/api` requests are forwarded to. No proxy when unset.
    pub backend_url: Option<Url>,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(env::var("PORT").ok(), env::var("BACKEND_URL").ok())
    }

    pub fn from_vars(port: Option<String>, backend_url: Option<String>) -> Result<Self, AppError> {
        let port = match port.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT {raw:?}: {e}")))?,
            _ => {
                tracing::info!("PORT not set, using default: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let backend_url = match backend_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(
                Url::parse(raw).map_err(|e| AppError::Config(format!("BACKEND_URL {raw:?}: {e}")))?,
            ),
            _ => None,
        };

        Ok(Self {
            port,
            backend_url,
            static_dir: PathBuf::from(STATIC_DIR),
        })
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_url, None);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_vars(
            Some("3000".to_string()),
            Some("http://backend:8000".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.backend_url.map(|u| u.to_string()),
            Some("http://backend:8000/".to_string())
        );
    }

    #[test]
    fn test_empty_backend_url_disables_proxy() {
        let config = ServerConfig::from_vars(None, Some(String::new())).unwrap();
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(
            ServerConfig::from_vars(Some("eighty".to_string()), None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            ServerConfig::from_vars(None, Some("not a url".to_string())),
            Err(AppError::Config(_))
        ));
    }
}
