use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::proxy::BackendProxy;
use quickpoll_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: ServerConfig,
    pub proxy: Option<Arc<BackendProxy>>,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Result<Self, AppError> {
        let proxy = match &config.backend_url {
            Some(target) => {
                tracing::info!("Proxying {} to {}", crate::infrastructure::proxy::API_PREFIX, target);
                Some(Arc::new(BackendProxy::new(target.clone())?))
            }
            None => {
                tracing::info!("BACKEND_URL not set, API proxy disabled");
                None
            }
        };

        Ok(Self { config, proxy })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(ServerConfig::from_env()?)
    }
}
