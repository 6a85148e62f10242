mod server_config;

pub use server_config::{ServerConfig, DEFAULT_PORT, STATIC_DIR};
