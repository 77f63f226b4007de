use app_ring::{ConfigError, RingError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ring error: {0}")]
    Ring(#[from] RingError),
}
