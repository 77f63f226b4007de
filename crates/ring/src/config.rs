use std::env;

use crate::error::ConfigError;

pub const DEFAULT_REPLICAS: usize = 128;

pub const REPLICAS_VAR: &str = "RING_REPLICAS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingConfig {
    /// Virtual nodes placed on the ring for every real node.
    pub replicas: usize,
}

impl RingConfig {
    pub fn new(replicas: usize) -> Self {
        Self { replicas }
    }

    /// Reads `RING_REPLICAS`, falling back to the default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_replicas_var(env::var(REPLICAS_VAR).ok().as_deref())
    }

    pub fn from_replicas_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        let replicas: usize = raw
            .parse()
            .map_err(|_| ConfigError::InvalidReplicas(format!("{REPLICAS_VAR}={raw}")))?;

        if replicas == 0 {
            return Err(ConfigError::InvalidReplicas(format!(
                "{REPLICAS_VAR} must be positive"
            )));
        }

        Ok(Self { replicas })
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
        }
    }
}
