use std::env;

use app_ring::{ConfigError, RingConfig};

pub const NODES_VAR: &str = "RING_NODES";

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub ring: RingConfig,
    pub nodes: Vec<String>,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let nodes_var = env::var(NODES_VAR).map_err(|_| ConfigError::MissingVar(NODES_VAR))?;

        Ok(Self {
            ring: RingConfig::from_env()?,
            nodes: parse_nodes(&nodes_var),
        })
    }
}

pub fn parse_nodes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_nodes;

    #[test]
    fn parse_nodes_drops_blanks_and_trims() {
        let nodes = parse_nodes(" 10.0.0.1:6379, ,10.0.0.2:6379,");
        assert_eq!(nodes, vec!["10.0.0.1:6379", "10.0.0.2:6379"]);
    }

    #[test]
    fn parse_nodes_of_empty_string_is_empty() {
        assert!(parse_nodes("").is_empty());
    }
}
