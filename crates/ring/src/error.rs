use thiserror::Error;

use crate::types::Slot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    #[error("ring is empty")]
    EmptyRing,

    /// The slot was present in the sorted sequence but missing from the node
    /// table. Both structures are rebuilt under the same lock, so this means
    /// the ring is corrupted.
    #[error("slot {slot} has no owner node")]
    SlotNotFound { slot: Slot },
}

impl RingError {
    /// `EmptyRing` clears up once a node is added; `SlotNotFound` never does.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        matches!(self, RingError::EmptyRing)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid replicas: {0}")]
    InvalidReplicas(String),

    #[error("{0} not set")]
    MissingVar(&'static str),
}
