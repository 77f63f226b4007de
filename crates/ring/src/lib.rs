pub mod config;
pub mod error;
pub mod hasher;
pub mod ring;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::RingConfig;
pub use error::ConfigError;
pub use error::RingError;
pub use hasher::Crc32Hasher;
pub use hasher::SlotHasher;
pub use ring::Ring;
pub use types::RingResult;
pub use types::Slot;
