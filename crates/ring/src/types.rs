use crate::error::RingError;

/// A point on the `[0, 2^32)` hash circle.
pub type Slot = u32;

pub type RingResult<T> = Result<T, RingError>;
