use crc::{CRC_32_ISO_HDLC, Crc};

use crate::types::Slot;

// ISO-HDLC is the IEEE 802.3 polynomial (zlib, Go's ChecksumIEEE).
const CRC32_ALGO: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

pub trait SlotHasher: Send + Sync {
    fn hash(&self, data: &[u8]) -> Slot;
}

impl<F> SlotHasher for F
where
    F: Fn(&[u8]) -> Slot + Send + Sync,
{
    #[inline]
    fn hash(&self, data: &[u8]) -> Slot {
        self(data)
    }
}

/// Default hasher: CRC-32 checksum of the raw bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Crc32Hasher;

impl Crc32Hasher {
    pub fn new() -> Self {
        Self {}
    }
}

impl SlotHasher for Crc32Hasher {
    #[inline]
    fn hash(&self, data: &[u8]) -> Slot {
        CRC32_ALGO.checksum(data)
    }
}
