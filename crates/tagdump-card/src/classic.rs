use serde::{Deserialize, Serialize};

use crate::error::TagIoError;

type Result<T, E = TagIoError> = std::result::Result<T, E>;

/// Mifare Classic blocks are always 16 bytes.
pub const BLOCK_SIZE: usize = 16;

/// Factory default key, the only key the dumper ever tries.
pub const KEY_DEFAULT: [u8; 6] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// Mifare Application Directory key A.
pub const KEY_MIFARE_APPLICATION_DIRECTORY: [u8; 6] = [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5];

/// NFC Forum well known key for NDEF formatted sectors.
pub const KEY_NFC_FORUM: [u8; 6] = [0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7];

/// Total sizes in bytes as the platform reports them.
pub const SIZE_MINI: u32 = 320;
pub const SIZE_1K: u32 = 1024;
pub const SIZE_2K: u32 = 2048;
pub const SIZE_4K: u32 = 4096;

/// Card subtype within the Mifare Classic family.
#[derive(
    Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Enum, strum::Display,
)]
pub enum ClassicKind {
    Classic,
    Plus,
    Pro,
    Unknown,
}

impl ClassicKind {
    /// Map the platform's reported type code. Unrecognized codes are
    /// Unknown, never an error.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Classic,
            1 => Self::Plus,
            2 => Self::Pro,
            _ => Self::Unknown,
        }
    }
}

/// Blocks in a sector: the first 32 sectors hold 4 blocks each, the
/// extended sectors of a 4K card hold 16.
pub fn block_count_in_sector(sector: u32) -> u32 {
    if sector < 32 { 4 } else { 16 }
}

/// First absolute block index of a sector.
pub fn sector_to_block(sector: u32) -> u32 {
    if sector < 32 {
        sector * 4
    } else {
        128 + (sector - 32) * 16
    }
}

/// Layout as reported by an open session, captured by the transport
/// before the dump starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct ClassicGeometry {
    pub type_code: i32,
    pub sector_count: u32,
    pub block_count: u32,
    pub size: u32,
}

/// An open Mifare Classic session.
///
/// Implemented by the platform transport. Sessions arrive connected
/// and the caller closes them on every exit path; the dumper only
/// issues authenticate and read calls, each of which may fail with a
/// transport fault.
pub trait ClassicIo {
    fn sector_count(&self) -> u32;

    /// Key refused is `Ok(false)`, a radio fault is an error.
    fn authenticate_key_a(&mut self, sector: u32, key: &[u8; 6]) -> Result<bool>;
    fn authenticate_key_b(&mut self, sector: u32, key: &[u8; 6]) -> Result<bool>;

    fn read_block(&mut self, block: u32) -> Result<[u8; BLOCK_SIZE]>;

    fn block_count_in_sector(&self, sector: u32) -> u32 {
        block_count_in_sector(sector)
    }

    fn sector_to_block(&self, sector: u32) -> u32 {
        sector_to_block(sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_match_the_platform_constants() {
        assert_eq!(ClassicKind::from_code(0), ClassicKind::Classic);
        assert_eq!(ClassicKind::from_code(1), ClassicKind::Plus);
        assert_eq!(ClassicKind::from_code(2), ClassicKind::Pro);
        assert_eq!(ClassicKind::from_code(-1), ClassicKind::Unknown);
        assert_eq!(ClassicKind::from_code(99), ClassicKind::Unknown);
    }

    #[test]
    fn small_sectors_hold_four_blocks() {
        assert_eq!(block_count_in_sector(0), 4);
        assert_eq!(block_count_in_sector(31), 4);
        assert_eq!(block_count_in_sector(32), 16);
        assert_eq!(block_count_in_sector(39), 16);
    }

    #[test]
    fn sector_addressing_matches_the_4k_layout() {
        assert_eq!(sector_to_block(0), 0);
        assert_eq!(sector_to_block(1), 4);
        assert_eq!(sector_to_block(31), 124);
        assert_eq!(sector_to_block(32), 128);
        assert_eq!(sector_to_block(33), 144);
        assert_eq!(sector_to_block(39), 240);
    }
}
