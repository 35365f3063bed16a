use std::fmt;

use serde::{Deserialize, Serialize};
use tagdump_util::encode_hex;

use crate::{classic::ClassicKind, ultralight::UltralightKind};

/// Card subtype across the families the reader handles.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Enum)]
pub enum CardKind {
    Classic(ClassicKind),
    Ultralight(UltralightKind),
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic(kind) => kind.fmt(f),
            Self::Ultralight(kind) => kind.fmt(f),
        }
    }
}

/// How a sector answered the default key.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Enum)]
pub enum SectorAuth {
    KeyA,
    KeyB,
    Failed,
}

/// One block as read from the tag.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct BlockDump {
    pub index: u32,
    pub data: Vec<u8>,
}

/// One sector's outcome. Failed sectors never carry blocks.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SectorDump {
    pub index: u32,
    pub auth: SectorAuth,
    pub blocks: Vec<BlockDump>,
}

impl fmt::Display for SectorDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.auth {
            SectorAuth::KeyA => writeln!(f, "Sector <{}> with KeyA auth succ", self.index)?,
            SectorAuth::KeyB => writeln!(f, "Sector <{}> with KeyB auth succ", self.index)?,
            SectorAuth::Failed => return writeln!(f, "Sector <{}> auth failed", self.index),
        }

        for block in &self.blocks {
            writeln!(f, "  Block <{}> {}", block.index, encode_hex(&block.data))?;
        }

        Ok(())
    }
}

/// Everything read from one card during one discovery event.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct CardSummary {
    pub kind: CardKind,
    pub sector_count: u32,
    pub block_count: u32,
    pub size: u32,
    pub sectors: Vec<SectorDump>,
}

impl CardSummary {
    /// Ultralight tags only report their subtype, no storage layout.
    pub fn ultralight(kind: UltralightKind) -> Self {
        Self {
            kind: CardKind::Ultralight(kind),
            sector_count: 0,
            block_count: 0,
            size: 0,
            sectors: Vec::new(),
        }
    }

    /// The storage section of the text dump.
    pub fn storage_text(&self) -> String {
        format!(
            "Sectors: {}\nBlocks: {}\nSize: {} Bytes",
            self.sector_count, self.block_count, self.size
        )
    }

    /// The per sector authentication and block listing of the text dump.
    pub fn sector_check_text(&self) -> String {
        self.sectors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(index: u32) -> BlockDump {
        BlockDump {
            index,
            data: vec![index as u8; 16],
        }
    }

    #[test]
    fn card_kind_displays_the_subtype_name() {
        assert_eq!(CardKind::Classic(ClassicKind::Plus).to_string(), "Plus");
        assert_eq!(
            CardKind::Ultralight(UltralightKind::UltralightC).to_string(),
            "Ultralight C"
        );
    }

    #[test]
    fn storage_text_lists_counts_and_size() {
        let summary = CardSummary {
            kind: CardKind::Classic(ClassicKind::Classic),
            sector_count: 16,
            block_count: 64,
            size: 1024,
            sectors: Vec::new(),
        };

        assert_eq!(
            summary.storage_text(),
            "Sectors: 16\nBlocks: 64\nSize: 1024 Bytes"
        );
    }

    #[test]
    fn sector_check_text_renders_each_outcome() {
        let summary = CardSummary {
            kind: CardKind::Classic(ClassicKind::Classic),
            sector_count: 3,
            block_count: 12,
            size: 192,
            sectors: vec![
                SectorDump {
                    index: 0,
                    auth: SectorAuth::KeyA,
                    blocks: vec![block(0), block(1)],
                },
                SectorDump {
                    index: 1,
                    auth: SectorAuth::Failed,
                    blocks: Vec::new(),
                },
                SectorDump {
                    index: 2,
                    auth: SectorAuth::KeyB,
                    blocks: vec![block(8)],
                },
            ],
        };

        let expected = "\
Sector <0> with KeyA auth succ
  Block <0> 00000000000000000000000000000000
  Block <1> 01010101010101010101010101010101
Sector <1> auth failed
Sector <2> with KeyB auth succ
  Block <8> 08080808080808080808080808080808
";

        assert_eq!(summary.sector_check_text(), expected);
    }

    #[test]
    fn ultralight_summary_has_no_storage() {
        let summary = CardSummary::ultralight(UltralightKind::Ultralight);

        assert_eq!(summary.kind.to_string(), "Ultralight");
        assert_eq!(summary.sectors.len(), 0);
        assert_eq!(summary.size, 0);
    }
}
