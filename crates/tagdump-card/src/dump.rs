use tracing::{debug, warn};

use crate::{
    classic::{ClassicGeometry, ClassicIo, ClassicKind, KEY_DEFAULT},
    error::TagIoError,
    summary::{BlockDump, CardKind, CardSummary, SectorAuth, SectorDump},
};

/// Outcome of dumping a Mifare Classic tag.
///
/// A transport fault never throws away what was already read; the
/// partial summary rides along with the error so the caller can show
/// it and offer a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassicDump {
    Complete(CardSummary),
    Interrupted {
        partial: CardSummary,
        error: TagIoError,
    },
}

impl ClassicDump {
    pub fn summary(&self) -> &CardSummary {
        match self {
            Self::Complete(summary) => summary,
            Self::Interrupted { partial, .. } => partial,
        }
    }

    pub fn error(&self) -> Option<&TagIoError> {
        match self {
            Self::Complete(_) => None,
            Self::Interrupted { error, .. } => Some(error),
        }
    }
}

/// Walk every sector in ascending order, authenticate with the factory
/// default key as KeyA then KeyB, and read the whole sector when a key
/// is accepted.
///
/// Nothing but the default key is ever tried, key recovery is out of
/// scope. A refused sector is recorded with no blocks and the walk
/// continues; a transport fault stops the walk and returns everything
/// read so far next to the error.
pub fn dump_classic(io: &mut dyn ClassicIo, geometry: ClassicGeometry) -> ClassicDump {
    let kind = ClassicKind::from_code(geometry.type_code);
    let mut summary = CardSummary {
        kind: CardKind::Classic(kind),
        sector_count: geometry.sector_count,
        block_count: geometry.block_count,
        size: geometry.size,
        sectors: Vec::new(),
    };

    for sector in 0..io.sector_count() {
        let auth = match authenticate_sector(io, sector) {
            Ok(auth) => auth,
            Err(error) => {
                warn!("dump aborted authenticating sector {sector}: {error}");
                return ClassicDump::Interrupted {
                    partial: summary,
                    error,
                };
            }
        };

        if auth == SectorAuth::Failed {
            debug!("sector {sector} refused the default key");
            summary.sectors.push(SectorDump {
                index: sector,
                auth,
                blocks: Vec::new(),
            });
            continue;
        }

        let mut dump = SectorDump {
            index: sector,
            auth,
            blocks: Vec::new(),
        };

        let first_block = io.sector_to_block(sector);
        for offset in 0..io.block_count_in_sector(sector) {
            let block = first_block + offset;

            match io.read_block(block) {
                Ok(data) => dump.blocks.push(BlockDump {
                    index: block,
                    data: data.to_vec(),
                }),
                Err(error) => {
                    // keep the blocks this sector gave up before the fault
                    warn!("dump aborted reading block {block}: {error}");
                    summary.sectors.push(dump);
                    return ClassicDump::Interrupted {
                        partial: summary,
                        error,
                    };
                }
            }
        }

        summary.sectors.push(dump);
    }

    ClassicDump::Complete(summary)
}

fn authenticate_sector(io: &mut dyn ClassicIo, sector: u32) -> Result<SectorAuth, TagIoError> {
    if io.authenticate_key_a(sector, &KEY_DEFAULT)? {
        return Ok(SectorAuth::KeyA);
    }

    if io.authenticate_key_b(sector, &KEY_DEFAULT)? {
        return Ok(SectorAuth::KeyB);
    }

    Ok(SectorAuth::Failed)
}
