use tagdump_card::{
    CardSummary, ClassicDump, ClassicGeometry, ClassicIo, IsoDepIo, TagIoError, UltralightKind,
    dump_classic, select_applet,
};
use tracing::{debug, warn};

/// One discovered tag, wrapped by the transport into the variant the
/// core knows how to talk to. Built once per discovery event; the
/// transport keeps ownership of connect and close.
pub enum TagSession {
    MifareClassic {
        io: Box<dyn ClassicIo>,
        geometry: ClassicGeometry,
    },
    MifareUltralight {
        type_code: i32,
    },
    IsoDep {
        io: Box<dyn IsoDepIo>,
    },
    Unsupported,
}

/// What one scan produced for the session's technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagReport {
    MifareClassic(ClassicDump),
    MifareUltralight(CardSummary),
    IsoDep(Result<Vec<u8>, TagIoError>),
    Unsupported,
}

/// Run the one operation the core knows for this kind of session.
///
/// Faults never escalate: a classic dump keeps its partial summary and
/// an ISO-DEP fault is carried in the report for the caller to decide
/// whether to prompt a retry.
pub fn scan(session: &mut TagSession) -> TagReport {
    match session {
        TagSession::MifareClassic { io, geometry } => {
            let geometry = *geometry;
            debug!(
                "dumping mifare classic with {} sectors",
                geometry.sector_count
            );

            TagReport::MifareClassic(dump_classic(io.as_mut(), geometry))
        }

        TagSession::MifareUltralight { type_code } => {
            let kind = UltralightKind::from_code(*type_code);
            debug!("ultralight tag, kind {kind}");

            TagReport::MifareUltralight(CardSummary::ultralight(kind))
        }

        TagSession::IsoDep { io } => {
            let response = select_applet(io.as_mut());
            if let Err(error) = &response {
                warn!("select applet failed: {error}");
            }

            TagReport::IsoDep(response)
        }

        TagSession::Unsupported => TagReport::Unsupported,
    }
}
