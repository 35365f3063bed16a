/// Transport fault from the tag session.
///
/// Every radio call can fail at any time, most commonly because the
/// tag left the field mid operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TagIoError {
    #[error("unable to connect to tag: {0}")]
    Connect(String),

    #[error("unable to authenticate sector {sector}: {reason}")]
    Authenticate { sector: u32, reason: String },

    #[error("unable to read block {block}: {reason}")]
    Read { block: u32, reason: String },

    #[error("transceive failed: {0}")]
    Transceive(String),
}
