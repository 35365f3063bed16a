pub mod ffi;
pub mod header;
pub mod ndef_type;
pub mod parser;
pub mod payload;
pub mod record;
pub mod text;

use tracing::debug;

uniffi::setup_scaffolding!();

pub use header::NdefHeader;
pub use ndef_type::NdefType;
pub use payload::{TextPayload, TextPayloadFormat};
pub use record::NdefRecord;
pub use text::{TextRecordError, decode_text_payload, decode_text_records};

/// NFC Forum well known type for TEXT records.
pub const RTD_TEXT: &[u8] = b"T";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum NdefError {
    #[error("malformed ndef message: {0}")]
    Malformed(String),
}

/// Split a raw NDEF message into its records.
pub fn decode_ndef_message(bytes: &[u8]) -> Result<Vec<NdefRecord>, NdefError> {
    let mut stream = parser::stream::new(bytes);

    let records = parser::parse_ndef_message(&mut stream)
        .map_err(|error| NdefError::Malformed(format!("error parsing records: {error}")))?;

    debug!("decoded ndef message with {} record(s)", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_message_is_malformed() {
        let result = decode_ndef_message(&[0xD1, 0x01]);
        assert!(matches!(result, Err(NdefError::Malformed(_))));
    }

    #[test]
    fn decode_then_extract_text() {
        let message = [
            0xD1, 0x01, 0x08, 0x54, 0x02, b'e', b'n', b'h', b'e', b'l', b'l', b'o',
        ];

        let records = decode_ndef_message(&message).unwrap();
        let texts = decode_text_records(&records);

        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].language, "en");
        assert_eq!(texts[0].text, "hello");
    }
}
