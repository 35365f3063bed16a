use tagdump_util::encode_hex;
use tracing::debug;

use crate::{
    payload::{TextPayload, TextPayloadFormat},
    record::NdefRecord,
};

type Result<T, E = TextRecordError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TextRecordError {
    #[error("payload is empty")]
    EmptyPayload,

    #[error("language code length {length} overruns payload of {payload_length} bytes")]
    LanguageCodeOverrun { length: u8, payload_length: u64 },

    #[error("language code is not ascii")]
    NonAsciiLanguageCode,

    #[error("text is not valid utf-8")]
    InvalidUtf8,

    #[error("text is not valid utf-16")]
    InvalidUtf16,
}

/// Decode a well known TEXT record payload.
///
/// The payload starts with a status byte: bit 7 selects the encoding
/// (clear for UTF-8, set for UTF-16), bit 6 is reserved and ignored,
/// and the low six bits give the length of the language code that
/// follows. The rest of the payload is the text itself.
pub fn decode_text_payload(payload: &[u8]) -> Result<TextPayload> {
    let (&status, rest) = payload
        .split_first()
        .ok_or(TextRecordError::EmptyPayload)?;

    let format = if status & 0x80 == 0 {
        TextPayloadFormat::Utf8
    } else {
        TextPayloadFormat::Utf16
    };

    let language_length = (status & 0x3F) as usize;
    if language_length > rest.len() {
        return Err(TextRecordError::LanguageCodeOverrun {
            length: language_length as u8,
            payload_length: payload.len() as u64,
        });
    }

    let (language, text) = rest.split_at(language_length);
    if !language.is_ascii() {
        return Err(TextRecordError::NonAsciiLanguageCode);
    }

    let text = match format {
        TextPayloadFormat::Utf8 => {
            String::from_utf8(text.to_vec()).map_err(|_| TextRecordError::InvalidUtf8)?
        }
        TextPayloadFormat::Utf16 => decode_utf16_text(text)?,
    };

    Ok(TextPayload {
        format,
        language: String::from_utf8_lossy(language).to_string(),
        text,
    })
}

/// Decode the TEXT records of a message, in message order.
///
/// Records of any other type are passed over, and a TEXT record whose
/// payload fails to decode is dropped rather than failing the whole
/// message.
pub fn decode_text_records(records: &[NdefRecord]) -> Vec<TextPayload> {
    records
        .iter()
        .filter(|record| record.is_text())
        .filter_map(|record| match decode_text_payload(&record.payload) {
            Ok(payload) => Some(payload),
            Err(error) => {
                debug!(
                    "skipping undecodable text record ({error}): {}",
                    encode_hex(&record.payload)
                );
                None
            }
        })
        .collect()
}

// UTF-16 here follows the platform charset decoder: big endian unless a
// byte order mark says otherwise, and the mark itself is consumed.
fn decode_utf16_text(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(TextRecordError::InvalidUtf16);
    }

    let (bytes, big_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        _ => (bytes, true),
    };

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|_| TextRecordError::InvalidUtf16)
}
