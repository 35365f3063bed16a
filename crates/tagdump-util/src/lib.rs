uniffi::setup_scaffolding!();

/// Failure turning a hex string back into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum HexDecodeError {
    #[error("hex string has odd length")]
    OddLength,

    #[error("invalid hex digit at index {index}")]
    InvalidDigit { index: u64 },
}

type Result<T, E = HexDecodeError> = std::result::Result<T, E>;

/// Two lowercase digits per byte, in input order; empty input gives an
/// empty string.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Inverse of [`encode_hex`], accepting either digit case.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str).map_err(|error| match error {
        hex::FromHexError::InvalidHexCharacter { index, .. } => {
            HexDecodeError::InvalidDigit { index: index as u64 }
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            HexDecodeError::OddLength
        }
    })
}

mod ffi {
    use super::HexDecodeError;

    #[uniffi::export]
    fn hex_encode(bytes: Vec<u8>) -> String {
        super::encode_hex(&bytes)
    }

    #[uniffi::export]
    fn hex_decode(hex: &str) -> Result<Vec<u8>, HexDecodeError> {
        super::decode_hex(hex)
    }

    #[uniffi::export]
    fn hex_to_utf8_string(hex: &str) -> Option<String> {
        let bytes = super::decode_hex(hex).ok()?;
        String::from_utf8(bytes).ok()
    }
}
