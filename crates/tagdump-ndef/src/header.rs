use crate::ndef_type::NdefType;

/// Flags and length fields from the leading bytes of an NDEF record.
///
/// The first byte packs five flag bits and the 3 bit type name format,
/// the lengths that follow size the type, id, and payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}
