use crate::{
    NdefError, decode_ndef_message, payload::TextPayload, record::NdefRecord,
    text::decode_text_records,
};

#[uniffi::export]
pub fn ndef_decode_message(bytes: Vec<u8>) -> Result<Vec<NdefRecord>, NdefError> {
    decode_ndef_message(&bytes)
}

#[uniffi::export]
pub fn ndef_text_records(records: Vec<NdefRecord>) -> Vec<TextPayload> {
    decode_text_records(&records)
}

#[uniffi::export]
pub fn ndef_message_texts(bytes: Vec<u8>) -> Result<Vec<TextPayload>, NdefError> {
    let records = decode_ndef_message(&bytes)?;
    Ok(decode_text_records(&records))
}
