use crate::{RTD_TEXT, header::NdefHeader, ndef_type::NdefType};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Well known TEXT record, type "T".
    pub fn is_text(&self) -> bool {
        self.header.type_name_format == NdefType::WellKnown && self.type_ == RTD_TEXT
    }
}

// only used for uniffi
mod ffi {
    use super::*;
    use crate::{payload::TextPayload, text::decode_text_payload};

    #[derive(Debug, Clone, PartialEq, Eq, uniffi::Object)]
    pub struct NdefRecordReader {
        record: NdefRecord,
    }

    #[uniffi::export]
    impl NdefRecordReader {
        #[uniffi::constructor]
        pub fn new(record: NdefRecord) -> Self {
            Self { record }
        }

        pub fn type_(&self) -> Option<String> {
            String::from_utf8(self.record.type_.clone()).ok()
        }

        pub fn id(&self) -> Option<String> {
            let id = self.record.id.as_ref()?;
            String::from_utf8(id.clone()).ok()
        }

        pub fn text(&self) -> Option<TextPayload> {
            if !self.record.is_text() {
                return None;
            }

            decode_text_payload(&self.record.payload).ok()
        }
    }
}
