use serde::{Deserialize, Serialize};

/// Tag technologies as the platform names them.
///
/// The transport reports fully qualified class names; only the last
/// segment identifies the technology, and names this list does not
/// know are kept verbatim instead of being dropped.
#[derive(
    Debug,
    Clone,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    uniffi::Enum,
    strum::Display,
    strum::EnumString,
)]
pub enum TechKind {
    IsoDep,
    MifareClassic,
    MifareUltralight,
    Ndef,
    NdefFormatable,
    NfcA,
    NfcB,
    NfcBarcode,
    NfcF,
    NfcV,
    #[strum(default)]
    Unknown(String),
}

impl TechKind {
    pub fn from_class_name(class_name: &str) -> Self {
        let name = class_name.rsplit('.').next().unwrap_or(class_name);

        name.parse()
            .unwrap_or_else(|_| Self::Unknown(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_reduce_to_their_last_segment() {
        assert_eq!(
            TechKind::from_class_name("android.nfc.tech.IsoDep"),
            TechKind::IsoDep
        );
        assert_eq!(
            TechKind::from_class_name("android.nfc.tech.MifareClassic"),
            TechKind::MifareClassic
        );
        assert_eq!(
            TechKind::from_class_name("android.nfc.tech.NdefFormatable"),
            TechKind::NdefFormatable
        );
    }

    #[test]
    fn bare_names_parse_too() {
        assert_eq!(TechKind::from_class_name("NfcBarcode"), TechKind::NfcBarcode);
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let kind = TechKind::from_class_name("com.example.nfc.FancyTech");

        assert_eq!(kind, TechKind::Unknown("FancyTech".to_string()));
        assert_eq!(kind.to_string(), "FancyTech");
    }

    #[test]
    fn display_matches_the_platform_names() {
        assert_eq!(TechKind::IsoDep.to_string(), "IsoDep");
        assert_eq!(TechKind::MifareUltralight.to_string(), "MifareUltralight");
    }
}
