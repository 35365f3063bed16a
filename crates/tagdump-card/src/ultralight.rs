use serde::{Deserialize, Serialize};

/// Card subtype within the Mifare Ultralight family.
///
/// Ultralight tags are read through their own block protocol the core
/// does not speak; only the reported subtype makes it into a summary.
#[derive(
    Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, uniffi::Enum, strum::Display,
)]
pub enum UltralightKind {
    Ultralight,
    #[strum(to_string = "Ultralight C")]
    UltralightC,
    Unknown,
}

impl UltralightKind {
    /// Map the platform's reported type code. Unrecognized codes are
    /// Unknown, never an error.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Ultralight,
            2 => Self::UltralightC,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_match_the_platform_constants() {
        assert_eq!(UltralightKind::from_code(1), UltralightKind::Ultralight);
        assert_eq!(UltralightKind::from_code(2), UltralightKind::UltralightC);
        assert_eq!(UltralightKind::from_code(-1), UltralightKind::Unknown);
        assert_eq!(UltralightKind::from_code(0), UltralightKind::Unknown);
    }

    #[test]
    fn ultralight_c_displays_with_a_space() {
        assert_eq!(UltralightKind::UltralightC.to_string(), "Ultralight C");
        assert_eq!(UltralightKind::Ultralight.to_string(), "Ultralight");
    }
}
