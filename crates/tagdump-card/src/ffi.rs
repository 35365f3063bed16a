use crate::{
    classic::ClassicKind,
    summary::{CardKind, CardSummary},
    ultralight::UltralightKind,
};

#[uniffi::export]
pub fn classic_kind_from_code(code: i32) -> ClassicKind {
    ClassicKind::from_code(code)
}

#[uniffi::export]
pub fn ultralight_kind_from_code(code: i32) -> UltralightKind {
    UltralightKind::from_code(code)
}

#[uniffi::export]
pub fn card_kind_name(kind: CardKind) -> String {
    kind.to_string()
}

#[uniffi::export]
pub fn summary_storage_text(summary: CardSummary) -> String {
    summary.storage_text()
}

#[uniffi::export]
pub fn summary_sector_check_text(summary: CardSummary) -> String {
    summary.sector_check_text()
}
