use crate::tech::TechKind;

#[uniffi::export]
pub fn init_logging() {
    crate::logging::init();
}

#[uniffi::export]
pub fn tech_kind_from_class_name(class_name: String) -> TechKind {
    TechKind::from_class_name(&class_name)
}
