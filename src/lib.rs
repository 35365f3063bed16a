pub(crate) mod logging;

pub mod ffi;
pub mod report;
pub mod scan;
pub mod tech;

uniffi::setup_scaffolding!();

pub use report::ScanReport;
pub use scan::{TagReport, TagSession, scan};
pub use tech::TechKind;
