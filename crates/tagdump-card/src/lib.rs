pub mod classic;
pub mod dump;
pub mod error;
pub mod ffi;
pub mod isodep;
pub mod summary;
pub mod ultralight;

uniffi::setup_scaffolding!();

pub use classic::{
    BLOCK_SIZE, ClassicGeometry, ClassicIo, ClassicKind, KEY_DEFAULT,
    KEY_MIFARE_APPLICATION_DIRECTORY, KEY_NFC_FORUM,
};
pub use dump::{ClassicDump, dump_classic};
pub use error::TagIoError;
pub use isodep::{IsoDepIo, SELECT_APPLET_APDU, select_applet};
pub use summary::{BlockDump, CardKind, CardSummary, SectorAuth, SectorDump};
pub use ultralight::UltralightKind;
