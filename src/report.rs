use std::fmt;

use tagdump_ndef::TextPayload;
use tagdump_util::encode_hex;

use crate::{scan::TagReport, tech::TechKind};

/// Everything one discovery event produced, assembled by the caller
/// from the tag id, the technology list, the scan outcome, and the
/// decoded NDEF texts.
///
/// The `Display` rendering is the classic reader dump: one titled
/// section per concern, blank lines between sections, sections left
/// empty when the technology did not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub id: Option<Vec<u8>>,
    pub technologies: Vec<TechKind>,
    pub report: TagReport,
    pub texts: Vec<TextPayload>,
}

impl ScanReport {
    fn technologies_line(&self) -> String {
        self.technologies
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn card_type_line(&self) -> String {
        match &self.report {
            TagReport::MifareClassic(dump) => dump.summary().kind.to_string(),
            TagReport::MifareUltralight(summary) => summary.kind.to_string(),
            TagReport::IsoDep(_) | TagReport::Unsupported => String::new(),
        }
    }

    fn card_response_line(&self) -> String {
        match &self.report {
            TagReport::IsoDep(Ok(response)) => encode_hex(response),
            _ => String::new(),
        }
    }

    fn ndef_lines(&self) -> String {
        self.texts
            .iter()
            .map(|text| format!(" - {}, {}, {}\n", text.language, text.format, text.text))
            .collect()
    }

    fn storage_lines(&self) -> String {
        match &self.report {
            TagReport::MifareClassic(dump) => dump.summary().storage_text(),
            _ => String::new(),
        }
    }

    fn sector_check_lines(&self) -> String {
        match &self.report {
            TagReport::MifareClassic(dump) => dump.summary().sector_check_text(),
            _ => String::new(),
        }
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            writeln!(f, "ID (hex): {}", encode_hex(id))?;
        }

        write!(f, "\nTechnologies Available: \n{}\n", self.technologies_line())?;
        write!(f, "\nCard Type: \n{}\n", self.card_type_line())?;
        write!(f, "\nCard response: \n{}\n", self.card_response_line())?;
        write!(f, "\nNDEF Messages: \n{}\n", self.ndef_lines())?;
        write!(f, "\nStorage: \n{}\n", self.storage_lines())?;
        write!(f, "\nSector check: \n{}\n", self.sector_check_lines())?;

        Ok(())
    }
}
