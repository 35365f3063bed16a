/// Type name format codes, the low three bits of the record header.
#[derive(Debug, Copy, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum NdefType {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl NdefType {
    /// Map a TNF code, the caller has already masked it to 3 bits.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tnf_codes_map_in_wire_order() {
        assert_eq!(NdefType::from_code(0), NdefType::Empty);
        assert_eq!(NdefType::from_code(1), NdefType::WellKnown);
        assert_eq!(NdefType::from_code(2), NdefType::Mime);
        assert_eq!(NdefType::from_code(3), NdefType::AbsoluteUri);
        assert_eq!(NdefType::from_code(4), NdefType::External);
        assert_eq!(NdefType::from_code(5), NdefType::Unknown);
        assert_eq!(NdefType::from_code(6), NdefType::Unchanged);
        assert_eq!(NdefType::from_code(7), NdefType::Reserved);
    }
}
