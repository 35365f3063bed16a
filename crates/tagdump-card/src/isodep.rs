use tracing::debug;

use crate::error::TagIoError;

type Result<T, E = TagIoError> = std::result::Result<T, E>;

/// SELECT by name for the one applet the reader talks to: class 0x00,
/// INS 0xA4 (select), P1 0x04 (by AID), followed by the 7 byte AID.
pub const SELECT_APPLET_APDU: [u8; 12] = [
    0x00, 0xA4, 0x04, 0x00, 0x07, 0xA0, 0x00, 0x00, 0x02, 0x47, 0x10, 0x02,
];

/// An open ISO-DEP channel. Implemented by the platform transport,
/// lifecycle owned by the caller.
pub trait IsoDepIo {
    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>>;
}

/// Send the fixed SELECT once and hand back the raw response.
///
/// The response is not interpreted, not even the status word; the
/// caller renders it as hex.
pub fn select_applet(io: &mut dyn IsoDepIo) -> Result<Vec<u8>> {
    let response = io.transceive(&SELECT_APPLET_APDU)?;
    debug!("select applet answered with {} bytes", response.len());

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeIsoDep {
        requests: Vec<Vec<u8>>,
        response: Result<Vec<u8>>,
    }

    impl IsoDepIo for FakeIsoDep {
        fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
            self.requests.push(request.to_vec());
            self.response.clone()
        }
    }

    #[test]
    fn sends_the_fixed_select_once() {
        let mut channel = FakeIsoDep {
            requests: Vec::new(),
            response: Ok(vec![0x6F, 0x0A, 0x90, 0x00]),
        };

        let response = select_applet(&mut channel).unwrap();

        assert_eq!(channel.requests.len(), 1);
        assert_eq!(channel.requests[0], SELECT_APPLET_APDU);
        assert_eq!(response, vec![0x6F, 0x0A, 0x90, 0x00]);
    }

    #[test]
    fn transport_fault_passes_through() {
        let mut channel = FakeIsoDep {
            requests: Vec::new(),
            response: Err(TagIoError::Transceive("card moved away".into())),
        };

        let error = select_applet(&mut channel).unwrap_err();
        assert_eq!(error, TagIoError::Transceive("card moved away".into()));
    }
}
