use winnow::Bytes;

/// Complete input stream, the transport hands over whole message buffers.
pub type Stream<'i> = &'i Bytes;

pub fn new(b: &[u8]) -> Stream<'_> {
    Bytes::new(b)
}
