/// Five `0xFF` bytes closing an encrypted frame on audio carriers
pub const SENTINEL: [u8; 5] = [0xff; 5];

/// The single zero byte closing text and encrypted frames on image carriers
pub const NULL_TERMINATOR: [u8; 1] = [0];

/// How text and encrypted frames end, this differs per carrier kind.
///
/// Nested image frames carry their length and never need a terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// image carriers: eight zero bits follow every text or encrypted frame
    NullByte,
    /// audio carriers: text ends with its delimiter only, ciphertext with [`SENTINEL`]
    Sentinel,
}

impl Termination {
    pub fn plaintext_suffix(self) -> &'static [u8] {
        match self {
            Termination::NullByte => &NULL_TERMINATOR,
            Termination::Sentinel => &[],
        }
    }

    pub fn ciphertext_suffix(self) -> &'static [u8] {
        match self {
            Termination::NullByte => &NULL_TERMINATOR,
            Termination::Sentinel => &SENTINEL,
        }
    }

    /// the part of `raw` a text delimiter is searched in
    pub fn plaintext_region(self, raw: &[u8]) -> &[u8] {
        match self {
            Termination::NullByte => cut_at(raw, &NULL_TERMINATOR),
            Termination::Sentinel => raw,
        }
    }

    /// Ciphertext runs up to the terminator, or to the end of `raw` when there is none.
    pub fn ciphertext_region(self, raw: &[u8]) -> &[u8] {
        cut_at(raw, self.ciphertext_suffix())
    }
}

/// position of the first occurrence of `needle` in `haystack`
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn cut_at<'a>(raw: &'a [u8], marker: &[u8]) -> &'a [u8] {
    match find(raw, marker) {
        Some(end) => &raw[..end],
        None => raw,
    }
}
