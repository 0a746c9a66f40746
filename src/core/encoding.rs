// Byte slice → String decoders
//
// Pure-Rust decoding for the encodings bulk datasets actually ship in.
// Decoding is always lossy: malformed sequences become U+FFFD rather
// than failing the parse.

/// Source encoding for decoding field bytes to text.
///
/// Passed explicitly into the decode step; there is no process-wide
/// default beyond [`Encoding::Utf8`] being what `Field::value` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Decode `input` to a `String`, replacing malformed sequences.
    pub fn decode(&self, input: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(input).into_owned(),
            Encoding::Latin1 => latin1_to_string(input),
            Encoding::Utf16Le => utf16_to_string(input, false),
            Encoding::Utf16Be => utf16_to_string(input, true),
        }
    }
}

/// Latin-1 (ISO-8859-1): every byte maps directly to the same codepoint.
fn latin1_to_string(input: &[u8]) -> String {
    // Fast check: all-ASCII input is valid UTF-8 as-is
    if input.iter().all(|&b| b < 0x80) {
        return String::from_utf8_lossy(input).into_owned();
    }
    input.iter().map(|&b| b as char).collect()
}

/// UTF-16 (little-endian or big-endian). An odd trailing byte decodes to
/// the replacement character.
fn utf16_to_string(input: &[u8], big_endian: bool) -> String {
    let mut units = Vec::with_capacity(input.len() / 2 + 1);
    let mut chunks = input.chunks_exact(2);
    for pair in &mut chunks {
        let unit = if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        };
        units.push(unit);
    }
    if !chunks.remainder().is_empty() {
        units.push(0xFFFD);
    }
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(Encoding::Utf8.decode(b"hello,world"), "hello,world");
    }

    #[test]
    fn test_utf8_lossy() {
        assert_eq!(Encoding::Utf8.decode(&[b'a', 0xff, b'b']), "a\u{fffd}b");
    }

    #[test]
    fn test_latin1_ascii() {
        assert_eq!(Encoding::Latin1.decode(b"hello"), "hello");
    }

    #[test]
    fn test_latin1_high_bytes() {
        assert_eq!(Encoding::Latin1.decode(&[0xe9, 0xfc]), "éü");
    }

    #[test]
    fn test_utf16_le() {
        assert_eq!(Encoding::Utf16Le.decode(&[0x41, 0x00, 0x42, 0x00]), "AB");
    }

    #[test]
    fn test_utf16_be() {
        assert_eq!(Encoding::Utf16Be.decode(&[0x00, 0x41, 0x00, 0x42]), "AB");
    }

    #[test]
    fn test_utf16_le_surrogate_pair() {
        // U+1F600 is the surrogate pair D83D DE00
        assert_eq!(
            Encoding::Utf16Le.decode(&[0x3D, 0xD8, 0x00, 0xDE]),
            "\u{1F600}"
        );
    }

    #[test]
    fn test_utf16_odd_tail_is_replaced() {
        assert_eq!(Encoding::Utf16Le.decode(&[0x41, 0x00, 0x42]), "A\u{fffd}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Encoding::Utf8.decode(b""), "");
        assert_eq!(Encoding::Latin1.decode(b""), "");
        assert_eq!(Encoding::Utf16Le.decode(b""), "");
        assert_eq!(Encoding::Utf16Be.decode(b""), "");
    }
}
