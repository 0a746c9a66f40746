// Record position and field value types.

use super::encoding::Encoding;
use std::sync::OnceLock;

/// Absolute byte span of a record within the source file: inclusive
/// `start`, exclusive `end`, line terminator excluded. `end - start` is
/// the raw line length. Spans are identical for any window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub start: u64,
    pub end: u64,
}

impl Position {
    pub fn new(start: u64, end: u64) -> Self {
        Position { start, end }
    }

    /// Raw line length in bytes, terminator excluded.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One unescaped, unquoted field value.
///
/// Owns its bytes; the record they came from may span two windows, so
/// borrowing from the mapped window is not an option. Text decoding is
/// deferred until first access and cached.
#[derive(Debug, Clone)]
pub struct Field {
    data: Vec<u8>,
    text: OnceLock<String>,
}

impl Field {
    pub fn new(data: Vec<u8>) -> Self {
        Field {
            data,
            text: OnceLock::new(),
        }
    }

    /// Raw field bytes, available independent of any decoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The field decoded as UTF-8 (lossy). Decoded once, cached after.
    pub fn value(&self) -> &str {
        self.text.get_or_init(|| Encoding::Utf8.decode(&self.data))
    }

    /// Decode the field with an explicit encoding. Not cached; the UTF-8
    /// cache behind [`Field::value`] is untouched.
    pub fn decode(&self, encoding: Encoding) -> String {
        encoding.decode(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Field {}

impl From<&[u8]> for Field {
    fn from(data: &[u8]) -> Self {
        Field::new(data.to_vec())
    }
}

/// One parsed line: its fields in source column order.
pub type Record = Vec<Field>;
