// Parser configuration.

/// Default window size: 50 MiB.
pub const DEFAULT_WINDOW_SIZE: usize = 1024 * 1024 * 50;
/// Default field separator: comma.
pub const DEFAULT_SEPARATOR: u8 = b',';

/// Immutable per-parse configuration: the window size in bytes and the
/// single field separator byte. Chosen once per parse invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Size in bytes of each mapped file window.
    pub window_size: usize,
    /// Byte delimiting fields within a record.
    pub separator: u8,
}

impl ParserConfig {
    /// Config with the separator given as a one-character string; the
    /// first byte is taken. An empty string falls back to the default
    /// comma separator.
    pub fn new(separator: &str) -> Self {
        ParserConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            separator: separator.bytes().next().unwrap_or(DEFAULT_SEPARATOR),
        }
    }

    /// Config with an explicit separator byte.
    pub fn with_separator(separator: u8) -> Self {
        ParserConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            separator,
        }
    }

    /// Override the window size in bytes.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            separator: DEFAULT_SEPARATOR,
        }
    }
}
