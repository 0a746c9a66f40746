// Parse driver: window iteration, boundary carry, record delivery.
//
// The driver maps fixed-size windows in file order, scans each window
// for line terminators, reassembles lines that span a window boundary
// through a carry buffer, tokenizes each complete line and hands
// (Position, Record) to the caller's callback synchronously. A slow
// consumer simply delays the next window read.

use crate::config::ParserConfig;
use crate::core::field::{Position, Record};
use crate::core::terminator::{terminator_width, CARRIAGE_RETURN, LINE_FEED};
use crate::core::tokenizer::split_record;
use crate::error::Result;
use crate::window::WindowReader;
use log::{debug, info};
use std::path::Path;

/// Streaming parser for delimited text files.
///
/// Single-threaded and forward-only: one mapped window plus one carry
/// buffer live at a time, and records are delivered in ascending file
/// order. Results are byte-identical for any window size. Each `parse`
/// call owns its state, so concurrent calls on independent `Parser`
/// values are safe.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Parser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Scan the file at `path`, invoking `on_record` once per record
    /// before any further window is read.
    ///
    /// Fails with [`crate::ParseError::Io`] if the file cannot be opened
    /// or a window cannot be mapped. An error returned by the callback
    /// aborts the scan and propagates as-is; records already delivered
    /// are not rolled back. A final line with no trailing terminator is
    /// still emitted as the last record.
    pub fn parse<P, F>(&self, path: P, mut on_record: F) -> Result<()>
    where
        P: AsRef<Path>,
        F: FnMut(Position, Record) -> Result<()>,
    {
        let path = path.as_ref();
        info!("parsing {} started", path.display());

        let reader = WindowReader::open(path)?;
        let file_len = reader.len();

        let width = match reader.map_probe()? {
            Some(probe) => terminator_width(&probe),
            None => 1,
        };
        debug!("line terminator width: {width}");

        let separator = self.config.separator;
        let window_size = self.config.window_size.max(1);
        let mut cursor: u64 = 0;
        let mut carry: Vec<u8> = Vec::new();

        while cursor < file_len {
            let want = window_size.min((file_len - cursor) as usize);
            debug!("reading {want} bytes at offset {cursor}");
            let window = reader.map_window(cursor, want)?;
            let bytes = &window[..];

            let mut offset = 0usize;
            let mut line_start = 0usize;

            while offset < bytes.len() {
                let byte = bytes[offset];
                if byte == LINE_FEED || byte == CARRIAGE_RETURN {
                    // The carry is only ever non-empty while scanning the
                    // first line of a window (line_start == 0), so the
                    // record's true start sits carry.len() bytes before
                    // the window.
                    let position = Position::new(
                        cursor + line_start as u64 - carry.len() as u64,
                        cursor + offset as u64,
                    );
                    let record = if carry.is_empty() {
                        split_record(&bytes[line_start..offset], separator)
                    } else {
                        carry.extend_from_slice(&bytes[line_start..offset]);
                        let line = std::mem::take(&mut carry);
                        split_record(&line, separator)
                    };
                    on_record(position, record)?;

                    offset += width;
                    line_start = offset;
                } else {
                    offset += 1;
                }
            }

            // Unterminated remainder spans into the next window.
            if line_start < bytes.len() {
                carry.extend_from_slice(&bytes[line_start..]);
            }

            // Advance by the bytes consumed, not the window length: the
            // terminator skip can step one byte past the window when a
            // CRLF straddles the boundary, and that LF must not be
            // rescanned as an empty record.
            cursor += offset as u64;
        }

        // Last line with no trailing terminator.
        if !carry.is_empty() {
            let position = Position::new(file_len - carry.len() as u64, file_len);
            let line = std::mem::take(&mut carry);
            on_record(position, split_record(&line, separator))?;
        }

        info!("parsing {} finished", path.display());
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use std::io::Write;

    fn fixture(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents).expect("write fixture");
        file
    }

    fn collect(parser: &Parser, path: &std::path::Path) -> Vec<(Position, Vec<String>)> {
        let mut rows = Vec::new();
        parser
            .parse(path, |position, record| {
                let values = record.iter().map(|f| f.value().to_string()).collect();
                rows.push((position, values));
                Ok(())
            })
            .unwrap();
        rows
    }

    #[test]
    fn test_empty_file_yields_no_records() {
        let file = fixture(b"");
        let rows = collect(&Parser::default(), file.path());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file_fails_before_any_callback() {
        let mut called = false;
        let result = Parser::default().parse("/nonexistent/csvscan-input.csv", |_, _| {
            called = true;
            Ok(())
        });
        assert!(matches!(result, Err(ParseError::Io(_))));
        assert!(!called);
    }

    #[test]
    fn test_callback_error_aborts_scan() {
        let file = fixture(b"a\nb\nc\n");
        let mut seen = 0;
        let result = Parser::default().parse(file.path(), |_, _| {
            seen += 1;
            if seen == 2 {
                Err(ParseError::callback("stop"))
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(ParseError::Callback(_))));
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_record_longer_than_window_is_carried() {
        // 10-byte line, 4-byte windows: the line crosses two boundaries.
        let file = fixture(b"abcdefghij\nk\n");
        let parser = Parser::new(ParserConfig::default().with_window_size(4));
        let rows = collect(&parser, file.path());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, vec!["abcdefghij"]);
        assert_eq!(rows[0].0, Position::new(0, 10));
        assert_eq!(rows[1].1, vec!["k"]);
        assert_eq!(rows[1].0, Position::new(11, 12));
    }

    #[test]
    fn test_crlf_straddling_window_boundary() {
        // Window size 4 puts the boundary between \r and \n of "abc\r\n".
        let file = fixture(b"abc\r\nde\r\n");
        let parser = Parser::new(ParserConfig::default().with_window_size(4));
        let rows = collect(&parser, file.path());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, vec!["abc"]);
        assert_eq!(rows[0].0, Position::new(0, 3));
        assert_eq!(rows[1].1, vec!["de"]);
        assert_eq!(rows[1].0, Position::new(5, 7));
    }
}
