// csvscan - streaming window-based tokenizer for delimited text files
//
// Components:
// - core/terminator: line-ending auto-detection over a bounded probe region
// - core/tokenizer: quote/escape-aware field splitting state machine
// - core/field: record positions and lazily-decoded field values
// - core/encoding: explicit byte-to-text decoding
// - window: sequential read-only memory-mapped file windows
// - parser: the driver joining windows, carry reassembly and callbacks

//! Ingest arbitrarily large delimited files (CSV-like) without loading
//! them into memory: the file is scanned through fixed-size read-only
//! windows, lines spanning a window boundary are reassembled through a
//! carry buffer, and every record is delivered to a callback together
//! with its absolute byte position.
//!
//! ```no_run
//! use csvscan::{Parser, ParserConfig};
//!
//! let parser = Parser::new(ParserConfig::new(";"));
//! parser.parse("dataset.csv", |position, record| {
//!     println!("{}..{}: {} fields", position.start, position.end, record.len());
//!     Ok(())
//! })?;
//! # Ok::<(), csvscan::ParseError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod window;

pub use crate::config::{ParserConfig, DEFAULT_SEPARATOR, DEFAULT_WINDOW_SIZE};
pub use crate::core::{Encoding, Field, Position, Record};
pub use crate::error::{ParseError, Result};
pub use crate::parser::Parser;

use std::path::Path;

/// Convenience entry point: parse `path` with `config`, invoking
/// `on_record` for every record in file order.
pub fn parse<P, F>(path: P, config: ParserConfig, on_record: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(Position, Record) -> Result<()>,
{
    Parser::new(config).parse(path, on_record)
}
