// Core primitives for record tokenization

pub mod encoding;
pub mod field;
pub mod terminator;
pub mod tokenizer;

pub use encoding::Encoding;
pub use field::{Field, Position, Record};
pub use terminator::{terminator_width, PROBE_LIMIT};
pub use tokenizer::{split_record, step, Action, State};
