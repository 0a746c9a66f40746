// Quote/escape-aware field splitting state machine.
//
// The machine is a pure function over (state, byte) so it can be tested
// without any file I/O. `split_record` drives it over one complete line
// and materializes the fields.

use super::field::{Field, Record};

/// Quote delimiter byte (`"`).
pub const DOUBLE_QUOTE: u8 = b'"';
/// Escape byte (`\`). The byte following it is always a literal value byte.
pub const ESCAPE: u8 = b'\\';

/// Tokenizer state for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Plain field content; separators split here.
    Field,
    /// Inside a quoted field; separators are literal.
    Quoted,
    /// The previous byte was the escape byte. `quoted` is the state to
    /// return to once the escaped byte has been consumed.
    Escaped { quoted: bool },
}

/// What the driver must do with the current byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Plain value byte, nothing to do.
    Literal,
    /// Separator outside quotes: close the current field.
    Split,
    /// Opening quote: exclude it from the field span.
    OpenQuote,
    /// Closing quote.
    CloseQuote,
    /// Escape marker: drop this byte, take the next one literally.
    Escape,
}

/// Advance the state machine by one byte.
#[inline]
pub fn step(state: State, byte: u8, separator: u8) -> (State, Action) {
    match state {
        State::Escaped { quoted } => {
            let next = if quoted { State::Quoted } else { State::Field };
            (next, Action::Literal)
        }
        State::Field => {
            if byte == separator {
                (State::Field, Action::Split)
            } else if byte == DOUBLE_QUOTE {
                (State::Quoted, Action::OpenQuote)
            } else if byte == ESCAPE {
                (State::Escaped { quoted: false }, Action::Escape)
            } else {
                (State::Field, Action::Literal)
            }
        }
        State::Quoted => {
            if byte == DOUBLE_QUOTE {
                (State::Field, Action::CloseQuote)
            } else if byte == ESCAPE {
                (State::Escaped { quoted: true }, Action::Escape)
            } else {
                (State::Quoted, Action::Literal)
            }
        }
    }
}

/// Split one raw line (terminator already stripped) into fields.
///
/// Field spans are tracked as `[start + addend, index - addend)` where
/// `addend` counts the quotes opened since the field started, so quote
/// delimiters never land in the value. Escape marker bytes are excised
/// from the value; the byte after each marker is kept verbatim.
///
/// The trailing field is always pushed, so the result holds exactly
/// `separator_count + 1` fields and an empty line yields one empty field.
///
/// Unbalanced quotes are tolerated, not rejected: a field that ends with
/// the quote still open closes with whatever addend it reached, which
/// trims one trailing byte per unclosed quote. Callers that need strict
/// quoting must validate upstream.
pub fn split_record(line: &[u8], separator: u8) -> Record {
    let mut fields = Vec::with_capacity(8);
    let mut state = State::Field;
    let mut start = 0usize;
    let mut addend = 0usize;
    // Positions of escape markers inside the current field.
    let mut escapes: Vec<usize> = Vec::new();

    for (index, &byte) in line.iter().enumerate() {
        let (next, action) = step(state, byte, separator);
        state = next;

        match action {
            Action::Split => {
                fields.push(make_field(
                    line,
                    start + addend,
                    index.saturating_sub(addend),
                    &escapes,
                ));
                start = index + 1;
                addend = 0;
                escapes.clear();
            }
            Action::OpenQuote => addend += 1,
            Action::Escape => escapes.push(index),
            Action::CloseQuote | Action::Literal => {}
        }
    }

    fields.push(make_field(
        line,
        start + addend,
        line.len().saturating_sub(addend),
        &escapes,
    ));

    fields
}

/// Materialize the field value for the span `[lo, hi)`, excising any
/// escape markers that fall inside it. An inverted span yields an empty
/// field (unbalanced quoting can produce one).
fn make_field(line: &[u8], lo: usize, hi: usize, escapes: &[usize]) -> Field {
    if lo >= hi {
        return Field::new(Vec::new());
    }

    if escapes.is_empty() {
        return Field::new(line[lo..hi].to_vec());
    }

    let mut data = Vec::with_capacity(hi - lo);
    let mut cursor = lo;
    for &pos in escapes {
        if pos < lo || pos >= hi {
            continue;
        }
        data.extend_from_slice(&line[cursor..pos]);
        cursor = pos + 1;
    }
    data.extend_from_slice(&line[cursor..hi]);
    Field::new(data)
}
