//! Program loading and the `!` inline-input divider.
//!
//! A `!` in a source splits it: everything before is the program,
//! everything after is the byte stream `,` consumes in place of stdin.
//! The divider and the bytes behind it never reach the engine.

use std::fs;
use std::io;
use std::path::Path;

/// A loaded program.
pub struct Source {
    /// The code to execute.
    pub code: String,
    /// Input embedded after the first `!`, if the source had one.
    pub inline_input: Option<Vec<u8>>,
}

/// Split `text` at the first `!`. A source without one keeps stdin as its
/// input; with one, the tail (including any further `!`s) becomes the
/// input.
pub fn split_inline_input(text: &str) -> Source {
    match text.split_once('!') {
        Some((code, input)) => Source {
            code: code.to_string(),
            inline_input: Some(input.as_bytes().to_vec()),
        },
        None => Source {
            code: text.to_string(),
            inline_input: None,
        },
    }
}

/// Read a program from `path`. The file must be UTF-8.
pub fn load_program(path: &Path) -> io::Result<Source> {
    Ok(split_inline_input(&fs::read_to_string(path)?))
}
