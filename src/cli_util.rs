use std::io::{self, Write};

use crate::InterpreterError;

/// Pretty-print a structured [`InterpreterError`] with caret positioning.
/// If `program` is `Some("bfi")`, messages get a "bfi: ..." prefix for CLI
/// use; the REPL passes `None`.
pub fn print_interp_error(program: Option<&str>, code: &str, err: &InterpreterError) {
    let prefix_program = |msg: &str| {
        if let Some(p) = program {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    match err {
        InterpreterError::UnmatchedBrackets(parse) => {
            let msg = prefix_program(&format!("Parse error: unmatched bracket {}", parse.kind));
            print_error_with_context(&msg, code, parse.ip);
        }
        InterpreterError::Io { ip, source } => {
            let msg = prefix_program(&format!("I/O error: {source}"));
            print_error_with_context(&msg, code, *ip);
        }
    }
}

/// Print a concise error with instruction index and a caret context window,
/// working with UTF-8 by slicing using char indices.
pub fn print_error_with_context(prefix: &str, code: &str, pos: usize) {
    eprintln!("{prefix} at instruction {pos}");
    let (window, underline) = context_window(code, pos);
    eprintln!("  {}", window);
    eprintln!("  {}", underline);
    let _ = io::stderr().flush();
}

/// A short window of `code` around `pos` plus a caret line pointing at the
/// exact position.
fn context_window(code: &str, pos: usize) -> (String, String) {
    const WINDOW_CHARS: usize = 32;

    let total_chars = code.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(code, start_char);
    let end_byte = char_to_byte_index(code, end_char);
    let window = code[start_byte..end_byte].to_string();

    let caret_offset_chars = pos.saturating_sub(start_char);
    let mut underline = String::new();
    for _ in 0..caret_offset_chars {
        underline.push(' ');
    }
    underline.push('^');
    (window, underline)
}

/// Convert a char index into a byte index in the given UTF-8 string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }

    let mut count = 0usize;
    let mut byte_idx = 0usize;

    for ch in s.chars() {
        if count == char_idx {
            break;
        }
        byte_idx += ch.len_utf8();
        count += 1;
    }

    byte_idx
}
