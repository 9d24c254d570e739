//! A configurable Brainfuck interpreter library.
//!
//! This crate provides a Brainfuck interpreter that operates on a memory
//! tape (default 30,000 cells) with a single data pointer, plus the pieces
//! the `bfi` binary is built from: program loading, configuration, error
//! pretty-printing, and a REPL.
//!
//! Features and behaviors:
//! - Memory tape initialized to 0; tape size and cell width are
//!   configurable, and either limit can be lifted entirely.
//! - Soft pointer bounds: moving left from cell 0 or right past the last
//!   cell prints a warning to stderr and leaves the pointer in place.
//! - Input `,` reads a single byte; on EOF the current cell is set to 0.
//! - Output `.` writes the byte at the current cell (no newline).
//! - `#` dumps the tape as a hexdump-style view with the pointer cell
//!   highlighted.
//! - A `!` in a source splits it into code and inline input for `,`.
//! - Properly handles nested loops `[]`; unmatched brackets are reported
//!   as errors before anything executes.
//! - Any other character is a comment and is skipped.
//!
//! Quick start:
//!
//! ```no_run
//! use bfi::{Config, Interpreter};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let mut bf = Interpreter::new(code, &Config::default()).expect("brackets are balanced");
//! bf.run().expect("program should run");
//! ```

pub mod cli_util;
pub mod commands;
pub mod config;
pub mod dump;
pub mod interp;
pub mod repl;
pub mod source;
pub mod tape;
pub mod theme;

pub use config::{Config, DEFAULT_CELL_WIDTH, DEFAULT_TAPE_SIZE};
pub use interp::{
    build_jump_table, decode_program, Instruction, Interpreter, InterpreterError, JumpTable,
    ParseError, UnmatchedBracketKind,
};
pub use source::{load_program, split_inline_input, Source};
pub use tape::Tape;
