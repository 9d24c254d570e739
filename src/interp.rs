//! The Brainfuck execution engine.
//!
//! A program is decoded into [`Instruction`]s once, its brackets are
//! resolved into a [`JumpTable`], and then [`Interpreter::run`] walks the
//! decoded form with a program counter until it falls off the end. There is
//! no other way to stop: the only suspension point is `,`, which blocks on
//! the input adapter.

use std::fmt;
use std::io::{self, Read, Write};

use crate::config::Config;
use crate::dump;
use crate::tape::Tape;

/// A bracket-matching error, detected before any instruction executes.
#[derive(Debug, thiserror::Error)]
#[error("Unmatched bracket {kind} at instruction {ip}")]
pub struct ParseError {
    pub ip: usize,
    pub kind: UnmatchedBracketKind,
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    Open,
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "'['"),
            UnmatchedBracketKind::Close => write!(f, "']'"),
        }
    }
}

/// Errors that can end a run.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// Loops were not balanced; a matching `[` or `]` was not found.
    #[error(transparent)]
    UnmatchedBrackets(#[from] ParseError),

    /// An underlying I/O error from the input or output adapter.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: io::Error,
    },
}

/// One decoded program position.
///
/// Everything outside the recognized set decodes to [`Instruction::Other`],
/// which executes as a no-op, so arbitrary text can sit between
/// instructions as commentary. Decoding preserves positions: instruction
/// `i` came from character `i` of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `>`: move the data pointer one cell right.
    MoveRight,
    /// `<`: move the data pointer one cell left.
    MoveLeft,
    /// `+`: increment the current cell.
    Increment,
    /// `-`: decrement the current cell.
    Decrement,
    /// `,`: read one byte from input into the current cell.
    Read,
    /// `.`: write the current cell's low byte to output.
    Write,
    /// `[`: jump past the matching `]` when the current cell is zero.
    LoopOpen,
    /// `]`: jump back to the matching `[` when the current cell is nonzero.
    LoopClose,
    /// `#`: dump the tape to output with the pointer cell highlighted.
    Dump,
    /// Anything else: a comment.
    Other,
}

impl Instruction {
    /// Resolve one source character.
    pub fn decode(ch: char) -> Self {
        match ch {
            '>' => Self::MoveRight,
            '<' => Self::MoveLeft,
            '+' => Self::Increment,
            '-' => Self::Decrement,
            ',' => Self::Read,
            '.' => Self::Write,
            '[' => Self::LoopOpen,
            ']' => Self::LoopClose,
            '#' => Self::Dump,
            _ => Self::Other,
        }
    }
}

/// Decode a whole source text in one pass.
pub fn decode_program(source: &str) -> Vec<Instruction> {
    source.chars().map(Instruction::decode).collect()
}

/// Matching-bracket positions, precomputed so loop jumps are O(1).
#[derive(Debug)]
pub struct JumpTable(Vec<Option<usize>>);

impl JumpTable {
    /// The position paired with the bracket at `ip`, if `ip` holds a
    /// matched bracket.
    pub fn matching(&self, ip: usize) -> Option<usize> {
        self.0.get(ip).copied().flatten()
    }
}

/// Scan `program` once, left to right, and resolve every bracket pair.
///
/// A stack of pending `[` positions pairs each `]` as it appears; both
/// directions are recorded, so the table is symmetric. Unmatched brackets
/// on either side are fatal and reported with their position.
pub fn build_jump_table(program: &[Instruction]) -> Result<JumpTable, ParseError> {
    let mut table: Vec<Option<usize>> = vec![None; program.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, instruction) in program.iter().enumerate() {
        match instruction {
            Instruction::LoopOpen => stack.push(i),
            Instruction::LoopClose => {
                let Some(open_index) = stack.pop() else {
                    return Err(ParseError {
                        ip: i,
                        kind: UnmatchedBracketKind::Close,
                    });
                };
                table[open_index] = Some(i);
                table[i] = Some(open_index);
            }
            _ => {}
        }
    }

    if let Some(unmatched_open) = stack.last().copied() {
        return Err(ParseError {
            ip: unmatched_open,
            kind: UnmatchedBracketKind::Open,
        });
    }

    Ok(JumpTable(table))
}

/// A Brainfuck interpreter.
///
/// Owns everything a run needs: the decoded program, the precomputed jump
/// table, the memory tape, the data pointer, and the program counter.
/// Construction validates the brackets, so a run can only fail on I/O.
///
/// Pointer moves that would leave a bounded tape are not errors: the move
/// is ignored and a warning goes to stderr, matching how most Brainfuck
/// programs expect a too-small tape to degrade.
pub struct Interpreter {
    code: Vec<Instruction>,
    jumps: JumpTable,
    tape: Tape,
    pointer: usize,
    pc: usize,
    tape_size: Option<usize>,
    echo: bool,
    prompt: Option<String>,
}

impl Interpreter {
    /// Build an interpreter for `source` under `config`.
    ///
    /// Fails with a [`ParseError`] if the brackets do not match; no
    /// instruction executes in that case.
    pub fn new(source: &str, config: &Config) -> Result<Self, ParseError> {
        let code = decode_program(source);
        let jumps = build_jump_table(&code)?;
        Ok(Self {
            code,
            jumps,
            tape: Tape::new(config),
            pointer: 0,
            pc: 0,
            tape_size: config.tape_size,
            echo: config.echo,
            prompt: config.prompt.clone(),
        })
    }

    /// Execute the program against stdin and stdout.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        self.run_with_io(io::stdin().lock(), io::stdout().lock())
    }

    /// Execute the program against explicit I/O adapters.
    ///
    /// `,` pulls single bytes from `input` (EOF stores 0); `.` and `#`
    /// write to `output`. Output is flushed before every read and once at
    /// the end of the run.
    pub fn run_with_io<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), InterpreterError>
    where
        R: Read,
        W: Write,
    {
        while self.pc < self.code.len() {
            match self.code[self.pc] {
                Instruction::MoveRight => {
                    if self.tape_size.is_some_and(|size| self.pointer + 1 >= size) {
                        self.warn_out_of_bounds('>');
                    } else {
                        self.pointer += 1;
                    }
                }
                Instruction::MoveLeft => {
                    if self.pointer == 0 {
                        self.warn_out_of_bounds('<');
                    } else {
                        self.pointer -= 1;
                    }
                }
                Instruction::Increment => self.tape.add(self.pointer, 1),
                Instruction::Decrement => self.tape.add(self.pointer, -1),
                Instruction::Read => {
                    if let Some(prompt) = self.prompt.as_deref() {
                        output
                            .write_all(prompt.as_bytes())
                            .map_err(|e| self.io_error(e))?;
                    }
                    // Pending output must be visible before we block.
                    output.flush().map_err(|e| self.io_error(e))?;
                    let mut buf = [0u8; 1];
                    match input.read(&mut buf) {
                        // EOF: common BF behavior is to set the cell to 0
                        Ok(0) => self.tape.set(self.pointer, 0),
                        Ok(_) => {
                            if self.echo {
                                output.write_all(&buf).map_err(|e| self.io_error(e))?;
                            }
                            self.tape.set(self.pointer, i64::from(buf[0]));
                        }
                        Err(e) => return Err(self.io_error(e)),
                    }
                }
                Instruction::Write => {
                    let byte = [self.tape.byte(self.pointer)];
                    output.write_all(&byte).map_err(|e| self.io_error(e))?;
                }
                Instruction::LoopOpen => {
                    if self.tape.get(self.pointer) == 0 {
                        // Land on the ']'; the increment below steps past it.
                        self.pc = self.jumps.matching(self.pc).expect("validated bracket");
                    }
                }
                Instruction::LoopClose => {
                    if self.tape.get(self.pointer) != 0 {
                        self.pc = self.jumps.matching(self.pc).expect("validated bracket");
                    }
                }
                Instruction::Dump => {
                    let view = dump::render(&self.tape, self.pointer);
                    output
                        .write_all(view.as_bytes())
                        .map_err(|e| self.io_error(e))?;
                    output.flush().map_err(|e| self.io_error(e))?;
                }
                Instruction::Other => {}
            }
            self.pc += 1;
        }

        output.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn warn_out_of_bounds(&self, op: char) {
        eprintln!(
            "Warning: pointer out of bounds at instruction {} (ptr={}, op='{}'); move ignored",
            self.pc, self.pointer, op
        );
    }

    fn io_error(&self, source: io::Error) -> InterpreterError {
        InterpreterError::Io {
            ip: self.pc,
            source,
        }
    }
}
