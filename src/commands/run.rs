use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli_util::print_interp_error;
use crate::commands::InterpreterOpts;
use crate::config;
use crate::source::load_program;
use crate::{Interpreter, InterpreterError};

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct RunArgs {
    /// Path to the Brainfuck program to execute
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub interp: InterpreterOpts,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: RunArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let Some(path) = args.file else {
        usage_and_exit(program, 2);
    };

    if let Err(msg) = args.interp.validate() {
        eprintln!("{program}: {msg}");
        usage_and_exit(program, 2);
    }

    let config = args.interp.apply(config::file_defaults());

    let source = match load_program(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{program}: failed to read {} as UTF-8: {e}", path.display());
            let _ = io::stderr().flush();
            return 1;
        }
    };

    let mut bf = match Interpreter::new(&source.code, &config) {
        Ok(bf) => bf,
        Err(err) => {
            print_interp_error(Some(program), &source.code, &InterpreterError::from(err));
            let _ = io::stderr().flush();
            return 1;
        }
    };

    let stdout = io::stdout();
    let result = match source.inline_input {
        Some(bytes) => bf.run_with_io(Cursor::new(bytes), stdout.lock()),
        None => bf.run_with_io(io::stdin().lock(), stdout.lock()),
    };

    if let Err(err) = result {
        print_interp_error(Some(program), &source.code, &err);
        let _ = io::stderr().flush();
        return 1;
    }

    // No trailing newline here: stdout carries exactly what `.` wrote.
    let _ = io::stdout().flush();
    0
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} run [OPTIONS] <FILE>

Options:
  --tape-size, -t <CELLS>   Tape size in cells (default 30000)
  --unbounded-tape          Let the tape grow without bound
  --cell-width, -w <BITS>   Cell width in bits, 1-63 (default 8)
  --unbounded-cells         Use plain signed 64-bit cells with no wrapping
  --echo, -e                Echo each byte consumed by `,` back to the output
  --prompt, -p <TEXT>       Write TEXT to the output before each `,` reads
  --help, -h                Show this help

Notes:
- Input (`,`) reads a single byte from stdin; on EOF the current cell is set to 0.
- Characters outside of `><+-.,[]#` are comments and are skipped.
- `#` prints a hex dump of the tape with the pointer cell highlighted.
- A `!` in FILE splits it: code before the `!`, input for `,` after it.
- Pointer moves past the tape bounds are warned about on stderr and ignored.

Examples:
- Run a program:
    {0} run ./program.bf
- Read bytes from a file as stdin (`,` will consume file input):
    {0} run ./echo.bf < input.txt
- Carry the input inside the program file (",[.,]!Hello" prints Hello):
    {0} run ./greet.bf
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
