use std::env;
use std::io::{self, Write};

use clap::{Parser, Subcommand};

use bfi::commands::{repl, run};

fn print_top_usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} run  [OPTIONS] <FILE>   # Execute a Brainfuck program from FILE
  {0} repl [OPTIONS]          # Start a Brainfuck REPL (read-eval-print loop)

Options shared by both subcommands:
  --tape-size, -t <CELLS>   Tape size in cells (default 30000)
  --unbounded-tape          Let the tape grow without bound
  --cell-width, -w <BITS>   Cell width in bits, 1-63 (default 8)
  --unbounded-cells         Use plain signed 64-bit cells with no wrapping
  --echo, -e                Echo each byte consumed by `,` back to the output
  --prompt, -p <TEXT>       Write TEXT to the output before each `,` reads

Run "{0} <subcommand> --help" for more info.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bfi", disable_help_flag = true, disable_help_subcommand = true)]
struct Cli {
    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Run(run::RunArgs),
    Repl(repl::ReplArgs),
}

fn main() {
    // Pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bfi"));

    let cli = Cli::parse();

    if cli.help || cli.command.is_none() {
        print_top_usage_and_exit(&program, if cli.help { 0 } else { 2 });
    }

    let code = match cli.command.unwrap() {
        Command::Run(args) => run::run(&program, args),
        Command::Repl(args) => repl::run(&program, args),
    };

    std::process::exit(code);
}
