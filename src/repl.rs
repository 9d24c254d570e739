//! The read-eval-print loop.
//!
//! Two modes share one execution path: `Editor` drives a reedline
//! multi-line editor on a TTY, `Bare` reads stdin to EOF once and runs what
//! it got. Every submission executes on a fresh [`Interpreter`], so cells
//! never leak between programs.

use std::env;
use std::io::{self, Cursor, IsTerminal, Write};

use reedline::{
    DefaultPrompt, DefaultPromptSegment, Highlighter, HistoryItem, Signal, StyledText,
};

use crate::config::Config;
use crate::source::split_inline_input;
use crate::theme;
use crate::{cli_util, Interpreter, InterpreterError};

pub fn repl_loop(config: &Config) -> io::Result<()> {
    // Initialize interactive line editor
    let mut editor = init_line_editor()?;

    loop {
        // Prompt and read a multi-line submission via editor
        let Some(submission) = read_submission_interactive(&mut editor)? else {
            // EOF or editor closed. End the session cleanly to avoid hanging when stdin is closed
            println!();
            io::stdout().flush()?;
            return Ok(());
        };

        let trimmed = submission.trim();
        if trimmed.is_empty() {
            continue; // Ignore empty submissions
        }

        // Execute the Brainfuck code buffer
        execute_submission(config, trimmed);

        // Test hook: if BFI_REPL_ONCE=1, exit after one execution
        if env::var("BFI_REPL_ONCE").ok().as_deref() == Some("1") {
            return Ok(());
        }
    }
}

fn init_line_editor() -> io::Result<reedline::Reedline> {
    use reedline::{
        default_emacs_keybindings, EditCommand, Emacs, KeyCode, KeyModifiers, Reedline,
        ReedlineEvent,
    };

    // Start from default emacs-like bindings and adjust:
    // - Enter -> InsertNewLine (do not submit)
    // - Ctrl+D -> AcceptLine (submit)
    // - Ctrl+Z -> AcceptLine (submit, for Windows)
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
    keybindings.add_binding(KeyModifiers::CONTROL, KeyCode::Char('d'), ReedlineEvent::Submit);
    keybindings.add_binding(KeyModifiers::CONTROL, KeyCode::Char('z'), ReedlineEvent::Submit);

    // Default edit-mode navigation.
    // Up/down move within the current multiline buffer, not history.
    keybindings.add_binding(KeyModifiers::NONE, KeyCode::Up, ReedlineEvent::Up);
    keybindings.add_binding(KeyModifiers::NONE, KeyCode::Down, ReedlineEvent::Down);

    // Explicit history-mode convenience bindings
    // Alt+Up/Alt+Down or Ctrl+Up/Ctrl+Down to navigate history items.
    keybindings.add_binding(KeyModifiers::ALT, KeyCode::Up, ReedlineEvent::PreviousHistory);
    keybindings.add_binding(KeyModifiers::CONTROL, KeyCode::Up, ReedlineEvent::PreviousHistory);
    keybindings.add_binding(KeyModifiers::ALT, KeyCode::Down, ReedlineEvent::NextHistory);
    keybindings.add_binding(KeyModifiers::CONTROL, KeyCode::Down, ReedlineEvent::NextHistory);

    let history = reedline::FileBackedHistory::new(1_000).unwrap();

    let editor = Reedline::create()
        .with_highlighter(Box::new(SourceHighlighter))
        .with_history(Box::new(history))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    Ok(editor)
}

pub fn read_submission<R: io::BufRead>(stdin: &mut R) -> Option<String> {
    // Collect all lines until EOF
    let mut buffer = String::new();

    loop {
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                // EOF
                break;
            }
            Ok(_) => {
                buffer.push_str(&line);
            }
            Err(_) => {
                // Read error, ignore
                return None;
            }
        }
    }

    if buffer.is_empty() { None } else { Some(buffer) }
}

fn read_submission_interactive(editor: &mut reedline::Reedline) -> io::Result<Option<String>> {
    // Minimal prompt
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("bfi".to_string()),
        DefaultPromptSegment::Empty,
    );

    // Render prompt and read until user submits with Ctrl+D or Ctrl+Z
    // Enter inserts a newline; history is browsed with Alt/Ctrl+Up/Down
    let res = editor.read_line(&prompt);

    match res {
        Ok(Signal::Success(buffer)) => {
            // Add one history item per submitted buffer (program-level)
            if !buffer.trim().is_empty() {
                let _ = editor
                    .history_mut()
                    .save(HistoryItem::from_command_line(buffer.clone()));
            }
            Ok(Some(buffer))
        }
        Ok(Signal::CtrlC) => Ok(None), // Global SIGINT, exit immediately
        Ok(Signal::CtrlD) => Ok(None), // EOF, exit cleanly
        Err(e) => {
            // Print concise error and end session
            eprintln!("repl: editor error: {e}");
            let _ = io::stderr().flush();
            Ok(None)
        }
    }
}

/// Executes a single Brainfuck program contained in `buffer`.
/// - Program output goes to stdout; a `!` in the buffer feeds the tail to
///   `,` in place of stdin.
/// - Errors are printed concisely to stderr.
/// - A newline is always written to stdout after execution (success or error)
///   so that the prompt begins at column 0 on the next iteration.
fn execute_submission(config: &Config, buffer: &str) {
    let source = split_inline_input(buffer);

    let mut bf = match Interpreter::new(&source.code, config) {
        Ok(bf) => bf,
        Err(err) => {
            cli_util::print_interp_error(None, &source.code, &InterpreterError::from(err));
            let _ = io::stderr().flush();
            println!();
            let _ = io::stdout().flush();
            return;
        }
    };

    let stdout = io::stdout();
    let result = match source.inline_input {
        Some(bytes) => bf.run_with_io(Cursor::new(bytes), stdout.lock()),
        None => bf.run_with_io(io::stdin().lock(), stdout.lock()),
    };
    if let Err(err) = result {
        cli_util::print_interp_error(None, &source.code, &err);
        let _ = io::stderr().flush();
    }
    println!();
    let _ = io::stdout().flush(); // Ensure output is flushed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplMode {
    Bare,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFlagOverride {
    None,
    Bare,
    Editor,
}

pub fn select_mode(flag: ModeFlagOverride) -> Result<ReplMode, String> {
    // Flag override
    match flag {
        ModeFlagOverride::Bare => return Ok(ReplMode::Bare),
        ModeFlagOverride::Editor => {
            if !io::stdin().is_terminal() {
                return Err(
                    "cannot start editor: stdin is not a TTY (use --bare or BFI_REPL_MODE=bare)"
                        .to_string(),
                );
            }
            return Ok(ReplMode::Editor);
        }
        ModeFlagOverride::None => {}
    }

    // Environment override
    if let Ok(val) = env::var("BFI_REPL_MODE") {
        let v = val.trim().to_ascii_lowercase();
        return match v.as_str() {
            "bare" => Ok(ReplMode::Bare),
            "editor" => {
                if !io::stdin().is_terminal() {
                    return Err(
                        "cannot start editor: stdin is not a TTY (use BFI_REPL_MODE=bare)"
                            .to_string(),
                    );
                }
                Ok(ReplMode::Editor)
            }
            _ => Err(format!(
                "invalid BFI_REPL_MODE value: {val}, must be 'bare' or 'editor'"
            )),
        };
    }

    // Auto-detect
    if io::stdin().is_terminal() {
        Ok(ReplMode::Editor)
    } else {
        Ok(ReplMode::Bare)
    }
}

pub fn execute_bare_once(config: &Config) -> io::Result<()> {
    // Scope the reader so the stdin lock drops before execution; `,`
    // without an inline input locks stdin again, and the lock is not
    // reentrant.
    let submission = {
        let mut locked = io::BufReader::new(io::stdin().lock());
        read_submission(&mut locked)
    };
    if let Some(s) = submission {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            execute_submission(config, trimmed);
        }
    }
    Ok(())
}

/// Styles each character through [`theme::instruction_style`], merging
/// adjacent characters that share a style into one run.
struct SourceHighlighter;

impl Highlighter for SourceHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut out: StyledText = StyledText::new();
        let mut current_style: Option<nu_ansi_term::Style> = None;
        let mut buffer = String::new();

        for ch in line.chars() {
            let style = theme::instruction_style(ch);

            match current_style {
                None => {
                    current_style = Some(style);
                    buffer.push(ch);
                }
                Some(s) if s == style => {
                    buffer.push(ch);
                }
                Some(s) => {
                    out.push((s, std::mem::take(&mut buffer)));
                    current_style = Some(style);
                    buffer.push(ch);
                }
            }
        }

        if let Some(s) = current_style {
            if !buffer.is_empty() {
                out.push((s, buffer));
            }
        }
        out
    }
}
