pub mod repl;
pub mod run;

use clap::Args;

use crate::config::Config;

/// Interpreter flags shared by `run` and `repl`.
#[derive(Args, Debug, Default)]
pub struct InterpreterOpts {
    /// Tape size in cells; moves past either end warn and are ignored
    #[arg(short = 't', long = "tape-size", value_name = "CELLS")]
    pub tape_size: Option<usize>,

    /// Let the tape grow without bound instead
    #[arg(long = "unbounded-tape", conflicts_with = "tape_size")]
    pub unbounded_tape: bool,

    /// Cell width in bits (1-63); arithmetic wraps modulo 2^BITS
    #[arg(short = 'w', long = "cell-width", value_name = "BITS")]
    pub cell_width: Option<u32>,

    /// Use plain signed 64-bit cells with no wrapping instead
    #[arg(long = "unbounded-cells", conflicts_with = "cell_width")]
    pub unbounded_cells: bool,

    /// Echo each byte consumed by `,` back to the output
    #[arg(short = 'e', long = "echo")]
    pub echo: bool,

    /// Text written to the output before each `,` reads
    #[arg(short = 'p', long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,
}

impl InterpreterOpts {
    /// Misuse checks clap does not express: zero sizes and out-of-range
    /// widths.
    pub fn validate(&self) -> Result<(), String> {
        if self.tape_size == Some(0) {
            return Err("--tape-size must be at least 1".to_string());
        }
        if let Some(width) = self.cell_width {
            if !(1..=63).contains(&width) {
                return Err(format!("--cell-width must be between 1 and 63, got {width}"));
            }
        }
        Ok(())
    }

    /// Layer these flags over `base` (the config-file defaults), giving
    /// flags the last word.
    pub fn apply(&self, base: &Config) -> Config {
        let mut config = base.clone();
        if self.unbounded_tape {
            config.tape_size = None;
        } else if let Some(size) = self.tape_size {
            config.tape_size = Some(size);
        }
        if self.unbounded_cells {
            config.cell_width = None;
        } else if let Some(width) = self.cell_width {
            config.cell_width = Some(width);
        }
        if self.echo {
            config.echo = true;
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = Some(prompt.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_base_config() {
        let opts = InterpreterOpts {
            tape_size: Some(64),
            cell_width: Some(16),
            echo: true,
            prompt: Some("? ".to_string()),
            ..InterpreterOpts::default()
        };
        let config = opts.apply(&Config::default());
        assert_eq!(config.tape_size, Some(64));
        assert_eq!(config.cell_width, Some(16));
        assert!(config.echo);
        assert_eq!(config.prompt.as_deref(), Some("? "));
    }

    #[test]
    fn absent_flags_leave_the_base_alone() {
        let base = Config {
            tape_size: Some(512),
            cell_width: Some(12),
            echo: true,
            prompt: Some("Enter: ".to_string()),
        };
        let config = InterpreterOpts::default().apply(&base);
        assert_eq!(config, base);
    }

    #[test]
    fn unbounded_flags_clear_the_limits() {
        let opts = InterpreterOpts {
            unbounded_tape: true,
            unbounded_cells: true,
            ..InterpreterOpts::default()
        };
        let config = opts.apply(&Config::default());
        assert_eq!(config.tape_size, None);
        assert_eq!(config.cell_width, None);
    }

    #[test]
    fn rejects_zero_tape_and_wide_cells() {
        let opts = InterpreterOpts {
            tape_size: Some(0),
            ..InterpreterOpts::default()
        };
        assert!(opts.validate().is_err());

        let opts = InterpreterOpts {
            cell_width: Some(64),
            ..InterpreterOpts::default()
        };
        assert!(opts.validate().is_err());

        assert!(InterpreterOpts::default().validate().is_ok());
    }
}
