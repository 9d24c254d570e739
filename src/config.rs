use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use cross_xdg::BaseDirs;

/// Tape size used when nothing else configures one.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;
/// Cell width in bits used when nothing else configures one.
pub const DEFAULT_CELL_WIDTH: u32 = 8;

/// Interpreter settings, resolved once at startup.
///
/// `tape_size: None` lifts the pointer bound entirely (the tape grows on
/// demand); `cell_width: None` turns off wrapping and leaves cells as plain
/// signed 64-bit integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tape_size: Option<usize>,
    pub cell_width: Option<u32>,
    /// Echo each byte consumed by `,` back to the output.
    pub echo: bool,
    /// Text written to the output before each `,` reads.
    pub prompt: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tape_size: Some(DEFAULT_TAPE_SIZE),
            cell_width: Some(DEFAULT_CELL_WIDTH),
            echo: false,
            prompt: None,
        }
    }
}

static FILE_DEFAULTS: OnceLock<Config> = OnceLock::new();

/// The built-in defaults with `bfi.toml` (if present) applied on top.
/// Command-line flags are layered over this by the subcommands.
pub fn file_defaults() -> &'static Config {
    FILE_DEFAULTS.get_or_init(|| load_from_toml().unwrap_or_default())
}

fn config_path() -> PathBuf {
    // BFI_CONFIG points at an alternate file; tests use it to stay
    // independent of the user's real configuration.
    if let Ok(path) = env::var("BFI_CONFIG") {
        return PathBuf::from(path);
    }

    let base_dirs = BaseDirs::new().unwrap();

    // On Linux: resolves to /home/<user>/.config
    // On Windows: resolves to C:\Users\<user>\.config
    // On macOS: resolves to /Users/<user>/.config
    let config_home = base_dirs.config_home();

    let mut path = PathBuf::from(config_home);
    path.push("bfi.toml");
    path
}

fn load_from_toml() -> Option<Config> {
    let content = fs::read_to_string(config_path()).ok()?;
    Some(parse_config(&content))
}

/// Very small hand-rolled parser: look for the [interpreter] section and
/// key = value pairs. Unknown keys and values that do not parse are
/// ignored, leaving the built-in defaults in place.
fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    let mut in_interpreter = false;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_interpreter = &line[1..line.len() - 1] == "interpreter";
            continue;
        }
        if !in_interpreter {
            continue;
        }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val_raw = line[eq + 1..].trim();
        // Accept quoted or unquoted
        let val = if val_raw.starts_with('"') && val_raw.ends_with('"') && val_raw.len() >= 2 {
            &val_raw[1..val_raw.len() - 1]
        } else {
            val_raw
        };
        match key {
            "tape_size" => {
                if let Ok(size) = val.parse::<usize>() {
                    if size > 0 {
                        cfg.tape_size = Some(size);
                    }
                }
            }
            "cell_width" => {
                if let Ok(width) = val.parse::<u32>() {
                    if (1..=63).contains(&width) {
                        cfg.cell_width = Some(width);
                    }
                }
            }
            "echo" => {
                if let Ok(echo) = val.parse::<bool>() {
                    cfg.echo = echo;
                }
            }
            "prompt" => cfg.prompt = Some(val.to_string()),
            _ => {}
        }
    }
    cfg
}
