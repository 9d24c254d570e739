//! Terminal styles shared by the REPL highlighter and the tape dump.

use nu_ansi_term::Style;

pub mod catppuccin {
    use nu_ansi_term::Color;
    pub struct Mocha;
    impl Mocha {
        // Base colors
        pub const TEXT: Color = Color::Rgb(205, 214, 244); // Text
        pub const SURFACE2: Color = Color::Rgb(108, 112, 134); // Subtle dim

        // Accents
        pub const RED: Color = Color::Rgb(243, 139, 168);
        pub const GREEN: Color = Color::Rgb(166, 227, 161);
        pub const YELLOW: Color = Color::Rgb(249, 226, 175);
        pub const BLUE: Color = Color::Rgb(137, 180, 250);
        pub const MAUVE: Color = Color::Rgb(203, 166, 247);
        pub const PEACH: Color = Color::Rgb(250, 179, 135);
        pub const TEAL: Color = Color::Rgb(148, 226, 213);
        pub const SKY: Color = Color::Rgb(137, 220, 235);
    }
}

use catppuccin::Mocha;

/// Style for one source character.
///
/// Movement is sky and teal, cell arithmetic green and red, I/O yellow and
/// peach, loops mauve, the tape dump blue. The inline-input divider `!`
/// gets plain text so the input tail reads differently from code, and
/// anything else (a comment) dims.
pub fn instruction_style(ch: char) -> Style {
    match ch {
        '>' => Style::new().fg(Mocha::SKY).bold(),
        '<' => Style::new().fg(Mocha::TEAL).bold(),
        '+' => Style::new().fg(Mocha::GREEN).bold(),
        '-' => Style::new().fg(Mocha::RED).bold(),
        '.' => Style::new().fg(Mocha::YELLOW).bold(),
        ',' => Style::new().fg(Mocha::PEACH).bold(),
        '[' | ']' => Style::new().fg(Mocha::MAUVE).bold(),
        '#' => Style::new().fg(Mocha::BLUE).bold(),
        '!' => Style::new().fg(Mocha::TEXT),
        _ => Style::new().fg(Mocha::SURFACE2),
    }
}

/// Inverse-video style marking the pointer cell in `#` dumps.
pub fn pointer_highlight() -> Style {
    Style::new().reverse()
}
