//! Rendering for the `#` debug instruction: a hexdump-style view of the
//! tape with the pointer cell highlighted.

use crate::tape::Tape;
use crate::theme;

const CELLS_PER_ROW: usize = 16;

/// Render the tape from cell 0 through the last row holding either a
/// nonzero cell or the pointer; all-zero rows past both are trimmed.
///
/// Each row shows sixteen cells: an 8-digit hex offset, the cell bytes in
/// two blocks of eight, then an ASCII gutter where printable bytes (32-126)
/// appear as themselves and everything else as `.`. The pointer cell is
/// rendered in inverse video in both columns.
pub fn render(tape: &Tape, pointer: usize) -> String {
    let last = tape.last_nonzero().map_or(pointer, |nz| nz.max(pointer));
    let rows = last / CELLS_PER_ROW + 1;
    let highlight = theme::pointer_highlight();

    let mut out = String::new();
    for row in 0..rows {
        let base = row * CELLS_PER_ROW;
        let mut hex_column = String::new();
        let mut ascii_column = String::new();

        for i in 0..CELLS_PER_ROW {
            let index = base + i;
            let byte = tape.byte(index);
            if i > 0 {
                hex_column.push(' ');
            }
            if i == CELLS_PER_ROW / 2 {
                // Extra space splits the row into two blocks of eight.
                hex_column.push(' ');
            }
            let cell = format!("{byte:02x}");
            let glyph = if (0x20..=0x7e).contains(&byte) {
                char::from(byte)
            } else {
                '.'
            };
            if index == pointer {
                hex_column.push_str(&highlight.paint(cell).to_string());
                ascii_column.push_str(&highlight.paint(glyph.to_string()).to_string());
            } else {
                hex_column.push_str(&cell);
                ascii_column.push(glyph);
            }
        }

        out.push_str(&format!("{base:08x}  {hex_column}  |{ascii_column}|\n"));
    }
    out
}
