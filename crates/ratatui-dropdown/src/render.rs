use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

/// Writes `input` starting at `(x, y)`, clipped to `max_cols` display columns.
///
/// Returns the number of columns written. A wide char that would straddle the clip edge is
/// dropped rather than half-written; zero-width chars are skipped.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    if max_cols == 0 {
        return 0;
    }

    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0).min(u16::MAX as usize) as u16;
        if w == 0 {
            continue;
        }
        if dx + w > max_cols {
            break;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        dx += 1;

        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
        }
    }

    dx
}
