//! Plain-text renderer for terminals and logs

use super::view::{Palette, RenderView, Rgb};

pub const HEAD: char = '@';
pub const BODY: char = 'o';
pub const TARGET: char = '*';
pub const EMPTY: char = '.';

/// Draw the board, one line per row
pub fn render(view: &RenderView<'_>) -> String {
    let width = view.board.width.max(0) as usize;
    let height = view.board.height.max(0) as usize;
    let mut grid = vec![vec![EMPTY; width]; height];

    let mut put = |col: i32, row: i32, ch: char| {
        if let Some(slot) = grid
            .get_mut(row as usize)
            .and_then(|line| line.get_mut(col as usize))
        {
            *slot = ch;
        }
    };

    put(view.target.col, view.target.row, TARGET);
    for (i, cell) in view.body.iter().enumerate() {
        put(cell.col, cell.row, if i == 0 { HEAD } else { BODY });
    }

    let mut out = String::with_capacity((width + 1) * height);
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

fn paint(out: &mut String, color: Rgb, ch: char) {
    let [r, g, b] = color;
    out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{ch}"));
}

/// Draw the board with 24-bit ANSI colors from `palette`
pub fn render_colored(view: &RenderView<'_>, palette: &Palette) -> String {
    let plain = render(view);
    let mut out = String::with_capacity(plain.len() * 20);
    for ch in plain.chars() {
        match ch {
            HEAD | BODY => paint(&mut out, palette.body, ch),
            TARGET => paint(&mut out, palette.target, ch),
            EMPTY => paint(&mut out, palette.border, ch),
            '\n' => {
                out.push_str("\x1b[0m\n");
            }
            other => out.push(other),
        }
    }
    out
}
