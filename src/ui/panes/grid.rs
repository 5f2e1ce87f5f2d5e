//! Program grid pane rendering
//!
//! Draws the hexagon the way `--generate` prints it, one row per line, with
//! each IP's cell highlighted and opcodes colored by kind.

use crate::grid::{AxialPoint, Cell, Grid};
use crate::interpreter::engine::InstructionPointer;
use crate::ui::panes::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the program grid pane
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    ips: &[InstructionPointer],
    active_ip: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Grid (size {}) ", grid.size()), is_focused);

    let lines: Vec<Line> = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let mut spans = vec![Span::raw(" ".repeat(2 * grid.size() - row.len()))];
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    spans.push(Span::raw(" "));
                }
                let point = grid.index_to_axial(row_index, column);
                spans.push(Span::styled(
                    cell.ch.to_string(),
                    cell_style(*cell, ip_at(ips, active_ip, point), active_ip),
                ));
            }
            Line::from(spans)
        })
        .collect();

    clamp_scroll(scroll_offset, lines.len(), area.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// The IP drawn on `point`: the active one if it is there, else the lowest-numbered
fn ip_at(ips: &[InstructionPointer], active_ip: usize, point: AxialPoint) -> Option<usize> {
    if ips.get(active_ip).is_some_and(|ip| ip.point == point) {
        return Some(active_ip);
    }
    ips.iter().position(|ip| ip.point == point)
}

fn cell_style(cell: Cell, ip: Option<usize>, active_ip: usize) -> Style {
    let mut style = Style::default().fg(opcode_color(cell.ch));

    if cell.debug {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    match ip {
        Some(index) if index == active_ip => style
            .bg(DEFAULT_THEME.active_ip)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(_) => style
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.idle_ip)
            .add_modifier(Modifier::BOLD),
        None => style,
    }
}

fn opcode_color(ch: char) -> Color {
    match ch {
        '.' => DEFAULT_THEME.comment,
        '@' => DEFAULT_THEME.error,
        '_' | '|' | '/' | '\\' | '<' | '>' | '$' | '[' | ']' | '#' => DEFAULT_THEME.mirror,
        '{' | '}' | '=' | '"' | '\'' | '^' | '&' => DEFAULT_THEME.memory_op,
        ',' | ';' | '?' | '!' => DEFAULT_THEME.io_op,
        '0'..='9' => DEFAULT_THEME.number,
        _ => DEFAULT_THEME.fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    #[test]
    fn test_ip_lookup_prefers_active_then_lowest_index() {
        let ips = [
            InstructionPointer {
                point: AxialPoint::ORIGIN,
                dir: Direction::East,
            },
            InstructionPointer {
                point: AxialPoint::ORIGIN,
                dir: Direction::West,
            },
        ];
        assert_eq!(ip_at(&ips, 0, AxialPoint::ORIGIN), Some(0));
        assert_eq!(ip_at(&ips, 1, AxialPoint::ORIGIN), Some(1));
        assert_eq!(ip_at(&ips, 1, AxialPoint::new(1, 0)), None);

        // All six IPs share the only cell of a size-1 grid
        let ips = InstructionPointer::initial(1);
        assert_eq!(ip_at(&ips, 4, AxialPoint::ORIGIN), Some(4));
    }

    #[test]
    fn test_active_ip_is_highlighted() {
        let cell = Cell {
            ch: ';',
            debug: true,
        };
        let style = cell_style(cell, Some(2), 2);
        assert_eq!(style.bg, Some(DEFAULT_THEME.active_ip));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));

        let style = cell_style(cell, None, 2);
        assert_eq!(style.fg, Some(DEFAULT_THEME.io_op));
        assert_eq!(style.bg, None);
    }
}
