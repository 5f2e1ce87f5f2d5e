//! Instruction pointer pane rendering

use crate::grid::Grid;
use crate::interpreter::engine::InstructionPointer;
use crate::interpreter::trace::format_ip;
use crate::ui::panes::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the IP table with the command the active IP runs next
pub fn render_ips_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    ips: &[InstructionPointer],
    active_ip: usize,
    tick: u64,
    is_focused: bool,
) {
    let block = pane_block(format!(" IPs (tick {}) ", tick), is_focused);

    let mut lines: Vec<Line> = ips
        .iter()
        .enumerate()
        .map(|(i, ip)| {
            let active = i == active_ip;
            let style = if active {
                Style::default()
                    .fg(DEFAULT_THEME.active_ip)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            let marker = if active { "→ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format_ip(i, ip, active), style),
            ])
        })
        .collect();

    if let Some(ip) = ips.get(active_ip) {
        let cell = grid.get(ip.point);
        let position = grid.get_position(ip.point);
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Command: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                cell.ch.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (source byte {})", position.index),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
