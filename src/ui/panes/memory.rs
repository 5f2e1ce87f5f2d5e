//! Memory pane rendering
//!
//! Lists every written edge in the same order as the debug trace, with the
//! edge under the memory pointer highlighted. Unwritten edges read as zero
//! and are not shown.

use crate::memory::{format_edge, Memory};
use crate::ui::panes::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the memory pane
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    memory: &Memory,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let pointer = memory.pointer();
    let title = format!(
        " Memory: {} {} ",
        format_edge(pointer.point, pointer.dir),
        if pointer.clockwise { "cw" } else { "ccw" }
    );
    let block = pane_block(title, is_focused);

    let entries = memory.entries();
    if entries.is_empty() {
        let paragraph = Paragraph::new("(all edges are zero)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let current = pointer.key();
    let all_items: Vec<ListItem> = entries
        .into_iter()
        .map(|(point, dir, value)| {
            let is_current = (point, dir) == current;
            let style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.active_ip)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format_edge(point, dir), style),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), style.fg(DEFAULT_THEME.number)),
            ]))
        })
        .collect();

    let visible_height = clamp_scroll(scroll_offset, all_items.len(), area.height);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
