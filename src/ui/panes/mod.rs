//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`grid`]: The program hexagon with IP positions and opcode highlighting
//! - [`ips`]: The six instruction pointers and the command about to run
//! - [`memory`]: Written memory edges and the memory pointer
//! - [`output`]: Program output produced so far
//! - [`status`]: Status bar with keybindings and execution state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*_pane()` function taking the
//! frame, its area, the data to show, whether it has focus and its scroll
//! offset. Shared helpers live in this module.

pub mod grid;
pub mod ips;
pub mod memory;
pub mod output;
pub mod status;

pub use grid::render_grid_pane;
pub use ips::render_ips_pane;
pub use memory::render_memory_pane;
pub use output::render_output_pane;
pub use status::{render_status_bar, StatusRenderData};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered pane block, highlighted when focused
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays filled; returns the visible height
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, area_height: u16) -> usize {
    // Account for borders, min 1
    let visible_height = area_height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }
    visible_height
}
