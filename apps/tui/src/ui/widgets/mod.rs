pub mod charts;
pub mod map;
pub mod popup;
pub mod sidebar;
pub mod tables;

use ratatui::style::{Color, Style};

/// Border style for a panel, highlighted when it owns the focus.
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}
