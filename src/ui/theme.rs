use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub mirror: Color,
    pub memory_op: Color,
    pub io_op: Color,
    pub number: Color,
    pub active_ip: Color,
    pub idle_ip: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    mirror: Color::Rgb(137, 180, 250),         // Blue for mirrors and branches
    memory_op: Color::Rgb(148, 226, 213),      // Teal for pointer movement
    io_op: Color::Rgb(245, 194, 231),          // Pink for input/output
    number: Color::Rgb(250, 179, 135),         // Orange for digits
    active_ip: Color::Rgb(249, 226, 175),      // Yellow for the active IP
    idle_ip: Color::Rgb(166, 227, 161),        // Green for waiting IPs
};
