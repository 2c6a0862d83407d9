use ratatui::style::Color;

// Palette carried over from the original page styling, mapped onto a dark
// terminal.
pub const ACCENT: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_PAGE: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const BAR_TRACK: Color = Color::Rgb(0x30, 0x30, 0x30);
