use colored::Color;

pub const TEXT_DEFAULT: Color = Color::White;
pub const PRIMARY: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ACCENT: Color = Color::Yellow;
pub const MAC_ADDR: Color = Color::Magenta;
pub const VENDOR: Color = Color::BrightGreen;
pub const NOT_FOUND: Color = Color::Red;
