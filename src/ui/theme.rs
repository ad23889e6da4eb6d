use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PORT_SELECTED: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const PORT_CONNECTED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const PORT_DISCONNECTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PORT_HIGHLIGHT: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const CONTROL_DISABLED: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const STATUS_BUSY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
