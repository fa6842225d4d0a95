use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x1c, 0x1c, 0x1c);
pub const BEER_GOLD: Color = Color::Rgb(0xff, 0xd7, 0x00);
pub const RESET_ORANGE: Color = Color::Rgb(0xff, 0x45, 0x00);
pub const JOKE_GREEN: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const PANEL_BACKGROUND: Color = Color::Rgb(0x2c, 0x2c, 0x2c);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const MUTED_TEXT: Color = Color::Rgb(0xbb, 0xbb, 0xbb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x44, 0x44, 0x44);
