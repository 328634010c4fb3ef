use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    block_display::*, board_display::*, game_display::*, key_binding_display::*,
    next_piece_display::*, stats_display::*, summary_display::*,
};

mod block_display;
mod board_display;
mod game_display;
mod key_binding_display;
mod next_piece_display;
mod stats_display;
mod summary_display;

mod color {
    use ratatui::style::Color;

    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Engine palette, indexed by `ColorIndex`.
    pub const PALETTE: [Color; 8] = [BLACK, RED, GREEN, BLUE, ORANGE, CYAN, MAGENTA, YELLOW];
}

pub mod style {
    use horizon_engine::ColorIndex;
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GHOST: Style = fg_bg(color::WHITE, color::BLACK);
    pub const TITLE: Style = fg_bg(color::CYAN, color::BLACK);
    pub const STATUS: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const COMBO: Style = fg_bg(color::BLACK, color::MAGENTA);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);

    pub const fn block(color: ColorIndex) -> Style {
        bg_only(color::PALETTE[color.index() as usize])
    }

    pub const BORDER_PLAYING: Color = color::WHITE;
    pub const BORDER_COMBO: Color = color::MAGENTA;
    pub const BORDER_GAME_OVER: Color = color::RED;
}

/// Levels are counted from 1 on screen; the engine counts from 0.
fn level_text(level: usize) -> String {
    (level + 1).to_string()
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
