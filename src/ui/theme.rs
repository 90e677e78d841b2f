//! Fixed colour palette for the TUI.

use ratatui::style::Color;

/// Colour palette used by every pane.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Canvas background.
    pub base: Color,
    /// Inactive borders.
    pub surface1: Color,
    /// Row highlight background.
    pub surface2: Color,
    /// Muted captions and titles.
    pub overlay1: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (authors, counts).
    pub subtext0: Color,
    /// Focused borders and the active sort column.
    pub mauve: Color,
    /// Recent-search shortcuts.
    pub sapphire: Color,
    /// Loading indicator.
    pub yellow: Color,
    /// Error indicator.
    pub red: Color,
}

/// Catppuccin Mocha.
pub const PALETTE: Palette = Palette {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    surface1: Color::Rgb(69, 71, 90),    // #45475a
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext0: Color::Rgb(166, 173, 200), // #a6adc8
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    yellow: Color::Rgb(249, 226, 175),   // #f9e2af
    red: Color::Rgb(243, 139, 168),      // #f38ba8
};
