use crate::keypad::ButtonClass;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub memory: Color,    // Cyan for memory keys
    pub operator: Color,  // Pink for operators
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    memory: Color::Rgb(148, 226, 213),
    operator: Color::Rgb(245, 194, 231),
};

impl Theme {
    /// Accent color for a keypad button's border
    pub fn class_color(&self, class: ButtonClass) -> Color {
        match class {
            ButtonClass::Mode => self.primary,
            ButtonClass::Memory => self.memory,
            ButtonClass::Function => self.function,
            ButtonClass::Clear => self.error,
            ButtonClass::Operator => self.operator,
            ButtonClass::Digit => self.fg,
            ButtonClass::Equals => self.success,
        }
    }
}

/// Animated button background for grid position (`row`, `col`).
///
/// Each channel is a phase-shifted sine wave over the grid position and the
/// color `seed`, scaled into `1..=255`.
pub fn rainbow(row: usize, col: usize, seed: u64) -> Color {
    let i = row as f64;
    let j = col as f64;
    let s = seed as f64;

    let channel = |phase: f64| (phase.sin() * 127.0 + 128.0).round() as u8;

    Color::Rgb(
        channel(0.3 * i + 0.01 * s),
        channel(0.3 * j + 0.02 * s + 2.0),
        channel(0.3 * (i + j) + 0.03 * s + 4.0),
    )
}

/// Black or white, whichever reads better on `bg`
pub fn contrast_fg(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}
