//! Light and dark color palettes.
//!
//! Colors that are translucent in the mobile design are stored here already
//! blended onto their palette's background.

use ratatui::style::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Exactly `"dark"` is dark; everything else falls back to light.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Mode::Dark,
            _ => Mode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Light => write!(f, "light"),
            Mode::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: Mode,
    pub text: Color,
    pub background: Color,
    pub header_background: Color,
    pub tint: Color,
    pub icon: Color,
    pub delete_icon_background: Color,
    pub selected_todo_background: Color,
    pub todo_button_background: Color,
    pub placeholder: Color,
}

const TINT_LIGHT: Color = Color::Rgb(0x0a, 0x7e, 0xa4);
const TINT_DARK: Color = Color::Rgb(0xff, 0xff, 0xff);

pub const LIGHT: Theme = Theme {
    mode: Mode::Light,
    text: Color::Rgb(0x11, 0x18, 0x1c),
    background: Color::Rgb(0xff, 0xff, 0xff),
    header_background: Color::Rgb(242, 242, 242),
    tint: TINT_LIGHT,
    icon: Color::Rgb(0x68, 0x70, 0x76),
    delete_icon_background: Color::Rgb(0xbb, 0x42, 0x42),
    selected_todo_background: Color::Rgb(204, 204, 204),
    todo_button_background: Color::Rgb(0x23, 0x23, 0x23),
    placeholder: Color::Rgb(128, 128, 128),
};

pub const DARK: Theme = Theme {
    mode: Mode::Dark,
    text: Color::Rgb(0xec, 0xed, 0xee),
    background: Color::Rgb(0x15, 0x17, 0x18),
    header_background: Color::Rgb(1, 1, 1),
    tint: TINT_DARK,
    icon: Color::Rgb(0x9b, 0xa1, 0xa6),
    delete_icon_background: Color::Rgb(0xbb, 0x42, 0x42),
    selected_todo_background: Color::Rgb(68, 69, 70),
    todo_button_background: Color::Rgb(0xda, 0xda, 0xda),
    placeholder: Color::Rgb(0x69, 0x69, 0x69),
};

pub fn theme_for(mode: Mode) -> Theme {
    match mode {
        Mode::Light => LIGHT,
        Mode::Dark => DARK,
    }
}

/// Pick the palette for an appearance name; unknown or missing means light.
pub fn select_theme(mode: Option<&str>) -> Theme {
    theme_for(Mode::parse(mode))
}
