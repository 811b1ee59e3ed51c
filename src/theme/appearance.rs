//! Appearance-mode subscriptions.
//!
//! The host pushes mode changes in through [`Appearance::set_mode`]; anything
//! that depends on the palette registers a callback instead of re-reading the
//! system setting on every render.

use super::palette::{theme_for, Mode, Theme};

pub type Subscriber = Box<dyn FnMut(&Theme)>;

pub struct Appearance {
    mode: Mode,
    subscribers: Vec<Subscriber>,
}

impl Appearance {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            subscribers: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        theme_for(self.mode)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Theme) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Switch modes and notify subscribers. Returns false if nothing changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        let theme = theme_for(mode);
        tracing::info!(%mode, subscribers = self.subscribers.len(), "appearance changed");
        for subscriber in &mut self.subscribers {
            subscriber(&theme);
        }
        true
    }
}

/// Guess the terminal's appearance from `COLORFGBG` (`"fg;bg"`, as set by
/// rxvt, Konsole and others). Background colors 0-6 and 8 are dark.
pub fn detect_mode(colorfgbg: Option<&str>) -> Mode {
    let bg = colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|v| v.trim().parse::<u8>().ok());
    match bg {
        Some(0..=6) | Some(8) => Mode::Dark,
        _ => Mode::Light,
    }
}
