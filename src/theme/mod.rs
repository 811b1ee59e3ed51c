//! Color palettes and the appearance mode that chooses between them.

pub mod appearance;
pub mod palette;

pub use appearance::Appearance;
pub use palette::{select_theme, Mode, Theme};
