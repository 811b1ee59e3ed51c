use crate::theme::Mode;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The host reported a new appearance mode
    AppearanceChanged(Mode),
}
