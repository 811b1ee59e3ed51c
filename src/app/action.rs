use crate::theme::Mode;

/// Side effects the event loop carries out after a handler runs.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Ask the host to switch appearance; it answers with `AppEvent::AppearanceChanged`.
    RequestAppearance(Mode),
    Quit,
}
