use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

/// Terminal input delivered to [`Model::on_event`](crate::Model::on_event).
///
/// Only the events widgets react to are surfaced; focus changes, paste and
/// key releases are dropped by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press or repeat.
    Key(KeyEvent),
    /// A mouse button, drag, motion or wheel event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, dropping the ones models never see.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(TerminalEvent::Key(key)),
            Event::Mouse(mouse) => Some(TerminalEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            _ => None,
        }
    }
}
