//! Tap gestures and their translation from terminal mouse events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::geometry::Vec2;

/// Stage of a tap gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapPhase {
    Began,
    Moved,
    Ended,
}

/// One finger (or mouse button) gesture.
///
/// Handlers receive the touch by mutable reference and may
/// [`consume`](Touch::consume) it, which stops it propagating to any handler
/// dispatched after them, for the rest of the gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Touch {
    id: u64,
    /// Current location in the receiver's coordinate space.
    pub location: Vec2,
    /// Displacement reported with this event.
    pub delta: Vec2,
    enabled: bool,
}

impl Touch {
    pub fn new(id: u64, location: Vec2) -> Self {
        Self {
            id,
            location,
            delta: Vec2::ZERO,
            enabled: true,
        }
    }

    pub fn with_delta(mut self, delta: Vec2) -> Self {
        self.delta = delta;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the touch should still reach further handlers.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stop the touch from reaching any further handler.
    pub fn consume(&mut self) {
        self.enabled = false;
    }
}

/// Turns left-button mouse events into tap gestures.
///
/// A press begins a gesture, drags move it with the delta since the previous
/// event, and the release ends it with the gesture's net travel as its delta.
/// Consumption recorded through [`commit`](TouchTracker::commit) sticks to
/// the live gesture until it ends.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Option<ActiveTouch>,
    next_id: u64,
}

#[derive(Debug)]
struct ActiveTouch {
    touch: Touch,
    start: Vec2,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `event`, mapping its cell position through `to_local`.
    ///
    /// Returns `None` for events that are not part of a left-button gesture.
    pub fn track(
        &mut self,
        event: &MouseEvent,
        to_local: impl Fn(u16, u16) -> Vec2,
    ) -> Option<(TapPhase, Touch)> {
        let location = to_local(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.next_id += 1;
                let touch = Touch::new(self.next_id, location);
                self.active = Some(ActiveTouch {
                    touch: touch.clone(),
                    start: location,
                });
                Some((TapPhase::Began, touch))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let active = self.active.as_mut()?;
                active.touch.delta = location - active.touch.location;
                active.touch.location = location;
                Some((TapPhase::Moved, active.touch.clone()))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let mut active = self.active.take()?;
                active.touch.delta = location - active.start;
                active.touch.location = location;
                Some((TapPhase::Ended, active.touch))
            }
            _ => None,
        }
    }

    /// Record a handler's consumption of `touch` on the live gesture.
    pub fn commit(&mut self, touch: &Touch) {
        if let Some(active) = self.active.as_mut() {
            if active.touch.id == touch.id && !touch.enabled {
                active.touch.enabled = false;
            }
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // Rows grow downward on screen; scene y grows upward.
    fn flip(column: u16, row: u16) -> Vec2 {
        Vec2::new(column as f32, -(row as f32))
    }

    #[test]
    fn press_drag_release() {
        let mut tracker = TouchTracker::new();
        let (phase, began) = tracker
            .track(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 10), flip)
            .unwrap();
        assert_eq!(phase, TapPhase::Began);
        assert_eq!(began.delta, Vec2::ZERO);

        let (phase, moved) = tracker
            .track(&mouse(MouseEventKind::Drag(MouseButton::Left), 2, 8), flip)
            .unwrap();
        assert_eq!(phase, TapPhase::Moved);
        assert_eq!(moved.delta, Vec2::new(0.0, 2.0));
        assert_eq!(moved.id(), began.id());

        tracker.track(&mouse(MouseEventKind::Drag(MouseButton::Left), 2, 7), flip);
        let (phase, ended) = tracker
            .track(&mouse(MouseEventKind::Up(MouseButton::Left), 2, 7), flip)
            .unwrap();
        assert_eq!(phase, TapPhase::Ended);
        assert_eq!(ended.delta, Vec2::new(0.0, 3.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn release_in_place_has_zero_delta() {
        let mut tracker = TouchTracker::new();
        tracker.track(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 5), flip);
        let (_, ended) = tracker
            .track(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 5), flip)
            .unwrap();
        assert_eq!(ended.delta, Vec2::ZERO);
    }

    #[test]
    fn consumption_persists_for_the_gesture() {
        let mut tracker = TouchTracker::new();
        let (_, mut touch) = tracker
            .track(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), flip)
            .unwrap();
        touch.consume();
        tracker.commit(&touch);

        let (_, ended) = tracker
            .track(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), flip)
            .unwrap();
        assert!(!ended.is_enabled());

        let (_, next) = tracker
            .track(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), flip)
            .unwrap();
        assert!(next.is_enabled());
        assert_ne!(next.id(), ended.id());
    }

    #[test]
    fn stray_events_are_ignored() {
        let mut tracker = TouchTracker::new();
        assert!(tracker
            .track(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0), flip)
            .is_none());
        assert!(tracker
            .track(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), flip)
            .is_none());
        assert!(tracker
            .track(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), flip)
            .is_none());
        assert!(tracker
            .track(&mouse(MouseEventKind::Moved, 0, 0), flip)
            .is_none());
    }
}
