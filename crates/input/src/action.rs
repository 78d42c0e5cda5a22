use glam::Vec2;

/// Where an action is in its press/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    /// Control left its resting state but the action has not fired yet.
    Started,
    /// The action fired. Edge-triggered actions see this once per press.
    Performed,
    /// Control returned to rest or the action was interrupted.
    Canceled,
}

/// A high-level action produced by whatever input layer the host uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Horizontal move axis, each component in `[-1, 1]`.
    Move(Vec2),
    /// Jump button.
    Jump,
    /// Scroll wheel delta; `y` drives zoom.
    Zoom(Vec2),
}

/// An action together with the phase it was delivered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub action: Action,
    pub phase: ActionPhase,
}

impl InputEvent {
    pub fn new(action: Action, phase: ActionPhase) -> Self {
        Self { action, phase }
    }

    /// Shorthand for a `Performed` event.
    pub fn performed(action: Action) -> Self {
        Self::new(action, ActionPhase::Performed)
    }

    pub fn is_performed(&self) -> bool {
        self.phase == ActionPhase::Performed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performed_shorthand_sets_phase() {
        let e = InputEvent::performed(Action::Jump);
        assert!(e.is_performed());
        assert_eq!(e.action, Action::Jump);
    }

    #[test]
    fn canceled_is_not_performed() {
        let e = InputEvent::new(Action::Move(Vec2::ZERO), ActionPhase::Canceled);
        assert!(!e.is_performed());
    }

    #[test]
    fn zoom_carries_delta() {
        let e = InputEvent::performed(Action::Zoom(Vec2::new(0.0, 1.5)));
        assert!(matches!(e.action, Action::Zoom(d) if d.y == 1.5));
    }
}
