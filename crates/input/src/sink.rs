use crate::action::InputEvent;

/// Receiver of pushed input events.
///
/// Hosts call this between frames, on the same logical thread that runs
/// the receiver's per-frame update.
pub trait InputSink {
    fn on_input(&mut self, event: &InputEvent);
}

/// Enable/disable gate in front of an [`InputSink`].
///
/// Starts disabled, mirroring an action asset that has not been enabled yet.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    enabled: bool,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        if !self.enabled {
            tracing::trace!("action map enabled");
        }
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        if self.enabled {
            tracing::trace!("action map disabled");
        }
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Forward `event` to `sink` if the map is enabled.
    /// Returns whether the event was delivered.
    pub fn dispatch<S: InputSink + ?Sized>(&self, event: &InputEvent, sink: &mut S) -> bool {
        if !self.enabled {
            tracing::trace!(?event, "action map disabled, dropping event");
            return false;
        }
        sink.on_input(event);
        true
    }
}
