use strider_input::{InputEvent, InputSink};

/// Anything stepped once per rendered or simulated frame.
pub trait Updatable {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);
}

/// A component the host registers with a [`Scheduler`].
///
/// Replaces engine base-class attachment: behaviours are plain owned values
/// composed from [`InputSink`] and [`Updatable`].
pub trait Behaviour: InputSink + Updatable {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Called when the behaviour becomes enabled. Subscribe to input here.
    fn on_enable(&mut self) {}

    /// Called when the behaviour becomes disabled. Drop input subscriptions here.
    fn on_disable(&mut self) {}
}

/// Handle to a behaviour registered with a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviourId(pub usize);

/// Errors from scheduler operations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SchedulerError {
    #[error("unknown behaviour id {0:?}")]
    UnknownBehaviour(BehaviourId),
    #[error("invalid frame time {0}: must be finite and non-negative")]
    InvalidFrameTime(f32),
}

/// A record of every scheduler mutation, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerEvent {
    Added { id: BehaviourId, name: String },
    Enabled { id: BehaviourId },
    Disabled { id: BehaviourId },
    /// A frame finished; `updated` behaviours were stepped.
    Stepped { frame: u64, dt: f32, updated: usize },
}

struct Slot {
    behaviour: Box<dyn Behaviour>,
    enabled: bool,
}

/// Owns behaviours and drives them from the host's frame loop.
#[derive(Default)]
pub struct Scheduler {
    slots: Vec<Slot>,
    frame: u64,
    event_log: Vec<SchedulerEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[SchedulerEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<SchedulerEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Register a behaviour. It starts enabled, so `on_enable` runs immediately.
    pub fn add(&mut self, behaviour: Box<dyn Behaviour>) -> BehaviourId {
        let id = BehaviourId(self.slots.len());
        let name = behaviour.name().to_owned();
        tracing::debug!(?id, %name, "behaviour added");
        let mut slot = Slot {
            behaviour,
            enabled: true,
        };
        slot.behaviour.on_enable();
        self.slots.push(slot);
        self.event_log.push(SchedulerEvent::Added { id, name });
        self.event_log.push(SchedulerEvent::Enabled { id });
        id
    }

    pub fn is_enabled(&self, id: BehaviourId) -> Result<bool, SchedulerError> {
        self.slots
            .get(id.0)
            .map(|s| s.enabled)
            .ok_or(SchedulerError::UnknownBehaviour(id))
    }

    /// Enable or disable a behaviour. Hooks fire only when the state changes.
    pub fn set_enabled(&mut self, id: BehaviourId, enabled: bool) -> Result<(), SchedulerError> {
        let slot = self
            .slots
            .get_mut(id.0)
            .ok_or(SchedulerError::UnknownBehaviour(id))?;
        if slot.enabled == enabled {
            return Ok(());
        }
        slot.enabled = enabled;
        if enabled {
            slot.behaviour.on_enable();
            self.event_log.push(SchedulerEvent::Enabled { id });
        } else {
            slot.behaviour.on_disable();
            self.event_log.push(SchedulerEvent::Disabled { id });
        }
        tracing::debug!(?id, name = slot.behaviour.name(), enabled, "behaviour toggled");
        Ok(())
    }

    /// Push an input event to every enabled behaviour. Returns how many received it.
    pub fn dispatch(&mut self, event: &InputEvent) -> usize {
        let mut delivered = 0;
        for slot in self.slots.iter_mut().filter(|s| s.enabled) {
            slot.behaviour.on_input(event);
            delivered += 1;
        }
        delivered
    }

    /// Step every enabled behaviour once with `dt` seconds.
    pub fn step(&mut self, dt: f32) -> Result<usize, SchedulerError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SchedulerError::InvalidFrameTime(dt));
        }
        let _span = tracing::debug_span!("frame", frame = self.frame + 1, dt).entered();
        let mut updated = 0;
        for slot in self.slots.iter_mut().filter(|s| s.enabled) {
            slot.behaviour.update(dt);
            updated += 1;
        }
        self.frame += 1;
        self.event_log.push(SchedulerEvent::Stepped {
            frame: self.frame,
            dt,
            updated,
        });
        tracing::trace!(frame = self.frame, updated, "frame complete");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use strider_input::Action;

    #[derive(Default)]
    struct Probe {
        log: Vec<String>,
    }

    struct Recording {
        name: &'static str,
        probe: Rc<RefCell<Probe>>,
    }

    impl InputSink for Recording {
        fn on_input(&mut self, event: &InputEvent) {
            self.probe
                .borrow_mut()
                .log
                .push(format!("{}:input:{:?}", self.name, event.action));
        }
    }

    impl Updatable for Recording {
        fn update(&mut self, dt: f32) {
            self.probe
                .borrow_mut()
                .log
                .push(format!("{}:update:{dt}", self.name));
        }
    }

    impl Behaviour for Recording {
        fn name(&self) -> &str {
            self.name
        }
        fn on_enable(&mut self) {
            self.probe.borrow_mut().log.push(format!("{}:enable", self.name));
        }
        fn on_disable(&mut self) {
            self.probe.borrow_mut().log.push(format!("{}:disable", self.name));
        }
    }

    fn recording(name: &'static str, probe: &Rc<RefCell<Probe>>) -> Box<dyn Behaviour> {
        Box::new(Recording {
            name,
            probe: Rc::clone(probe),
        })
    }

    #[test]
    fn scheduler_starts_empty() {
        let s = Scheduler::new();
        assert!(s.is_empty());
        assert_eq!(s.frame(), 0);
    }

    #[test]
    fn add_enables_immediately() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        let id = s.add(recording("a", &probe));
        assert_eq!(s.is_enabled(id), Ok(true));
        assert_eq!(probe.borrow().log, vec!["a:enable"]);
    }

    #[test]
    fn step_updates_in_registration_order() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        s.add(recording("a", &probe));
        s.add(recording("b", &probe));
        probe.borrow_mut().log.clear();

        assert_eq!(s.step(0.5), Ok(2));
        assert_eq!(probe.borrow().log, vec!["a:update:0.5", "b:update:0.5"]);
        assert_eq!(s.frame(), 1);
    }

    #[test]
    fn disabled_behaviour_skips_update_and_input() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        let a = s.add(recording("a", &probe));
        s.add(recording("b", &probe));
        s.set_enabled(a, false).unwrap();
        probe.borrow_mut().log.clear();

        assert_eq!(s.dispatch(&InputEvent::performed(Action::Jump)), 1);
        s.step(0.1).unwrap();
        assert_eq!(probe.borrow().log, vec!["b:input:Jump", "b:update:0.1"]);
    }

    #[test]
    fn lifecycle_hooks_fire_only_on_transition() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        let a = s.add(recording("a", &probe));
        s.set_enabled(a, true).unwrap();
        s.set_enabled(a, false).unwrap();
        s.set_enabled(a, false).unwrap();
        s.set_enabled(a, true).unwrap();
        assert_eq!(probe.borrow().log, vec!["a:enable", "a:disable", "a:enable"]);
    }

    #[test]
    fn add_enables_without_double_hook() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        let a = s.add(recording("a", &probe));
        s.set_enabled(a, true).unwrap();
        assert_eq!(probe.borrow().log, vec!["a:enable"]);
        assert_eq!(
            s.events(),
            &[
                SchedulerEvent::Added {
                    id: a,
                    name: "a".into()
                },
                SchedulerEvent::Enabled { id: a },
            ]
        );
    }

    #[test]
    fn unknown_id_is_error() {
        let mut s = Scheduler::new();
        let missing = BehaviourId(3);
        assert_eq!(
            s.set_enabled(missing, true),
            Err(SchedulerError::UnknownBehaviour(missing))
        );
        assert!(s.is_enabled(missing).is_err());
    }

    #[test]
    fn invalid_frame_time_updates_nothing() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        s.add(recording("a", &probe));
        probe.borrow_mut().log.clear();

        assert!(matches!(s.step(-0.1), Err(SchedulerError::InvalidFrameTime(_))));
        assert!(matches!(s.step(f32::NAN), Err(SchedulerError::InvalidFrameTime(_))));
        assert!(probe.borrow().log.is_empty());
        assert_eq!(s.frame(), 0);
    }

    #[test]
    fn event_log_records_mutations() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut s = Scheduler::new();
        let a = s.add(recording("a", &probe));
        s.step(0.2).unwrap();
        s.set_enabled(a, false).unwrap();

        let events = s.drain_events();
        assert_eq!(
            events,
            vec![
                SchedulerEvent::Added {
                    id: a,
                    name: "a".into()
                },
                SchedulerEvent::Enabled { id: a },
                SchedulerEvent::Stepped {
                    frame: 1,
                    dt: 0.2,
                    updated: 1
                },
                SchedulerEvent::Disabled { id: a },
            ]
        );
        assert!(s.events().is_empty());
    }
}
