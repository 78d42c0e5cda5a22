use glam::Vec2;
use strider_common::lerp_clamped;
use strider_input::{Action, ActionMap, InputEvent, InputSink};
use strider_kernel::{Behaviour, Updatable};

use crate::config::ZoomConfig;
use crate::rig::{OrbitRig, PointerLock};

/// What a single zoom step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFrame {
    pub target_radius: f32,
    pub current_radius: f32,
    /// A scroll delta was turned into a new target this frame.
    pub scroll_consumed: bool,
}

#[derive(Debug, Default)]
struct ZoomInput {
    scroll_delta: Vec2,
}

impl InputSink for ZoomInput {
    fn on_input(&mut self, event: &InputEvent) {
        if let Action::Zoom(delta) = event.action
            && event.is_performed()
        {
            // Last delta before a frame wins; bursts are not summed.
            self.scroll_delta = delta;
            tracing::debug!(delta = ?delta, "scroll received");
        }
    }
}

/// Smoothed scroll zoom for an orbiting camera rig.
pub struct ZoomController<R> {
    config: ZoomConfig,
    rig: R,
    actions: ActionMap,
    input: ZoomInput,
    target_radius: f32,
    current_radius: f32,
}

impl<R: OrbitRig> ZoomController<R> {
    /// Bind to `rig`, capture its radius as both current and target, and lock
    /// the pointer to the viewport.
    ///
    /// A starting radius outside `[min_distance, max_distance]` is pulled into
    /// range so the bounds hold from the first frame.
    pub fn new(config: ZoomConfig, rig: R, pointer: &mut dyn PointerLock) -> Self {
        let radius = rig.radius();
        let clamped = config.clamp_radius(radius);
        if clamped != radius {
            tracing::debug!(radius, clamped, "initial orbit radius out of range");
        }
        pointer.lock_pointer();
        Self {
            config,
            rig,
            actions: ActionMap::new(),
            input: ZoomInput::default(),
            target_radius: clamped,
            current_radius: clamped,
        }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn target_radius(&self) -> f32 {
        self.target_radius
    }

    pub fn current_radius(&self) -> f32 {
        self.current_radius
    }

    /// Unconsumed scroll delta, zero once a frame has used it.
    pub fn scroll_delta(&self) -> Vec2 {
        self.input.scroll_delta
    }

    /// Store `delta`, replacing any delta not yet consumed. Dropped while
    /// the controller is disabled.
    pub fn on_scroll(&mut self, delta: Vec2) {
        let event = InputEvent::performed(Action::Zoom(delta));
        self.actions.dispatch(&event, &mut self.input);
    }

    /// Run one frame of `dt` seconds. The rig radius is written every frame
    /// so it keeps converging after scrolling stops.
    pub fn update_frame(&mut self, dt: f32) -> ZoomFrame {
        let mut scroll_consumed = false;
        if self.input.scroll_delta.y != 0.0 {
            let requested = self.rig.radius() - self.input.scroll_delta.y * self.config.zoom_speed;
            self.target_radius = self.config.clamp_radius(requested);
            self.input.scroll_delta = Vec2::ZERO;
            scroll_consumed = true;
            tracing::debug!(requested, target = self.target_radius, "zoom target changed");
        }

        // Single-step lerp with blend rate * dt, not an exponential decay.
        self.current_radius = lerp_clamped(
            self.current_radius,
            self.target_radius,
            dt * self.config.zoom_lerp_speed,
        );
        self.rig.set_radius(self.current_radius);

        tracing::trace!(
            current = self.current_radius,
            target = self.target_radius,
            "zoom step"
        );

        ZoomFrame {
            target_radius: self.target_radius,
            current_radius: self.current_radius,
            scroll_consumed,
        }
    }
}

impl<R: OrbitRig> InputSink for ZoomController<R> {
    fn on_input(&mut self, event: &InputEvent) {
        self.actions.dispatch(event, &mut self.input);
    }
}

impl<R: OrbitRig> Updatable for ZoomController<R> {
    fn update(&mut self, dt: f32) {
        self.update_frame(dt);
    }
}

impl<R: OrbitRig> Behaviour for ZoomController<R> {
    fn name(&self) -> &str {
        "zoom"
    }

    fn on_enable(&mut self) {
        self.actions.enable();
    }

    fn on_disable(&mut self) {
        self.actions.disable();
        self.input.scroll_delta = Vec2::ZERO;
    }
}
