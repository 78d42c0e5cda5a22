use glam::{Vec2, Vec3};
use strider_common::{flatten_horizontal, look_rotation, slerp_clamped};
use strider_input::{Action, ActionMap, ActionPhase, InputEvent, InputSink};
use strider_kernel::{Behaviour, Updatable};

use crate::camera::{CameraBasis, CameraBinding};
use crate::config::LocomotionConfig;
use crate::mover::{CharacterMover, CollisionFlags};

/// Vertical velocity a grounded body is held at, keeping it pressed into the
/// ground so contact stays reliable.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// Squared length the move direction must exceed before the body turns.
pub const FACING_EPSILON_SQ: f32 = 1e-3;

/// What a single locomotion step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionFrame {
    /// Ground contact sampled at the start of the frame.
    pub grounded: bool,
    /// Set when a buffered jump fired this frame.
    pub launch_velocity: Option<f32>,
    /// Displacement handed to the mover.
    pub displacement: Vec3,
    pub collisions: CollisionFlags,
}

/// Input state written between frames.
#[derive(Debug, Default)]
struct LocomotionInput {
    move_input: Vec2,
    pending_jump: bool,
}

impl InputSink for LocomotionInput {
    fn on_input(&mut self, event: &InputEvent) {
        match event.action {
            Action::Move(axis) => self.move_input = axis,
            Action::Jump => {
                tracing::debug!(phase = ?event.phase, "jump action");
                if event.phase == ActionPhase::Performed {
                    self.pending_jump = true;
                    tracing::debug!("jump input received");
                }
            }
            Action::Zoom(_) => {}
        }
    }
}

/// Camera-relative ground movement with gravity and buffered jumping.
///
/// A jump pressed while airborne stays pending and fires on the first
/// grounded frame.
pub struct LocomotionController<M> {
    config: LocomotionConfig,
    mover: M,
    camera: Option<Box<dyn CameraBasis>>,
    actions: ActionMap,
    input: LocomotionInput,
    vertical_velocity: f32,
}

impl<M: CharacterMover> LocomotionController<M> {
    /// Bind to `mover` and resolve the camera. Without a camera, movement is
    /// world-relative (forward = +Z, right = +X) and a warning is logged once.
    pub fn new(config: LocomotionConfig, mover: M, camera: CameraBinding) -> Self {
        let camera = camera.resolve();
        if camera.is_none() {
            tracing::warn!(
                "no camera bound and none resolvable, character movement will be world-relative"
            );
        }
        Self {
            config,
            mover,
            camera,
            actions: ActionMap::new(),
            input: LocomotionInput::default(),
            vertical_velocity: 0.0,
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    pub fn move_input(&self) -> Vec2 {
        self.input.move_input
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn is_jump_pending(&self) -> bool {
        self.input.pending_jump
    }

    /// Store the latest move axis. Values are taken as-is. Dropped while
    /// the controller is disabled.
    pub fn on_move(&mut self, axis: Vec2) {
        let event = InputEvent::performed(Action::Move(axis));
        self.actions.dispatch(&event, &mut self.input);
    }

    /// Register a jump edge. Only the `Performed` phase queues a jump, and
    /// only while the controller is enabled.
    pub fn on_jump(&mut self, phase: ActionPhase) {
        let event = InputEvent::new(Action::Jump, phase);
        self.actions.dispatch(&event, &mut self.input);
    }

    /// Flattened, normalized camera forward and right. A degenerate axis
    /// comes back as zero so it contributes no movement.
    pub fn movement_basis(&self) -> (Vec3, Vec3) {
        let (forward, right) = match &self.camera {
            Some(camera) => (camera.forward(), camera.right()),
            None => (Vec3::Z, Vec3::X),
        };
        (
            flatten_horizontal(forward).unwrap_or(Vec3::ZERO),
            flatten_horizontal(right).unwrap_or(Vec3::ZERO),
        )
    }

    /// Horizontal direction the current input asks for.
    pub fn desired_direction(&self) -> Vec3 {
        let (forward, right) = self.movement_basis();
        forward * self.input.move_input.y + right * self.input.move_input.x
    }

    /// Run one frame of `dt` seconds. Step order matters: ground contact is
    /// sampled first and gravity is integrated after any jump impulse.
    pub fn update_frame(&mut self, dt: f32) -> LocomotionFrame {
        let grounded = self.mover.is_grounded();
        if grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        }

        let direction = self.desired_direction();

        // Blend is rate * dt, a linear approximation rather than a decay.
        if self.config.face_move_direction
            && direction.length_squared() > FACING_EPSILON_SQ
            && let Some(target) = look_rotation(direction, Vec3::Y)
        {
            let current = self.mover.rotation();
            self.mover
                .set_rotation(slerp_clamped(current, target, self.config.turn_rate * dt));
        }

        let mut launch_velocity = None;
        if grounded && self.input.pending_jump {
            let v = self.config.launch_velocity();
            self.vertical_velocity = v;
            self.input.pending_jump = false;
            launch_velocity = Some(v);
            tracing::debug!(launch_velocity = v, grounded, "jump executed");
        }

        self.vertical_velocity += self.config.gravity * dt;

        let velocity =
            direction * self.config.move_speed + Vec3::new(0.0, self.vertical_velocity, 0.0);
        let displacement = velocity * dt;
        let collisions = self.mover.move_by(displacement);

        tracing::trace!(
            grounded,
            vertical_velocity = self.vertical_velocity,
            displacement = ?displacement,
            "locomotion step"
        );

        LocomotionFrame {
            grounded,
            launch_velocity,
            displacement,
            collisions,
        }
    }
}

impl<M: CharacterMover> InputSink for LocomotionController<M> {
    fn on_input(&mut self, event: &InputEvent) {
        self.actions.dispatch(event, &mut self.input);
    }
}

impl<M: CharacterMover> Updatable for LocomotionController<M> {
    fn update(&mut self, dt: f32) {
        self.update_frame(dt);
    }
}

impl<M: CharacterMover> Behaviour for LocomotionController<M> {
    fn name(&self) -> &str {
        "locomotion"
    }

    fn on_enable(&mut self) {
        self.actions.enable();
    }

    /// Input stops flowing and the held move axis is released. A pending
    /// jump is kept.
    fn on_disable(&mut self) {
        self.actions.disable();
        self.input.move_input = Vec2::ZERO;
    }
}
