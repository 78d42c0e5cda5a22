use glam::{Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use strider_common::Transform;

/// Which sides of the body touched something during the last move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub below: bool,
    pub sides: bool,
    pub above: bool,
}

impl CollisionFlags {
    pub fn none() -> Self {
        Self::default()
    }
}

/// The character's collision-aware physical body.
///
/// Sweep-and-resolve lives behind this trait; controllers only submit a
/// displacement and read back contact state.
pub trait CharacterMover {
    /// Whether the body rested on walkable ground after the last move.
    fn is_grounded(&self) -> bool;

    /// Sweep the body by `delta`, resolving collisions.
    fn move_by(&mut self, delta: Vec3) -> CollisionFlags;

    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);
}

impl<M: CharacterMover + ?Sized> CharacterMover for Box<M> {
    fn is_grounded(&self) -> bool {
        (**self).is_grounded()
    }
    fn move_by(&mut self, delta: Vec3) -> CollisionFlags {
        (**self).move_by(delta)
    }
    fn rotation(&self) -> Quat {
        (**self).rotation()
    }
    fn set_rotation(&mut self, rotation: Quat) {
        (**self).set_rotation(rotation)
    }
}

/// Shared handle, so the host can keep reading the body while a scheduler
/// owns the controller.
impl<M: CharacterMover + ?Sized> CharacterMover for Rc<RefCell<M>> {
    fn is_grounded(&self) -> bool {
        self.borrow().is_grounded()
    }
    fn move_by(&mut self, delta: Vec3) -> CollisionFlags {
        self.borrow_mut().move_by(delta)
    }
    fn rotation(&self) -> Quat {
        self.borrow().rotation()
    }
    fn set_rotation(&mut self, rotation: Quat) {
        self.borrow_mut().set_rotation(rotation)
    }
}

/// Mover over an infinite horizontal ground plane with no other obstacles.
#[derive(Debug, Clone)]
pub struct PlaneMover {
    pub transform: Transform,
    ground_height: f32,
    grounded: bool,
}

impl PlaneMover {
    /// Body at `position` above a ground plane at `ground_height`.
    /// A body that starts at or below the plane is placed on it, grounded.
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        let grounded = position.y <= ground_height;
        let mut transform = Transform::from_position(position);
        if grounded {
            transform.position.y = ground_height;
        }
        Self {
            transform,
            ground_height,
            grounded,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }
}

impl CharacterMover for PlaneMover {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, delta: Vec3) -> CollisionFlags {
        let mut target = self.transform.position + delta;
        let mut flags = CollisionFlags::none();
        if target.y <= self.ground_height {
            target.y = self.ground_height;
            flags.below = delta.y <= 0.0;
        }
        self.transform.position = target;
        self.grounded = flags.below;
        tracing::trace!(position = ?target, grounded = self.grounded, "plane mover moved");
        flags
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_grounded_on_plane() {
        let m = PlaneMover::new(Vec3::new(1.0, -0.5, 2.0), 0.0);
        assert!(m.is_grounded());
        assert_eq!(m.position(), Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn starts_airborne_above_plane() {
        let m = PlaneMover::new(Vec3::new(0.0, 3.0, 0.0), 0.0);
        assert!(!m.is_grounded());
    }

    #[test]
    fn downward_move_lands_on_plane() {
        let mut m = PlaneMover::new(Vec3::new(0.0, 0.1, 0.0), 0.0);
        let flags = m.move_by(Vec3::new(1.0, -1.0, 0.0));
        assert!(flags.below);
        assert!(m.is_grounded());
        assert_eq!(m.position(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn upward_move_leaves_ground() {
        let mut m = PlaneMover::new(Vec3::ZERO, 0.0);
        let flags = m.move_by(Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(flags, CollisionFlags::none());
        assert!(!m.is_grounded());
        assert_eq!(m.position().y, 0.5);
    }

    #[test]
    fn shared_handle_forwards() {
        let shared = Rc::new(RefCell::new(PlaneMover::new(Vec3::ZERO, 0.0)));
        let mut handle = Rc::clone(&shared);
        handle.move_by(Vec3::new(0.0, -0.1, 2.0));
        handle.set_rotation(Quat::from_rotation_y(1.0));
        assert_eq!(shared.borrow().position(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(shared.borrow().rotation(), Quat::from_rotation_y(1.0));
    }
}
