use std::cell::RefCell;
use std::rc::Rc;

/// Camera rig that keeps a fixed distance from its tracked target.
pub trait OrbitRig {
    fn radius(&self) -> f32;
    fn set_radius(&mut self, radius: f32);
}

impl<R: OrbitRig + ?Sized> OrbitRig for Rc<RefCell<R>> {
    fn radius(&self) -> f32 {
        self.borrow().radius()
    }

    fn set_radius(&mut self, radius: f32) {
        self.borrow_mut().set_radius(radius)
    }
}

/// Plain orbital-follow rig holding only its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitFollow {
    pub radius: f32,
}

impl OrbitFollow {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl OrbitRig for OrbitFollow {
    fn radius(&self) -> f32 {
        self.radius
    }

    fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}

/// Pointer/cursor capture on the host's input device.
pub trait PointerLock {
    fn lock_pointer(&mut self);
}

/// For hosts without a pointer, e.g. headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPointer;

impl PointerLock for NoPointer {
    fn lock_pointer(&mut self) {}
}
