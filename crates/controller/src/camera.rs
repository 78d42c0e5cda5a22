use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use strider_common::Transform;

/// Read-only view of the camera that movement is relative to.
pub trait CameraBasis {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
}

impl CameraBasis for Transform {
    fn forward(&self) -> Vec3 {
        Transform::forward(self)
    }

    fn right(&self) -> Vec3 {
        Transform::right(self)
    }
}

/// Shared handle to a camera the host keeps moving.
impl<T: CameraBasis + ?Sized> CameraBasis for Rc<RefCell<T>> {
    fn forward(&self) -> Vec3 {
        self.borrow().forward()
    }

    fn right(&self) -> Vec3 {
        self.borrow().right()
    }
}

type CameraResolver = Box<dyn FnOnce() -> Option<Box<dyn CameraBasis>>>;

/// How a controller finds its camera. Resolved once, at construction.
#[derive(Default)]
pub enum CameraBinding {
    /// A camera supplied directly by the host.
    Explicit(Box<dyn CameraBasis>),
    /// Host callback standing in for an "active camera" lookup.
    Resolver(CameraResolver),
    /// No camera; movement is world-relative.
    #[default]
    Unbound,
}

impl CameraBinding {
    pub fn explicit(camera: impl CameraBasis + 'static) -> Self {
        Self::Explicit(Box::new(camera))
    }

    pub fn resolver(f: impl FnOnce() -> Option<Box<dyn CameraBasis>> + 'static) -> Self {
        Self::Resolver(Box::new(f))
    }

    pub fn resolve(self) -> Option<Box<dyn CameraBasis>> {
        match self {
            Self::Explicit(camera) => Some(camera),
            Self::Resolver(f) => f(),
            Self::Unbound => None,
        }
    }
}

impl std::fmt::Debug for CameraBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(_) => f.write_str("Explicit"),
            Self::Resolver(_) => f.write_str("Resolver"),
            Self::Unbound => f.write_str("Unbound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_resolves_to_camera() {
        let cam = CameraBinding::explicit(Transform::from_yaw_degrees(90.0))
            .resolve()
            .unwrap();
        assert!(cam.forward().abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn resolver_may_find_nothing() {
        assert!(CameraBinding::resolver(|| None).resolve().is_none());
        assert!(CameraBinding::Unbound.resolve().is_none());
    }

    #[test]
    fn resolver_runs_once_at_resolve() {
        let binding = CameraBinding::resolver(|| {
            Some(Box::new(Transform::default()) as Box<dyn CameraBasis>)
        });
        assert!(binding.resolve().is_some());
    }

    #[test]
    fn shared_camera_tracks_host_changes() {
        let shared = Rc::new(RefCell::new(Transform::default()));
        let cam = CameraBinding::explicit(Rc::clone(&shared)).resolve().unwrap();
        shared.borrow_mut().rotation = glam::Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert!(cam.forward().abs_diff_eq(Vec3::X, 1e-5));
    }
}
