use glam::{Mat3, Quat, Vec3};

/// Vectors shorter than this are treated as having no direction.
pub const NORMALIZE_EPSILON: f32 = 1e-5;

/// Project `v` onto the horizontal plane and renormalize it.
///
/// Returns `None` when the flattened vector has no usable length, e.g. a
/// camera looking straight down.
pub fn flatten_horizontal(v: Vec3) -> Option<Vec3> {
    let flat = Vec3::new(v.x, 0.0, v.z);
    let len = flat.length();
    (len > NORMALIZE_EPSILON).then(|| flat / len)
}

/// Orientation whose +Z axis points along `direction` with +Y kept as close
/// to `up` as possible.
///
/// Returns `None` for a zero-length direction or one parallel to `up`.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;
    let right = up.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Spherical interpolation from `from` toward `to` with `t` clamped to `[0, 1]`.
pub fn slerp_clamped(from: Quat, to: Quat, t: f32) -> Quat {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return to;
    }
    from.slerp(to, t)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
///
/// The result never leaves the closed interval spanned by `a` and `b`.
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return b;
    }
    let v = a + (b - a) * t;
    v.clamp(a.min(b), a.max(b))
}
