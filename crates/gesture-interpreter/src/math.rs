pub use emath::{Pos2, Vec2};
pub use glam::{DMat4, DQuat, DVec2, DVec3, EulerRot};

/// Distance between the first two touch points.
///
/// Returns [`None`] if fewer than two points are given,
/// or if the distance is not a finite number.
pub fn pinch_distance(touches: &[Pos2]) -> Option<f32> {
    match touches {
        [first, second, ..] => {
            Some(first.distance(*second)).filter(|distance| distance.is_finite())
        }
        _ => None,
    }
}

/// Screen space movement from `from` to `to`, widened for transform math.
pub(crate) fn pointer_delta(from: Pos2, to: Pos2) -> DVec2 {
    let delta: Vec2 = to - from;
    DVec2::new(f64::from(delta.x), f64::from(delta.y))
}
