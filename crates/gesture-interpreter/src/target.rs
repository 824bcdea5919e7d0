use crate::math::{DMat4, DQuat, DVec3, EulerRot};

/// Object manipulated by a [`GestureInterpreter`](crate::GestureInterpreter).
///
/// The interpreter never owns the target. It reads the current value
/// and writes the updated value back, at most once per handled event.
pub trait TargetHandle {
    /// Current rotation as euler angles around the X, Y and Z axes.
    fn rotation(&self) -> mint::Vector3<f64>;
    fn set_rotation(&mut self, rotation: mint::Vector3<f64>);
    /// Current position.
    fn position(&self) -> mint::Vector3<f64>;
    fn set_position(&mut self, position: mint::Vector3<f64>);
    /// Sets the same scale factor on all three axes.
    fn set_scale(&mut self, factor: f64);
}

/// A standalone transform that can be used as a gesture target.
///
/// Rotation is stored in degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Transform {
    pub rotation: mint::Vector3<f64>,
    pub position: mint::Vector3<f64>,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: DVec3::ZERO.into(),
            position: DVec3::ZERO.into(),
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(
        rotation: impl Into<mint::Vector3<f64>>,
        position: impl Into<mint::Vector3<f64>>,
        scale: f64,
    ) -> Self {
        Self {
            rotation: rotation.into(),
            position: position.into(),
            scale,
        }
    }

    /// Orientation as a quaternion, applying X, then Y, then Z rotation.
    pub fn orientation(&self) -> DQuat {
        let degrees = DVec3::from(self.rotation);
        DQuat::from_euler(
            EulerRot::XYZ,
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        )
    }

    /// Model matrix combining scale, rotation and position
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            DVec3::splat(self.scale),
            self.orientation(),
            self.position.into(),
        )
    }
}

impl TargetHandle for Transform {
    fn rotation(&self) -> mint::Vector3<f64> {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: mint::Vector3<f64>) {
        self.rotation = rotation;
    }

    fn position(&self) -> mint::Vector3<f64> {
        self.position
    }

    fn set_position(&mut self, position: mint::Vector3<f64>) {
        self.position = position;
    }

    fn set_scale(&mut self, factor: f64) {
        self.scale = factor;
    }
}
