use enum_dispatch::enum_dispatch;

use crate::GestureResult;
use crate::config::{GestureConfig, GestureKind};
use crate::math::Pos2;

pub(crate) use drag::{PanGesture, RotateGesture};
pub(crate) use zoom::ZoomGesture;

pub(crate) mod drag;
pub(crate) mod zoom;

/// Enumeration of the gestures that can be in progress.
///
/// Only one gesture is active at a time. Each variant carries
/// the baseline its next update is measured against.
#[derive(Clone, Debug)]
#[enum_dispatch(GestureControl)]
pub(crate) enum ActiveGesture {
    Rotate(RotateGesture),
    Pan(PanGesture),
    Zoom(ZoomGesture),
}

impl ActiveGesture {
    /// Starts a gesture of given kind from the current contact points.
    ///
    /// Returns [`None`] if there are not enough points to seed the gesture.
    pub(crate) fn start(kind: GestureKind, points: &[Pos2]) -> Option<Self> {
        let gesture: Self = match kind {
            GestureKind::Rotate => RotateGesture::start(points)?.into(),
            GestureKind::Pan => PanGesture::start(points)?.into(),
            GestureKind::Zoom => ZoomGesture::start(points)?.into(),
        };

        Some(gesture)
    }
}

#[enum_dispatch]
pub(crate) trait GestureControl {
    /// Kind of manipulation this gesture performs.
    fn kind(&self) -> GestureKind;
    /// Last pointer position used as the movement baseline, if tracked.
    fn last_pointer(&self) -> Option<Pos2>;
    /// Last distance between two touches, if tracked.
    fn last_pinch_distance(&self) -> Option<f32>;
    /// Advance the gesture to new contact points.
    ///
    /// `scale` is the scale currently applied to the target.
    /// Returns the transform change to apply, if any.
    fn update(
        &mut self,
        points: &[Pos2],
        config: &GestureConfig,
        scale: f64,
    ) -> Option<GestureResult>;
}
