use std::marker::PhantomData;

use crate::GestureResult;
use crate::config::{GestureConfig, GestureKind};
use crate::gesture::GestureControl;
use crate::math::{DVec2, DVec3, Pos2, pointer_delta};

pub(crate) type RotateGesture = DragGesture<Rotate>;
pub(crate) type PanGesture = DragGesture<Pan>;

/// Behavior of a gesture driven by the movement of a single pointer.
pub(crate) trait DragKind: 'static {
    const KIND: GestureKind;

    /// Transform change caused by moving the pointer by `delta` pixels.
    fn result(delta: DVec2, config: &GestureConfig) -> GestureResult;
}

/// A single pointer gesture. Movement is always measured against
/// the previous pointer position, not the position where the gesture started.
#[derive(Clone, Debug)]
pub(crate) struct DragGesture<T: DragKind> {
    last_pointer: Pos2,
    kind: PhantomData<T>,
}

impl<T: DragKind> DragGesture<T> {
    pub(crate) fn start(points: &[Pos2]) -> Option<Self> {
        let last_pointer = *points.first().filter(|pointer| pointer.is_finite())?;

        Some(Self {
            last_pointer,
            kind: PhantomData,
        })
    }
}

impl<T: DragKind> GestureControl for DragGesture<T> {
    fn kind(&self) -> GestureKind {
        T::KIND
    }

    fn last_pointer(&self) -> Option<Pos2> {
        Some(self.last_pointer)
    }

    fn last_pinch_distance(&self) -> Option<f32> {
        None
    }

    fn update(
        &mut self,
        points: &[Pos2],
        config: &GestureConfig,
        _scale: f64,
    ) -> Option<GestureResult> {
        let pointer = *points.first()?;
        if !pointer.is_finite() {
            return None;
        }

        let delta = pointer_delta(self.last_pointer, pointer);
        self.last_pointer = pointer;

        Some(T::result(delta, config))
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Rotate;

impl DragKind for Rotate {
    const KIND: GestureKind = GestureKind::Rotate;

    /// Horizontal movement turns around the Y axis, vertical movement around the X axis.
    fn result(delta: DVec2, config: &GestureConfig) -> GestureResult {
        GestureResult::Rotation {
            delta: DVec3::new(
                -delta.y * config.rotation_speed,
                delta.x * config.rotation_speed,
                0.0,
            )
            .into(),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Pan;

impl DragKind for Pan {
    const KIND: GestureKind = GestureKind::Pan;

    fn result(delta: DVec2, config: &GestureConfig) -> GestureResult {
        GestureResult::Translation {
            delta: DVec3::new(delta.x * config.pan_speed, delta.y * config.pan_speed, 0.0)
                .into(),
        }
    }
}
