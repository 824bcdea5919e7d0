use std::time::Duration;

use enumset::{EnumSet, EnumSetType};
use thiserror::Error;

/// The default rotation applied per pixel of pointer movement
pub const DEFAULT_ROTATION_SPEED: f64 = 0.5;
/// The default scale change per unit of zoom input
pub const DEFAULT_ZOOM_SPEED: f64 = 0.1;
/// The default translation applied per pixel of pointer movement
pub const DEFAULT_PAN_SPEED: f64 = 0.01;
/// The default lower bound of the target scale
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// The default upper bound of the target scale
pub const DEFAULT_MAX_SCALE: f64 = 5.0;
/// The default time window in which a second press counts as a double click
pub const DEFAULT_DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Configuration of a gesture interpreter.
///
/// Defines how strongly pointer movement affects the target and
/// which gestures can be started at all.
#[derive(Debug, Copy, Clone)]
pub struct GestureConfig {
    /// Rotation, in the target's rotation units, per pixel of movement.
    pub rotation_speed: f64,
    /// Scale change per unit of zoom input (wheel delta or pinch distance).
    pub zoom_speed: f64,
    /// Translation per pixel of movement.
    pub pan_speed: f64,
    /// Smallest scale the target can be zoomed to. Also the initial scale.
    pub min_scale: f64,
    /// Largest scale the target can be zoomed to.
    pub max_scale: f64,
    /// Two primary presses closer together than this start a rotation
    /// instead of a pan.
    pub double_click_window: Duration,
    /// Gestures that are allowed to start.
    pub gestures: EnumSet<GestureKind>,
    /// Which gesture is started by how many fingers.
    pub touch_mapping: TouchMapping,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            pan_speed: DEFAULT_PAN_SPEED,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            double_click_window: DEFAULT_DOUBLE_CLICK_WINDOW,
            gestures: GestureKind::all(),
            touch_mapping: TouchMapping::default(),
        }
    }
}

impl GestureConfig {
    /// Checks that the configuration describes a usable interpreter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("rotation_speed", self.rotation_speed),
            ("zoom_speed", self.zoom_speed),
            ("pan_speed", self.pan_speed),
        ] {
            if !is_positive(value) {
                return Err(ConfigError::NonPositiveSpeed { name, value });
            }
        }

        if !is_positive(self.min_scale) {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }

        if !(self.max_scale.is_finite() && self.max_scale > self.min_scale) {
            return Err(ConfigError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }

        if self.touch_mapping.one_finger == Some(GestureKind::Zoom) {
            return Err(ConfigError::ZoomNeedsTwoTouches);
        }

        Ok(())
    }

    /// Whether the given gesture may be started
    pub(crate) fn allows(&self, kind: GestureKind) -> bool {
        self.gestures.contains(kind)
    }

    /// Clamps a scale value into the configured range
    pub(crate) fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Reasons a [`GestureConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositiveSpeed { name: &'static str, value: f64 },
    #[error("min_scale must be a positive finite number, got {0}")]
    NonPositiveMinScale(f64),
    #[error("max_scale ({max}) must be finite and greater than min_scale ({min})")]
    InvalidScaleRange { min: f64, max: f64 },
    #[error("zoom cannot be mapped to a single finger, pinching needs two touches")]
    ZoomNeedsTwoTouches,
}

/// Kind of manipulation a gesture performs.
#[derive(Debug, EnumSetType, Hash)]
pub enum GestureKind {
    /// Rotate the target around its X and Y axes
    Rotate,
    /// Move the target along its X and Y axes
    Pan,
    /// Scale the target uniformly
    Zoom,
}

impl GestureKind {
    /// All gesture kinds
    pub fn all() -> EnumSet<Self> {
        EnumSet::all()
    }
}

/// Maps the number of simultaneous touches to the gesture they start.
///
/// Touch counts without a mapping end any active gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TouchMapping {
    pub one_finger: Option<GestureKind>,
    pub two_fingers: Option<GestureKind>,
    pub three_fingers: Option<GestureKind>,
}

impl Default for TouchMapping {
    /// One finger rotates, two fingers pinch to zoom and three fingers pan.
    fn default() -> Self {
        Self {
            one_finger: Some(GestureKind::Rotate),
            two_fingers: Some(GestureKind::Zoom),
            three_fingers: Some(GestureKind::Pan),
        }
    }
}

impl TouchMapping {
    /// Gesture started by the given number of touches, if any
    pub fn gesture_for(&self, touch_count: usize) -> Option<GestureKind> {
        match touch_count {
            1 => self.one_finger,
            2 => self.two_fingers,
            3 => self.three_fingers,
            _ => None,
        }
    }
}
