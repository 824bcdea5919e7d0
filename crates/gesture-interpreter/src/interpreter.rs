use std::time::Duration;

use crate::config::{ConfigError, GestureConfig, GestureKind};
use crate::gesture::zoom::zoomed_scale;
use crate::gesture::{ActiveGesture, GestureControl};
use crate::math::{DVec3, Pos2};
use crate::target::TargetHandle;

/// Turns pointer, touch and wheel events into rotation, translation
/// and scale updates of a target.
///
/// At most one gesture is active at a time. Every end event
/// returns the interpreter to [`GestureMode::Idle`], so a missed
/// move or up event can never leave a gesture stuck.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    config: GestureConfig,
    state: InteractionState,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        let config = GestureConfig::default();
        Self {
            state: InteractionState::new(&config),
            config,
        }
    }
}

impl GestureInterpreter {
    /// Creates a new interpreter from given configuration.
    ///
    /// Fails if the configuration is out of range, see [`GestureConfig::validate`].
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            tracing::debug!(%err, "rejected gesture config");
            return Err(err);
        }

        Ok(Self {
            state: InteractionState::new(&config),
            config,
        })
    }

    /// Configuration used by the interpreter.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current interaction state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Currently active gesture mode.
    pub fn mode(&self) -> GestureMode {
        self.state.mode()
    }

    /// Scale factor last applied to the target.
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Whether any gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.state.active.is_some()
    }

    /// Feeds a single input event to the matching handler.
    pub fn handle(
        &mut self,
        input: GestureInput<'_>,
        target: &mut impl TargetHandle,
    ) -> Option<GestureResult> {
        match input {
            GestureInput::PointerDown {
                pos,
                button,
                timestamp,
            } => {
                self.on_pointer_down(pos, button, timestamp);
                None
            }
            GestureInput::PointerMove { pos } => self.on_pointer_move(pos, target),
            GestureInput::PointerUp => {
                self.on_pointer_up();
                None
            }
            GestureInput::TouchStart { touches, timestamp } => {
                self.on_touch_start(touches, timestamp);
                None
            }
            GestureInput::TouchMove { touches } => self.on_touch_move(touches, target),
            GestureInput::TouchEnd => {
                self.on_touch_end();
                None
            }
            GestureInput::TouchCancel => {
                self.on_touch_cancel();
                None
            }
            GestureInput::Wheel { delta_y } => self.on_wheel(delta_y, target),
        }
    }

    /// A pointer button was pressed.
    ///
    /// A primary press within [`GestureConfig::double_click_window`] of the
    /// previous one starts rotating, otherwise panning. Other buttons are ignored.
    /// The target is not modified.
    pub fn on_pointer_down(
        &mut self,
        pos: impl Into<Pos2>,
        button: PointerButton,
        timestamp: Duration,
    ) {
        if button != PointerButton::Primary {
            return;
        }

        let kind = if self.state.is_double_click(timestamp, &self.config) {
            GestureKind::Rotate
        } else {
            GestureKind::Pan
        };
        self.state.last_gesture_timestamp = Some(timestamp);

        self.start(kind, &[pos.into()]);
    }

    /// The pointer moved. Rotates or pans the target if such a gesture is active.
    pub fn on_pointer_move(
        &mut self,
        pos: impl Into<Pos2>,
        target: &mut impl TargetHandle,
    ) -> Option<GestureResult> {
        let active = self.state.active.as_ref()?;
        if active.kind() == GestureKind::Zoom {
            return None;
        }

        self.update(&[pos.into()], target)
    }

    /// A pointer button was released. Always ends the active gesture.
    pub fn on_pointer_up(&mut self) {
        self.end();
    }

    /// Touches were added. The number of touches selects the gesture
    /// according to [`GestureConfig::touch_mapping`].
    pub fn on_touch_start(&mut self, touches: &[Pos2], timestamp: Duration) {
        if touches.len() == 1 {
            self.state.last_gesture_timestamp = Some(timestamp);
        }

        match self.config.touch_mapping.gesture_for(touches.len()) {
            Some(kind) => self.start(kind, touches),
            None => self.end(),
        }
    }

    /// Touches moved. Only acts if the number of touches still
    /// maps to the active gesture.
    pub fn on_touch_move(
        &mut self,
        touches: &[Pos2],
        target: &mut impl TargetHandle,
    ) -> Option<GestureResult> {
        let active = self.state.active.as_ref()?;
        if self.config.touch_mapping.gesture_for(touches.len()) != Some(active.kind()) {
            return None;
        }

        self.update(touches, target)
    }

    /// Touches were lifted. Always ends the active gesture.
    pub fn on_touch_end(&mut self) {
        self.end();
    }

    /// Touches were cancelled by the platform. Same as [`Self::on_touch_end`].
    pub fn on_touch_cancel(&mut self) {
        self.end();
    }

    /// The wheel was scrolled. Zooms regardless of the active gesture,
    /// scrolling up (negative delta) zooms in.
    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        target: &mut impl TargetHandle,
    ) -> Option<GestureResult> {
        if !self.config.allows(GestureKind::Zoom) {
            return None;
        }

        self.zoom(-delta_y, target)
    }

    /// Changes the scale by `delta` times [`GestureConfig::zoom_speed`],
    /// clamped to the configured scale range.
    ///
    /// The target is only written to if the scale actually changes.
    pub fn zoom(&mut self, delta: f64, target: &mut impl TargetHandle) -> Option<GestureResult> {
        let factor = zoomed_scale(&self.config, self.state.scale, delta)?;
        let result = GestureResult::Scale { factor };
        self.apply(result, target);

        Some(result)
    }

    fn start(&mut self, kind: GestureKind, points: &[Pos2]) {
        let previous = self.state.mode();

        self.state.active = if self.config.allows(kind) {
            ActiveGesture::start(kind, points)
        } else {
            None
        };

        let mode = self.state.mode();
        if mode != previous {
            tracing::debug!(?previous, ?mode, "gesture mode changed");
        }
    }

    fn end(&mut self) {
        if let Some(active) = self.state.active.take() {
            tracing::debug!(kind = ?active.kind(), "gesture ended");
        }
    }

    fn update(
        &mut self,
        points: &[Pos2],
        target: &mut impl TargetHandle,
    ) -> Option<GestureResult> {
        let scale = self.state.scale;
        let result = self
            .state
            .active
            .as_mut()?
            .update(points, &self.config, scale)?;

        self.apply(result, target);

        Some(result)
    }

    /// Writes the result to the target
    fn apply(&mut self, result: GestureResult, target: &mut impl TargetHandle) {
        tracing::trace!(?result, "applying gesture result");

        match result {
            GestureResult::Rotation { delta } => {
                let rotation = DVec3::from(target.rotation()) + DVec3::from(delta);
                target.set_rotation(rotation.into());
            }
            GestureResult::Translation { delta } => {
                let position = DVec3::from(target.position()) + DVec3::from(delta);
                target.set_position(position.into());
            }
            GestureResult::Scale { factor } => {
                self.state.scale = factor;
                target.set_scale(factor);
            }
        }
    }
}

/// Interaction state owned by a [`GestureInterpreter`].
#[derive(Clone, Debug)]
pub struct InteractionState {
    /// The gesture in progress, together with its baseline.
    active: Option<ActiveGesture>,
    /// Scale factor persisted across gestures.
    scale: f64,
    /// When the last primary press or single touch started.
    last_gesture_timestamp: Option<Duration>,
}

impl InteractionState {
    fn new(config: &GestureConfig) -> Self {
        Self {
            active: None,
            scale: config.min_scale,
            last_gesture_timestamp: None,
        }
    }

    pub fn mode(&self) -> GestureMode {
        match self.active.as_ref().map(GestureControl::kind) {
            None => GestureMode::Idle,
            Some(GestureKind::Rotate) => GestureMode::Rotating,
            Some(GestureKind::Pan) => GestureMode::Panning,
            Some(GestureKind::Zoom) => GestureMode::Zooming,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Baseline of the active rotate or pan gesture.
    pub fn last_pointer(&self) -> Option<Pos2> {
        self.active.as_ref().and_then(GestureControl::last_pointer)
    }

    /// Baseline of the active pinch.
    pub fn last_pinch_distance(&self) -> Option<f32> {
        self.active
            .as_ref()
            .and_then(GestureControl::last_pinch_distance)
    }

    pub fn last_gesture_timestamp(&self) -> Option<Duration> {
        self.last_gesture_timestamp
    }

    fn is_double_click(&self, timestamp: Duration, config: &GestureConfig) -> bool {
        self.last_gesture_timestamp
            .and_then(|last| timestamp.checked_sub(last))
            .is_some_and(|elapsed| elapsed < config.double_click_window)
    }
}

/// Manipulation currently performed by the interpreter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    Rotating,
    Panning,
    Zooming,
}

/// Pointer button of a press.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button, or a pen or finger contact
    Primary,
    /// Usually the right mouse button
    Secondary,
    /// Usually the mouse wheel button
    Middle,
    /// Any other button
    Other(u16),
}

/// A single input event, as delivered by the host platform.
///
/// Timestamps may be measured from any origin, as long as it stays
/// the same for the lifetime of the interpreter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureInput<'a> {
    PointerDown {
        pos: Pos2,
        button: PointerButton,
        timestamp: Duration,
    },
    PointerMove {
        pos: Pos2,
    },
    PointerUp,
    /// Touches currently on the surface, in the order they were placed.
    TouchStart {
        touches: &'a [Pos2],
        timestamp: Duration,
    },
    TouchMove {
        touches: &'a [Pos2],
    },
    TouchEnd,
    TouchCancel,
    /// Vertical scroll amount. Positive values scroll down.
    Wheel {
        delta_y: f64,
    },
}

/// Transform change applied to the target by a handled event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureResult {
    Rotation {
        /// Change of the euler angles
        delta: mint::Vector3<f64>,
    },
    Translation {
        /// Change of the position
        delta: mint::Vector3<f64>,
    },
    Scale {
        /// New uniform scale factor
        factor: f64,
    },
}
