//! Drives a gesture interpreter with Egui input.
//!
//! gesture-interpreter-egui feeds the mouse, wheel and touch events of
//! an Egui frame into a [`GestureInterpreter`], which rotates, pans and zooms
//! a target accordingly.
//!
//! # Usage
//!
//! Create a new `GestureInterpreter` instance once.
//!
//! ```
//! use gesture_interpreter_egui::prelude::*;
//!
//! let interpreter = GestureInterpreter::default();
//! ```
//!
//! Every frame, let the interpreter handle the input of the `Ui` the target is shown in.
//! Presses are only accepted inside the clip rect of the `Ui`. The results list the
//! changes that were applied to the target this frame.
//!
//! ```ignore
//! let mut transform = Transform::default();
//!
//! for result in interpreter.interact(ui, &mut transform) {
//!     // React to the change, e.g. request a repaint
//! }
//! ```

use std::time::Duration;

use egui::{Event, MouseWheelUnit, Ui};

pub use gesture_interpreter::*;

use crate::touches::{ActiveTouches, TouchChange};

pub mod prelude;
mod touches;

pub trait GestureInterpreterExt {
    /// Handles the input events of this frame and applies the resulting changes to `target`.
    ///
    /// Returns the changes that were applied, in the order of the events.
    fn interact(&mut self, ui: &Ui, target: &mut impl TargetHandle) -> Vec<GestureResult>;
}

impl GestureInterpreterExt for GestureInterpreter {
    fn interact(&mut self, ui: &Ui, target: &mut impl TargetHandle) -> Vec<GestureResult> {
        let viewport = ui.clip_rect();
        let touches_id = ui.id().with("_gesture_touches");

        let (events, time, hover_pos, screen_height) = ui.input(|input| {
            (
                input.events.clone(),
                input.time,
                input.pointer.hover_pos(),
                input.screen_rect.height(),
            )
        });
        let line_scroll_speed = ui
            .ctx()
            .options(|options| options.input_options.line_scroll_speed);
        let timestamp = Duration::from_secs_f64(time.max(0.0));

        let mut touches = ui
            .data(|data| data.get_temp::<ActiveTouches>(touches_id))
            .unwrap_or_default();

        let mut results = Vec::new();

        for event in &events {
            // Platforms emulate the mouse with the first finger, the touch events already cover that.
            if !touches.is_empty() && !matches!(event, Event::Touch { .. }) {
                continue;
            }

            let result = match *event {
                Event::Touch { id, phase, pos, .. } => {
                    if touches.is_empty() && !viewport.contains(pos) {
                        continue;
                    }

                    match touches.apply(id, phase, pos) {
                        Some(TouchChange::Started) => self.handle(
                            GestureInput::TouchStart {
                                touches: touches.positions(),
                                timestamp,
                            },
                            target,
                        ),
                        Some(TouchChange::Moved) => self.handle(
                            GestureInput::TouchMove {
                                touches: touches.positions(),
                            },
                            target,
                        ),
                        Some(TouchChange::Ended) => self.handle(GestureInput::TouchEnd, target),
                        Some(TouchChange::Cancelled) => {
                            self.handle(GestureInput::TouchCancel, target)
                        }
                        None => None,
                    }
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    if !viewport.contains(pos) {
                        continue;
                    }

                    self.handle(
                        GestureInput::PointerDown {
                            pos,
                            button: pointer_button(button),
                            timestamp,
                        },
                        target,
                    )
                }
                Event::PointerButton { pressed: false, .. } | Event::PointerGone => {
                    self.handle(GestureInput::PointerUp, target)
                }
                Event::PointerMoved(pos) => self.handle(GestureInput::PointerMove { pos }, target),
                Event::MouseWheel { unit, delta, .. } => {
                    if !hover_pos.is_some_and(|pos| viewport.contains(pos)) {
                        continue;
                    }

                    let delta_y = match unit {
                        MouseWheelUnit::Point => delta.y,
                        MouseWheelUnit::Line => delta.y * line_scroll_speed,
                        MouseWheelUnit::Page => delta.y * screen_height,
                    };

                    // Egui reports scrolling up as a positive delta
                    self.handle(
                        GestureInput::Wheel {
                            delta_y: f64::from(-delta_y),
                        },
                        target,
                    )
                }
                _ => None,
            };

            results.extend(result);
        }

        ui.data_mut(|data| data.insert_temp(touches_id, touches));

        results
    }
}

fn pointer_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        egui::PointerButton::Extra1 => PointerButton::Other(3),
        egui::PointerButton::Extra2 => PointerButton::Other(4),
    }
}
