//! Interprets pointer, touch and wheel input as gestures that rotate, pan and zoom a 3d object.
//!
//! A [`GestureInterpreter`] receives raw input events one at a time and turns them into
//! bounded, incremental changes of a target's rotation, position and scale. Only one
//! gesture is active at a time:
//!
//! - a primary press starts panning, a second press within the double click window starts rotating
//! - one finger rotates, two fingers pinch to zoom and three fingers pan (see [`TouchMapping`])
//! - the mouse wheel zooms, regardless of the active gesture
//!
//! Releasing the pointer or lifting the fingers always ends the active gesture.
//!
//! # Usage
//!
//! If you are using the [Egui](https://github.com/emilk/egui) library in your application, you will
//! most likely want to use `gesture-interpreter-egui`.
//!
//! Otherwise, forward your platform's input events to the `on_*` handlers (or to
//! [`GestureInterpreter::handle`]), and give them anything implementing [`TargetHandle`]:
//!
//! ```
//! use std::time::Duration;
//! use gesture_interpreter::prelude::*;
//!
//! let mut interpreter = GestureInterpreter::default();
//! let mut target = Transform::default();
//!
//! interpreter.on_pointer_down(Pos2::new(100.0, 100.0), PointerButton::Primary, Duration::ZERO);
//! interpreter.on_pointer_move(Pos2::new(150.0, 100.0), &mut target);
//! interpreter.on_pointer_up();
//!
//! assert!(target.position.x > 0.0);
//! ```

mod gesture;

pub mod config;
pub mod interpreter;
pub mod math;
pub mod target;

pub mod prelude;

pub use prelude::*;
