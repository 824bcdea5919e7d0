pub use crate::config::{ConfigError, GestureConfig, GestureKind, TouchMapping};
pub use crate::interpreter::{
    GestureInput, GestureInterpreter, GestureMode, GestureResult, InteractionState, PointerButton,
};
pub use crate::target::{TargetHandle, Transform};

pub use enumset::{EnumSet, enum_set};

pub use mint;

pub use emath::Pos2;
