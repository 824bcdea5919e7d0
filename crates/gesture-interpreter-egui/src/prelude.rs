pub use crate::GestureInterpreterExt;
pub use gesture_interpreter::prelude::*;
