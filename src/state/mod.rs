pub mod gesture;
pub mod touch;

pub use gesture::{Gesture, Press};
pub use touch::TouchState;
