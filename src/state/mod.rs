pub mod camera;
pub mod drag;

pub use camera::{CameraState, Point};
pub use drag::DragSession;
