// Drag session, alive only while a mouse button is held over the frame
use super::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub last_pointer: Point,
}

impl DragSession {
    pub fn start(at: Point) -> Self {
        Self { last_pointer: at }
    }

    /// Delta since the previous pointer position; records `to` as the new one.
    pub fn advance(&mut self, to: Point) -> Point {
        let delta = to - self.last_pointer;
        self.last_pointer = to;
        delta
    }
}
