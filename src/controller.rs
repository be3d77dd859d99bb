//! Pointer and wheel routing for the camera widget.
//!
//! The controller keeps the drag session and the camera state and forwards
//! semantic pan/zoom requests to a [`CameraTransform`]. It never touches the DOM,
//! so the binding layer decides how to read events and what to do with the
//! returned [`Disposition`].

use crate::service::CameraTransform;
use crate::state::{CameraState, DragSession, Point};

/// Whether the browser's default action for the event must be suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Default,
    PreventDefault,
}

pub struct CameraController<S: CameraTransform> {
    service: S,
    camera: CameraState,
    drag: Option<DragSession>,
}

impl<S: CameraTransform> CameraController<S> {
    pub fn new(service: S) -> Self {
        Self::with_camera(service, CameraState::default())
    }

    pub fn with_camera(service: S, camera: CameraState) -> Self {
        Self {
            service,
            camera,
            drag: None,
        }
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts (or restarts) a drag session. Leaves the browser default alone so
    /// focus and selection behave normally.
    pub fn pointer_down(&mut self, at: Point) -> Disposition {
        self.drag = Some(DragSession::start(at));
        Disposition::Default
    }

    /// Pans by the distance from the previous pointer position. Returns true if a
    /// pan was issued.
    pub fn pointer_move(&mut self, to: Point) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        let delta = session.advance(to);
        self.service.pan(&mut self.camera, delta);
        true
    }

    pub fn pointer_up(&mut self) {
        self.stop_drag();
    }

    pub fn pointer_leave(&mut self) {
        self.stop_drag();
    }

    /// Zooms around the pointer. `frame_offset` is the frame's top-left corner in
    /// page coordinates.
    pub fn wheel(&mut self, page: Point, frame_offset: Point, vertical_delta: f64) -> Disposition {
        let anchor = page - frame_offset;
        self.service.zoom(&mut self.camera, anchor, vertical_delta);
        Disposition::PreventDefault
    }

    pub fn drag_start(&self) -> Disposition {
        Disposition::PreventDefault
    }

    fn stop_drag(&mut self) {
        self.drag = None;
    }
}
