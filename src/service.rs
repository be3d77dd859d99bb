//! Camera transform service: the only writer of [`CameraState`].

use std::rc::Rc;

use crate::config::CameraConfig;
use crate::state::{CameraState, Point};

pub trait CameraTransform {
    /// Translate the view by `delta` without changing scale.
    fn pan(&self, camera: &mut CameraState, delta: Point);
    /// Scale the view by `magnitude` steps, keeping the content under `anchor` fixed.
    fn zoom(&self, camera: &mut CameraState, anchor: Point, magnitude: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraService {
    zoom_step: f64,
}

impl CameraService {
    pub fn new(cfg: &CameraConfig) -> Self {
        Self {
            zoom_step: cfg.zoom_step,
        }
    }
}

impl Default for CameraService {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl CameraTransform for CameraService {
    fn pan(&self, camera: &mut CameraState, delta: Point) {
        camera.left += delta.x;
        camera.top += delta.y;
    }

    fn zoom(&self, camera: &mut CameraState, anchor: Point, magnitude: f64) {
        let old = camera.zoom;
        let new = old * self.zoom_step.powf(magnitude);
        if !new.is_finite() || new <= 0.0 {
            return;
        }
        let ratio = new / old;
        camera.left = anchor.x - (anchor.x - camera.left) * ratio;
        camera.top = anchor.y - (anchor.y - camera.top) * ratio;
        camera.zoom = new;
    }
}

/// Service handed to camera components through a yew context.
#[derive(Clone)]
pub struct CameraServiceContext(pub Rc<dyn CameraTransform>);

impl CameraServiceContext {
    pub fn new(service: impl CameraTransform + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl PartialEq for CameraServiceContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl CameraTransform for CameraServiceContext {
    fn pan(&self, camera: &mut CameraState, delta: Point) {
        self.0.pan(camera, delta);
    }

    fn zoom(&self, camera: &mut CameraState, anchor: Point, magnitude: f64) {
        self.0.zoom(camera, anchor, magnitude);
    }
}
