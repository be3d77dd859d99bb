//! Camera tuning loaded from `localStorage`.
//!
//! The stored value is a JSON object; any field may be omitted, and a missing or
//! unreadable entry yields [`CameraConfig::default`].

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "vd_camera_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Scale factor applied per unit of normalised wheel delta.
    pub zoom_step: f64,
    /// Pixel-mode wheel deltas are divided by this to get lines.
    pub pixels_per_line: f64,
    /// Page-mode wheel deltas are multiplied by this to get lines.
    pub lines_per_page: f64,
    /// Log drag and zoom activity to the browser console.
    pub debug_log: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.1,
            pixels_per_line: 40.0,
            lines_per_page: 10.0,
            debug_log: false,
        }
    }
}

impl CameraConfig {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<CameraConfig>(raw)
            .ok()
            .map(CameraConfig::sanitized)
    }

    /// Reads the config from `localStorage`, falling back to defaults.
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    if let Some(cfg) = Self::from_json(&raw) {
                        return cfg;
                    }
                }
            }
        }
        Self::default()
    }

    // Non-positive or non-finite tunables would invert or freeze the camera.
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.zoom_step) {
            self.zoom_step = d.zoom_step;
        }
        if !valid(self.pixels_per_line) {
            self.pixels_per_line = d.pixels_per_line;
        }
        if !valid(self.lines_per_page) {
            self.lines_per_page = d.lines_per_page;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg = CameraConfig::from_json(r#"{"zoom_step": 1.25}"#).unwrap();
        assert_eq!(cfg.zoom_step, 1.25);
        assert_eq!(cfg.pixels_per_line, 40.0);
        assert_eq!(cfg.lines_per_page, 10.0);
        assert!(!cfg.debug_log);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(CameraConfig::from_json("not json").is_none());
    }

    #[test]
    fn bad_tunables_are_replaced() {
        let cfg =
            CameraConfig::from_json(r#"{"zoom_step": 0, "pixels_per_line": -3, "debug_log": true}"#)
                .unwrap();
        assert_eq!(cfg.zoom_step, 1.1);
        assert_eq!(cfg.pixels_per_line, 40.0);
        assert!(cfg.debug_log);
    }
}
