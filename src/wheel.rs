// Wheel delta normalisation: DOM deltas in pixels/lines/pages -> lines, up is positive
use crate::config::CameraConfig;

pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

pub fn normalize_delta_y(delta_y: f64, delta_mode: u32, cfg: &CameraConfig) -> f64 {
    let lines = match delta_mode {
        DELTA_LINE => delta_y,
        DELTA_PAGE => delta_y * cfg.lines_per_page,
        _ => delta_y / cfg.pixels_per_line,
    };
    -lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_mode_scales_to_lines() {
        let cfg = CameraConfig::default();
        assert_eq!(normalize_delta_y(-120.0, DELTA_PIXEL, &cfg), 3.0);
        assert_eq!(normalize_delta_y(40.0, DELTA_PIXEL, &cfg), -1.0);
    }

    #[test]
    fn line_and_page_modes() {
        let cfg = CameraConfig::default();
        assert_eq!(normalize_delta_y(-3.0, DELTA_LINE, &cfg), 3.0);
        assert_eq!(normalize_delta_y(1.0, DELTA_PAGE, &cfg), -10.0);
    }

    #[test]
    fn unknown_mode_is_pixels() {
        let cfg = CameraConfig::default();
        assert_eq!(normalize_delta_y(80.0, 7, &cfg), -2.0);
    }
}
