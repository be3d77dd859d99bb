// Console logging and display helpers

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn format_zoom(zoom: f64) -> String {
    format!("{:.0}%", zoom * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_as_percent() {
        assert_eq!(format_zoom(1.0), "100%");
        assert_eq!(format_zoom(1.331), "133%");
        assert_eq!(format_zoom(0.5), "50%");
    }
}
