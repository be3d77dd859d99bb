use yew::prelude::*;

use crate::state::CameraState;
use crate::util::format_zoom;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomReadoutProps {
    pub camera: CameraState,
}

#[function_component(ZoomReadout)]
pub fn zoom_readout(props: &ZoomReadoutProps) -> Html {
    let cam = props.camera;
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); color:#c9d1d9; border:1px solid #30363d; border-radius:8px; padding:6px 10px; font:12px monospace; pointer-events:none;">
        { format!("{}  ({:.0}, {:.0})", format_zoom(cam.zoom), cam.left, cam.top) }
    </div>}
}
