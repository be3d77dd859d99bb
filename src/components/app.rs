use super::{camera::Camera, zoom_readout::ZoomReadout};
use crate::config::CameraConfig;
use crate::service::{CameraService, CameraServiceContext};
use crate::state::CameraState;
use yew::prelude::*;

// Diff image shown inside the camera until the host supplies real content
const SCREENSHOT_URL: &str = "screenshot.png";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(CameraConfig::load);
    let service = {
        let cfg = (*config).clone();
        use_state(move || CameraServiceContext::new(CameraService::new(&cfg)))
    };
    let camera = use_state(CameraState::default);

    let on_change = {
        let camera = camera.clone();
        Callback::from(move |cam: CameraState| camera.set(cam))
    };

    html! {
        <ContextProvider<CameraServiceContext> context={(*service).clone()}>
            <div style="position:relative; width:100vw; height:100vh; background:#0e1116;">
                <Camera config={(*config).clone()} {on_change}>
                    <img src={SCREENSHOT_URL} alt="screenshot" draggable="false" />
                </Camera>
                <ZoomReadout camera={*camera} />
            </div>
        </ContextProvider<CameraServiceContext>>
    }
}
