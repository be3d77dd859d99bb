use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, WheelEvent};
use yew::prelude::*;

use crate::config::CameraConfig;
use crate::controller::{CameraController, Disposition};
use crate::service::{CameraService, CameraServiceContext};
use crate::state::{CameraState, Point};
use crate::util::clog;
use crate::wheel::normalize_delta_y;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub config: CameraConfig,
    #[prop_or_default]
    pub on_change: Option<Callback<CameraState>>,
}

fn page_point(e: &MouseEvent) -> Point {
    Point::new(e.page_x() as f64, e.page_y() as f64)
}

// Top-left corner of the frame in page coordinates.
fn page_offset(el: &Element) -> Point {
    let rect = el.get_bounding_client_rect();
    let (sx, sy) = web_sys::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0));
    Point::new(rect.left() + sx, rect.top() + sy)
}

fn listen(el: &Element, name: &str, cb: &Closure<dyn FnMut(Event)>) {
    if el
        .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
        .is_err()
    {
        clog(&format!("camera: could not listen for {name}"));
    }
}

fn apply_disposition(disp: Disposition, e: &Event) {
    if disp == Disposition::PreventDefault {
        e.prevent_default();
    }
}

#[function_component(Camera)]
pub fn camera(props: &CameraProps) -> Html {
    let frame_ref = use_node_ref();
    let service = use_context::<CameraServiceContext>()
        .unwrap_or_else(|| CameraServiceContext::new(CameraService::new(&props.config)));
    let controller = use_mut_ref(move || CameraController::new(service));
    let view = use_state(CameraState::default);
    // Always the latest callback, closures are built once on mount
    let on_change_ref = use_mut_ref(|| None::<Callback<CameraState>>);
    *on_change_ref.borrow_mut() = props.on_change.clone();

    {
        let frame_ref = frame_ref.clone();
        let controller = controller.clone();
        let view = view.clone();
        let on_change_ref = on_change_ref.clone();
        let cfg = props.config.clone();

        use_effect_with((), move |_| {
            let frame = frame_ref.cast::<Element>();
            let publish: Rc<dyn Fn(CameraState)> = {
                let debug = cfg.debug_log;
                Rc::new(move |cam: CameraState| {
                    if debug {
                        clog(&format!(
                            "camera: {}",
                            serde_json::to_string(&cam).unwrap_or_default()
                        ));
                    }
                    view.set(cam);
                    if let Some(cb) = &*on_change_ref.borrow() {
                        cb.emit(cam);
                    }
                })
            };

            let listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)> = vec![
                ("mousedown", {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move |e: Event| {
                        if let Some(me) = e.dyn_ref::<MouseEvent>() {
                            let disp = controller.borrow_mut().pointer_down(page_point(me));
                            apply_disposition(disp, &e);
                        }
                    }) as Box<dyn FnMut(_)>)
                }),
                ("mousemove", {
                    let controller = controller.clone();
                    let publish = publish.clone();
                    Closure::wrap(Box::new(move |e: Event| {
                        if let Some(e) = e.dyn_ref::<MouseEvent>() {
                            let mut ctl = controller.borrow_mut();
                            if ctl.pointer_move(page_point(e)) {
                                let cam = ctl.camera();
                                drop(ctl);
                                publish(cam);
                            }
                        }
                    }) as Box<dyn FnMut(_)>)
                }),
                ("mouseup", {
                    let controller = controller.clone();
                    let debug = cfg.debug_log;
                    Closure::wrap(Box::new(move |_e: Event| {
                        let mut ctl = controller.borrow_mut();
                        if debug && ctl.is_dragging() {
                            clog("camera: drag ended (mouseup)");
                        }
                        ctl.pointer_up();
                    }) as Box<dyn FnMut(_)>)
                }),
                ("mouseleave", {
                    let controller = controller.clone();
                    let debug = cfg.debug_log;
                    Closure::wrap(Box::new(move |_e: Event| {
                        let mut ctl = controller.borrow_mut();
                        if debug && ctl.is_dragging() {
                            clog("camera: drag ended (mouseleave)");
                        }
                        ctl.pointer_leave();
                    }) as Box<dyn FnMut(_)>)
                }),
                ("wheel", {
                    let controller = controller.clone();
                    let publish = publish.clone();
                    let frame = frame.clone();
                    let cfg = cfg.clone();
                    Closure::wrap(Box::new(move |e: Event| {
                        let (Some(we), Some(frame)) = (e.dyn_ref::<WheelEvent>(), frame.as_ref())
                        else {
                            return;
                        };
                        let delta = normalize_delta_y(we.delta_y(), we.delta_mode(), &cfg);
                        let mut ctl = controller.borrow_mut();
                        let disp = ctl.wheel(page_point(we), page_offset(frame), delta);
                        let cam = ctl.camera();
                        drop(ctl);
                        apply_disposition(disp, &e);
                        publish(cam);
                    }) as Box<dyn FnMut(_)>)
                }),
                ("dragstart", {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move |e: Event| {
                        apply_disposition(controller.borrow().drag_start(), &e);
                    }) as Box<dyn FnMut(_)>)
                }),
            ];

            match &frame {
                Some(el) => {
                    for (name, cb) in &listeners {
                        listen(el, name, cb);
                    }
                }
                None => clog("camera: frame element not mounted"),
            }

            move || {
                if let Some(el) = &frame {
                    for (name, cb) in &listeners {
                        let _ = el.remove_event_listener_with_callback(
                            name,
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                }
                drop(listeners);
            }
        });
    }

    let content_style = format!(
        "position:absolute; left:0; top:0; transform-origin:0 0; transform:{};",
        view.css_transform()
    );
    html! {
        <div ref={frame_ref} class="camera-frame"
            style="position:relative; overflow:hidden; width:100%; height:100%; cursor:move;">
            <div class="camera-content" style={content_style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
