use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent, TouchList};
use yew::prelude::*;

use crate::config::StarMapConfig;
use crate::interaction::{ClickOutcome, ClientRect, InteractionController, Response, canvas_point};
use crate::model::{Constellations, SelectedStar, StarKey};
use crate::projection::Point;
use crate::render::{CanvasSurface, RenderOptions, render};

use super::{
    camera_controls::CameraControls,
    legend_panel::{LegendPanel, legend_entries},
};

const ZOOM_STEP: f64 = 1.25;
const ROTATE_STEP: f64 = PI / 12.0;
const WHEEL_LINE_PX: f64 = 16.0;

#[derive(Properties, PartialEq, Clone)]
pub struct StarMapProps {
    pub catalogue: Rc<Constellations>,
    pub config: Rc<StarMapConfig>,
    /// Fires with the clicked star, or `None` when a click hits empty sky.
    pub on_select: Callback<Option<SelectedStar>>,
}

fn event_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Point {
    let r = canvas.get_bounding_client_rect();
    canvas_point(
        client_x as f64,
        client_y as f64,
        ClientRect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        },
        canvas.width() as f64,
        canvas.height() as f64,
    )
}

fn touch_points(canvas: &HtmlCanvasElement, list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| event_point(canvas, t.client_x(), t.client_y()))
        .collect()
}

fn apply_response(response: Response, canvas: &HtmlCanvasElement, request_redraw: &dyn Fn()) {
    if let Some(cursor) = response.cursor {
        let _ = canvas.style().set_property("cursor", cursor.as_css());
    }
    if response.redraw {
        request_redraw();
    }
}

/// Mirrors the controller's hovered star into the legend highlight.
fn sync_legend_hover(
    ctl: &InteractionController,
    last_hover: &RefCell<Option<StarKey>>,
    hover_constellation: &UseStateHandle<Option<String>>,
) {
    if ctl.hovered() != last_hover.borrow().as_ref() {
        let now = ctl.hovered().cloned();
        hover_constellation.set(now.as_ref().map(|k| k.constellation.clone()));
        *last_hover.borrow_mut() = now;
    }
}

fn emit_outcome(outcome: ClickOutcome, on_select: &Callback<Option<SelectedStar>>) {
    match outcome {
        ClickOutcome::Select(sel) => on_select.emit(Some(sel)),
        ClickOutcome::Clear => on_select.emit(None),
        ClickOutcome::Ignored => {}
    }
}

#[function_component(StarMap)]
pub fn star_map(props: &StarMapProps) -> Html {
    let canvas_ref = use_node_ref();
    let controller = {
        let config = props.config.clone();
        use_mut_ref(move || InteractionController::new(0.0, 0.0, &config))
    };
    let catalogue_ref = use_mut_ref(|| props.catalogue.clone());
    let on_select_ref = use_mut_ref(|| props.on_select.clone());
    let redraw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let last_hover = use_mut_ref(|| None::<StarKey>);
    let hover_constellation = use_state(|| None::<String>);

    // New merged catalogue: swap it in, re-check the hover and redraw
    {
        let canvas_ref = canvas_ref.clone();
        let controller = controller.clone();
        let catalogue_ref = catalogue_ref.clone();
        let redraw_ref = redraw_ref.clone();
        let last_hover = last_hover.clone();
        let hover_constellation = hover_constellation.clone();
        use_effect_with(props.catalogue.clone(), move |catalogue| {
            *catalogue_ref.borrow_mut() = catalogue.clone();
            let mut ctl = controller.borrow_mut();
            let r = ctl.refresh_hover(catalogue);
            sync_legend_hover(&ctl, &last_hover, &hover_constellation);
            drop(ctl);
            if let (Some(canvas), Some(redraw)) =
                (canvas_ref.cast::<HtmlCanvasElement>(), redraw_ref.borrow().clone())
            {
                apply_response(Response { redraw: true, ..r }, &canvas, &*redraw);
            }
            || ()
        });
    }
    {
        let on_select_ref = on_select_ref.clone();
        use_effect_with(props.on_select.clone(), move |cb| {
            *on_select_ref.borrow_mut() = cb.clone();
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let controller = controller.clone();
        let catalogue_ref = catalogue_ref.clone();
        let redraw_ref_setup = redraw_ref.clone();
        let on_select_ref = on_select_ref.clone();
        let last_hover = last_hover.clone();
        let show_labels = props.config.show_labels;
        let hover_constellation = hover_constellation.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let (Some(window), Some(canvas)) = (window, canvas) else {
                log::error!("star map mounted without a window or canvas");
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };

            // Size the backing store to the host container
            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || -> (f64, f64) {
                    let (w, h) = canvas
                        .parent_element()
                        .map(|p| (p.client_width() as f64, p.client_height() as f64))
                        .filter(|&(w, h)| w > 0.0 && h > 0.0)
                        .unwrap_or_else(|| {
                            let w = window
                                .inner_width()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(800.0);
                            let h = window
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(600.0);
                            (w, h)
                        });
                    canvas.set_width(w.max(0.0) as u32);
                    canvas.set_height(h.max(0.0) as u32);
                    (canvas.width() as f64, canvas.height() as f64)
                }
            };
            {
                let (w, h) = apply_canvas_size();
                controller.borrow_mut().resize(w, h, &catalogue_ref.borrow());
            }

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let mut surface =
                        CanvasSurface::new(ctx, canvas.width() as f64, canvas.height() as f64);
                    let ctl = controller.borrow();
                    let catalogue = catalogue_ref.borrow();
                    render(
                        &mut surface,
                        &catalogue,
                        ctl.view(),
                        RenderOptions {
                            hovered: ctl.hovered(),
                            show_labels,
                        },
                    );
                })
            };

            // Redraw requests are coalesced into one frame
            let frame_pending = Rc::new(Cell::new(false));
            let frame_id = Rc::new(Cell::new(None::<i32>));
            let frame_cb = {
                let draw = draw.clone();
                let frame_pending = frame_pending.clone();
                let frame_id = frame_id.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    frame_pending.set(false);
                    frame_id.set(None);
                    draw();
                }) as Box<dyn FnMut()>))
            };
            let request_redraw: Rc<dyn Fn()> = {
                let window = window.clone();
                let frame_pending = frame_pending.clone();
                let frame_id = frame_id.clone();
                let frame_cb = frame_cb.clone();
                Rc::new(move || {
                    if frame_pending.get() {
                        return;
                    }
                    match window.request_animation_frame((*frame_cb).as_ref().unchecked_ref()) {
                        Ok(id) => {
                            frame_pending.set(true);
                            frame_id.set(Some(id));
                        }
                        Err(_) => draw(),
                    }
                })
            };
            *redraw_ref_setup.borrow_mut() = Some(request_redraw.clone());
            request_redraw();

            let mousedown_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let request_redraw = request_redraw.clone();
                let last_hover = last_hover.clone();
                let hover_constellation = hover_constellation.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let at = event_point(&canvas_c, e.client_x(), e.client_y());
                    // Non-primary buttons pan as well.
                    let modifier = e.shift_key() || e.ctrl_key() || e.meta_key() || e.button() != 0;
                    let mut ctl = controller.borrow_mut();
                    let r = ctl.pointer_down(at, modifier);
                    sync_legend_hover(&ctl, &last_hover, &hover_constellation);
                    drop(ctl);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .ok();
            let mousemove_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                let request_redraw = request_redraw.clone();
                let last_hover = last_hover.clone();
                let hover_constellation = hover_constellation.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let at = event_point(&canvas_c, e.client_x(), e.client_y());
                    let mut ctl = controller.borrow_mut();
                    let r = ctl.pointer_move(at, &catalogue_ref.borrow());
                    sync_legend_hover(&ctl, &last_hover, &hover_constellation);
                    drop(ctl);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .ok();
            let mouseup_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                let request_redraw = request_redraw.clone();
                let last_hover = last_hover.clone();
                let hover_constellation = hover_constellation.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let mut ctl = controller.borrow_mut();
                    let r = ctl.pointer_up(&catalogue_ref.borrow());
                    sync_legend_hover(&ctl, &last_hover, &hover_constellation);
                    drop(ctl);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();
            let mouseleave_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let request_redraw = request_redraw.clone();
                let last_hover = last_hover.clone();
                let hover_constellation = hover_constellation.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let mut ctl = controller.borrow_mut();
                    let r = ctl.pointer_leave();
                    sync_legend_hover(&ctl, &last_hover, &hover_constellation);
                    drop(ctl);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mouseleave", mouseleave_cb.as_ref().unchecked_ref())
                .ok();
            let click_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                let on_select_ref = on_select_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let at = event_point(&canvas_c, e.client_x(), e.client_y());
                    let outcome = controller.borrow_mut().click(at, &catalogue_ref.borrow());
                    let on_select = on_select_ref.borrow().clone();
                    emit_outcome(outcome, &on_select);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .ok();
            let wheel_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                let request_redraw = request_redraw.clone();
                let last_hover = last_hover.clone();
                let hover_constellation = hover_constellation.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let delta = match e.delta_mode() {
                        web_sys::WheelEvent::DOM_DELTA_LINE => e.delta_y() * WHEEL_LINE_PX,
                        web_sys::WheelEvent::DOM_DELTA_PAGE => e.delta_y() * canvas_c.height() as f64,
                        _ => e.delta_y(),
                    };
                    let mut ctl = controller.borrow_mut();
                    let r = ctl.wheel(delta, &catalogue_ref.borrow());
                    sync_legend_hover(&ctl, &last_hover, &hover_constellation);
                    drop(ctl);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();
            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("contextmenu", contextmenu_cb.as_ref().unchecked_ref())
                .ok();
            let resize_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                let request_redraw = request_redraw.clone();
                let last_hover = last_hover.clone();
                let hover_constellation = hover_constellation.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let (w, h) = apply_canvas_size();
                    let mut ctl = controller.borrow_mut();
                    let r = ctl.resize(w, h, &catalogue_ref.borrow());
                    sync_legend_hover(&ctl, &last_hover, &hover_constellation);
                    drop(ctl);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();
            // Touch
            let touch_start_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let points = touch_points(&canvas_c, &e.touches());
                    controller.borrow_mut().touch_start(&points);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
                .ok();
            let touch_move_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let request_redraw = request_redraw.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let points = touch_points(&canvas_c, &e.touches());
                    let r = controller.borrow_mut().touch_move(&points);
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
                .ok();
            let touch_end_cb = {
                let controller = controller.clone();
                let catalogue_ref = catalogue_ref.clone();
                let on_select_ref = on_select_ref.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let remaining = e.touches().length() as usize;
                    let outcome = controller
                        .borrow_mut()
                        .touch_end(remaining, &catalogue_ref.borrow());
                    let on_select = on_select_ref.borrow().clone();
                    emit_outcome(outcome, &on_select);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            let touch_cancel_cb = {
                let canvas_c = canvas.clone();
                let controller = controller.clone();
                let request_redraw = request_redraw.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    let r = controller.borrow_mut().pointer_leave();
                    apply_response(r, &canvas_c, &*request_redraw);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchcancel", touch_cancel_cb.as_ref().unchecked_ref())
                .ok();

            // Cleanup
            let window_clone = window.clone();
            Box::new(move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "click",
                    click_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_cancel_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = frame_id.take() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                *redraw_ref_setup.borrow_mut() = None;
                drop(frame_cb);
            }) as Box<dyn FnOnce()>
        });
    }

    // Camera control buttons share the pointer paths through the controller
    let with_controller = {
        let canvas_ref = canvas_ref.clone();
        let controller = controller.clone();
        let catalogue_ref = catalogue_ref.clone();
        let redraw_ref = redraw_ref.clone();
        let last_hover = last_hover.clone();
        let hover_constellation = hover_constellation.clone();
        move |f: fn(&mut InteractionController, &Constellations) -> Response| {
            let mut ctl = controller.borrow_mut();
            let r = f(&mut ctl, &catalogue_ref.borrow());
            sync_legend_hover(&ctl, &last_hover, &hover_constellation);
            drop(ctl);
            if let (Some(canvas), Some(redraw)) =
                (canvas_ref.cast::<HtmlCanvasElement>(), redraw_ref.borrow().clone())
            {
                apply_response(r, &canvas, &*redraw);
            }
        }
    };
    let control = |f: fn(&mut InteractionController, &Constellations) -> Response| {
        let with_controller = with_controller.clone();
        Callback::from(move |()| with_controller(f))
    };

    let entries = use_memo(props.catalogue.clone(), |catalogue| legend_entries(catalogue));

    html! {<div style="position:relative; width:100%; height:100%; overflow:hidden;">
        <canvas ref={canvas_ref.clone()} id="star-map-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        <CameraControls
            on_zoom_in={control(|c, cat| c.zoom_by(ZOOM_STEP, cat))}
            on_zoom_out={control(|c, cat| c.zoom_by(1.0 / ZOOM_STEP, cat))}
            on_rotate_left={control(|c, cat| c.rotate_by(-ROTATE_STEP, cat))}
            on_rotate_right={control(|c, cat| c.rotate_by(ROTATE_STEP, cat))}
            on_center={control(|c, cat| c.recenter(cat))}
        />
        <LegendPanel entries={(*entries).clone()} highlight={(*hover_constellation).clone()} />
    </div>}
}
