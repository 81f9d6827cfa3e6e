use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{prelude::Closure, JsCast};

const TRAIL_EASING: f64 = 0.15;
const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"], input, label, [aria-expanded]";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule_frame(raf: &FrameCallback) {
    if let Some(window) = web_sys::window() {
        if let Some(cb) = raf.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::warn!("failed to schedule cursor frame: {e:?}");
            }
        }
    }
}

fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Dot-and-outline cursor overlay. The dot follows the pointer directly;
/// the outline trails it with easing, growing over interactive elements.
/// Mounted once for the whole app, so the listeners live for its lifetime.
#[component]
pub fn CustomCursor(cx: Scope) -> impl IntoView {
    let is_hovering = create_rw_signal(cx, false);
    let is_visible = create_rw_signal(cx, false);
    let dot_position = create_rw_signal(cx, (0.0f64, 0.0f64));
    let outline_position = create_rw_signal(cx, (0.0f64, 0.0f64));

    let mouse = Rc::new(Cell::new((0.0f64, 0.0f64)));
    let trail = Rc::new(Cell::new((0.0f64, 0.0f64)));

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new({
            let mouse = Rc::clone(&mouse);
            move |ev: web_sys::MouseEvent| {
                mouse.set((ev.client_x() as f64, ev.client_y() as f64));
                if !is_visible.get() {
                    is_visible.update(|v| *v = true);
                }
            }
        }));
        let on_mouseover = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
            move |ev: web_sys::MouseEvent| {
                if is_interactive(ev.target()) {
                    is_hovering.update(|h| *h = true);
                }
            },
        ));
        let on_mouseout = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
            move |ev: web_sys::MouseEvent| {
                if is_interactive(ev.target()) {
                    is_hovering.update(|h| *h = false);
                }
            },
        ));
        let on_mouseleave = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
            move |_: web_sys::MouseEvent| {
                is_visible.update(|v| *v = false);
            },
        ));

        let listeners = [
            ("mousemove", on_mousemove.as_ref()),
            ("mouseover", on_mouseover.as_ref()),
            ("mouseout", on_mouseout.as_ref()),
        ];
        for (event, cb) in listeners {
            if let Err(e) = document.add_event_listener_with_callback(event, cb.unchecked_ref()) {
                log::warn!("failed to attach {event} listener: {e:?}");
            }
        }
        if let Some(root) = document.document_element() {
            if let Err(e) = root.add_event_listener_with_callback(
                "mouseleave",
                on_mouseleave.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to attach mouseleave listener: {e:?}");
            }
        }
        on_mousemove.forget();
        on_mouseover.forget();
        on_mouseout.forget();
        on_mouseleave.forget();

        let raf: FrameCallback = Rc::new(RefCell::new(None));
        *raf.borrow_mut() = Some(Closure::wrap(Box::new({
            let raf = Rc::clone(&raf);
            let mouse = Rc::clone(&mouse);
            let trail = Rc::clone(&trail);
            move || {
                let (mouse_x, mouse_y) = mouse.get();
                let (trail_x, trail_y) = trail.get();
                let eased = (
                    trail_x + (mouse_x - trail_x) * TRAIL_EASING,
                    trail_y + (mouse_y - trail_y) * TRAIL_EASING,
                );
                trail.set(eased);

                dot_position.update(|p| *p = (mouse_x, mouse_y));
                outline_position.update(|p| *p = eased);

                schedule_frame(&raf);
            }
        }) as Box<dyn FnMut()>));
        schedule_frame(&raf);
    }

    let dot_style = Signal::derive(cx, move || {
        let (x, y) = dot_position.get();
        let opacity = if is_visible.get() { 1.0 } else { 0.0 };
        format!(
            "position: fixed; top: -4px; left: -4px; width: 8px; height: 8px; \
             background-color: rgba(139, 92, 246, 0.9); border-radius: 50%; \
             pointer-events: none; z-index: 9999; will-change: transform; \
             transition: opacity 0.3s ease-out; opacity: {opacity}; \
             transform: translate({x}px, {y}px);"
        )
    });
    let outline_style = Signal::derive(cx, move || {
        let (x, y) = outline_position.get();
        let opacity = if is_visible.get() { 1.0 } else { 0.0 };
        let scale = if is_hovering.get() { 1.5 } else { 1.0 };
        format!(
            "position: fixed; top: -20px; left: -20px; width: 40px; height: 40px; \
             border: 2px solid rgba(139, 92, 246, 0.7); border-radius: 50%; \
             pointer-events: none; z-index: 9999; will-change: transform; \
             transition: opacity 0.3s ease-out; opacity: {opacity}; \
             transform: translate({x}px, {y}px) scale({scale});"
        )
    });

    view! { cx,
        <>
          <div style=move || outline_style.get()></div>
          <div style=move || dot_style.get()></div>
        </>
    }
}
