//! Page-wide smooth scrolling.
//!
//! [`SmoothScroll`] takes over wheel input for the window and renders the
//! page position from [`ScrollPhysics`] on every animation frame. It is a
//! scoped resource: dropping it removes the wheel listener, cancels the
//! pending frame and hands scrolling back to the browser.
//!
//! Touch, keyboard and anchor navigation stay native; while no wheel
//! animation is running each frame adopts the browser's scroll position.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, WheelEvent, Window};
use wynn_core::ScrollPhysics;
use wynn_core::scroll::normalize_wheel_delta;

use super::dom;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Live smooth-scroll controller. One per page view.
pub struct SmoothScroll {
    window: Window,
    on_wheel: Closure<dyn FnMut(WheelEvent)>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl SmoothScroll {
    /// Install the controller on the current window.
    ///
    /// Returns `None` outside a browser or if the listener cannot be added,
    /// in which case native scrolling is left untouched.
    pub fn start() -> Option<Self> {
        let window = dom::window()?;
        let physics = Rc::new(RefCell::new(ScrollPhysics::default()));
        physics.borrow_mut().sync(dom::scroll_y(&window));

        let on_wheel = {
            let physics = Rc::clone(&physics);
            let window = window.clone();
            Closure::<dyn FnMut(WheelEvent)>::new(move |ev: WheelEvent| {
                // ctrl+wheel is pinch zoom
                if ev.ctrl_key() {
                    return;
                }
                ev.prevent_default();

                let delta =
                    normalize_wheel_delta(ev.delta_y(), ev.delta_mode(), dom::viewport_height(&window));
                let mut physics = physics.borrow_mut();
                physics.set_limit(dom::max_scroll(&window));
                physics.scroll_by(delta);
            })
        };

        // Must be non-passive for prevent_default to suppress native scrolling.
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                on_wheel.as_ref().unchecked_ref(),
                &opts,
            )
            .ok()?;

        let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));

        let callback = {
            let frame = Rc::clone(&frame);
            let frame_id = Rc::clone(&frame_id);
            let window = window.clone();
            Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                {
                    let mut physics = physics.borrow_mut();
                    match physics.advance(time) {
                        Some(y) => window.scroll_to_with_x_and_y(0.0, y),
                        None => physics.sync(dom::scroll_y(&window)),
                    }
                }
                if let Some(next) = frame.borrow().as_ref() {
                    frame_id.set(request_frame(&window, next));
                }
            })
        };
        frame_id.set(request_frame(&window, &callback));
        *frame.borrow_mut() = Some(callback);

        Some(Self {
            window,
            on_wheel,
            frame,
            frame_id,
        })
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.on_wheel.as_ref().unchecked_ref());
        // The frame closure holds an Rc to its own slot; clearing the slot
        // breaks that cycle.
        self.frame.borrow_mut().take();
    }
}
