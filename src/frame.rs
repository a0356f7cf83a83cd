use crate::core::{PointerFollower, Subscription};
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub follower: Rc<RefCell<PointerFollower>>,
    pub flame: web::HtmlElement,
    pub last_instant: Instant,
    pub last_drawn: Option<glam::Vec2>,
}

impl FrameContext {
    pub fn new(follower: Rc<RefCell<PointerFollower>>, flame: web::HtmlElement) -> Self {
        Self {
            follower,
            flame,
            last_instant: Instant::now(),
            last_drawn: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let pos = self.follower.borrow_mut().tick(dt_sec);
        if self.last_drawn == Some(pos) {
            return;
        }
        dom::set_style(&self.flame, "left", &format!("{}px", pos.x));
        dom::set_style(&self.flame, "top", &format!("{}px", pos.y));
        self.last_drawn = Some(pos);
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Drive `frame_ctx` from `requestAnimationFrame` until the guard is released.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> Subscription {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None::<i32>));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        raf_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    Subscription::new(move || {
        if let (Some(w), Some(id)) = (web::window(), raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure <-> slot cycle
        tick.borrow_mut().take();
    })
}
