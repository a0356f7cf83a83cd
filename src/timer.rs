use crate::core::Subscription;
use crate::dom::DomError;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stops an interval from inside its own callback without freeing the closure.
#[derive(Clone)]
pub struct IntervalHandle {
    window: web::Window,
    id: Rc<Cell<Option<i32>>>,
}

impl IntervalHandle {
    pub fn clear(&self) {
        if let Some(id) = self.id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.id.get().is_none()
    }
}

/// `setInterval` wrapper. The guard clears the interval and frees the callback.
pub fn set_interval(
    period: Duration,
    mut tick: impl FnMut(&IntervalHandle) + 'static,
) -> Result<Subscription, DomError> {
    let window = web::window().ok_or(DomError::NoWindow)?;
    let handle = IntervalHandle {
        window: window.clone(),
        id: Rc::new(Cell::new(None)),
    };
    let handle_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !handle_tick.is_cleared() {
            tick(&handle_tick);
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period.as_millis().min(i32::MAX as u128) as i32,
        )
        .map_err(DomError::from_js)?;
    handle.id.set(Some(id));
    Ok(Subscription::new(move || {
        handle.clear();
        drop(closure);
    }))
}
