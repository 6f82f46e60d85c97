use std::rc::Rc;

use colorcycle::schedule::Timer;
use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::Page;
use super::SharedController;

/// One-shot `setTimeout`. The controller decides on firing whether the task
/// is still current; the page skips elements that have been detached.
pub(super) fn schedule(page: &Rc<Page>, controller: &SharedController, timer: Timer) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let page = Rc::clone(page);
    let controller = Rc::clone(controller);
    let cb = Closure::once_into_js(move || {
        let reaction = controller.borrow_mut().on_timer(timer.task);
        super::apply(&page, &controller, reaction);
    });

    let ms = timer.delay.as_millis().min(i32::MAX as u128) as i32;
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .is_err()
    {
        error!("setTimeout failed");
    }
}
