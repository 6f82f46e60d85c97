use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use super::dom::Page;
use super::{apply, SharedController};

pub(super) fn bind(page: &Rc<Page>, controller: &SharedController) -> Result<(), String> {
    listen(page.trigger(), "click", {
        let page = Rc::clone(page);
        let controller = Rc::clone(controller);
        move |_ev: Event| {
            let r = controller.borrow_mut().on_color_trigger();
            apply(&page, &controller, r);
        }
    })?;

    listen(page.form(), "submit", {
        let page = Rc::clone(page);
        let controller = Rc::clone(controller);
        move |ev: Event| {
            let name = page.name_value();
            let r = controller.borrow_mut().on_form_submit(&name);
            if r.prevent_default {
                ev.prevent_default();
            }
            apply(&page, &controller, r);
        }
    })?;

    if let Some(input) = page.name_input() {
        listen(input, "input", {
            let page = Rc::clone(page);
            let controller = Rc::clone(controller);
            move |_ev: Event| {
                let value = page.name_value();
                let r = controller.borrow().on_input_change(&value);
                apply(&page, &controller, r);
            }
        })?;
    }

    listen(page.document(), "keydown", {
        let page = Rc::clone(page);
        let controller = Rc::clone(controller);
        move |ev: Event| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let in_text_field = is_text_field(ev.target());
            let r = controller.borrow_mut().on_key(&key_ev.key(), in_text_field);
            if r.prevent_default {
                ev.prevent_default();
            }
            apply(&page, &controller, r);
        }
    })?;

    Ok(())
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("{kind}: add_event_listener failed"))?;
    // Listeners live as long as the page.
    cb.forget();
    Ok(())
}

fn is_text_field(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}
