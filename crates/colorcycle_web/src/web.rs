use std::cell::RefCell;
use std::rc::Rc;

use colorcycle::config::DemoConfig;
use colorcycle::prng::Prng;
use colorcycle::reaction::Reaction;
use colorcycle::Controller;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod dom;
mod listeners;
mod logging;
mod timers;

use dom::Page;

/// The controller is shared by every listener and pending timer on the page.
type SharedController = Rc<RefCell<Controller>>;

/// Debug handle returned to JS by [`mount`].
#[wasm_bindgen]
pub struct DemoHandle {
    controller: SharedController,
}

#[wasm_bindgen]
impl DemoHandle {
    /// Snapshot `{ clickCount, currentBackground, currentBackgroundIndex, timestamp }` as JSON.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<String, JsValue> {
        let snapshot = self.controller.borrow().get_state();
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Bind the page once the document has finished parsing.
pub fn start() {
    logging::init();

    let Some(document) = dom::document() else {
        error!("no document");
        return;
    };

    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(move || {
            mount();
        });
        if document
            .add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
            .is_err()
        {
            error!("failed to wait for DOMContentLoaded");
        }
    } else {
        mount();
    }
}

/// Look up the page elements and register listeners.
///
/// Returns `None` (after logging why) when a required element is missing.
/// Each call registers a fresh set of listeners.
#[wasm_bindgen]
pub fn mount() -> Option<DemoHandle> {
    logging::init();
    match try_mount() {
        Ok(handle) => {
            info!("page bound");
            Some(handle)
        }
        Err(e) => {
            error!("{e}; page left unbound");
            None
        }
    }
}

fn try_mount() -> Result<DemoHandle, String> {
    let document = dom::document().ok_or("no document".to_string())?;

    let raw_config = dom::config_text(&document);
    let (config, config_err) = DemoConfig::from_json_or_default(raw_config.as_deref());
    if let Some(e) = config_err {
        warn!("{e}; using defaults");
    }

    let page = Rc::new(Page::lookup(&document, &config).map_err(|e| e.to_string())?);

    let seed = Prng::from_unit_f64(js_sys::Math::random()).next_u32() as u64;
    let controller: SharedController = Rc::new(RefCell::new(Controller::new(config, seed)));

    listeners::bind(&page, &controller)?;

    let nav_hrefs = page.nav_hrefs();
    let ready = controller
        .borrow_mut()
        .on_ready(page.card_count(), &dom::location_path(), &nav_hrefs);
    apply(&page, &controller, ready);

    Ok(DemoHandle { controller })
}

/// Apply effects now and hand timers to `setTimeout`.
fn apply(page: &Rc<Page>, controller: &SharedController, reaction: Reaction) {
    for effect in &reaction.effects {
        page.apply_effect(effect);
    }
    for timer in reaction.timers {
        timers::schedule(page, controller, timer);
    }
}
