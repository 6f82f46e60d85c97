use colorcycle::config::{DemoConfig, CONFIG_SCRIPT_ID};
use colorcycle::error::{require, DemoError};
use colorcycle::reaction::{Effect, Target};
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

pub(super) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(super) fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub(super) fn config_text(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        warn!("bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements the controller's effects are applied to, looked up once at mount.
pub(super) struct Page {
    document: Document,
    root: Element,
    trigger: HtmlElement,
    form: HtmlFormElement,
    counter: Element,
    output: Element,
    name_input: Option<HtmlInputElement>,
    cards: Vec<Element>,
    nav_links: Vec<Element>,
}

impl Page {
    pub(super) fn lookup(document: &Document, config: &DemoConfig) -> Result<Self, DemoError> {
        let ids = &config.ids;
        let by_id = |id: &str| document.get_element_by_id(id);

        let trigger = require(
            by_id(&ids.trigger).and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            &ids.trigger,
        )?;
        let form = require(
            by_id(&ids.form).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
            &ids.form,
        )?;
        let counter = require(by_id(&ids.counter), &ids.counter)?;
        let output = require(by_id(&ids.output), &ids.output)?;
        let root = require(document.document_element(), "html")?;

        let name_input = by_id(&ids.name_input).and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if name_input.is_none() {
            warn!("no #{} input; submissions read as empty", ids.name_input);
        }

        Ok(Self {
            document: document.clone(),
            root,
            trigger,
            form,
            counter,
            output,
            name_input,
            cards: query_all(document, &config.classes.card_selector),
            nav_links: query_all(document, &config.classes.nav_selector),
        })
    }

    pub(super) fn document(&self) -> &Document {
        &self.document
    }

    pub(super) fn trigger(&self) -> &HtmlElement {
        &self.trigger
    }

    pub(super) fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub(super) fn name_input(&self) -> Option<&HtmlInputElement> {
        self.name_input.as_ref()
    }

    pub(super) fn name_value(&self) -> String {
        self.name_input.as_ref().map(|i| i.value()).unwrap_or_default()
    }

    pub(super) fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub(super) fn nav_hrefs(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .map(|a| a.get_attribute("href").unwrap_or_default())
            .collect()
    }

    /// Element for `target`, or `None` if it is gone from the document.
    fn element(&self, target: Target) -> Option<Element> {
        let el = match target {
            Target::Root => Some(self.root.clone()),
            Target::Trigger => Some(self.trigger.clone().into()),
            Target::Counter => Some(self.counter.clone()),
            Target::Output => Some(self.output.clone()),
            Target::Form => Some(self.form.clone().into()),
            Target::NameInput => self.name_input.clone().map(Into::into),
            Target::Message(id) => self.document.get_element_by_id(&id.dom_id()),
            Target::Card(i) => self.cards.get(i).cloned(),
            Target::NavLink(i) => self.nav_links.get(i).cloned(),
        }?;
        el.is_connected().then_some(el)
    }

    fn style_of(&self, target: Target) -> Option<web_sys::CssStyleDeclaration> {
        self.element(target)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.style())
    }

    pub(super) fn apply_effect(&self, effect: &Effect) {
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(el) = self.element(*target) {
                    let _ = el.class_list().add_1(class);
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.element(*target) {
                    let _ = el.class_list().remove_1(class);
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = self.element(*target) {
                    el.set_text_content(Some(text));
                }
            }
            Effect::SetBorderColor { target, color } => {
                if let Some(style) = self.style_of(*target) {
                    let _ = style.set_property("border-color", color);
                }
            }
            Effect::ShowMessage { id, tone, text } => {
                self.output.set_text_content(None);
                let Ok(block) = self.document.create_element("div") else {
                    error!("create_element failed");
                    return;
                };
                block.set_id(&id.dom_id());
                block.set_class_name(tone.class_name());
                block.set_text_content(Some(text));
                let _ = self.output.append_child(&block);
            }
            Effect::FadeOut { target, duration } => {
                if let Some(style) = self.style_of(*target) {
                    let transition = format!("opacity {}ms ease", duration.as_millis());
                    let _ = style.set_property("transition", &transition);
                    let _ = style.set_property("opacity", "0");
                }
            }
            Effect::Remove(target) => {
                if let Some(el) = self.element(*target) {
                    el.remove();
                }
            }
            Effect::ClearInput => {
                if let Some(input) = &self.name_input {
                    input.set_value("");
                }
            }
            Effect::ResetForm => self.form.reset(),
            Effect::ClearOutput => self.output.set_text_content(None),
        }
    }
}
