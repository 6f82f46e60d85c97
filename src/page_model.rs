//! In-memory page that applies [`Reaction`]s the way the browser shell does.
//!
//! Lets the whole controller (listeners, timers, stale-timer guards) run on the
//! host with a virtual clock.

use std::collections::BTreeSet;

use crate::config::DemoConfig;
use crate::controller::{Controller, StateSnapshot};
use crate::error::{require, DemoError};
use crate::messages::{MessageId, Tone};
use crate::reaction::{Effect, Reaction, Target};
use crate::schedule::Timeline;
use crate::time::Duration;

/// Which parts of the markup exist.
#[derive(Debug, Clone)]
pub struct PageShape {
    pub has_trigger: bool,
    pub has_form: bool,
    pub has_counter: bool,
    pub has_output: bool,
    pub has_name_input: bool,
    pub card_count: usize,
    pub nav_hrefs: Vec<String>,
    pub path: String,
}

impl Default for PageShape {
    fn default() -> Self {
        Self {
            has_trigger: true,
            has_form: true,
            has_counter: true,
            has_output: true,
            has_name_input: true,
            card_count: 3,
            nav_hrefs: vec!["index.html".to_string(), "about.html".to_string()],
            path: "/index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameInputModel {
    pub value: String,
    pub border_color: Option<String>,
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageModel {
    pub id: MessageId,
    pub tone: Tone,
    pub text: String,
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkModel {
    pub href: String,
    pub classes: BTreeSet<String>,
}

pub struct PageModel {
    controller: Controller,
    timeline: Timeline,
    pub root_classes: BTreeSet<String>,
    pub trigger_classes: BTreeSet<String>,
    pub counter_text: String,
    pub name_input: Option<NameInputModel>,
    pub output: Option<MessageModel>,
    pub cards: Vec<BTreeSet<String>>,
    pub nav: Vec<NavLinkModel>,
}

impl PageModel {
    /// Bind the controller to a page. Fails with `MissingElement` when a
    /// required element is absent; nothing is wired in that case.
    pub fn mount(config: DemoConfig, seed: u64, shape: PageShape) -> Result<Self, DemoError> {
        let ids = &config.ids;
        require(shape.has_trigger.then_some(()), &ids.trigger)?;
        require(shape.has_form.then_some(()), &ids.form)?;
        require(shape.has_counter.then_some(()), &ids.counter)?;
        require(shape.has_output.then_some(()), &ids.output)?;

        let mut page = Self {
            controller: Controller::new(config, seed),
            timeline: Timeline::new(),
            root_classes: BTreeSet::new(),
            trigger_classes: BTreeSet::new(),
            counter_text: String::new(),
            name_input: shape.has_name_input.then(NameInputModel::default),
            output: None,
            cards: vec![BTreeSet::new(); shape.card_count],
            nav: shape
                .nav_hrefs
                .iter()
                .map(|href| NavLinkModel {
                    href: href.clone(),
                    classes: BTreeSet::new(),
                })
                .collect(),
        };

        let r = page
            .controller
            .on_ready(shape.card_count, &shape.path, &shape.nav_hrefs);
        page.apply(r);
        page.run_due();
        Ok(page)
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn get_state(&self) -> StateSnapshot {
        self.controller.get_state()
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.pending()
    }

    pub fn click_trigger(&mut self) {
        let r = self.controller.on_color_trigger();
        self.apply(r);
    }

    /// Set the input value and fire its `input` event.
    pub fn type_name(&mut self, value: &str) {
        let Some(input) = self.name_input.as_mut() else {
            return;
        };
        input.value = value.to_string();
        let r = self.controller.on_input_change(value);
        self.apply(r);
    }

    /// Submit the form. Returns whether the default action was prevented.
    pub fn submit(&mut self) -> bool {
        let value = self
            .name_input
            .as_ref()
            .map(|i| i.value.clone())
            .unwrap_or_default();
        let r = self.controller.on_form_submit(&value);
        let prevented = r.prevent_default;
        self.apply(r);
        prevented
    }

    pub fn press_key(&mut self, key: &str, in_text_field: bool) -> bool {
        let r = self.controller.on_key(key, in_text_field);
        let prevented = r.prevent_default;
        self.apply(r);
        prevented
    }

    /// Advance the virtual clock, running every timer that comes due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timeline.now() + by;
        while let Some(task) = self.timeline.pop_due(until) {
            let r = self.controller.on_timer(task);
            self.apply(r);
        }
        self.timeline.set_now(until);
    }

    fn run_due(&mut self) {
        self.advance(Duration::ZERO);
    }

    fn apply(&mut self, reaction: Reaction) {
        for effect in reaction.effects {
            self.apply_effect(effect);
        }
        for timer in reaction.timers {
            self.timeline.schedule(timer);
        }
    }

    fn classes_mut(&mut self, target: Target) -> Option<&mut BTreeSet<String>> {
        match target {
            Target::Root => Some(&mut self.root_classes),
            Target::Trigger => Some(&mut self.trigger_classes),
            Target::NameInput => self.name_input.as_mut().map(|i| &mut i.classes),
            Target::Card(i) => self.cards.get_mut(i),
            Target::NavLink(i) => self.nav.get_mut(i).map(|l| &mut l.classes),
            // Not modelled as class-bearing.
            Target::Counter | Target::Output | Target::Form | Target::Message(_) => None,
        }
    }

    fn current_message_mut(&mut self, id: MessageId) -> Option<&mut MessageModel> {
        self.output.as_mut().filter(|m| m.id == id)
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(classes) = self.classes_mut(target) {
                    classes.insert(class);
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(classes) = self.classes_mut(target) {
                    classes.remove(&class);
                }
            }
            Effect::SetText { target, text } => {
                if target == Target::Counter {
                    self.counter_text = text;
                }
            }
            Effect::SetBorderColor { target, color } => {
                if let (Target::NameInput, Some(input)) = (target, self.name_input.as_mut()) {
                    input.border_color = Some(color);
                }
            }
            Effect::ShowMessage { id, tone, text } => {
                self.output = Some(MessageModel {
                    id,
                    tone,
                    text,
                    fading: false,
                });
            }
            Effect::FadeOut { target, .. } => {
                if let Target::Message(id) = target {
                    if let Some(m) = self.current_message_mut(id) {
                        m.fading = true;
                    }
                }
            }
            Effect::Remove(target) => {
                if let Target::Message(id) = target {
                    if self.current_message_mut(id).is_some() {
                        self.output = None;
                    }
                }
            }
            Effect::ClearInput | Effect::ResetForm => {
                if let Some(input) = self.name_input.as_mut() {
                    input.value.clear();
                }
            }
            Effect::ClearOutput => self.output = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render_template;
    use crate::time::millis;

    fn mount() -> PageModel {
        PageModel::mount(DemoConfig::default(), 7, PageShape::default()).unwrap()
    }

    #[test]
    fn typing_and_submitting_a_name_shows_then_removes_welcome() {
        let mut page = mount();
        page.type_name("A");
        assert_eq!(
            page.name_input.as_ref().unwrap().border_color.as_deref(),
            Some("#ff6b6b")
        );
        page.type_name("Al");
        assert_eq!(
            page.name_input.as_ref().unwrap().border_color.as_deref(),
            Some("#51cf66")
        );

        assert!(page.submit());
        assert_eq!(page.name_input.as_ref().unwrap().value, "");

        let msg = page.output.clone().expect("welcome shown");
        assert_eq!(msg.tone, Tone::Success);
        let expected: Vec<String> = page
            .controller()
            .config()
            .welcome_templates
            .iter()
            .map(|t| render_template(t, "Al"))
            .collect();
        assert!(expected.contains(&msg.text));

        page.advance(millis(2999));
        assert!(page.output.as_ref().is_some_and(|m| !m.fading));
        page.advance(millis(1));
        assert!(page.output.as_ref().is_some_and(|m| m.fading));
        page.advance(millis(299));
        assert!(page.output.is_some());
        page.advance(millis(1));
        assert!(page.output.is_none());
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn rejected_name_stays_and_shakes_briefly() {
        let mut page = mount();
        page.type_name("R2D2");
        page.submit();

        let input = page.name_input.as_ref().unwrap();
        assert_eq!(input.value, "R2D2");
        assert!(input.classes.contains("shake"));
        let msg = page.output.clone().unwrap();
        assert_eq!(msg.tone, Tone::Error);

        page.advance(millis(500));
        assert!(!page.name_input.as_ref().unwrap().classes.contains("shake"));
        // Error messages are not auto-dismissed.
        page.advance(millis(10_000));
        assert_eq!(page.output, Some(msg));
    }

    #[test]
    fn trigger_keeps_exactly_one_palette_class_on_root() {
        let mut page = mount();
        for k in 1..=7u64 {
            page.click_trigger();
            assert_eq!(page.root_classes.len(), 1);
            assert_eq!(page.counter_text, format!("Clicks: {k}"));
        }
        assert!(page.root_classes.contains("bg-ocean"));
        assert!(page.trigger_classes.contains("shake"));
        page.advance(millis(500));
        assert!(page.trigger_classes.is_empty());
    }

    #[test]
    fn newer_message_survives_older_fade_timer() {
        let mut page = mount();
        page.type_name("Ada");
        page.submit();
        page.advance(millis(2000));

        page.type_name("Grace");
        page.submit();
        let second = page.output.clone().unwrap();

        // First message's fade comes due at 3000ms and must not touch the second.
        page.advance(millis(1500));
        assert_eq!(page.output.as_ref().map(|m| m.id), Some(second.id));
        assert!(!page.output.as_ref().unwrap().fading);

        page.advance(millis(1800));
        assert!(page.output.is_none());
    }

    #[test]
    fn escape_resets_form_and_output() {
        let mut page = mount();
        page.type_name("Grace");
        page.submit();
        page.type_name("Half typed");

        assert!(!page.press_key("Escape", false));
        assert!(page.output.is_none());
        let input = page.name_input.as_ref().unwrap();
        assert_eq!(input.value, "");
        assert_eq!(input.border_color.as_deref(), Some("#ddd"));

        page.advance(millis(5000));
        assert!(page.output.is_none());
    }

    #[test]
    fn space_shortcut_respects_text_fields() {
        let mut page = mount();
        assert!(!page.press_key(" ", true));
        assert_eq!(page.get_state().click_count, 0);
        assert!(page.press_key(" ", false));
        assert_eq!(page.get_state().click_count, 1);
        assert!(!page.press_key("Enter", false));
    }

    #[test]
    fn cards_fade_in_with_stagger_and_nav_is_highlighted() {
        let mut page = PageModel::mount(
            DemoConfig::default(),
            1,
            PageShape {
                card_count: 3,
                nav_hrefs: vec!["index.html".into(), "about.html".into()],
                path: "/demo/about.html".into(),
                ..PageShape::default()
            },
        )
        .unwrap();

        let revealed = |p: &PageModel| p.cards.iter().filter(|c| c.contains("fade-in")).count();
        assert_eq!(revealed(&page), 1);
        page.advance(millis(199));
        assert_eq!(revealed(&page), 1);
        page.advance(millis(1));
        assert_eq!(revealed(&page), 2);
        page.advance(millis(200));
        assert_eq!(revealed(&page), 3);

        assert!(!page.nav[0].classes.contains("active"));
        assert!(page.nav[1].classes.contains("active"));
    }

    #[test]
    fn missing_required_element_refuses_to_mount() {
        let err = PageModel::mount(
            DemoConfig::default(),
            1,
            PageShape {
                has_output: false,
                ..PageShape::default()
            },
        )
        .err()
        .expect("mount must fail");
        assert!(matches!(err, DemoError::MissingElement(ref id) if id == "output"));
    }

    #[test]
    fn missing_name_input_is_tolerated() {
        let mut page = PageModel::mount(
            DemoConfig::default(),
            1,
            PageShape {
                has_name_input: false,
                ..PageShape::default()
            },
        )
        .unwrap();
        page.type_name("Al");
        page.submit();
        assert_eq!(page.output.as_ref().map(|m| m.tone), Some(Tone::Error));
        page.advance(millis(500));
    }
}
