//! UI controller: owns the click counter and palette position and turns page
//! events into [`Reaction`]s.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DemoConfig;
use crate::messages::{pick_welcome, MessageId, Tone};
use crate::nav::active_links;
use crate::palette::BackgroundPalette;
use crate::prng::Prng;
use crate::reaction::{Effect, Reaction, Target};
use crate::schedule::{Timer, TimerTask};
use crate::time::{millis, unix_millis};
use crate::validation::{check_name, BorderCue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppState {
    pub click_count: u64,
    pub current_background_index: usize,
}

/// Debug view of the controller, as returned to JS by `getState()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub click_count: u64,
    pub current_background: String,
    pub current_background_index: usize,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

pub fn counter_text(clicks: u64) -> String {
    format!("Clicks: {clicks}")
}

pub struct Controller {
    config: DemoConfig,
    palette: BackgroundPalette,
    state: AppState,
    rng: Prng,
    next_message_id: u64,
    current_message: Option<MessageId>,
}

impl Controller {
    pub fn new(config: DemoConfig, seed: u64) -> Self {
        let palette = config.background_palette().unwrap_or_else(|e| {
            warn!("{e}; using the default palette");
            BackgroundPalette::default()
        });
        Self {
            config,
            palette,
            state: AppState::default(),
            rng: Prng::new(seed),
            next_message_id: 1,
            current_message: None,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn palette(&self) -> &BackgroundPalette {
        &self.palette
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Id of the message block currently shown, if any.
    pub fn current_message(&self) -> Option<MessageId> {
        self.current_message
    }

    pub fn snapshot(&self, timestamp: u64) -> StateSnapshot {
        StateSnapshot {
            click_count: self.state.click_count,
            current_background: self
                .palette
                .class_at(self.state.current_background_index)
                .to_string(),
            current_background_index: self.state.current_background_index,
            timestamp,
        }
    }

    pub fn get_state(&self) -> StateSnapshot {
        self.snapshot(unix_millis())
    }

    /// Work done once listeners are bound: card entrance and nav highlighting.
    pub fn on_ready<S: AsRef<str>>(
        &mut self,
        card_count: usize,
        page_path: &str,
        nav_hrefs: &[S],
    ) -> Reaction {
        let mut r = self.animate_cards(card_count);
        r.merge(self.highlight_navigation(page_path, nav_hrefs));
        r
    }

    pub fn animate_cards(&self, card_count: usize) -> Reaction {
        let stagger = self.config.timing.card_stagger_ms as u64;
        let mut r = Reaction::none();
        for i in 0..card_count {
            let delay = crate::time::Duration::from_millis(stagger * i as u64);
            r.after(Timer::new(delay, TimerTask::RevealCard(i)));
        }
        r
    }

    pub fn highlight_navigation<S: AsRef<str>>(&self, page_path: &str, hrefs: &[S]) -> Reaction {
        let mut r = Reaction::none();
        for (i, active) in active_links(page_path, hrefs).into_iter().enumerate() {
            if active {
                r.effect(Effect::AddClass {
                    target: Target::NavLink(i),
                    class: self.config.classes.active.clone(),
                });
            }
        }
        r
    }

    pub fn on_color_trigger(&mut self) -> Reaction {
        let mut r = Reaction::none();
        for class in self.palette.classes() {
            r.effect(Effect::RemoveClass {
                target: Target::Root,
                class: class.clone(),
            });
        }

        self.state.current_background_index =
            self.palette.next_index(self.state.current_background_index);
        self.state.click_count += 1;

        let class = self.palette.class_at(self.state.current_background_index);
        debug!(
            clicks = self.state.click_count,
            background = class,
            "background cycled"
        );

        r.effect(Effect::AddClass {
            target: Target::Root,
            class: class.to_string(),
        })
        .effect(Effect::SetText {
            target: Target::Counter,
            text: counter_text(self.state.click_count),
        });
        r.merge(self.shake(Target::Trigger));
        r
    }

    pub fn on_form_submit(&mut self, raw_name: &str) -> Reaction {
        let name = raw_name.trim();
        let check = check_name(name);

        let mut r = if check.is_valid() {
            let text = pick_welcome(&self.config.welcome_templates, name, &mut self.rng);
            debug!(len = name.chars().count(), "name accepted");
            let mut r = self.show_message(Tone::Success, text);
            r.effect(Effect::ClearInput);
            r
        } else {
            debug!(?check, "name rejected");
            let text = self.config.rejection_message.clone();
            let mut r = self.show_message(Tone::Error, text);
            r.merge(self.shake(Target::NameInput));
            r
        };
        r.prevent_default = true;
        r
    }

    pub fn on_input_change(&self, raw: &str) -> Reaction {
        let colors = &self.config.border;
        let color = match BorderCue::for_input(raw) {
            BorderCue::Neutral => &colors.neutral,
            BorderCue::TooShort => &colors.too_short,
            BorderCue::Valid => &colors.valid,
        };
        let mut r = Reaction::none();
        r.effect(Effect::SetBorderColor {
            target: Target::NameInput,
            color: color.clone(),
        });
        r
    }

    /// Document-level shortcuts. `in_text_field` is true when the event
    /// originated from an input or textarea.
    pub fn on_key(&mut self, key: &str, in_text_field: bool) -> Reaction {
        match key {
            " " | "Spacebar" if !in_text_field => {
                let mut r = self.on_color_trigger();
                r.prevent_default = true;
                r
            }
            "Escape" | "Esc" => {
                self.current_message = None;
                let mut r = Reaction::none();
                r.effect(Effect::ResetForm)
                    .effect(Effect::ClearOutput)
                    .effect(Effect::SetBorderColor {
                        target: Target::NameInput,
                        color: self.config.border.neutral.clone(),
                    });
                r
            }
            _ => Reaction::none(),
        }
    }

    /// Run a scheduled task. Tasks for a message that has since been replaced
    /// or cleared do nothing.
    pub fn on_timer(&mut self, task: TimerTask) -> Reaction {
        let mut r = Reaction::none();
        match task {
            TimerTask::ClearShake(target) => {
                r.effect(Effect::RemoveClass {
                    target,
                    class: self.config.classes.shake.clone(),
                });
            }
            TimerTask::RevealCard(i) => {
                r.effect(Effect::AddClass {
                    target: Target::Card(i),
                    class: self.config.classes.fade_in.clone(),
                });
            }
            TimerTask::FadeMessage(id) if self.current_message == Some(id) => {
                let fade = millis(self.config.timing.message_fade_ms);
                r.effect(Effect::FadeOut {
                    target: Target::Message(id),
                    duration: fade,
                })
                .after(Timer::new(fade, TimerTask::DropMessage(id)));
            }
            TimerTask::DropMessage(id) if self.current_message == Some(id) => {
                self.current_message = None;
                r.effect(Effect::Remove(Target::Message(id)));
            }
            TimerTask::FadeMessage(id) | TimerTask::DropMessage(id) => {
                debug!(message = id.0, "stale message timer skipped");
            }
        }
        r
    }

    fn shake(&self, target: Target) -> Reaction {
        let mut r = Reaction::none();
        r.effect(Effect::AddClass {
            target,
            class: self.config.classes.shake.clone(),
        })
        .after(Timer::new(
            millis(self.config.timing.shake_ms),
            TimerTask::ClearShake(target),
        ));
        r
    }

    fn show_message(&mut self, tone: Tone, text: String) -> Reaction {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        self.current_message = Some(id);

        let mut r = Reaction::none();
        r.effect(Effect::ShowMessage { id, tone, text });
        if tone == Tone::Success {
            r.after(Timer::new(
                millis(self.config.timing.message_linger_ms),
                TimerTask::FadeMessage(id),
            ));
        }
        r
    }
}
