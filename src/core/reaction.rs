//! What a handler asks the page to do, described as data.
//!
//! The browser shell and [`crate::page_model::PageModel`] both consume these,
//! so handler behavior is testable without a DOM.

use crate::messages::{MessageId, Tone};
use crate::schedule::Timer;
use crate::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<html>`: carries the palette class.
    Root,
    Trigger,
    Counter,
    Output,
    Form,
    NameInput,
    Message(MessageId),
    Card(usize),
    NavLink(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass { target: Target, class: String },
    RemoveClass { target: Target, class: String },
    SetText { target: Target, text: String },
    SetBorderColor { target: Target, color: String },
    /// Replace the output container's contents with one message block.
    ShowMessage { id: MessageId, tone: Tone, text: String },
    /// Transition opacity to 0 over `duration`.
    FadeOut { target: Target, duration: Duration },
    Remove(Target),
    ClearInput,
    ResetForm,
    ClearOutput,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    pub effects: Vec<Effect>,
    pub timers: Vec<Timer>,
    pub prevent_default: bool,
}

impl Reaction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.timers.is_empty() && !self.prevent_default
    }

    pub(crate) fn effect(&mut self, effect: Effect) -> &mut Self {
        self.effects.push(effect);
        self
    }

    pub(crate) fn after(&mut self, timer: Timer) -> &mut Self {
        self.timers.push(timer);
        self
    }

    pub(crate) fn merge(&mut self, other: Reaction) {
        self.effects.extend(other.effects);
        self.timers.extend(other.timers);
        self.prevent_default |= other.prevent_default;
    }
}
