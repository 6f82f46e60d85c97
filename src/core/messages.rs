//! Welcome templates and the rejection message.

use crate::prng::Prng;

/// Placeholder substituted with the submitted name.
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const DEFAULT_WELCOME_TEMPLATES: [&str; 4] = [
    "Welcome, {name}! Glad you made it.",
    "Hello there, {name}! Great to see you.",
    "Hey {name}, thanks for stopping by!",
    "Nice to meet you, {name}!",
];

pub const DEFAULT_REJECTION: &str =
    "Please enter a valid name (at least 2 characters, letters and spaces only).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn class_name(self) -> &'static str {
        match self {
            Tone::Success => "message success",
            Tone::Error => "message error",
        }
    }
}

/// Identifies one rendered message block. Fresh per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl MessageId {
    pub fn dom_id(self) -> String {
        format!("message-{}", self.0)
    }
}

pub fn render_template(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

/// Picks one template uniformly and fills in `name`.
pub fn pick_welcome(templates: &[String], name: &str, rng: &mut Prng) -> String {
    match templates.get(rng.gen_index(templates.len())) {
        Some(t) => render_template(t, name),
        None => format!("Welcome, {name}!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_WELCOME_TEMPLATES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_template_mentions_the_name() {
        for t in DEFAULT_WELCOME_TEMPLATES {
            assert!(t.contains(NAME_PLACEHOLDER), "{t}");
            assert!(render_template(t, "Grace").contains("Grace"));
        }
    }

    #[test]
    fn pick_welcome_returns_a_known_template() {
        let templates = defaults();
        let mut rng = Prng::new(3);
        let rendered: Vec<String> = templates.iter().map(|t| render_template(t, "Al")).collect();
        for _ in 0..50 {
            let msg = pick_welcome(&templates, "Al", &mut rng);
            assert!(rendered.contains(&msg), "unexpected message: {msg}");
        }
    }

    #[test]
    fn empty_template_list_falls_back() {
        let mut rng = Prng::new(1);
        assert_eq!(pick_welcome(&[], "Bo", &mut rng), "Welcome, Bo!");
    }

    #[test]
    fn message_dom_ids_are_distinct() {
        assert_ne!(MessageId(1).dom_id(), MessageId(2).dom_id());
        assert_eq!(Tone::Error.class_name(), "message error");
    }
}
