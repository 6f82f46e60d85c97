//! Page contract and tunables.
//!
//! Every field has a default, so an empty JSON object (or no config block at
//! all) yields the stock demo page contract. Keys are camelCase.

use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::messages::{DEFAULT_REJECTION, DEFAULT_WELCOME_TEMPLATES};
use crate::palette::{BackgroundPalette, DEFAULT_PALETTE};

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "colorcycle-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub trigger: String,
    pub form: String,
    pub counter: String,
    pub output: String,
    pub name_input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            trigger: "colorBtn".to_string(),
            form: "welcomeForm".to_string(),
            counter: "clickCounter".to_string(),
            output: "output".to_string(),
            name_input: "nameInput".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub shake: String,
    pub fade_in: String,
    pub active: String,
    pub card_selector: String,
    pub nav_selector: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            shake: "shake".to_string(),
            fade_in: "fade-in".to_string(),
            active: "active".to_string(),
            card_selector: ".card".to_string(),
            nav_selector: "nav a".to_string(),
        }
    }
}

/// Delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    pub shake_ms: u32,
    pub card_stagger_ms: u32,
    pub message_linger_ms: u32,
    pub message_fade_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            shake_ms: 500,
            card_stagger_ms: 200,
            message_linger_ms: 3000,
            message_fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderColors {
    pub neutral: String,
    pub too_short: String,
    pub valid: String,
}

impl Default for BorderColors {
    fn default() -> Self {
        Self {
            neutral: "#ddd".to_string(),
            too_short: "#ff6b6b".to_string(),
            valid: "#51cf66".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoConfig {
    pub ids: ElementIds,
    pub classes: ClassNames,
    pub palette: Vec<String>,
    pub welcome_templates: Vec<String>,
    pub rejection_message: String,
    pub timing: Timing,
    pub border: BorderColors,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            welcome_templates: DEFAULT_WELCOME_TEMPLATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rejection_message: DEFAULT_REJECTION.to_string(),
            timing: Timing::default(),
            border: BorderColors::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(raw: &str) -> Result<Self, DemoError> {
        let cfg: DemoConfig = serde_json::from_str(raw)?;
        cfg.background_palette()?;
        Ok(cfg)
    }

    /// Like [`DemoConfig::from_json`], but falls back to defaults on any error.
    /// Returns the error alongside so the caller can report it.
    pub fn from_json_or_default(raw: Option<&str>) -> (Self, Option<DemoError>) {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(cfg) => (cfg, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }

    pub fn background_palette(&self) -> Result<BackgroundPalette, DemoError> {
        BackgroundPalette::new(self.palette.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default_config() {
        let cfg = DemoConfig::from_json("{}").unwrap();
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.timing.shake_ms, 500);
        assert_eq!(cfg.ids.trigger, "colorBtn");
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let cfg = DemoConfig::from_json(
            r#"{ "ids": { "trigger": "cycle" }, "timing": { "messageLingerMs": 1000 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.ids.trigger, "cycle");
        assert_eq!(cfg.ids.form, "welcomeForm");
        assert_eq!(cfg.timing.message_linger_ms, 1000);
        assert_eq!(cfg.timing.message_fade_ms, 300);
    }

    #[test]
    fn empty_palette_is_a_config_error() {
        let err = DemoConfig::from_json(r#"{ "palette": [] }"#).unwrap_err();
        assert!(matches!(err, DemoError::EmptyPalette));
    }

    #[test]
    fn bad_json_falls_back_to_defaults() {
        let (cfg, err) = DemoConfig::from_json_or_default(Some("{ not json"));
        assert_eq!(cfg, DemoConfig::default());
        assert!(matches!(err, Some(DemoError::Config(_))));

        let (cfg, err) = DemoConfig::from_json_or_default(Some("   "));
        assert_eq!(cfg, DemoConfig::default());
        assert!(err.is_none());
    }
}
