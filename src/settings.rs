//! Effect settings and preferences
//!
//! Persisted in LocalStorage; the page can pick the variant through
//! `<body data-effects-variant="...">`.

use serde::{Deserialize, Serialize};

/// Which consistent set of interactive effects the page runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Card tilt + dropdown/FAQ toggles
    #[default]
    #[serde(alias = "tilt")]
    Interactive,
    /// Particle trail + floating idle animation
    #[serde(alias = "trail")]
    Ambient,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Interactive => "interactive",
            Variant::Ambient => "ambient",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "interactive" | "tilt" => Some(Variant::Interactive),
            "ambient" | "trail" => Some(Variant::Ambient),
            _ => None,
        }
    }
}

/// Effect settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interactive effect set
    pub variant: Variant,

    // === Effects ===
    /// Twinkling starfield canvas
    pub starfield: bool,
    /// Reveal-on-scroll
    pub scroll_reveal: bool,
    /// Cursor glow on the card
    pub cursor_glow: bool,
    /// Typewriter headlines
    pub typing: bool,

    // === Accessibility ===
    /// Treat the page as reduced motion even if the OS doesn't ask for it
    pub force_reduced_motion: bool,

    // === Diagnostics ===
    /// Console log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Interactive,

            starfield: true,
            scroll_reveal: true,
            cursor_glow: true,
            typing: true,

            force_reduced_motion: false,

            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "site_effects_settings";

    /// Parse settings JSON, falling back to defaults for bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid effect settings: {}", e);
                Self::default()
            }
        }
    }

    /// Apply a variant name from page markup (unknown names are ignored)
    pub fn apply_variant_override(&mut self, name: &str) {
        match Variant::from_str(name) {
            Some(variant) => self.variant = variant,
            None => log::warn!("Unknown effects variant '{}'", name),
        }
    }

    /// Parsed log level, `Info` if unrecognized
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                return Self::from_json(&json);
            }
        }

        Self::default()
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"variant":"ambient","typing":false}"#);
        assert_eq!(settings.variant, Variant::Ambient);
        assert!(!settings.typing);
        assert!(settings.starfield);
        assert_eq!(settings.level(), log::Level::Info);
    }

    #[test]
    fn test_json_accepts_variant_aliases() {
        let settings = Settings::from_json(r#"{"variant":"trail","typing":false}"#);
        assert_eq!(settings.variant, Variant::Ambient);
        assert!(!settings.typing);
        assert_eq!(
            Settings::from_json(r#"{"variant":"tilt"}"#).variant,
            Variant::Interactive
        );
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_variant_override() {
        let mut settings = Settings::default();
        settings.apply_variant_override(" Trail ");
        assert_eq!(settings.variant, Variant::Ambient);
        settings.apply_variant_override("sparkles");
        assert_eq!(settings.variant, Variant::Ambient);
        assert_eq!(Variant::from_str(Variant::Interactive.as_str()), Some(Variant::Interactive));
    }

    #[test]
    fn test_log_level_parse() {
        let settings = Settings {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(settings.level(), log::Level::Debug);
    }
}
