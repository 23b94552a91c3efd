//! Process-wide settings: defaults, then an optional `reporter.toml` next
//! to the executable's working directory, then environment overrides.

use std::{collections::HashMap, fs};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential for the Gemini autofill sink. Absent is valid; it only
    /// disables the autofill flow with a reported message.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("reporter.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("gemini_api_key") {
                settings.gemini_api_key = Some(v.clone());
            }
            if let Some(v) = file_cfg.get("gemini_model") {
                settings.gemini_model = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("GEMINI_API_KEY") {
        settings.gemini_api_key = Some(v);
    }
    if let Ok(v) = std::env::var("APP__GEMINI_API_KEY") {
        settings.gemini_api_key = Some(v);
    }
    if let Ok(v) = std::env::var("APP__GEMINI_MODEL") {
        settings.gemini_model = v;
    }

    settings.gemini_api_key = blank_to_none(settings.gemini_api_key);
    settings
}

/// A set-but-empty credential counts as unset so the autofill flow reports
/// the missing-key message instead of sending a doomed request.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
