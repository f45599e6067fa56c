//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! symbol table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::transliterate::TranscribeOptions;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call. Fails with
/// `AlreadyInitialized` once the settings have been loaded.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub normalize: NormalizeSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizeSettings {
    pub lexical_substitutions: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    pub virama: bool,
}

impl Settings {
    pub fn options(&self) -> TranscribeOptions {
        TranscribeOptions {
            lexical_substitutions: self.normalize.lexical_substitutions,
            virama: self.output.virama,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(s.normalize.lexical_substitutions);
        assert!(!s.output.virama);
        assert_eq!(s.options(), TranscribeOptions::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[normalize]
lexical_substitutions = false

[output]
virama = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        let opts = s.options();
        assert!(!opts.lexical_substitutions);
        assert!(opts.virama);
    }

    #[test]
    fn error_unknown_field() {
        let toml = r#"
[normalize]
lexical_substitutions = true
spelling = "abakada"

[output]
virama = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("spelling"));
    }

    #[test]
    fn error_wrong_type() {
        let toml = r#"
[normalize]
lexical_substitutions = "yes"

[output]
virama = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[output]
virama = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_after_settings_loaded() {
        let before = settings().options();
        let err = init_custom(DEFAULT_SETTINGS_TOML.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
        assert_eq!(settings().options(), before);
    }
}
