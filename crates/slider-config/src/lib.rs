//! Configuration management for slider props.
//!
//! Parses `slider.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## File format
//!
//! ```toml
//! [slider]
//! minimum_value = 0.0
//! maximum_value = 10.0
//! step = 0.5
//! lower_limit = 1.0
//! inverted = true
//! ```
//!
//! Every field is optional. The constants table is fixed: a `[constants]`
//! section naming a constant fails with
//! [`ConstantsError::ImmutabilityViolation`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use slider_consts::{ConstantsError, ConstantsTable};
use slider_core::{PropsError, SliderProps};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override initial value.
    pub value: Option<f64>,
    /// Override range start.
    pub minimum_value: Option<f64>,
    /// Override range end.
    pub maximum_value: Option<f64>,
    /// Override step size.
    pub step: Option<f64>,
    /// Override lower limit.
    pub lower_limit: Option<f64>,
    /// Override upper limit.
    pub upper_limit: Option<f64>,
    /// Override track direction.
    pub inverted: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "slider.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slider props as parsed from TOML.
    slider: SliderConfigRaw,
    /// Attempted constant overrides; any key here is rejected.
    constants: Option<toml::Table>,

    /// Resolved slider props (set after loading).
    #[serde(skip)]
    pub slider_resolved: SliderProps,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slider: SliderConfigRaw::default(),
            constants: None,
            slider_resolved: SliderProps::default_with(ConstantsTable::standard()),
            config_path: None,
        }
    }
}

/// Raw slider configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SliderConfigRaw {
    value: Option<f64>,
    minimum_value: Option<f64>,
    maximum_value: Option<f64>,
    step: Option<f64>,
    lower_limit: Option<f64>,
    upper_limit: Option<f64>,
    inverted: Option<bool>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Invalid slider props.
    #[error("Configuration error: {0}")]
    Props(#[from] PropsError),
    /// Attempt to redefine or reference an unknown constant.
    #[error("Configuration error: {0}")]
    Constants(#[from] ConstantsError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `slider.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values. The merged props are validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// the file redefines a constant, or the resulting props are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("no {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Constants table used for defaults and validation.
    ///
    /// Components downstream of the config receive this reference rather
    /// than reaching for the table themselves.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn constants(&self) -> &'static ConstantsTable {
        ConstantsTable::standard()
    }

    /// Validate the resolved slider props.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Props` if the props are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slider_resolved.validate(self.constants())?;
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let props = &mut self.slider_resolved;
        let overrides = [
            (&mut props.value, settings.value),
            (&mut props.minimum_value, settings.minimum_value),
            (&mut props.maximum_value, settings.maximum_value),
            (&mut props.step, settings.step),
            (&mut props.lower_limit, settings.lower_limit),
            (&mut props.upper_limit, settings.upper_limit),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(inverted) = settings.inverted {
            props.inverted = inverted;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.reject_constant_overrides()?;
        config.resolve();
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "loaded slider config");
        Ok(config)
    }

    /// Fail on the first key of a `[constants]` section.
    fn reject_constant_overrides(&self) -> Result<(), ConstantsError> {
        match self.constants.as_ref().and_then(|table| table.keys().next()) {
            Some(key) => Err(ConstantsTable::reject_assignment(key)),
            None => Ok(()),
        }
    }

    /// Fill unset fields from defaults.
    fn resolve(&mut self) {
        let defaults = SliderProps::default_with(self.constants());
        let raw = &self.slider;
        self.slider_resolved = SliderProps {
            value: raw.value.unwrap_or(defaults.value),
            minimum_value: raw.minimum_value.unwrap_or(defaults.minimum_value),
            maximum_value: raw.maximum_value.unwrap_or(defaults.maximum_value),
            step: raw.step.unwrap_or(defaults.step),
            lower_limit: raw.lower_limit.unwrap_or(defaults.lower_limit),
            upper_limit: raw.upper_limit.unwrap_or(defaults.upper_limit),
            inverted: raw.inverted.unwrap_or(defaults.inverted),
        };
    }
}
