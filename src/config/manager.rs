use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::coordinator::DEFAULT_FRAME_INTERVAL;
use crate::paths;
use crate::translation::{
    DEFAULT_GOOGLE_ENDPOINT, GatewayClient, GoogleClient, OpenAiClient, validate_language,
};
use crate::ui::Style;

/// Name of the provider that works without any configuration.
pub const BUILTIN_PROVIDER: &str = "google";

/// A configuration problem the user has to fix (exit code `CONFIG`).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConfigError(pub String);

fn config_error(message: String) -> anyhow::Error {
    ConfigError(message).into()
}

/// Default settings in the `[tl]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name (OpenAI-compatible providers only).
    pub model: Option<String>,
    /// Default source language code (ISO 639-1 or `auto`).
    pub from: Option<String>,
    /// Default target language code (ISO 639-1).
    pub to: Option<String>,
    /// Delay between loading indicator frames, in milliseconds.
    pub frame_interval_ms: Option<u64>,
}

/// Which wire protocol a provider speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The public Google Translate web endpoint.
    #[default]
    Google,
    /// An OpenAI-compatible chat completions endpoint.
    OpenAi,
}

impl ProviderKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::OpenAi => "openai",
        }
    }
}

/// Configuration for a translation provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    /// Base URL. Optional for `google`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }

    /// The configured endpoint, or the kind's public default.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().or(match self.kind {
            ProviderKind::Google => Some(DEFAULT_GOOGLE_ENDPOINT),
            ProviderKind::OpenAi => None,
        })
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tl-desk/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub tl: TlConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in `google` one.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers.get(name).cloned().or_else(|| {
            (name == BUILTIN_PROVIDER).then(ProviderConfig::default)
        })
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    pub kind: ProviderKind,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use (OpenAI-compatible providers only).
    pub model: Option<String>,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// Source language code; `None` means automatic detection.
    pub source_language: Option<String>,
    /// Target language code, if one was configured.
    pub target_language: Option<String>,
    pub frame_interval: Duration,
}

impl ResolvedConfig {
    /// Builds the HTTP client for the selected provider.
    pub fn gateway_client(&self) -> GatewayClient {
        match self.kind {
            ProviderKind::Google => GatewayClient::Google(GoogleClient::new(self.endpoint.clone())),
            ProviderKind::OpenAi => GatewayClient::OpenAi(OpenAiClient::new(
                self.endpoint.clone(),
                self.model.clone().unwrap_or_default(),
                self.api_key.clone(),
            )),
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language code override.
    pub from: Option<String>,
    /// Target language code override.
    pub to: Option<String>,
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults (the `google` provider, source `auto`,
/// 100 ms animation frames).
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.tl.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| BUILTIN_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        let mut available: Vec<_> = config_file.providers.keys().map(String::as_str).collect();
        if !available.contains(&BUILTIN_PROVIDER) {
            available.push(BUILTIN_PROVIDER);
        }
        available.sort_unstable();
        config_error(format!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/tl-desk/config.toml",
            available.join("\n  - ")
        ))
    })?;

    let endpoint = provider_config
        .endpoint()
        .map(str::to_string)
        .ok_or_else(|| {
            config_error(format!(
                "Provider '{provider_name}' has no endpoint\n\n\
                 Set 'endpoint' under [providers.{provider_name}] in ~/.config/tl-desk/config.toml"
            ))
        })?;

    let model = match provider_config.kind {
        ProviderKind::Google => None,
        ProviderKind::OpenAi => {
            let model = options
                .model
                .as_ref()
                .or(config_file.tl.model.as_ref())
                .cloned()
                .ok_or_else(|| {
                    config_error(
                        "Missing required configuration: 'model'\n\n\
                         Please provide it via:\n  \
                         - CLI option: tl-desk --model <name>\n  \
                         - Config file: ~/.config/tl-desk/config.toml"
                            .to_string(),
                    )
                })?;

            // Warn if model is not in provider's models list
            if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
                crate::warn!(
                    "{} Model '{}' is not in the configured models list for '{}'\n\
                     Configured models: {}\n\
                     Proceeding anyway...\n",
                    Style::warning("Warning:"),
                    model,
                    provider_name,
                    provider_config.models.join(", ")
                );
            }
            Some(model)
        }
    };

    let source_language = options
        .from
        .as_ref()
        .or(config_file.tl.from.as_ref())
        .cloned()
        .filter(|code| code != crate::translation::AUTO_CODE);
    if let Some(code) = &source_language {
        validate_language(code, true).map_err(|e| config_error(e.to_string()))?;
    }

    let target_language = options
        .to
        .as_ref()
        .or(config_file.tl.to.as_ref())
        .cloned();
    if let Some(code) = &target_language {
        validate_language(code, false).map_err(|e| config_error(e.to_string()))?;
    }

    let frame_interval = match config_file.tl.frame_interval_ms {
        None => DEFAULT_FRAME_INTERVAL,
        Some(0) => {
            return Err(config_error(
                "'frame_interval_ms' must be greater than 0".to_string(),
            ));
        }
        Some(ms) => Duration::from_millis(ms),
    };

    // Get API key
    let api_key = provider_config.get_api_key();

    // Check if API key is required but missing
    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        return Err(config_error(format!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/tl-desk/config.toml"
        )));
    }

    Ok(ResolvedConfig {
        provider_name,
        kind: provider_config.kind,
        endpoint,
        model,
        api_key,
        source_language,
        target_language,
        frame_interval,
    })
}

/// Manages loading configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tl-desk/config.toml`
    /// or `~/.config/tl-desk/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_file()?,
        })
    }

    pub fn with_path(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            config_error(format!(
                "Failed to parse config file {}:\n{e}",
                self.config_path.display()
            ))
        })?;

        Ok(config_file)
    }

    /// Loads the config file; a missing file yields the defaults.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
