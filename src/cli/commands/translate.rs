use anyhow::{Result, bail};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{ConfigError, ConfigManager, ResolveOptions, resolve_config};
use crate::input::read_input;
use crate::translation::AUTO_CODE;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub resolve: ResolveOptions,
}

/// Translates a file or stdin once and prints the result to stdout.
pub fn run_translate(options: &TranslateOptions, runtime: &Runtime) -> Result<()> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(&options.resolve, &config_file)?;

    let Some(target) = resolved.target_language.as_deref() else {
        return Err(ConfigError(
            "Missing required configuration: 'to' (target language)\n\n\
             Please provide it via:\n  \
             - CLI option: tl-desk --to <lang> <file>\n  \
             - Config file: ~/.config/tl-desk/config.toml"
                .to_string(),
        )
        .into());
    };
    let source = resolved.source_language.as_deref().unwrap_or(AUTO_CODE);

    let text = read_input(options.file.as_deref())?;
    if text.trim().is_empty() {
        bail!("Input is empty");
    }

    crate::debug!(
        "provider '{}' at {}: {source} -> {target}",
        resolved.provider_name,
        resolved.endpoint
    );

    let client = resolved.gateway_client();
    let spinner = (!crate::output::is_quiet()).then(|| Spinner::new("Translating..."));
    let result = runtime.block_on(client.translate(&text, source, target));
    if let Some(spinner) = spinner {
        spinner.stop();
    }
    let translation = result?;

    println!("{}", translation.text);

    if source == AUTO_CODE
        && let Some(detected) = translation.detected_source
    {
        crate::info!("{} {}", Style::label("detected"), Style::code(detected));
    }

    Ok(())
}
