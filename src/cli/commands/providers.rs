//! Provider listing command handler.

use anyhow::Result;

use crate::config::{BUILTIN_PROVIDER, ConfigManager, ProviderConfig};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// Otherwise, lists every provider, including the built-in `google` one.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let config = ConfigManager::new()?.load_or_default()?;
    let default_provider = config.tl.provider.as_deref().unwrap_or(BUILTIN_PROVIDER);
    let marker = |name: &str| {
        if name == default_provider {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(provider_name) = specific_provider {
        let Some(provider) = config.provider(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        println!("Provider: {}{}", Style::value(provider_name), marker(provider_name));
        println!("  kind     = {}", provider.kind.as_str());
        println!("  endpoint = {}", endpoint_of(&provider));
        if provider.requires_api_key() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  api_key  = {}",
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if provider.models.is_empty() {
            println!("  models   = (none configured)");
        } else {
            println!("  models:");
            for model in &provider.models {
                println!("    - {model}");
            }
        }
        return Ok(());
    }

    let mut names: Vec<&str> = config.providers.keys().map(String::as_str).collect();
    if !names.contains(&BUILTIN_PROVIDER) {
        names.push(BUILTIN_PROVIDER);
    }
    names.sort_unstable();

    println!("{}\n", Style::header("Configured providers:"));
    for name in names {
        let Some(provider) = config.provider(name) else {
            continue;
        };
        println!("  {}{}", Style::value(name), marker(name));
        println!(
            "    {} {}",
            Style::label("endpoint:"),
            Style::secondary(endpoint_of(&provider))
        );
        if !provider.models.is_empty() {
            println!("    {} {}", Style::label("models:"), provider.models.join(", "));
        }
    }

    Ok(())
}

fn endpoint_of(provider: &ProviderConfig) -> &str {
    provider.endpoint().unwrap_or("(not set)")
}
