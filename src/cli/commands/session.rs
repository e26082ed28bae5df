use anyhow::Result;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::coordinator::CoordinatorConfig;
use crate::session::{self, SessionConfig, SessionInfo};
use crate::translation::{AUTO_LABEL, BlockingGateway, LanguageCatalog};

/// Starts the interactive session with the resolved provider.
///
/// Languages from the command line or config file preselect the session's
/// source and target.
pub fn run_session(options: &ResolveOptions, runtime: &Runtime) -> Result<()> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(options, &config_file)?;

    let catalog = Arc::new(LanguageCatalog::builtin());
    let label_of = |code: &str| catalog.label_for_code(code).map(str::to_string);

    let source = match resolved.source_language.as_deref() {
        Some(code) => label_of(code),
        None => Some(AUTO_LABEL.to_string()),
    };
    let target = resolved.target_language.as_deref().and_then(label_of);

    let config = SessionConfig {
        info: SessionInfo {
            provider_name: resolved.provider_name.clone(),
            endpoint: resolved.endpoint.clone(),
            model: resolved.model.clone(),
        },
        coordinator: CoordinatorConfig {
            frame_interval: resolved.frame_interval,
            source,
            target,
        },
    };

    let gateway = Arc::new(BlockingGateway::new(
        resolved.gateway_client(),
        runtime.handle().clone(),
    ));

    session::run(config, catalog, gateway)
}
