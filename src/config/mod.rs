mod manager;

pub use manager::{
    BUILTIN_PROVIDER, ConfigError, ConfigFile, ConfigManager, ProviderConfig, ProviderKind,
    ResolveOptions, ResolvedConfig, TlConfig, resolve_config,
};
