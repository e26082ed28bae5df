//! Subcommand implementations.

/// Provider listing command handler.
pub mod providers;

/// Interactive session command handler.
pub mod session;

/// One-shot translation command handler.
pub mod translate;
