//! # tl-desk - Desktop-style Translation for the Terminal
//!
//! `tl-desk` pairs a small form (input text, source and target language,
//! output) with a translation gateway. Requests run on a background worker
//! while a single-threaded event loop keeps the interface responsive and
//! animates a loading indicator.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session
//! tl-desk
//!
//! # Translate a file once
//! tl-desk --to fr ./notes.txt
//!
//! # Translate from stdin with an explicit source language
//! echo "Guten Morgen" | tl-desk --from de --to en
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tl-desk/config.toml`:
//!
//! ```toml
//! [tl]
//! provider = "google"
//! to = "fr"
//!
//! [providers.local]
//! kind = "openai"
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b"]
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Request lifecycle and UI state reconciliation.
pub mod coordinator;

/// Single-threaded event loop with timers and cross-thread posting.
pub mod event_loop;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive terminal session.
pub mod session;

/// Language catalog and translation gateways.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
