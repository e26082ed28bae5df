//! Interactive terminal session.
//!
//! The calling thread runs the [`EventLoop`] that owns the [`Coordinator`];
//! a separate input thread prompts the user and posts [`Action`]s to it.

mod command;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result, anyhow};
use std::sync::{Arc, mpsc};

pub use command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
pub use terminal::TerminalView;

use crate::coordinator::{Coordinator, CoordinatorConfig};
use crate::event_loop::{EventLoop, Scheduler};
use crate::translation::{AUTO_LABEL, LanguageCatalog, TranslationGateway};
use input::Choices;

/// The coordinator as driven by a terminal.
pub type Desk = Coordinator<TerminalView>;

/// What `/config` shows about the active provider.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub provider_name: String,
    pub endpoint: String,
    pub model: Option<String>,
}

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub info: SessionInfo,
    pub coordinator: CoordinatorConfig,
}

/// A single user request, produced on the input thread and applied on the
/// UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    /// A label as typed; matched case-insensitively.
    SelectSource(String),
    SelectTarget(String),
    Clear,
    History,
    Languages,
    Config,
    Help,
    Unknown(String),
    /// A follow-up prompt was cancelled.
    Noop,
    Quit,
    Fatal(String),
}

/// Runs the session on the calling thread until the user quits.
pub fn run(
    config: SessionConfig,
    catalog: Arc<LanguageCatalog>,
    gateway: Arc<dyn TranslationGateway>,
) -> Result<()> {
    let choices = Choices {
        sources: catalog.source_labels().into_iter().map(str::to_string).collect(),
        targets: catalog.labels().into_iter().map(str::to_string).collect(),
    };

    ui::print_header();

    let (ready_tx, ready_rx) = mpsc::channel();
    let view = TerminalView::new(ready_tx, config.info);
    let mut event_loop = EventLoop::new(Coordinator::new(
        catalog,
        gateway,
        view,
        config.coordinator,
    ));

    input::spawn(event_loop.handle(), ready_rx, choices)
        .context("Failed to start the input thread")?;
    event_loop.run();

    if let Some(message) = event_loop.state_mut().view_mut().take_fatal() {
        return Err(anyhow!(message));
    }

    ui::print_goodbye();
    Ok(())
}

/// Applies one action on the UI thread, then hands the prompt back unless a
/// translation is now in flight.
pub fn apply(desk: &mut Desk, scheduler: &mut Scheduler<Desk>, action: Action) {
    desk.view_mut().prompt_answered();

    match action {
        Action::Submit(text) => {
            desk.set_input(&text);
            // A rejected submit is already reported through the status line
            let _ = desk.submit_form(scheduler);
        }
        Action::SelectSource(query) => match source_label(desk.catalog(), &query) {
            Some(label) => desk.select_source(Some(&label)),
            None => ui::print_error(&format!("Unknown language: '{query}'")),
        },
        Action::SelectTarget(query) => {
            match desk.catalog().find_label(&query).map(str::to_string) {
                Some(label) => desk.select_target(Some(&label)),
                None => ui::print_error(&format!("Unknown language: '{query}'")),
            }
        }
        Action::Clear => desk.clear(),
        Action::History => ui::print_history(desk.history()),
        Action::Languages => crate::translation::print_languages(),
        Action::Config => {
            let view = desk.view();
            let (source, target) = view.selection();
            ui::print_config(view.info(), source, target);
        }
        Action::Help => ui::print_help(),
        Action::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        Action::Noop => {}
        Action::Quit => {
            scheduler.quit();
            return;
        }
        Action::Fatal(message) => {
            desk.view_mut().set_fatal(message);
            scheduler.quit();
            return;
        }
    }

    if desk.controls_enabled() {
        desk.view_mut().resume_input();
    }
}

fn source_label(catalog: &LanguageCatalog, query: &str) -> Option<String> {
    if query.trim().eq_ignore_ascii_case(AUTO_LABEL) {
        return Some(AUTO_LABEL.to_string());
    }
    catalog.find_label(query).map(str::to_string)
}
