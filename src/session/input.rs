//! Input thread: prompts the user and posts one [`Action`] per prompt.
//!
//! The thread only prompts after the UI thread signals that the controls are
//! enabled, so nothing can be submitted while a translation is in flight.

use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, InquireError, Select, Text};
use std::io;
use std::sync::mpsc::Receiver;
use std::thread;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::{Action, Desk};
use crate::event_loop::UiHandle;
use crate::ui::is_prompt_cancelled;

/// Labels offered by the language selectors.
pub(super) struct Choices {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
}

pub(super) fn spawn(
    handle: UiHandle<Desk>,
    ready: Receiver<()>,
    choices: Choices,
) -> io::Result<()> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || run(&handle, &ready, &choices))?;
    Ok(())
}

fn run(handle: &UiHandle<Desk>, ready: &Receiver<()>, choices: &Choices) {
    let render_config = render_config();
    let completer =
        SlashCommandCompleter::new(choices.sources.clone(), choices.targets.clone());

    while ready.recv().is_ok() {
        let action = next_action(render_config, &completer, choices);
        let last = matches!(action, Action::Quit | Action::Fatal(_));

        if handle
            .post(move |desk, scheduler| super::apply(desk, scheduler, action))
            .is_err()
            || last
        {
            break;
        }
    }
}

fn render_config() -> RenderConfig<'static> {
    let prompt_style = Styled::new("❯")
        .with_fg(Color::LightBlue)
        .with_attr(Attributes::BOLD);
    let mut render_config = RenderConfig::default()
        .with_prompt_prefix(prompt_style)
        .with_answered_prompt_prefix(prompt_style);

    // Non-highlighted suggestions: gray
    render_config.option = StyleSheet::new().with_fg(Color::Grey);
    // Highlighted suggestion: purple
    render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));
    render_config
}

fn next_action(
    render_config: RenderConfig<'static>,
    completer: &SlashCommandCompleter,
    choices: &Choices,
) -> Action {
    let line = Text::new("")
        .with_render_config(render_config)
        .with_autocomplete(completer.clone())
        .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
        .prompt();

    match line {
        Ok(line) => action_for(parse_input(&line), render_config, choices),
        Err(e) if is_prompt_cancelled(&e) => Action::Quit,
        Err(e) => Action::Fatal(e.to_string()),
    }
}

fn action_for(input: Input, render_config: RenderConfig<'static>, choices: &Choices) -> Action {
    let command = match input {
        // An empty line still submits, so the user sees why nothing happened
        Input::Empty => return Action::Submit(String::new()),
        Input::Text(text) => return Action::Submit(text),
        Input::Command(command) => command,
    };

    match command {
        SlashCommand::From(Some(query)) => Action::SelectSource(query),
        SlashCommand::From(None) => pick(
            "Source language:",
            &choices.sources,
            render_config,
            Action::SelectSource,
        ),
        SlashCommand::To(Some(query)) => Action::SelectTarget(query),
        SlashCommand::To(None) => pick(
            "Target language:",
            &choices.targets,
            render_config,
            Action::SelectTarget,
        ),
        SlashCommand::Edit => outcome(
            Editor::new("Text to translate:")
                .with_render_config(render_config)
                .prompt(),
            Action::Submit,
        ),
        SlashCommand::Clear => Action::Clear,
        SlashCommand::History => Action::History,
        SlashCommand::Languages => Action::Languages,
        SlashCommand::Config => Action::Config,
        SlashCommand::Help => Action::Help,
        SlashCommand::Quit => Action::Quit,
        SlashCommand::Unknown(cmd) => Action::Unknown(cmd),
    }
}

fn pick(
    message: &str,
    options: &[String],
    render_config: RenderConfig<'static>,
    select: fn(String) -> Action,
) -> Action {
    outcome(
        Select::new(message, options.to_vec())
            .with_render_config(render_config)
            .with_page_size(12)
            .prompt(),
        select,
    )
}

/// A cancelled follow-up prompt returns to the main prompt.
fn outcome(result: Result<String, InquireError>, action: fn(String) -> Action) -> Action {
    match result {
        Ok(value) => action(value),
        Err(e) if is_prompt_cancelled(&e) => Action::Noop,
        Err(e) => Action::Fatal(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Choices {
        Choices {
            sources: vec!["Auto".to_string(), "French".to_string()],
            targets: vec!["French".to_string()],
        }
    }

    fn act(line: &str) -> Action {
        action_for(parse_input(line), RenderConfig::default(), &choices())
    }

    #[test]
    fn test_text_and_empty_lines_submit() {
        assert_eq!(act("Hello"), Action::Submit("Hello".to_string()));
        assert_eq!(act("   "), Action::Submit(String::new()));
    }

    #[test]
    fn test_language_commands_with_argument() {
        assert_eq!(act("/from german"), Action::SelectSource("german".to_string()));
        assert_eq!(act("/to French"), Action::SelectTarget("French".to_string()));
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!(act("/clear"), Action::Clear);
        assert_eq!(act("/history"), Action::History);
        assert_eq!(act("/languages"), Action::Languages);
        assert_eq!(act("/config"), Action::Config);
        assert_eq!(act("/help"), Action::Help);
        assert_eq!(act("/quit"), Action::Quit);
        assert_eq!(act("/nope"), Action::Unknown("nope".to_string()));
    }

    #[test]
    fn test_cancelled_follow_up_prompt_is_noop() {
        let action = outcome(Err(InquireError::OperationCanceled), Action::Submit);
        assert_eq!(action, Action::Noop);

        let action = outcome(Ok("Hi".to_string()), Action::Submit);
        assert_eq!(action, Action::Submit("Hi".to_string()));
    }
}
