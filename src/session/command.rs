use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/from", "Select the source language"),
    ("/to", "Select the target language"),
    ("/edit", "Write multi-line text in your editor"),
    ("/clear", "Clear input, output and languages"),
    ("/history", "Show translations from this session"),
    ("/languages", "List available languages"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit"),
];

/// Separates a command from its description in suggestions.
const DESCRIPTION_GAP: &str = "  ";

/// Slash command autocompleter. Also completes language labels after
/// `/from ` and `/to `.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter {
    sources: Vec<String>,
    targets: Vec<String>,
}

impl SlashCommandCompleter {
    /// `sources` feed `/from` completions and `targets` feed `/to`.
    pub const fn new(sources: Vec<String>, targets: Vec<String>) -> Self {
        Self { sources, targets }
    }

    fn language_suggestions(labels: &[String], command: &str, query: &str) -> Vec<String> {
        let query = query.trim_start().to_lowercase();
        labels
            .iter()
            .filter(|label| label.to_lowercase().starts_with(&query))
            .map(|label| format!("{command} {label}"))
            .collect()
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        if let Some((command, query)) = input.split_once(' ') {
            return Ok(match command {
                "/from" => Self::language_suggestions(&self.sources, command, query),
                "/to" => Self::language_suggestions(&self.targets, command, query),
                _ => vec![],
            });
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}{DESCRIPTION_GAP}{desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement = highlighted_suggestion.map(|s| {
            s.split(DESCRIPTION_GAP)
                .next()
                .unwrap_or_default()
                .to_string()
        });
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// `/from [label]`; without a label a selection list opens.
    From(Option<String>),
    /// `/to [label]`; without a label a selection list opens.
    To(Option<String>),
    Edit,
    Clear,
    History,
    Languages,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    Input::Command(match name {
        "from" => SlashCommand::From(argument),
        "to" => SlashCommand::To(argument),
        "edit" => SlashCommand::Edit,
        "clear" => SlashCommand::Clear,
        "history" => SlashCommand::History,
        "languages" => SlashCommand::Languages,
        "config" => SlashCommand::Config,
        "help" => SlashCommand::Help,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.to_string()),
    })
}
