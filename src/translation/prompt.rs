pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following text from {source_language} to {target_language}. \
     Output only the translated text without any explanations. \
     Preserve the original formatting including blank lines and whitespace.";

const DETECT_SOURCE: &str = "the language it is written in";

/// Builds the system prompt. `None` asks the model to detect the source language.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(source_language: Option<&str>, target_language: &str) -> String {
    // {source_language} and {target_language} are placeholders for string replacement
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", source_language.unwrap_or(DETECT_SOURCE))
        .replace("{target_language}", target_language)
}
