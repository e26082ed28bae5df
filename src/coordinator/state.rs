use crate::translation::AUTO_LABEL;

/// Lifecycle of the form as seen by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Translating,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// The status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            message: message.into(),
        }
    }
}

/// Field values of the translation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub input: String,
    pub output: String,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl Form {
    /// The values `clear()` resets to.
    pub fn cleared() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            source: Some(AUTO_LABEL.to_string()),
            target: None,
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::cleared()
    }
}

/// Input rejected before any work is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter text to translate")]
    EmptyText,
    #[error("Please select both languages")]
    MissingLanguage,
}

/// A validated submission, still expressed in selector labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub source_label: String,
    pub target_label: String,
}

impl Submission {
    /// Trims the text and checks that both selectors are set. Text is checked first.
    pub fn validate(
        text: &str,
        source_label: Option<&str>,
        target_label: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        fn set(label: Option<&str>) -> Option<&str> {
            label.filter(|l| !l.trim().is_empty())
        }

        match (set(source_label), set(target_label)) {
            (Some(source), Some(target)) => Ok(Self {
                text: text.to_string(),
                source_label: source.to_string(),
                target_label: target.to_string(),
            }),
            _ => Err(ValidationError::MissingLanguage),
        }
    }
}

/// One successful translation, kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub original: String,
    pub translated: String,
    pub source_label: String,
    pub target_label: String,
    /// Code the service detected when the source was `Auto`.
    pub detected_source: Option<String>,
}
