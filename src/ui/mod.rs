use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::{SPINNER_FRAMES, Spinner};
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption (Escape or Ctrl+C).
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
