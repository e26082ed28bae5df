use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Glyphs cycled by every loading indicator in the program.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A terminal spinner for indicating progress.
///
/// Automatically clears itself when dropped (RAII pattern).
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new self-ticking spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&SPINNER_FRAMES)
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Creates a line that only changes when [`Spinner::show`] is called.
    ///
    /// Used where an external timer drives the animation.
    #[allow(clippy::unwrap_used)]
    pub fn manual() -> Self {
        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        Self { progress_bar }
    }

    /// Replaces the displayed line.
    pub fn show(&self, line: &str) {
        self.progress_bar.set_message(line.to_string());
    }

    /// Hides the spinner while `f` prints, then redraws it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frames_are_distinct() {
        for (i, a) in SPINNER_FRAMES.iter().enumerate() {
            assert!(SPINNER_FRAMES[i + 1..].iter().all(|b| a != b));
        }
    }
}
