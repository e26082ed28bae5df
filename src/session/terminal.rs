//! [`View`] implementation that renders the coordinator to a terminal.

use std::sync::mpsc::Sender;

use crate::coordinator::{Status, Tone, View};
use crate::ui::{Spinner, Style};

use super::{SessionInfo, ui};

/// Renders coordinator updates and tells the input thread when it may
/// prompt again.
pub struct TerminalView {
    ready: Sender<()>,
    info: SessionInfo,
    enabled: bool,
    // A ready signal is queued and no prompt has answered it yet
    prompt_pending: bool,
    loading: Option<Spinner>,
    source: Option<String>,
    target: Option<String>,
    fatal: Option<String>,
}

impl TerminalView {
    /// `ready` receives one message each time input becomes possible.
    pub const fn new(ready: Sender<()>, info: SessionInfo) -> Self {
        Self {
            ready,
            info,
            enabled: false,
            prompt_pending: false,
            loading: None,
            source: None,
            target: None,
            fatal: None,
        }
    }

    /// Lets the input thread prompt for the next line. At most one signal
    /// is outstanding until [`TerminalView::prompt_answered`].
    pub(super) fn resume_input(&mut self) {
        if self.prompt_pending {
            return;
        }
        self.prompt_pending = true;
        // The input thread is gone once the session winds down
        let _ = self.ready.send(());
    }

    /// Marks the outstanding signal as consumed by a prompt.
    pub(super) const fn prompt_answered(&mut self) {
        self.prompt_pending = false;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn info(&self) -> &SessionInfo {
        &self.info
    }

    pub fn selection(&self) -> (Option<&str>, Option<&str>) {
        (self.source.as_deref(), self.target.as_deref())
    }

    pub(super) fn set_fatal(&mut self, message: String) {
        self.fatal = Some(message);
    }

    pub(super) fn take_fatal(&mut self) -> Option<String> {
        self.fatal.take()
    }

    fn print(&self, f: impl FnOnce()) {
        match &self.loading {
            Some(spinner) => spinner.suspend(f),
            None => f(),
        }
    }
}

impl View for TerminalView {
    // The prompt itself shows what was typed
    fn set_input(&mut self, _text: &str) {}

    fn set_output(&mut self, text: &str) {
        if !text.is_empty() {
            self.print(|| println!("{text}\n"));
        }
    }

    fn set_selection(&mut self, source: Option<&str>, target: Option<&str>) {
        self.source = source.map(str::to_string);
        self.target = target.map(str::to_string);
        self.print(|| ui::print_selection(source, target));
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        let resumed = enabled && !self.enabled;
        self.enabled = enabled;
        if resumed {
            self.resume_input();
        }
    }

    fn set_loading(&mut self, line: Option<&str>) {
        match line {
            Some(line) => self.loading.get_or_insert_with(Spinner::manual).show(line),
            None => {
                if let Some(spinner) = self.loading.take() {
                    spinner.stop();
                }
            }
        }
    }

    fn set_status(&mut self, status: &Status) {
        let line = match status.tone {
            Tone::Info => Style::accent(&status.message),
            Tone::Success => format!("{} {}", Style::success("✓"), Style::success(&status.message)),
            Tone::Error => Style::error(&status.message),
        };
        self.print(|| eprintln!("{line}"));
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.print(|| {
            eprintln!();
            eprintln!("{}", Style::error(format!("[ {title} ]")));
            for line in message.lines() {
                eprintln!("  {line}");
            }
            eprintln!();
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn info() -> SessionInfo {
        SessionInfo {
            provider_name: "google".to_string(),
            endpoint: "http://localhost".to_string(),
            model: None,
        }
    }

    #[test]
    fn test_ready_sent_only_on_enable_transition() {
        let (tx, rx) = mpsc::channel();
        let mut view = TerminalView::new(tx, info());

        view.set_controls_enabled(true);
        view.set_controls_enabled(true);
        assert_eq!(rx.try_iter().count(), 1);

        view.set_controls_enabled(false);
        assert!(rx.try_recv().is_err());
        assert!(!view.is_enabled());

        view.prompt_answered();
        view.set_controls_enabled(true);
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn test_one_signal_per_answered_prompt() {
        let (tx, rx) = mpsc::channel();
        let mut view = TerminalView::new(tx, info());

        view.set_controls_enabled(true);
        view.resume_input();
        assert_eq!(rx.try_iter().count(), 1);

        view.prompt_answered();
        view.set_controls_enabled(false);
        view.set_controls_enabled(true);
        view.resume_input();
        assert_eq!(rx.try_iter().count(), 1);

        view.prompt_answered();
        view.resume_input();
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn test_selection_is_remembered() {
        let (tx, _rx) = mpsc::channel();
        let mut view = TerminalView::new(tx, info());

        view.set_selection(Some("Auto"), None);
        assert_eq!(view.selection(), (Some("Auto"), None));

        view.set_selection(Some("German"), Some("French"));
        assert_eq!(view.selection(), (Some("German"), Some("French")));
    }

    #[test]
    fn test_loading_start_and_stop() {
        let (tx, _rx) = mpsc::channel();
        let mut view = TerminalView::new(tx, info());

        view.set_loading(Some("⠋ Translating"));
        assert!(view.loading.is_some());
        view.set_loading(None);
        assert!(view.loading.is_none());
    }

    #[test]
    fn test_resume_after_receiver_dropped_is_harmless() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut view = TerminalView::new(tx, info());
        view.resume_input();
    }
}
