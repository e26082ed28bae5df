//! Request coordinator: the single owner of form, status and history.
//!
//! The coordinator lives inside an [`EventLoop`](crate::event_loop::EventLoop)
//! and is only ever touched on the UI thread. A valid submit flips the state
//! to [`UiState::Translating`], disables the controls, starts the loading
//! animation and spawns one worker thread. The worker posts its outcome back
//! through the loop, where [`Coordinator`] reconciles it.

mod state;
mod view;
mod worker;

use std::sync::Arc;
use std::time::Duration;

pub use state::{Form, Status, Submission, Tone, TranslationRecord, UiState, ValidationError};
pub use view::View;
pub use worker::TranslationRequest;

use crate::event_loop::Scheduler;
use crate::translation::{AUTO_LABEL, GatewayError, LanguageCatalog, TranslationGateway};
use crate::ui::SPINNER_FRAMES;
use worker::Outcome;

/// Default delay between two loading indicator frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Startup settings for a [`Coordinator`].
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    pub frame_interval: Duration,
    /// Initial source selection (a label).
    pub source: Option<String>,
    /// Initial target selection (a label).
    pub target: Option<String>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            frame_interval: DEFAULT_FRAME_INTERVAL,
            source: Some(AUTO_LABEL.to_string()),
            target: None,
        }
    }
}

pub struct Coordinator<V> {
    catalog: Arc<LanguageCatalog>,
    gateway: Arc<dyn TranslationGateway>,
    view: V,
    form: Form,
    state: UiState,
    status: Status,
    history: Vec<TranslationRecord>,
    controls_enabled: bool,
    loading: bool,
    frame: usize,
    // Bumped per submit so stale animation ticks and outcomes are ignored
    generation: u64,
    frame_interval: Duration,
}

impl<V: View + 'static> Coordinator<V> {
    /// Creates the coordinator and renders the initial form into `view`.
    pub fn new(
        catalog: Arc<LanguageCatalog>,
        gateway: Arc<dyn TranslationGateway>,
        view: V,
        config: CoordinatorConfig,
    ) -> Self {
        let form = Form {
            source: config.source,
            target: config.target,
            ..Form::cleared()
        };

        let mut coordinator = Self {
            catalog,
            gateway,
            view,
            form,
            state: UiState::Idle,
            status: Status::info("Ready"),
            history: Vec::new(),
            controls_enabled: false,
            loading: false,
            frame: 0,
            generation: 0,
            frame_interval: config.frame_interval,
        };

        coordinator
            .view
            .set_selection(coordinator.form.source.as_deref(), coordinator.form.target.as_deref());
        coordinator.view.set_status(&coordinator.status);
        coordinator.set_controls(true);
        coordinator
    }

    pub const fn state(&self) -> UiState {
        self.state
    }

    pub const fn status(&self) -> &Status {
        &self.status
    }

    pub const fn form(&self) -> &Form {
        &self.form
    }

    /// Successful translations of this session, oldest first.
    pub fn history(&self) -> &[TranslationRecord] {
        &self.history
    }

    pub const fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn set_input(&mut self, text: &str) {
        text.clone_into(&mut self.form.input);
        self.view.set_input(text);
    }

    pub fn select_source(&mut self, label: Option<&str>) {
        self.form.source = label.map(str::to_string);
        self.render_selection();
    }

    pub fn select_target(&mut self, label: Option<&str>) {
        self.form.target = label.map(str::to_string);
        self.render_selection();
    }

    /// Submits the form's current input and selections.
    pub fn submit_form(&mut self, scheduler: &mut Scheduler<Self>) -> Result<(), ValidationError> {
        let Form {
            input,
            source,
            target,
            ..
        } = self.form.clone();
        self.submit(scheduler, &input, source.as_deref(), target.as_deref())
    }

    /// Validates synchronously, then dispatches exactly one worker.
    ///
    /// A second submit while translating is not rejected here; the disabled
    /// controls keep the front-end from issuing one.
    pub fn submit(
        &mut self,
        scheduler: &mut Scheduler<Self>,
        text: &str,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<(), ValidationError> {
        let submission = match Submission::validate(text, source, target) {
            Ok(submission) => submission,
            Err(err) => {
                self.set_status(Status::error(format!("Error: {err}")));
                return Err(err);
            }
        };

        self.generation += 1;
        let generation = self.generation;

        self.state = UiState::Translating;
        self.loading = true;
        self.frame = 0;
        self.tick_loading(scheduler, generation);
        self.set_controls(false);
        self.set_status(Status::info("Translating... please wait"));

        if let Err(err) = worker::spawn(
            generation,
            submission,
            Arc::clone(&self.catalog),
            Arc::clone(&self.gateway),
            scheduler.handle(),
        ) {
            self.complete(Outcome {
                generation,
                result: Err(GatewayError::Internal(format!(
                    "could not start worker thread: {err}"
                ))),
            });
        }

        Ok(())
    }

    /// Resets the form unconditionally. An in-flight request keeps running.
    pub fn clear(&mut self) {
        self.form = Form::cleared();
        self.view.set_input("");
        self.view.set_output("");
        self.render_selection();
        if self.state != UiState::Translating {
            self.state = UiState::Idle;
        }
        self.set_status(Status::info("Cleared all fields"));
    }

    fn tick_loading(&mut self, scheduler: &mut Scheduler<Self>, generation: u64) {
        if !self.loading || generation != self.generation {
            return;
        }

        let glyph = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];
        self.view.set_loading(Some(&format!("{glyph} Translating")));
        self.frame += 1;

        scheduler.schedule_after(self.frame_interval, move |coordinator, scheduler| {
            coordinator.tick_loading(scheduler, generation);
        });
    }

    fn complete(&mut self, outcome: Outcome) {
        if outcome.generation != self.generation {
            crate::debug!("dropping stale outcome of request #{}", outcome.generation);
            return;
        }

        self.loading = false;
        self.view.set_loading(None);

        match outcome.result {
            Ok(record) => {
                record.translated.clone_into(&mut self.form.output);
                self.view.set_output(&record.translated);
                self.set_status(Status::success(format!(
                    "Successfully translated from {} to {}",
                    record.source_label, record.target_label
                )));
                self.history.push(record);
                self.state = UiState::Success;
            }
            Err(err) => {
                let message = err.to_string();
                self.set_status(Status::error(format!("Error: {message}")));
                self.view
                    .show_error("Translation Error", &format!("An error occurred:\n{message}"));
                self.state = UiState::Error;
            }
        }

        // Last, so the front-end only resumes input once everything is rendered
        self.set_controls(true);
    }

    fn set_status(&mut self, status: Status) {
        self.view.set_status(&status);
        self.status = status;
    }

    fn set_controls(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
        self.view.set_controls_enabled(enabled);
    }

    fn render_selection(&mut self) {
        self.view
            .set_selection(self.form.source.as_deref(), self.form.target.as_deref());
    }
}
