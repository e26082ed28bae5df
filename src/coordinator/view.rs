use super::Status;

/// The display surface the coordinator writes to.
///
/// Every method is called on the UI thread. Implementations only render;
/// the coordinator remains the single owner of form and status values.
pub trait View {
    fn set_input(&mut self, text: &str);

    fn set_output(&mut self, text: &str);

    fn set_selection(&mut self, source: Option<&str>, target: Option<&str>);

    /// Enables or disables the submit and clear controls.
    fn set_controls_enabled(&mut self, enabled: bool);

    /// `Some(line)` shows or advances the loading indicator, `None` hides it.
    fn set_loading(&mut self, line: Option<&str>);

    fn set_status(&mut self, status: &Status);

    /// Modal error notification.
    fn show_error(&mut self, title: &str, message: &str);
}
