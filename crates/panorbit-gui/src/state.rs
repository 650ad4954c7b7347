/// Overall UI state.
#[derive(Default)]
pub struct UiState {
    /// Display name of the active panorama.
    pub current_label: Option<String>,

    /// A decode is in flight.
    pub loading: bool,

    /// Log messages, newest last.
    pub log_messages: Vec<String>,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
