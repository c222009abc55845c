//! Session settings.

/// Default number of commands kept in the session history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Settings for a [`crate::Session`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Commands kept in the history; the oldest is dropped first.
    pub history_capacity: usize,
    /// The REPL prompt.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            prompt: "> ".to_string(),
        }
    }
}

impl SessionConfig {
    /// Sets the history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
