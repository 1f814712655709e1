use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// The shell subsystem or the dialog object could not be created.
    #[error("dialog unavailable: {0}")]
    DialogUnavailable(String),
    #[error("dialog cancelled by user")]
    UserCancelled,
    /// The dialog closed normally but no filesystem path could be read back.
    #[error("dialog result unavailable: {0}")]
    ResultUnavailable(String),
}

impl DialogError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogError::UserCancelled)
    }
}
