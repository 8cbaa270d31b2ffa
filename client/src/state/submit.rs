//! Submission state for the auth forms.
//!
//! DESIGN
//! ======
//! Held in an `RwSignal` by each form. `begin` is the single-flight guard: a
//! submit while a request is pending is ignored rather than racing the first.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    /// Finished; optional notice for the user.
    Succeeded(Option<String>),
    /// Finished with an inline error message.
    Failed(String),
}

impl SubmitState {
    /// Enter `Pending`. Returns `false` (and changes nothing) if already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    pub fn succeed(&mut self, notice: Option<String>) {
        *self = Self::Succeeded(notice);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Succeeded(notice) => notice.as_deref(),
            _ => None,
        }
    }
}

/// Submit button text for the current state.
pub fn submit_label(state: &SubmitState, idle: &'static str, busy: &'static str) -> &'static str {
    if state.is_pending() { busy } else { idle }
}
