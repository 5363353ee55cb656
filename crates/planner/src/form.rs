//! Shared modal/form controller state.

use std::future::Future;

use crate::error::PlannerError;

/// How a modal reacts to a click on its backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Dismissible,
    /// The user must complete the step; backdrop clicks are ignored.
    Locked,
}

/// Open/submitting/error state of one controlled form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    open: bool,
    submitting: bool,
    error: Option<String>,
    backdrop: Backdrop,
}

impl FormState {
    pub fn new(backdrop: Backdrop) -> Self {
        Self {
            backdrop,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.open && !self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.submitting = false;
        self.error = None;
    }

    /// Close through the modal's own close control.
    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
        self.error = None;
    }

    /// Reopen after [`FormState::finish`] without touching the error, for
    /// inline forms that are never dismissed.
    pub fn keep_open(&mut self) {
        self.open = true;
    }

    /// Backdrop click. Returns whether the modal closed.
    pub fn dismiss_backdrop(&mut self) -> bool {
        if self.backdrop == Backdrop::Locked || self.submitting {
            return false;
        }
        self.close();
        true
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Mark a submission as started. Returns `false` when one is already in
    /// flight.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Run one submission: guard against double submits, await `submit`,
    /// then settle.
    pub async fn submit_with<T, F>(&mut self, submit: F) -> Result<T, PlannerError>
    where
        F: Future<Output = Result<T, PlannerError>>,
    {
        if !self.begin() {
            return Err(PlannerError::Busy);
        }
        let result = submit.await;
        self.finish(result)
    }

    /// Settle a submission: close on success, keep open with the error's
    /// message otherwise. Submit is re-enabled either way.
    pub fn finish<T>(&mut self, result: Result<T, PlannerError>) -> Result<T, PlannerError> {
        self.submitting = false;
        match result {
            Ok(value) => {
                self.open = false;
                self.error = None;
                Ok(value)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
