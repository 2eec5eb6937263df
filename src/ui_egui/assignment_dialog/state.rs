use std::mem;

use crate::models::assignment::{Assignment, AssignmentError, ColorTag, ServiceDuration};
use crate::services::schedule::SlotAddress;

/// Form fields of the assignment dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    pub service: String,
    pub color: ColorTag,
    pub duration: ServiceDuration,
    pub error: Option<AssignmentError>,
}

impl AssignmentForm {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Outcome of pressing Save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogSubmit {
    /// The dialog was not open
    NotOpen,
    /// Validation failed; the dialog stays open with the error set
    Invalid(AssignmentError),
    /// The dialog closed and the assignment should be stored at `target`
    Commit {
        target: SlotAddress,
        assignment: Assignment,
    },
}

/// Assignment dialog state machine: closed, or open on one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssignmentDialogState {
    #[default]
    Closed,
    Open {
        target: SlotAddress,
        form: AssignmentForm,
    },
}

impl AssignmentDialogState {
    /// Open on `target` with a fresh form
    pub fn open(&mut self, target: SlotAddress) {
        *self = AssignmentDialogState::Open {
            target,
            form: AssignmentForm::default(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AssignmentDialogState::Open { .. })
    }

    pub fn target(&self) -> Option<&SlotAddress> {
        match self {
            AssignmentDialogState::Open { target, .. } => Some(target),
            AssignmentDialogState::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&AssignmentForm> {
        match self {
            AssignmentDialogState::Open { form, .. } => Some(form),
            AssignmentDialogState::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut AssignmentForm> {
        match self {
            AssignmentDialogState::Open { form, .. } => Some(form),
            AssignmentDialogState::Closed => None,
        }
    }

    /// Replace the service text. Any edit clears a pending validation error.
    pub fn edit_service(&mut self, service: impl Into<String>) {
        if let Some(form) = self.form_mut() {
            form.service = service.into();
            form.error = None;
        }
    }

    pub fn select_color(&mut self, color: ColorTag) {
        if let Some(form) = self.form_mut() {
            form.color = color;
        }
    }

    pub fn select_duration(&mut self, duration: ServiceDuration) {
        if let Some(form) = self.form_mut() {
            form.duration = duration;
        }
    }

    /// Close without saving; the form is dropped
    pub fn cancel(&mut self) {
        *self = AssignmentDialogState::Closed;
    }

    pub fn submit(&mut self) -> DialogSubmit {
        let Some(form) = self.form_mut() else {
            return DialogSubmit::NotOpen;
        };

        match Assignment::validated(&form.service, form.color, form.duration) {
            Err(err) => {
                form.error = Some(err.clone());
                DialogSubmit::Invalid(err)
            }
            Ok(assignment) => match mem::take(self) {
                AssignmentDialogState::Open { target, .. } => DialogSubmit::Commit { target, assignment },
                AssignmentDialogState::Closed => DialogSubmit::NotOpen,
            },
        }
    }
}
