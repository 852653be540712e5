//! Contact page form state.

use folio_core::contact::{ContactError, ContactPayload, SubmissionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Editing a field clears a previous outcome banner.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
        if !self.is_submitting() {
            self.status = FormStatus::Editing;
        }
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload::new(&self.name, &self.email, &self.subject, &self.message)
    }

    /// Marks the form busy and returns what to send, or `None` if a send is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(self.payload())
    }

    /// Applies the outcome. Success clears the fields.
    pub fn finish(&mut self, result: SubmissionResult) {
        if result.success {
            *self = Self {
                status: FormStatus::Sent,
                ..Self::default()
            };
        } else {
            let message = result
                .error
                .unwrap_or_else(|| ContactError::Unexpected("no error message".into()).to_string());
            self.status = FormStatus::Failed(message);
        }
    }
}
