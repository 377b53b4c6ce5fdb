use crate::{ContactForm, FieldErrors};

/// State of the contact section for one render of the page.
///
/// Values are kept after a successful submission: the page shows what was
/// sent together with the confirmation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub sent: bool,
}

impl ContactSubmission {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    /// Recomputes every field error and marks the message as sent when none
    /// remain. Returns whether the submission went through.
    ///
    /// Messages are only recorded in the log; there is no delivery transport
    /// yet.
    pub fn submit(&mut self) -> bool {
        self.errors = self.form.field_errors();

        if !self.errors.is_empty() {
            tracing::debug!(
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "contact form rejected"
            );

            return false;
        }

        tracing::info!(
            name = %self.form.name,
            email = %self.form.email,
            organization = %self.form.organization,
            message = %self.form.message,
            "contact message received"
        );

        self.sent = true;

        true
    }
}
