use adesao_contact::{ContactForm, ContactSubmission};
use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::menu::MenuState;
use crate::routes::{AppState, IndexTemplate};
use crate::template::Template;

/// POST /contacto - validates the form and re-renders the page with either
/// the inline errors or the confirmation. Submitted values are kept.
///
/// A body that cannot be decoded is validated as an empty form.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> impl IntoResponse {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(err = %rejection, "undecodable contact form body");
            ContactForm::default()
        }
    };

    let mut submission = ContactSubmission::new(form);

    let status = if submission.submit() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    template.render_with_status(
        status,
        IndexTemplate::new(&app.config, MenuState::closed(), submission),
    )
}
