use askama::Template as _;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub const SERVER_ERROR_MESSAGE: &str = "Ocorreu um erro, tente novamente mais tarde";

pub(crate) mod filters {
    use time::OffsetDateTime;

    /// `dd/mm/yyyy`, the pt-PT short date.
    #[askama::filter_fn]
    pub fn pt_date(value: &OffsetDateTime, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(format!(
            "{:02}/{:02}/{}",
            value.day(),
            u8::from(value.month()),
            value.year()
        ))
    }
}

/// Renders askama templates into responses.
///
/// Render failures are logged against the request path and answered with
/// the 500 page.
pub struct Template {
    path: String,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(path = %self.path, err = %err, "failed to render template");

                let body = ServerTemplate
                    .render()
                    .unwrap_or_else(|_| SERVER_ERROR_MESSAGE.to_owned());

                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            path: parts.uri.path().to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[cfg(test)]
mod tests {
    use askama::Template as _;

    use super::*;

    #[test]
    fn error_pages_render() {
        let not_found = NotFoundTemplate.render().unwrap();
        let server = ServerTemplate.render().unwrap();

        assert!(not_found.contains("Página não encontrada"));
        assert!(server.contains(SERVER_ERROR_MESSAGE));
    }

    #[test]
    fn render_sets_status() {
        let template = Template {
            path: "/inexistente".to_owned(),
        };

        let response = template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
