use adesao_contact::{ContactField, ContactSubmission};
use adesao_content::{LANDING, LandingContent};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use time::OffsetDateTime;

use crate::menu::{MenuQuery, MenuState};
use crate::routes::AppState;
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub content: &'static LandingContent,
    pub menu: MenuState,
    pub contact: ContactSubmission,
    pub mailto_href: String,
    pub updated_at: OffsetDateTime,
}

impl IndexTemplate {
    pub fn new(config: &crate::config::Config, menu: MenuState, contact: ContactSubmission) -> Self {
        let mailto_href = config.contact.mailto().href(&contact.form);

        Self {
            content: &LANDING,
            menu,
            contact,
            mailto_href,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    fn error(&self, field: ContactField) -> Option<&str> {
        self.contact.errors.get(field)
    }
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> impl IntoResponse {
    template.render(IndexTemplate::new(
        &app.config,
        MenuState::from(query),
        ContactSubmission::default(),
    ))
}
