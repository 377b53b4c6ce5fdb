use std::{collections::BTreeMap, fmt};

use crate::ContactField;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Invalid(FieldErrors),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validation messages keyed by the offending field, in form order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::default();

        for (field, errors) in errors.field_errors() {
            let Ok(field) = field.parse::<ContactField>() else {
                tracing::warn!(field = %field, "validation error for unknown contact field");
                continue;
            };

            let message = errors
                .iter()
                .find_map(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("{} inválido", field.label()));

            field_errors.insert(field, message);
        }

        field_errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.0.values().map(String::as_str).collect::<Vec<_>>();

        f.write_str(&messages.join("; "))
    }
}
