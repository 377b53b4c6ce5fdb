use urlencoding::encode;

use crate::ContactForm;

pub const DEFAULT_ADDRESS: &str = "contacto@exemplo.gov.ao";
pub const DEFAULT_SUBJECT: &str = "Contacto Programa de Adesão";

/// `mailto:` fallback offered next to the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailto {
    pub address: String,
    pub subject: String,
}

impl Default for Mailto {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_owned(),
            subject: DEFAULT_SUBJECT.to_owned(),
        }
    }
}

impl Mailto {
    pub fn new(address: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            subject: subject.into(),
        }
    }

    /// Link prefilled with the current field values, one `Label: value` line
    /// per field.
    pub fn href(&self, form: &ContactForm) -> String {
        format!(
            "mailto:{}?subject={}&body=Nome:%20{}%0AEmail:%20{}%0AOrg:%20{}%0AMensagem:%20{}",
            self.address,
            encode(&self.subject),
            encode(&form.name),
            encode(&form.email),
            encode(&form.organization),
            encode(&form.message),
        )
    }
}
