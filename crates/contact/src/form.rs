use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::{Error, FieldErrors, Result};

// Whitespace includes U+FEFF, as in browser form checks.
static RE_NOT_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\s\x{FEFF}]").unwrap());
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

pub const NAME_REQUIRED: &str = "Informe o seu nome";
pub const EMAIL_INVALID: &str = "E-mail inválido";
pub const MESSAGE_REQUIRED: &str = "Escreva a sua mensagem";

/// Values typed into the contact form.
///
/// Serde names follow the HTML inputs (`nome`, `email`, `org`, `mensagem`).
/// Missing inputs deserialize as empty strings so a truncated post still
/// reaches validation instead of being rejected by the extractor.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(rename = "nome", default)]
    #[validate(regex(path = *RE_NOT_BLANK, message = "Informe o seu nome"))]
    pub name: String,
    #[serde(default)]
    #[validate(regex(path = *RE_EMAIL, message = "E-mail inválido"))]
    pub email: String,
    #[serde(rename = "org", default)]
    pub organization: String,
    #[serde(rename = "mensagem", default)]
    #[validate(regex(path = *RE_NOT_BLANK, message = "Escreva a sua mensagem"))]
    pub message: String,
}

impl ContactForm {
    /// Every violated field with its message. Empty when the form can be sent.
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(&errors),
        }
    }

    pub fn validated(self) -> Result<Self> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(Error::Invalid(errors));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContactField;

    fn form(name: &str, email: &str, organization: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            organization: organization.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn whitespace_only_name_is_blank() {
        for name in [" \t\n", "\u{FEFF}", " \u{FEFF}\u{00A0}"] {
            let errors = form(name, "a@b.co", "", "Olá").field_errors();

            assert_eq!(errors.get(ContactField::Name), Some(NAME_REQUIRED), "{name:?}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn derive_messages_match_constants() {
        let Err(errors) = form("", "x", "", "").validate() else {
            panic!("empty form must be invalid");
        };

        let messages = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| (field.to_string(), errors[0].message.as_deref().map(str::to_owned)))
            .collect::<std::collections::BTreeMap<_, _>>();

        assert_eq!(messages["name"].as_deref(), Some(NAME_REQUIRED));
        assert_eq!(messages["email"].as_deref(), Some(EMAIL_INVALID));
        assert_eq!(messages["message"].as_deref(), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn email_pattern() {
        let accepted = ["a@b.co", "ana@empresa.co.ao", "x.y@z.w", "a+b@c.d"];
        let rejected = [
            "",
            "x",
            "ana-at-empresa",
            "ana@empresa",
            "@b.co",
            "a@.co",
            "a@b.",
            "a b@c.d",
            "a@@b.co",
            " a@b.co",
            "\u{FEFF}a@b.co",
            "a@b\u{FEFF}.co",
        ];

        for email in accepted {
            assert!(
                form("Ana", email, "", "Olá").field_errors().is_empty(),
                "{email} should be accepted"
            );
        }

        for email in rejected {
            assert_eq!(
                form("Ana", email, "", "Olá")
                    .field_errors()
                    .get(ContactField::Email),
                Some(EMAIL_INVALID),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn organization_is_never_checked() {
        assert!(
            form("Ana", "a@b.co", "", "Olá")
                .field_errors()
                .is_empty()
        );
        assert!(
            form("Ana", "a@b.co", "   ", "Olá")
                .field_errors()
                .is_empty()
        );
    }

    #[test]
    fn validated_returns_the_form_or_every_error() {
        let ok = form("Ana", "a@b.co", "", "Olá");
        assert_eq!(ok.clone().validated().unwrap(), ok);

        let Err(Error::Invalid(errors)) = form("", "x", "", "").validated() else {
            panic!("empty form must be invalid");
        };

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }
}
