use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Fields of the contact form.
///
/// `Display`/`FromStr` use the struct field names reported by `validator`,
/// while [`ContactField::input_name`] is the name of the HTML input.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Organization,
    Message,
}

impl ContactField {
    pub fn input_name(self) -> &'static str {
        match self {
            ContactField::Name => "nome",
            ContactField::Email => "email",
            ContactField::Organization => "org",
            ContactField::Message => "mensagem",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Nome",
            ContactField::Email => "E-mail",
            ContactField::Organization => "Organização (opcional)",
            ContactField::Message => "Mensagem",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Organization)
    }
}
