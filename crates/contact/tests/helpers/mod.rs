use adesao_contact::ContactForm;

#[allow(dead_code)]
pub fn contact_form(
    name: impl Into<String>,
    email: impl Into<String>,
    organization: impl Into<String>,
    message: impl Into<String>,
) -> ContactForm {
    ContactForm {
        name: name.into(),
        email: email.into(),
        organization: organization.into(),
        message: message.into(),
    }
}
