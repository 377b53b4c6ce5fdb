use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Sections addressable through in-page anchors.
#[derive(
    EnumString, Display, IntoStaticStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum Section {
    #[strum(serialize = "sobre")]
    About,
    #[strum(serialize = "beneficios")]
    Benefits,
    #[strum(serialize = "marcos")]
    Milestones,
    #[strum(serialize = "discursos")]
    Statements,
    #[strum(serialize = "proposta")]
    Proposal,
    #[strum(serialize = "recursos")]
    Resources,
    #[strum(serialize = "faq")]
    Faq,
    #[strum(serialize = "contacto")]
    Contact,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        self.into()
    }

    /// Link to the section on the plain page URL, which also leaves the
    /// mobile menu closed.
    pub fn href(self) -> String {
        format!("/#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.section.href()
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Sobre",
        section: Section::About,
    },
    NavLink {
        label: "Benefícios",
        section: Section::Benefits,
    },
    NavLink {
        label: "Marcos",
        section: Section::Milestones,
    },
    NavLink {
        label: "Discursos",
        section: Section::Statements,
    },
    NavLink {
        label: "Recursos",
        section: Section::Resources,
    },
    NavLink {
        label: "FAQ",
        section: Section::Faq,
    },
    NavLink {
        label: "Contacto",
        section: Section::Contact,
    },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Sobre",
        section: Section::About,
    },
    NavLink {
        label: "Recursos",
        section: Section::Resources,
    },
    NavLink {
        label: "Contacto",
        section: Section::Contact,
    },
];
