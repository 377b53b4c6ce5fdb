#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Title and one-line description, used by the pillar and benefit grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

/// Bullet with an emphasised lead, e.g. "**AfCFTA**: Angola é Estado Parte".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

/// External page opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// File shipped with the site and offered as a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub format: &'static str,
}

/// Public statement about the accession, linked to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    pub speaker: &'static str,
    pub title: &'static str,
    pub href: &'static str,
}
