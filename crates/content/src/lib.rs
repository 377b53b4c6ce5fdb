//! Literal content of the landing page.
//!
//! Every section is a fixed array rendered in declaration order.

mod about;
mod benefits;
mod documents;
mod faq;
mod hero;
mod milestones;
mod nav;
mod resources;
mod types;

pub use about::*;
pub use benefits::*;
pub use documents::*;
pub use faq::*;
pub use hero::*;
pub use milestones::*;
pub use nav::*;
pub use resources::*;
pub use types::*;

/// Every literal array of the page, grouped for the template.
#[derive(Debug, Clone, Copy)]
pub struct LandingContent {
    pub nav_links: &'static [NavLink],
    pub hero_tags: &'static [&'static str],
    pub hero_stats: &'static [Stat],
    pub pillars: &'static [Card],
    pub status_notes: &'static [Note],
    pub channels: &'static [&'static str],
    pub benefits: &'static [Card],
    pub milestones: &'static [Milestone],
    pub statements: &'static [Statement],
    pub documents: &'static [Document],
    pub resources: &'static [Resource],
    pub faqs: &'static [Faq],
    pub footer_links: &'static [NavLink],
}

pub static LANDING: LandingContent = LandingContent {
    nav_links: NAV_LINKS,
    hero_tags: HERO_TAGS,
    hero_stats: HERO_STATS,
    pillars: PILLARS,
    status_notes: STATUS_NOTES,
    channels: CHANNELS,
    benefits: BENEFITS,
    milestones: MILESTONES,
    statements: STATEMENTS,
    documents: DOCUMENTS,
    resources: RESOURCES,
    faqs: FAQS,
    footer_links: FOOTER_LINKS,
};
