//! Core types and static content for the folio terminal portfolio.
//!
//! Everything here is plain data: the ordered page sections, the project
//! catalogue with its filters, and the colour themes. Rendering and
//! animation live in the other crates.

mod content;
mod project;
mod section;
mod theme;

pub use content::{
    CONTACT_INFO, ContactInfo, FOOTER_GROUPS, FooterGroup, FooterLink, LEARNING_TOPICS, PROFILE,
    Profile, SERVICES, SKILL_CATEGORIES, SOCIAL_LINKS, STATS, Service, Skill, SkillCategory,
    SocialLink, Stat, TECH_ROW_LEFT, TECH_ROW_RIGHT,
};
pub use project::{PROJECTS, Project, ProjectCategory, ProjectFilter, filter_projects};
pub use section::Section;
pub use theme::{BACKGROUND_RGB, ColorTheme, lerp_rgb};
