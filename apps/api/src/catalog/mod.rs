// Static reference tables for idea generation.
// Everything here is read-only after startup; lookups on unknown keys fall back
// to per-table defaults instead of failing.

pub mod industries;
pub mod project_types;
pub mod templates;

pub use industries::{industry_topics_or_default, INDUSTRIES};
pub use project_types::{
    related_projects_or_default, suggested_languages_or_default, LanguageSuggestions,
    PROJECT_TYPES,
};
pub use templates::{fill_template, TemplateValues, TEMPLATES};

pub const DIFFICULTIES: &[&str] = &["Beginner", "Intermediate", "Advanced"];

/// Substituted into titles and records when no industry was chosen.
pub const FALLBACK_INDUSTRY: &str = "General";
/// Substituted into titles and records when no project type was chosen.
pub const FALLBACK_PROJECT_TYPE: &str = "General App";
/// Recorded when no difficulty was chosen.
pub const FALLBACK_DIFFICULTY: &str = "Not Specified";
