//! Idea generation — samples a language, topic and template per idea and fills the title.
//!
//! Flow per idea: recommended language for the project type → topic for the
//! industry → template → fill placeholders → related-project source.
//!
//! Unknown or empty selections never fail; every lookup falls back to the
//! catalog defaults. Draws are independent, so duplicates are possible.

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{
    fill_template, industry_topics_or_default, related_projects_or_default,
    suggested_languages_or_default, LanguageSuggestions, TemplateValues, FALLBACK_DIFFICULTY,
    FALLBACK_INDUSTRY, FALLBACK_PROJECT_TYPE, TEMPLATES,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The user's choices as submitted. Empty strings mean "nothing chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdeaSelection {
    pub industry: String,
    pub ptype: String,
    pub difficulty: String,
}

impl IdeaSelection {
    pub fn new(
        industry: impl Into<String>,
        ptype: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        IdeaSelection {
            industry: industry.into(),
            ptype: ptype.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// One generated capstone suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaRecord {
    pub title: String,
    pub ptype: String,
    pub language: &'static str,
    pub difficulty: String,
    pub industry: String,
    pub source: &'static str,
    pub suggested_languages: LanguageSuggestions,
}

/// The result of a single generator invocation.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaBatch {
    pub batch_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub selection: IdeaSelection,
    pub ideas: Vec<IdeaRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates `n` ideas using the thread-local RNG.
pub fn generate_ideas(selection: &IdeaSelection, n: usize) -> Vec<IdeaRecord> {
    generate_ideas_with(&mut rand::rng(), selection, n)
}

/// Generates `n` ideas drawing from `rng`. Seed the RNG for reproducible output.
pub fn generate_ideas_with<R: Rng + ?Sized>(
    rng: &mut R,
    selection: &IdeaSelection,
    n: usize,
) -> Vec<IdeaRecord> {
    let languages = suggested_languages_or_default(&selection.ptype);
    let sources = related_projects_or_default(&selection.ptype);
    let topics = industry_topics_or_default(&selection.industry);

    let industry = or_fallback(&selection.industry, FALLBACK_INDUSTRY);
    let ptype = or_fallback(&selection.ptype, FALLBACK_PROJECT_TYPE);
    let difficulty = or_fallback(&selection.difficulty, FALLBACK_DIFFICULTY);

    (0..n)
        .map(|_| {
            let language = pick(rng, languages.recommended);
            let topic = pick(rng, topics);
            let template = pick(rng, TEMPLATES);

            let title = fill_template(
                template,
                &TemplateValues {
                    ptype,
                    topic,
                    industry,
                    language,
                },
            );

            IdeaRecord {
                title,
                ptype: ptype.to_string(),
                language,
                difficulty: difficulty.to_string(),
                industry: industry.to_string(),
                source: pick(rng, sources),
                suggested_languages: *languages,
            }
        })
        .collect()
}

/// Runs the generator once and wraps the result with a batch id and timestamp.
pub fn generate_batch(selection: IdeaSelection, n: usize) -> IdeaBatch {
    let ideas = generate_ideas(&selection, n);
    IdeaBatch {
        batch_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        selection,
        ideas,
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

// Catalog lists are never empty, so the empty-string case is unreachable in practice.
fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}
