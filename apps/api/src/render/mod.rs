//! Server-side page rendering for the idea form.
//!
//! The page is a single document: the selection form, an optional error
//! banner, and one card per generated idea. Markup is built with `maud`,
//! which escapes every interpolated value.

pub mod components;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::catalog::{DIFFICULTIES, INDUSTRIES, PROJECT_TYPES};
use crate::generation::generator::{IdeaRecord, IdeaSelection};

use components::{inline_list, select};

/// Page title and heading.
pub const PAGE_TITLE: &str = "Capstone Idea Generator";

const STYLESHEET: &str = "\
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
form { display: grid; grid-template-columns: max-content 1fr; gap: 0.5rem 1rem; align-items: center; }
.error { background: #fde8e8; border: 1px solid #f5a3a3; padding: 0.75rem; margin: 1rem 0; }
.idea { border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem 1rem; margin: 1rem 0; }
.idea h3 { margin: 0 0 0.5rem; }
.meta { color: #555; font-size: 0.9rem; }
";

/// Everything needed to render the page.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub selection: &'a IdeaSelection,
    /// Value shown in the result-count input.
    pub num_results: String,
    pub max_results: usize,
    pub ideas: &'a [IdeaRecord],
    pub error: Option<String>,
    /// False for the initial GET so no "no ideas" notice is shown.
    pub submitted: bool,
}

/// Renders the complete HTML document.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    page(ctx).into_string()
}

fn page(ctx: &PageContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                h1 { (PAGE_TITLE) }
                @if let Some(error) = &ctx.error {
                    div.error role="alert" { (error) }
                }
                form method="post" action="/" {
                    (controls(ctx))
                    button type="submit" { "Generate ideas" }
                }
                (results(ctx))
            }
        }
    }
}

fn controls(ctx: &PageContext<'_>) -> Markup {
    html! {
        (select("industry", "Industry", INDUSTRIES, &ctx.selection.industry))
        (select("ptype", "Project type", PROJECT_TYPES, &ctx.selection.ptype))
        (select("difficulty", "Difficulty", DIFFICULTIES, &ctx.selection.difficulty))
        label for="num_results" { "Number of ideas" }
        input #num_results name="num_results" type="number" min="0"
            max=(ctx.max_results) value=(ctx.num_results);
    }
}

fn results(ctx: &PageContext<'_>) -> Markup {
    html! {
        @if ctx.submitted && ctx.error.is_none() {
            @if ctx.ideas.is_empty() {
                p.empty { "No ideas requested." }
            } @else {
                h2 { (ctx.ideas.len()) " idea(s)" }
                @for idea in ctx.ideas {
                    (idea_card(idea))
                }
            }
        }
    }
}

fn idea_card(idea: &IdeaRecord) -> Markup {
    html! {
        div.idea {
            h3 { (idea.title) }
            p.meta { (idea.industry) " · " (idea.ptype) " · " (idea.difficulty) }
            p { "Suggested language: " strong { (idea.language) } }
            p {
                "Recommended: " (inline_list(idea.suggested_languages.recommended))
                br;
                "Others: " (inline_list(idea.suggested_languages.others))
            }
            p {
                a href=(idea.source) target="_blank" rel="noopener" { "Related projects" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator::generate_ideas;

    fn context<'a>(selection: &'a IdeaSelection, ideas: &'a [IdeaRecord]) -> PageContext<'a> {
        PageContext {
            selection,
            num_results: "5".to_string(),
            max_results: 50,
            ideas,
            error: None,
            submitted: true,
        }
    }

    #[test]
    fn test_initial_page_has_form_and_no_results() {
        let selection = IdeaSelection::default();
        let ctx = PageContext {
            submitted: false,
            ..context(&selection, &[])
        };
        let html = render_page(&ctx);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<form method=\"post\" action=\"/\">"));
        assert!(html.contains("name=\"num_results\""));
        assert!(html.contains("value=\"5\""));
        assert!(!html.contains("class=\"idea\""));
        assert!(!html.contains("No ideas requested"));
    }

    #[test]
    fn test_page_lists_every_catalog_option() {
        let selection = IdeaSelection::default();
        let html = render_page(&context(&selection, &[]));
        for value in INDUSTRIES.iter().chain(PROJECT_TYPES).chain(DIFFICULTIES) {
            assert!(html.contains(&format!("<option value=\"{value}\"")), "missing {value}");
        }
    }

    #[test]
    fn test_page_keeps_selection() {
        let selection = IdeaSelection::new("Finance", "Data App", "Advanced");
        let html = render_page(&context(&selection, &[]));
        assert!(html.contains("<option value=\"Finance\" selected>"));
        assert!(html.contains("<option value=\"Data App\" selected>"));
        assert!(html.contains("<option value=\"Advanced\" selected>"));
    }

    #[test]
    fn test_page_renders_ideas() {
        let selection = IdeaSelection::new("School", "Mobile App", "Beginner");
        let ideas = generate_ideas(&selection, 3);
        let html = render_page(&context(&selection, &ideas));
        assert_eq!(html.matches("class=\"idea\"").count(), 3);
        assert!(html.contains("3 idea(s)"));
        assert!(html.contains("Flutter, Kotlin, Java"));
        for idea in &ideas {
            assert!(html.contains(&idea.title));
        }
    }

    #[test]
    fn test_zero_ideas_shows_notice() {
        let selection = IdeaSelection::default();
        let html = render_page(&context(&selection, &[]));
        assert!(html.contains("No ideas requested."));
    }

    #[test]
    fn test_error_banner_is_escaped() {
        let selection = IdeaSelection::default();
        let ctx = PageContext {
            error: Some("num_results must be a whole number <b>".to_string()),
            ..context(&selection, &[])
        };
        let html = render_page(&ctx);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains(">num_results must be a whole number &lt;b&gt;</div>"));
        assert!(!html.contains("No ideas requested"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let selection = IdeaSelection::new("<script>", "", "");
        let ideas = generate_ideas(&selection, 1);
        let ctx = PageContext {
            num_results: "\"><script>".to_string(),
            ..context(&selection, &ideas)
        };
        let html = render_page(&ctx);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn test_idea_card_shows_language_lists() {
        let selection = IdeaSelection::new("Networking", "IoT App", "Advanced");
        let ideas = generate_ideas(&selection, 1);
        let html = render_page(&context(&selection, &ideas));
        assert!(html.contains("Networking · IoT App · Advanced"));
        assert!(html.contains("Recommended: C++, Python, Arduino"));
        assert!(html.contains("Others: Raspberry Pi, MicroPython, ESP32, C"));
        assert!(html.contains(&format!("<a href=\"{}\"", ideas[0].source)));
    }
}
