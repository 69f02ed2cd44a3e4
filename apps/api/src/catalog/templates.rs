//! Title templates. Placeholders: `{ptype}`, `{topic}`, `{industry}`, `{language}`.
//! Not every template uses every placeholder.

pub const TEMPLATES: &[&str] = &[
    "A {ptype} for {topic} in the {industry} Industry",
    "Design and Implementation of a {ptype} focused on {topic} for {industry}",
    "Developing a Simple {ptype} to Assist {industry} with {topic}",
    "A Capstone Project: {topic} {ptype} for {industry} Applications",
    "Smart {topic} Solution using {language} for {industry}",
];

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub ptype: &'a str,
    pub topic: &'a str,
    pub industry: &'a str,
    pub language: &'a str,
}

/// Replaces every known placeholder in `template` in a single pass.
/// Substituted values are inserted literally and never re-expanded.
/// Unknown `{...}` sequences are copied through unchanged.
pub fn fill_template(template: &str, values: &TemplateValues<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let replaced = tail.find('}').and_then(|end| {
            let value = match &tail[1..end] {
                "ptype" => values.ptype,
                "topic" => values.topic,
                "industry" => values.industry,
                "language" => values.language,
                _ => return None,
            };
            Some((value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
