//! Reusable form and list fragments for the idea page.

use maud::{html, Markup};

/// Renders a labelled `<select>` with a leading empty "Any" option.
/// The option equal to `selected` is marked `selected`.
pub fn select(name: &str, label: &str, options: &[&str], selected: &str) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) {
            option value="" selected[selected.is_empty()] { "Any" }
            @for value in options {
                option value=(value) selected[*value == selected] { (value) }
            }
        }
    }
}

/// Renders a comma-separated list, or an emphasized "none" when empty.
pub fn inline_list(items: &[&str]) -> Markup {
    html! {
        @if items.is_empty() {
            em { "none" }
        } @else {
            (items.join(", "))
        }
    }
}
