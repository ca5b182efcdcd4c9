//! Plain-text summary export.
//!
//! Renders an extraction pass as a clipboard-friendly summary grouped by
//! category. Export is a display-side feature: it always uses the current
//! taxonomy, never the legacy persistence shape.

use clearpoint_core::{Category, Fragment};

/// Section heading for a category group.
fn section_header(category: Category) -> &'static str {
    match category {
        Category::HighImportance => "HIGH IMPORTANCE:",
        Category::Todo => "TO-DO:",
        Category::People => "PEOPLE:",
        Category::Questions => "OPEN QUESTIONS:",
        Category::FollowUp => "FOLLOW-UPS:",
    }
}

/// Render fragments as a grouped plain-text summary.
///
/// Groups appear in fixed taxonomy order; empty groups are skipped;
/// fragments keep their relative order within a group. No fragments
/// yields an empty string.
pub fn render_summary(fragments: &[Fragment]) -> String {
    let mut sections = Vec::new();

    for category in Category::ALL {
        let lines: Vec<String> = fragments
            .iter()
            .filter(|f| f.category == category)
            .map(|f| format!("• {}", f.content))
            .collect();

        if !lines.is_empty() {
            sections.push(format!("{}\n{}", section_header(category), lines.join("\n")));
        }
    }

    sections.join("\n\n")
}
