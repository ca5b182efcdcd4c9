//! Regex/keyword heuristic classifier.
//!
//! Splits input into lines and assigns each surviving line to the first
//! matching category rule. Rules are evaluated in a fixed priority order;
//! natural language lines routinely match more than one rule, and the fixed
//! precedence is what keeps the output deterministic. Do not reorder.
//!
//! # Rules
//!
//! 1. Lines shorter than [`MIN_FRAGMENT_CHARS`] (trimmed) are noise and
//!    produce no fragment.
//! 2. Header-ish lines (`meeting…`, `attendees…`, any case) produce no
//!    fragment regardless of length.
//! 3. First matching rule wins: follow-up, high-importance, people, to-do,
//!    questions. A line never yields more than one fragment.
//! 4. Ids are assigned in emission order; dropped lines consume no id.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use clearpoint_core::defaults::MIN_FRAGMENT_CHARS;
use clearpoint_core::{Category, Fragment};

/// Ordered (category, pattern) rule list. First match wins.
static RULES: Lazy<[(Category, Regex); 5]> = Lazy::new(|| {
    [
        // Explicit follow-up markers outrank everything, so "Follow-up: we
        // decided…" stays a follow-up.
        (
            Category::FollowUp,
            Regex::new(r"(?i)follow[-\s]?up").unwrap(),
        ),
        // Decisive language.
        (
            Category::HighImportance,
            Regex::new(r"(?i)we decided|final decision|agreed that|we're going with|going with")
                .unwrap(),
        ),
        // Capitalized name followed by a commitment verb, or explicit
        // ownership keywords. Known-weak: any capitalized word before "to"
        // matches. The precision is part of the contract; do not tighten.
        (
            Category::People,
            Regex::new(r"[A-Z][a-z]+\s+(?:will|needs?\s+to|to)\b|(?i:owner|assignee)").unwrap(),
        ),
        // Task markers and deadline-style phrases.
        (
            Category::Todo,
            Regex::new(
                r"(?i)TODO:|ACTION:|needs?\s+to|will\s+\w+|by\s+(?:next\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|week|month|end)\b",
            )
            .unwrap(),
        ),
        // Anything interrogative.
        (
            Category::Questions,
            Regex::new(r"(?i)\?|should we|question:|what's|how do we").unwrap(),
        ),
    ]
});

/// Classify a block of freeform notes into categorized fragments.
///
/// Pure and total: lines are processed independently, in source order, with
/// no cross-line context, and the same input always produces the same
/// fragment sequence. Input with no matching lines yields an empty vec.
pub fn extract_fragments(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.len() < MIN_FRAGMENT_CHARS || is_header(trimmed) {
            continue;
        }

        if let Some(category) = classify_line(trimmed) {
            fragments.push(Fragment::new(fragments.len(), trimmed, category));
        }
    }

    debug!(
        input_len = text.len(),
        result_count = fragments.len(),
        "Heuristic extraction complete"
    );

    fragments
}

/// Structural header or attendee-list line. These never produce a
/// fragment, whatever their length.
fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("meeting") || lower.starts_with("attendees")
}

/// First matching rule wins; `None` means the line is silently dropped.
fn classify_line(line: &str) -> Option<Category> {
    RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map(|(category, _)| *category)
}
