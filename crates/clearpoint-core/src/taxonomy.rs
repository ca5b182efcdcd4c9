//! Category taxonomies and the mappings between them.
//!
//! Two closed taxonomies coexist: the five-category scheme the board
//! displays, and the three-category scheme the storage layer persists.
//! `normalize` coerces arbitrary external labels (AI output, legacy
//! records) into the current scheme; `Category::to_legacy` freezes a
//! current category into the persisted scheme. The legacy mapping is
//! many-to-one and lossy; there is no reverse mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current display taxonomy. Closed set: external labels are always
/// normalized into one of these five, never passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Decisions and other high-importance statements
    HighImportance,
    /// Tasks and action items
    Todo,
    /// Ownership and assignment
    People,
    /// Open questions
    Questions,
    /// Items flagged for follow-up
    FollowUp,
}

impl Category {
    /// All five categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::HighImportance,
        Category::Todo,
        Category::People,
        Category::Questions,
        Category::FollowUp,
    ];

    /// Returns the wire/storage string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HighImportance => "high_importance",
            Category::Todo => "todo",
            Category::People => "people",
            Category::Questions => "questions",
            Category::FollowUp => "follow_up",
        }
    }

    /// Freeze this category into the persisted legacy taxonomy.
    ///
    /// Total and deterministic: `HighImportance` keeps its decision
    /// character, `Questions` stays a question, everything else collapses
    /// to `Action`. Used only at the persistence boundary, never for
    /// display or export.
    pub fn to_legacy(self) -> LegacyCategory {
        match self {
            Category::HighImportance => LegacyCategory::Decision,
            Category::Questions => LegacyCategory::Question,
            Category::Todo | Category::People | Category::FollowUp => LegacyCategory::Action,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Legacy persisted taxonomy. Closed set, used only at the persistence
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyCategory {
    Decision,
    Action,
    Question,
}

impl LegacyCategory {
    /// Returns the wire/storage string for this legacy category.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyCategory::Decision => "decision",
            LegacyCategory::Action => "action",
            LegacyCategory::Question => "question",
        }
    }
}

impl fmt::Display for LegacyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coerce an arbitrary label into the current taxonomy.
///
/// Case-insensitive substring match, evaluated in order, first match wins.
/// Total: anything unrecognized (including the empty string) becomes
/// `Todo`, so no fragment is ever dropped for carrying an unknown label.
pub fn normalize(label: &str) -> Category {
    let label = label.to_lowercase();

    if label.contains("decision") || label.contains("high") {
        Category::HighImportance
    } else if label.contains("action") || label.contains("todo") || label.contains("task") {
        Category::Todo
    } else if label.contains("question") || label.contains('?') {
        Category::Questions
    } else if label.contains("people")
        || label.contains("owner")
        || label.contains("assignee")
        || label.contains("assigned")
    {
        Category::People
    } else if label.contains("follow") {
        Category::FollowUp
    } else {
        Category::Todo
    }
}
