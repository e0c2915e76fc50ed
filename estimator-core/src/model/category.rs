//! Job categories logged by the submission forms.

use serde::{Deserialize, Serialize};

/// Job category of a logged submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Print,
    Fabrication,
    Apparel,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 3] = [Category::Print, Category::Fabrication, Category::Apparel];

    /// Parse a log key ("print", "Apparel", ...).
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "print" => Some(Category::Print),
            "fabrication" => Some(Category::Fabrication),
            "apparel" => Some(Category::Apparel),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Print => write!(f, "Print"),
            Category::Fabrication => write!(f, "Fabrication"),
            Category::Apparel => write!(f, "Apparel"),
        }
    }
}
