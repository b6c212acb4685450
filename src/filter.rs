// src/filter.rs
// Project gallery category filter

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::catalog::ProjectRecord;

/// Tags that put a project under "Full Stack"
const FULL_STACK_TAGS: [&str; 2] = ["Vue.js", "Flask"];

/// Tags that put a project under "Computer Vision"
const COMPUTER_VISION_TAGS: [&str; 2] = ["Vision Language Models", "NVIDIA NeMo"];

/// A gallery category chosen by the viewer.
///
/// `All` means no filtering. Labels outside the fixed menu are kept as
/// `Other` and matched like RAG/LLM/NLP.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Rag,
    Llm,
    Nlp,
    ComputerVision,
    FullStack,
    Other(String),
}

impl Category {
    /// Menu labels in display order
    pub const ALL_LABELS: [&'static str; 6] =
        ["All", "RAG", "LLM", "NLP", "Computer Vision", "Full Stack"];

    /// The six gallery categories in display order
    pub fn menu() -> Vec<Category> {
        Self::ALL_LABELS.iter().map(|l| Category::from_label(l)).collect()
    }

    /// Parse a display label. Never fails; unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "All" => Category::All,
            "RAG" => Category::Rag,
            "LLM" => Category::Llm,
            "NLP" => Category::Nlp,
            "Computer Vision" => Category::ComputerVision,
            "Full Stack" => Category::FullStack,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Rag => "RAG",
            Category::Llm => "LLM",
            Category::Nlp => "NLP",
            Category::ComputerVision => "Computer Vision",
            Category::FullStack => "Full Stack",
            Category::Other(label) => label,
        }
    }

    /// Path segment used for statically built category pages
    pub fn slug(&self) -> String {
        self.label()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Does one project belong to this category?
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            Category::All => true,
            // Exact tag membership for the two hand-picked groups...
            Category::FullStack => FULL_STACK_TAGS.iter().any(|t| project.has_tag(t)),
            Category::ComputerVision => COMPUTER_VISION_TAGS.iter().any(|t| project.has_tag(t)),
            // ...case-sensitive substring containment for everything else
            other => {
                let needle = other.label();
                project.tags.iter().any(|tag| tag.contains(needle))
            }
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_label(s))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subset of `catalog` in `category`, in catalog order.
///
/// `All` returns every record unchanged. Recomputed on every call.
pub fn filter_projects<'a>(category: &Category, catalog: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
    if *category == Category::All {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|p| category.matches(p)).collect()
}
