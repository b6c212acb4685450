// src/assistant/responder.rs
// Canned replies chosen by keyword substring matching

use serde::{Deserialize, Serialize};

/// Opening line of every chat session
pub const GREETING: &str =
    "Hi! I'm Sameem's AI assistant. Ask me anything about his projects, skills, or experience!";

/// Which canned reply the responder picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
    Contact,
    RagProjects,
    Experience,
    Skills,
    Fallback,
}

impl Reply {
    pub fn text(self) -> &'static str {
        match self {
            Reply::Contact => {
                "You can reach Sameem at qureshisameem01@gmail.com. He's currently open to new opportunities!"
            }
            Reply::RagProjects => {
                "Sameem specializes in RAG systems! Check out his 'DocuVision RAG' project. He's worked with Vision Language Models, ChromaDB, and LangChain."
            }
            Reply::Experience => {
                "Sameem is currently an AI/ML Intern at Logitech, building VS Code extensions and RAG pipelines. Before that, he worked on various full-stack projects."
            }
            Reply::Skills => {
                "His tech stack includes Python, FastAPI, React/Next.js, PyTorch, and various LLM frameworks like LangChain and LlamaIndex."
            }
            Reply::Fallback => {
                "That's an interesting question! I'm just a demo bot, but Sameem would love to discuss this with you directly. Why not check out his projects?"
            }
        }
    }
}

/// One keyword group and the reply it triggers
#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub reply: Reply,
}

impl Rule {
    /// `query` must already be lowercased
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k))
    }
}

/// Evaluated top to bottom; first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["contact", "email", "hire"],
        reply: Reply::Contact,
    },
    Rule {
        keywords: &["rag", "llm"],
        reply: Reply::RagProjects,
    },
    Rule {
        keywords: &["experience", "work"],
        reply: Reply::Experience,
    },
    Rule {
        keywords: &["skills", "stack"],
        reply: Reply::Skills,
    },
];

pub fn classify(query: &str) -> Reply {
    let query = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&query))
        .map(|rule| rule.reply)
        .unwrap_or(Reply::Fallback)
}

pub fn respond(query: &str) -> &'static str {
    classify(query).text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_gets_contact() {
        assert_eq!(classify("Can I email you?"), Reply::Contact);
        assert_eq!(respond("Can I email you?"), Reply::Contact.text());
    }

    #[test]
    fn test_rule_order_beats_position_in_text() {
        // "work" (rule 3) is present too, but rule 2 is checked first
        assert_eq!(classify("tell me about your RAG work"), Reply::RagProjects);
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(classify("HIRE"), Reply::Contact);
        assert_eq!(classify("What LLMs?"), Reply::RagProjects);
        assert_eq!(classify("Tech STACK"), Reply::Skills);
    }

    #[test]
    fn test_substring_not_word_match() {
        // "storage" contains "rag"
        assert_eq!(classify("storage"), Reply::RagProjects);
        // "networking" contains "work"
        assert_eq!(classify("networking"), Reply::Experience);
    }

    #[test]
    fn test_experience_and_skills() {
        assert_eq!(classify("How much experience?"), Reply::Experience);
        assert_eq!(classify("list your skills"), Reply::Skills);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("banana"), Reply::Fallback.text());
        assert_eq!(respond(""), Reply::Fallback.text());
        assert_eq!(respond("   "), Reply::Fallback.text());
    }

    #[test]
    fn test_respond_is_deterministic() {
        for q in ["contact me", "skills", "¿qué tal?", ""] {
            assert_eq!(respond(q), respond(q));
        }
    }

    #[test]
    fn test_rule_table_shape() {
        assert_eq!(RULES.len(), 4);
        assert_eq!(RULES[0].reply, Reply::Contact);
        assert_eq!(RULES[3].reply, Reply::Skills);
        // keywords are lowercase so they can match the lowered query
        for rule in RULES {
            for k in rule.keywords {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }

    #[test]
    fn test_reply_serializes_snake_case() {
        let json = serde_json::to_string(&Reply::RagProjects).unwrap();
        assert_eq!(json, "\"rag_projects\"");
    }
}
