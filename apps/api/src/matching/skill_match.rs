//! Skill comparison: the one heuristic every scorer and analyzer shares.
//!
//! `AppState` holds an `Arc<dyn SkillMatcher>`, chosen at startup from
//! `SKILL_MATCH_MODE`. The default is the loose bidirectional substring rule.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decides whether a candidate skill satisfies a required skill.
/// Implementations must be case-insensitive and treat blank input as no match.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, candidate: &str, required: &str) -> bool;

    /// Backend label, surfaced in logs.
    fn name(&self) -> &'static str;
}

/// Bidirectional case-insensitive containment. "react" matches "React Native"
/// and "node.js" matches "node".
pub struct SubstringMatcher;

impl SkillMatcher for SubstringMatcher {
    fn matches(&self, candidate: &str, required: &str) -> bool {
        skills_match(candidate, required)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Case-insensitive equality.
pub struct ExactMatcher;

impl SkillMatcher for ExactMatcher {
    fn matches(&self, candidate: &str, required: &str) -> bool {
        if candidate.trim().is_empty() || required.trim().is_empty() {
            return false;
        }
        candidate.to_lowercase() == required.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// True if either skill, lower-cased, contains the other. Whitespace is
/// compared as-is; a skill that is only whitespace matches nothing.
pub fn skills_match(a: &str, b: &str) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Substring,
    Exact,
}

impl MatchMode {
    pub fn build_matcher(self) -> Arc<dyn SkillMatcher> {
        match self {
            MatchMode::Substring => Arc::new(SubstringMatcher),
            MatchMode::Exact => Arc::new(ExactMatcher),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "exact" => Ok(MatchMode::Exact),
            other => Err(format!("unknown skill match mode '{other}'")),
        }
    }
}
