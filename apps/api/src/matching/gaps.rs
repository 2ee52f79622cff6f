//! Gap Analyzer: which in-demand skills is the candidate missing?
//!
//! Algorithm:
//! 1. Count every required skill across the catalog, keyed lower-case, in
//!    first-seen order.
//! 2. Keep the keys no candidate skill matches.
//! 3. Label each against the highest count in the whole table:
//!    High > 70%, Medium > 40%, else Low.
//! 4. Stable-sort High → Low and keep the first `MAX_SKILL_GAPS`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::JobPosting;
use crate::matching::skill_match::{SkillMatcher, SubstringMatcher};

pub const MAX_SKILL_GAPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// Labels a skill seen `frequency` times against the busiest skill's count.
    pub fn from_frequency(frequency: u32, max_frequency: u32) -> Self {
        let freq = u64::from(frequency) * 10;
        let max = u64::from(max_frequency);
        if freq > max * 7 {
            Importance::High
        } else if freq > max * 4 {
            Importance::Medium
        } else {
            Importance::Low
        }
    }

    /// Sort key: lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            Importance::High => 0,
            Importance::Medium => 1,
            Importance::Low => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub importance: Importance,
}

/// Gap analysis with the default substring matcher.
pub fn analyze_gaps(candidate: &[String], catalog: &[JobPosting]) -> Vec<SkillGap> {
    analyze_gaps_with(&SubstringMatcher, candidate, catalog)
}

pub fn analyze_gaps_with(
    matcher: &dyn SkillMatcher,
    candidate: &[String],
    catalog: &[JobPosting],
) -> Vec<SkillGap> {
    let frequencies = skill_frequencies(catalog);
    let max_frequency = frequencies.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut gaps: Vec<SkillGap> = frequencies
        .into_iter()
        .filter(|(skill, _)| !candidate.iter().any(|c| matcher.matches(c, skill)))
        .map(|(skill, count)| SkillGap {
            skill: capitalize(&skill),
            importance: Importance::from_frequency(count, max_frequency),
        })
        .collect();

    gaps.sort_by_key(|g| g.importance.priority());
    gaps.truncate(MAX_SKILL_GAPS);
    gaps
}

/// Percentage of distinct catalog skills the candidate covers, rounded.
pub fn skill_coverage_with(
    matcher: &dyn SkillMatcher,
    candidate: &[String],
    catalog: &[JobPosting],
) -> u32 {
    let frequencies = skill_frequencies(catalog);
    if frequencies.is_empty() {
        return 0;
    }

    let covered = frequencies
        .iter()
        .filter(|(skill, _)| candidate.iter().any(|c| matcher.matches(c, skill)))
        .count() as u64;
    let total = frequencies.len() as u64;
    ((covered * 200 + total) / (2 * total)) as u32
}

pub fn skill_coverage(candidate: &[String], catalog: &[JobPosting]) -> u32 {
    skill_coverage_with(&SubstringMatcher, candidate, catalog)
}

/// Lower-cased required skill → number of postings listing it, first-seen order.
fn skill_frequencies(catalog: &[JobPosting]) -> Vec<(String, u32)> {
    let mut order: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for posting in catalog {
        for skill in &posting.required_skills {
            let key = skill.to_lowercase();
            match index.get(&key) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(key.clone(), order.len());
                    order.push((key, 1));
                }
            }
        }
    }

    order
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
