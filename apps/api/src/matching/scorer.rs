//! Match Scorer: how well a candidate's skills cover a posting's requirements.
//!
//! Algorithm:
//! 1. Count candidate skills (repeats included) that match at least one
//!    required skill.
//! 2. score = round(100 × matched / required.len()), capped at 100.
//! 3. Ranking scores every posting and stable-sorts descending, so equal
//!    scores keep catalog order.

use serde::{Deserialize, Serialize};

use crate::catalog::JobPosting;
use crate::matching::skill_match::{SkillMatcher, SubstringMatcher};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub internship: JobPosting,
    pub match_score: u32, // 0 – 100
}

/// Scores with the default substring matcher.
pub fn score(candidate: &[String], required: &[String]) -> u32 {
    score_with(&SubstringMatcher, candidate, required)
}

pub fn score_with(matcher: &dyn SkillMatcher, candidate: &[String], required: &[String]) -> u32 {
    if candidate.is_empty() || required.is_empty() {
        return 0;
    }

    let matched = candidate
        .iter()
        .filter(|c| required.iter().any(|r| matcher.matches(c, r)))
        .count() as u64;
    let total = required.len() as u64;

    // Integer round-half-up of 100 * matched / total.
    let rounded = (matched * 200 + total) / (2 * total);
    rounded.min(100) as u32
}

/// Ranks the catalog with the default substring matcher.
pub fn rank_jobs(candidate: &[String], catalog: &[JobPosting]) -> Vec<MatchResult> {
    rank_jobs_with(&SubstringMatcher, candidate, catalog)
}

pub fn rank_jobs_with(
    matcher: &dyn SkillMatcher,
    candidate: &[String],
    catalog: &[JobPosting],
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .iter()
        .map(|posting| MatchResult {
            match_score: score_with(matcher, candidate, &posting.required_skills),
            internship: posting.clone(),
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results
}

/// Post-ranking filters for the matches listing. Empty filter keeps everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFilter {
    #[serde(default)]
    pub remote_only: bool,
    /// Keep postings whose location contains any of these (case-insensitive).
    #[serde(default)]
    pub locations: Vec<String>,
}

impl MatchFilter {
    pub fn apply(&self, results: Vec<MatchResult>) -> Vec<MatchResult> {
        let locations: Vec<String> = self
            .locations
            .iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        results
            .into_iter()
            .filter(|r| !self.remote_only || r.internship.is_remote())
            .filter(|r| {
                if locations.is_empty() {
                    return true;
                }
                let location = r.internship.location.to_lowercase();
                locations.iter().any(|l| location.contains(l))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::internships::fixture_internships;
    use crate::matching::skill_match::ExactMatcher;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn make_posting(id: u32, required: &[&str]) -> JobPosting {
        JobPosting {
            id,
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: String::new(),
            required_skills: skills(required),
            application_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(score(&[], &skills(&["react"])), 0);
        assert_eq!(score(&skills(&["react"]), &[]), 0);
        assert_eq!(score(&[], &[]), 0);
    }

    #[test]
    fn test_half_match() {
        assert_eq!(score(&skills(&["react"]), &skills(&["React", "CSS"])), 50);
    }

    #[test]
    fn test_three_of_four() {
        let candidate = skills(&["Python", "SQL", "Pandas"]);
        let required = skills(&["python", "sql", "machine learning", "pandas"]);
        assert_eq!(score(&candidate, &required), 75);
    }

    #[test]
    fn test_rounds_half_up() {
        // 1/8 = 12.5 → 13, 2/3 = 66.67 → 67, 1/3 = 33.33 → 33
        let eight = skills(&["a1", "b2", "c3", "d4", "e5", "f6", "g7", "react"]);
        assert_eq!(score(&skills(&["react"]), &eight), 13);
        let three = skills(&["rust", "go", "sql"]);
        assert_eq!(score(&skills(&["rust", "go"]), &three), 67);
        assert_eq!(score(&skills(&["rust"]), &three), 33);
    }

    #[test]
    fn test_substring_match_counts() {
        // "react" is contained in "react native"
        assert_eq!(
            score(&skills(&["react"]), &skills(&["react native", "swift"])),
            50
        );
    }

    #[test]
    fn test_padded_candidate_skill_is_compared_verbatim() {
        let required = skills(&["react native", "swift"]);
        assert_eq!(score(&skills(&[" react "]), &required), 0);
        assert_eq!(score(&skills(&["react"]), &required), 50);
    }

    #[test]
    fn test_duplicate_candidate_skills_count_each_time() {
        let required = skills(&["react", "css", "html", "git"]);
        assert_eq!(score(&skills(&["react", "react"]), &required), 50);
    }

    #[test]
    fn test_score_capped_at_100() {
        let candidate = skills(&["react", "React", "REACT"]);
        assert_eq!(score(&candidate, &skills(&["react", "css"])), 100);
    }

    #[test]
    fn test_score_always_bounded() {
        let catalog = fixture_internships();
        let candidates = [
            skills(&[]),
            skills(&["javascript", "javascript", "java", "script", "react"]),
            skills(&["python", "sql", "machine learning", "pandas", "numpy", "a"]),
        ];
        for candidate in &candidates {
            for posting in &catalog {
                assert!(score(candidate, &posting.required_skills) <= 100);
            }
        }
    }

    #[test]
    fn test_exact_matcher_ignores_substrings() {
        let candidate = skills(&["react"]);
        let required = skills(&["react native", "swift"]);
        assert_eq!(score_with(&ExactMatcher, &candidate, &required), 0);
    }

    #[test]
    fn test_rank_jobs_sorted_and_stable() {
        let ranked = rank_jobs(&skills(&["javascript", "react"]), &fixture_internships());
        let order: Vec<(u32, u32)> = ranked
            .iter()
            .map(|r| (r.internship.id, r.match_score))
            .collect();
        assert_eq!(
            order,
            vec![
                (5, 50),
                (1, 40),
                (3, 40),
                (2, 0),
                (4, 0),
                (6, 0),
                (7, 0),
                (8, 0)
            ]
        );
    }

    #[test]
    fn test_rank_jobs_ties_keep_catalog_order() {
        let catalog = vec![
            make_posting(10, &["rust"]),
            make_posting(11, &["go"]),
            make_posting(12, &["rust"]),
        ];
        let ids: Vec<u32> = rank_jobs(&skills(&["rust"]), &catalog)
            .iter()
            .map(|r| r.internship.id)
            .collect();
        assert_eq!(ids, vec![10, 12, 11]);
    }

    #[test]
    fn test_rank_jobs_empty_catalog() {
        assert!(rank_jobs(&skills(&["rust"]), &[]).is_empty());
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let candidate = skills(&["python", "docker"]);
        let catalog = fixture_internships();
        assert_eq!(rank_jobs(&candidate, &catalog), rank_jobs(&candidate, &catalog));
    }

    #[test]
    fn test_filter_remote_only() {
        let ranked = rank_jobs(&skills(&["git"]), &fixture_internships());
        let filter = MatchFilter {
            remote_only: true,
            locations: vec![],
        };
        let ids: Vec<u32> = filter.apply(ranked).iter().map(|r| r.internship.id).collect();
        assert_eq!(ids, vec![1, 3, 6]);
    }

    #[test]
    fn test_filter_locations() {
        let ranked = rank_jobs(&skills(&["python"]), &fixture_internships());
        let filter = MatchFilter {
            remote_only: false,
            locations: vec!["seattle".to_string(), "New York".to_string()],
        };
        let ids: Vec<u32> = filter.apply(ranked).iter().map(|r| r.internship.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let ranked = rank_jobs(&[], &fixture_internships());
        assert_eq!(MatchFilter::default().apply(ranked).len(), 8);
    }
}
