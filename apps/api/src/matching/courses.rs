//! Course lookup driven by gap analysis output.

use crate::catalog::Course;
use crate::matching::gaps::SkillGap;

pub const MAX_RECOMMENDED_COURSES: usize = 6;

/// Courses teaching `skill`. An empty query returns the whole catalog.
pub fn courses_by_skill(skill: &str, courses: &[Course]) -> Vec<Course> {
    courses.iter().filter(|c| c.teaches(skill)).cloned().collect()
}

/// One course per gap, highest importance first, no course chosen twice.
///
/// Gaps are walked High, then Medium, then Low, keeping their given order
/// within each level. Each contributes the first catalog course that teaches
/// it and is not already picked. Stops at `MAX_RECOMMENDED_COURSES`.
pub fn recommend_courses(gaps: &[SkillGap], courses: &[Course]) -> Vec<Course> {
    let mut prioritized: Vec<&SkillGap> = gaps.iter().collect();
    prioritized.sort_by_key(|g| g.importance.priority());

    let mut picked: Vec<Course> = Vec::new();
    for gap in prioritized {
        let next = courses
            .iter()
            .find(|c| c.teaches(&gap.skill) && !picked.iter().any(|p| p.id == c.id));

        if let Some(course) = next {
            picked.push(course.clone());
        }
        if picked.len() >= MAX_RECOMMENDED_COURSES {
            break;
        }
    }

    picked
}
