use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub platform: String,
    pub duration: String,
    pub course_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub skills: Vec<String>,
}

impl Course {
    /// True if any of the course's skills contains `skill` (case-insensitive).
    /// Containment is one-directional: "node" finds "node.js", not the reverse.
    pub fn teaches(&self, skill: &str) -> bool {
        let needle = skill.to_lowercase();
        self.skills
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
    }
}

const COURSE_URL: &str = "https://example.com/course";

fn course(id: u32, title: &str, platform: &str, duration: &str, skills: &[&str]) -> Course {
    Course {
        id,
        title: title.to_string(),
        platform: platform.to_string(),
        duration: duration.to_string(),
        course_url: COURSE_URL.to_string(),
        image_url: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// The bundled course catalog, in display order.
pub fn fixture_courses() -> Vec<Course> {
    vec![
        course(
            1,
            "Machine Learning Fundamentals",
            "Coursera",
            "8 weeks",
            &["machine learning", "python", "data analysis", "numpy", "pandas"],
        ),
        course(
            2,
            "React.js Complete Guide",
            "Udemy",
            "24 hours",
            &["react", "javascript", "html", "css", "redux"],
        ),
        course(
            3,
            "Docker for Developers",
            "Pluralsight",
            "6 hours",
            &["docker", "devops", "containers", "kubernetes"],
        ),
        course(
            4,
            "AWS Certified Developer",
            "AWS Training",
            "12 weeks",
            &["aws", "cloud", "serverless", "lambda", "s3", "ec2"],
        ),
        course(
            5,
            "TypeScript Masterclass",
            "Frontend Masters",
            "8 hours",
            &["typescript", "javascript", "react", "node.js"],
        ),
        course(
            6,
            "GraphQL API Development",
            "egghead.io",
            "4 hours",
            &["graphql", "api", "node.js", "apollo"],
        ),
        course(
            7,
            "Python for Data Science",
            "DataCamp",
            "20 hours",
            &["python", "data analysis", "pandas", "matplotlib", "jupyter"],
        ),
        course(
            8,
            "Full Stack Web Development",
            "Codecademy",
            "12 weeks",
            &["javascript", "html", "css", "node.js", "express", "mongodb"],
        ),
        course(
            9,
            "UI/UX Design Principles",
            "Interaction Design Foundation",
            "8 weeks",
            &["ui/ux", "figma", "user research", "wireframing", "prototyping"],
        ),
        course(
            10,
            "DevOps Engineering",
            "Linux Academy",
            "10 weeks",
            &["devops", "ci/cd", "jenkins", "docker", "kubernetes", "git"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teaches_is_case_insensitive() {
        let courses = fixture_courses();
        assert!(courses[1].teaches("React"));
        assert!(courses[4].teaches("node"));
    }

    #[test]
    fn test_teaches_is_one_directional() {
        // "node.js" is not contained in "node"
        let c = course(99, "t", "p", "d", &["node"]);
        assert!(!c.teaches("node.js"));
    }

    #[test]
    fn test_image_url_omitted_when_absent() {
        let value = serde_json::to_value(&fixture_courses()[0]).unwrap();
        assert!(value.get("imageUrl").is_none());
        assert!(value.get("courseUrl").is_some());
    }
}
