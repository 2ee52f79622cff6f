use serde::{Deserialize, Serialize};

/// An internship posting. Fixture data: never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub application_url: String,
}

impl JobPosting {
    pub fn is_remote(&self) -> bool {
        self.location.to_lowercase().contains("remote")
    }
}

const APPLY_URL: &str = "https://example.com/apply";

fn posting(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    required_skills: &[&str],
    description: &str,
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        application_url: APPLY_URL.to_string(),
    }
}

/// The bundled internship catalog, in display order.
pub fn fixture_internships() -> Vec<JobPosting> {
    vec![
        posting(
            1,
            "Frontend Developer Intern",
            "TechCorp",
            "San Francisco, CA (Remote)",
            &["javascript", "react", "html", "css", "git"],
            "Join our team to build modern web applications with React.",
        ),
        posting(
            2,
            "Backend Developer Intern",
            "DataSystems",
            "New York, NY",
            &["python", "django", "sql", "api development", "git"],
            "Work on our backend services and APIs using Python and Django.",
        ),
        posting(
            3,
            "Full Stack Developer Intern",
            "WebSolutions",
            "Austin, TX (Remote)",
            &["javascript", "react", "node.js", "express", "mongodb"],
            "Develop full stack applications using the MERN stack.",
        ),
        posting(
            4,
            "Data Science Intern",
            "AnalyticsPro",
            "Seattle, WA",
            &["python", "sql", "machine learning", "data analysis", "pandas"],
            "Apply machine learning techniques to real-world problems.",
        ),
        posting(
            5,
            "Mobile Developer Intern",
            "AppWorks",
            "Los Angeles, CA",
            &["react native", "javascript", "mobile development", "api integration"],
            "Build cross-platform mobile applications with React Native.",
        ),
        posting(
            6,
            "DevOps Intern",
            "CloudTech",
            "Chicago, IL (Remote)",
            &["aws", "docker", "kubernetes", "ci/cd", "linux"],
            "Help automate our deployment pipeline and infrastructure.",
        ),
        posting(
            7,
            "UI/UX Design Intern",
            "DesignHub",
            "Boston, MA",
            &["figma", "ui/ux", "responsive design", "wireframing", "user research"],
            "Design intuitive and beautiful user interfaces for web and mobile apps.",
        ),
        posting(
            8,
            "Machine Learning Intern",
            "AILabs",
            "San Diego, CA",
            &["python", "machine learning", "deep learning", "tensorflow", "numpy"],
            "Implement and optimize machine learning models for our products.",
        ),
    ]
}
