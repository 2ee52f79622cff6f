//! Keyword-vocabulary skill extraction.

use tracing::debug;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

const PDF_SIGNATURE: &[u8] = b"%PDF-";
const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

const PDF_SAMPLE_TEXT: &str = "Sample resume content containing skills like javascript, \
    react, python, sql, data analysis, and machine learning.";
const DOCX_SAMPLE_TEXT: &str = "Sample resume content from DOCX containing skills like \
    typescript, node.js, mongodb, aws, and docker.";

/// Vocabulary scanned for by `extract_skills`, in output order.
pub const COMMON_SKILLS: &[&str] = &[
    "javascript", "typescript", "react", "angular", "vue", "node", "express",
    "python", "django", "flask", "java", "spring", "c#", ".net", "php", "laravel",
    "ruby", "rails", "go", "rust", "sql", "mysql", "postgresql", "mongodb", "nosql",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "ci/cd",
    "html", "css", "sass", "less", "tailwind", "bootstrap", "materialui", "figma",
    "photoshop", "illustrator", "ui/ux", "responsive design", "mobile development",
    "ios", "android", "flutter", "react native", "swift", "kotlin", "objective-c",
    "data analysis", "machine learning", "deep learning", "nlp", "computer vision",
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "r", "tableau",
    "power bi", "excel", "agile", "scrum", "jira", "confluence", "leadership",
    "teamwork", "communication", "problem solving", "critical thinking",
];

/// Every vocabulary entry found anywhere in `text`, case-insensitive.
/// Plain containment, so short entries such as "r" and "go" match inside words.
pub fn extract_skills(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let haystack = text.to_lowercase();
    COMMON_SKILLS
        .iter()
        .filter(|skill| haystack.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Maps an uploaded document to text.
///
/// PDF and DOCX are signature-checked and replaced by fixed sample text.
/// Plain text is used as-is.
pub fn extract_text(content_type: &str, bytes: &[u8]) -> Result<String, AppError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    match mime.as_str() {
        PDF_MIME => {
            if !bytes.starts_with(PDF_SIGNATURE) {
                return Err(AppError::ExtractionFailed(
                    "Failed to extract text from PDF".to_string(),
                ));
            }
            Ok(PDF_SAMPLE_TEXT.to_string())
        }
        DOCX_MIME => {
            if !bytes.starts_with(ZIP_SIGNATURE) {
                return Err(AppError::ExtractionFailed(
                    "Failed to extract text from DOCX".to_string(),
                ));
            }
            Ok(DOCX_SAMPLE_TEXT.to_string())
        }
        TEXT_MIME => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::ExtractionFailed("Text resume is not valid UTF-8".to_string())
        }),
        other => Err(AppError::UnsupportedFormat(format!(
            "'{other}' is not supported; upload a PDF, DOCX or plain-text resume"
        ))),
    }
}

/// Document → skill list.
pub fn parse_resume(content_type: &str, bytes: &[u8]) -> Result<Vec<String>, AppError> {
    let text = extract_text(content_type, bytes)?;
    let skills = extract_skills(&text);
    debug!(content_type, bytes = bytes.len(), skills = skills.len(), "Parsed resume");
    Ok(skills)
}

/// Comma-separated manual entry → trimmed, non-blank skills in entry order.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_finds_vocabulary() {
        let skills = extract_skills("Built REST services in Rust and deployed with Docker on AWS");
        for expected in ["rust", "docker", "aws"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!skills.contains(&"python".to_string()));
    }

    #[test]
    fn test_extract_skills_follows_vocabulary_order_without_repeats() {
        let skills = extract_skills("python python PYTHON javascript");
        let js = skills.iter().position(|s| s == "javascript").unwrap();
        let py = skills.iter().position(|s| s == "python").unwrap();
        assert!(js < py);
        assert_eq!(skills.iter().filter(|s| *s == "python").count(), 1);
    }

    #[test]
    fn test_extract_skills_empty_text() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   ").is_empty());
    }

    #[test]
    fn test_pdf_requires_signature() {
        let text = extract_text(PDF_MIME, b"%PDF-1.7 ...").unwrap();
        assert!(text.contains("machine learning"));

        let err = extract_text(PDF_MIME, b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::ExtractionFailed(_)));
    }

    #[test]
    fn test_docx_requires_zip_signature() {
        assert!(extract_text(DOCX_MIME, b"PK\x03\x04rest").is_ok());
        let err = extract_text(DOCX_MIME, b"%PDF-").unwrap_err();
        assert!(matches!(err, AppError::ExtractionFailed(_)));
    }

    #[test]
    fn test_plain_text_with_charset_parameter() {
        let text = extract_text("text/plain; charset=utf-8", b"Kotlin and Swift").unwrap();
        assert_eq!(text, "Kotlin and Swift");
    }

    #[test]
    fn test_invalid_utf8_fails_extraction() {
        let err = extract_text(TEXT_MIME, &[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, AppError::ExtractionFailed(_)));
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let err = extract_text("image/png", b"\x89PNG").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_resume_pdf_sample() {
        let skills = parse_resume(PDF_MIME, b"%PDF-1.4").unwrap();
        for expected in ["javascript", "react", "python", "sql", "data analysis", "machine learning"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_parse_resume_docx_sample() {
        let skills = parse_resume(DOCX_MIME, b"PK\x03\x04").unwrap();
        for expected in ["typescript", "node", "mongodb", "aws", "docker"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(
            parse_skill_list(" React, python ,, SQL ,"),
            vec!["React", "python", "SQL"]
        );
        assert!(parse_skill_list(" , ").is_empty());
    }
}
