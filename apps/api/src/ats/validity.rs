//! Resume validity pre-check: rejects documents that do not look like a
//! resume before any scoring happens.
//!
//! Confidence (0–100) is built from:
//! - share of resume vocabulary present (up to 30)
//! - email (10), phone (10), date or duration (5), bullets (5), URL (5)
//! - more than 50 words (15)
//! - section families: education, experience, skills, summary (5 each)

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::normalize::word_count;

/// Threshold used by the scan flow.
pub const DEFAULT_VALIDITY_THRESHOLD: f64 = 35.0;
/// Stricter threshold used by the editor upload flow.
pub const STRICT_VALIDITY_THRESHOLD: f64 = 40.0;

const REJECTION_REASON: &str = "Please ensure your resume includes basic sections like contact information, experience, education, and skills.";

const RESUME_VOCABULARY: &[&str] = &[
    // contact
    "name",
    "email",
    "phone",
    "address",
    "linkedin",
    "github",
    "portfolio",
    "contact",
    // section headers
    "experience",
    "employment",
    "work history",
    "professional experience",
    "career history",
    "education",
    "academic",
    "qualification",
    "degree",
    "certification",
    "training",
    "skills",
    "expertise",
    "competencies",
    "technical skills",
    "core competencies",
    "projects",
    "achievements",
    "accomplishments",
    "highlights",
    "summary",
    "objective",
    "profile",
    "about",
    "professional summary",
    // action verbs and credentials
    "responsible for",
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "achieved",
    "team",
    "project",
    "collaborated",
    "coordinated",
    "analyzed",
    "improved",
    "increased",
    "reduced",
    "delivered",
    "launched",
    "initiated",
    "spearheaded",
    "orchestrated",
    "bachelor",
    "master",
    "phd",
    "certificate",
    "diploma",
    "gpa",
    "professional",
    "resume",
    "cv",
    "curriculum vitae",
    "references",
    // technical
    "programming",
    "software",
    "development",
    "engineering",
    "database",
    "api",
    "framework",
    "language",
    "platform",
    "system",
    "architecture",
    "infrastructure",
    // soft skills
    "leadership",
    "communication",
    "problem-solving",
    "analytical",
    "teamwork",
    "organization",
    "time management",
    "project management",
    "strategic",
    // dates
    "present",
    "current",
    "year",
    "month",
    "ongoing",
];

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}").unwrap();
    static ref PHONE: Regex = Regex::new(r"(\+\d{1,3}[\-.]?)?\d{3}[\-.]?\d{3}[\-.]?\d{4}").unwrap();
    static ref DATE: Regex =
        Regex::new(r"\d{4}|\d{1,2}/\d{1,2}/\d{2,4}|present|current").unwrap();
    static ref BULLET: Regex = Regex::new(r"[•\-\*]").unwrap();
    static ref URL: Regex = Regex::new(r"(?:https?|www\.)\S+").unwrap();
    static ref SECTION_FAMILIES: Vec<Regex> = [
        r"education|academic|qualification|study",
        r"experience|employment|work|job|career",
        r"skills|expertise|competencies|proficiency",
        r"summary|objective|profile|about",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub confidence: f64,
    pub reason: Option<String>,
}

/// Scores how resume-like `text` is and accepts it when confidence exceeds
/// `threshold`. Never fails; a rejection is a value.
pub fn validate_resume_content(text: &str, threshold: f64) -> ValidationResult {
    let normalized = text.to_lowercase();

    let vocabulary_hits = RESUME_VOCABULARY
        .iter()
        .filter(|term| normalized.contains(*term))
        .count();
    let mut confidence = vocabulary_hits as f64 / RESUME_VOCABULARY.len() as f64 * 30.0;

    if EMAIL.is_match(&normalized) {
        confidence += 10.0;
    }
    if PHONE.is_match(&normalized) {
        confidence += 10.0;
    }
    if DATE.is_match(&normalized) {
        confidence += 5.0;
    }
    if BULLET.is_match(text) {
        confidence += 5.0;
    }
    if URL.is_match(&normalized) {
        confidence += 5.0;
    }
    if word_count(&normalized) > 50 {
        confidence += 15.0;
    }
    confidence += SECTION_FAMILIES
        .iter()
        .filter(|re| re.is_match(&normalized))
        .count() as f64
        * 5.0;

    let confidence = confidence.clamp(0.0, 100.0);
    let is_valid = confidence > threshold;

    ValidationResult {
        is_valid,
        confidence,
        reason: (!is_valid).then(|| REJECTION_REASON.to_string()),
    }
}
