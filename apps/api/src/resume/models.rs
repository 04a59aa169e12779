use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// The resume being edited. Sections are fixed; updates go through
/// `ResumeUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    /// Data URL or link to the profile photo.
    #[serde(default)]
    pub photo: String,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ResumeData {
    /// Renders the resume as headed plain-text sections separated by blank
    /// lines, the shape the scanner expects from an extracted document.
    pub fn to_plain_text(&self) -> String {
        let mut blocks: Vec<String> = Vec::new();

        let contact: Vec<&str> = [
            self.personal_info.email.as_str(),
            self.personal_info.phone.as_str(),
            self.personal_info.location.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
        let mut header = self.personal_info.full_name.trim().to_string();
        if !contact.is_empty() {
            if !header.is_empty() {
                header.push('\n');
            }
            header.push_str(&contact.join(" | "));
        }
        if !header.is_empty() {
            blocks.push(header);
        }

        if !self.summary.trim().is_empty() {
            blocks.push(format!("Summary\n{}", self.summary.trim()));
        }

        if !self.experience.is_empty() {
            let mut section = String::from("Experience");
            for item in &self.experience {
                section.push('\n');
                section.push_str(&headline(&item.position, &item.company, &item.duration));
                if !item.description.trim().is_empty() {
                    section.push('\n');
                    section.push_str(item.description.trim());
                }
            }
            blocks.push(section);
        }

        if !self.education.is_empty() {
            let mut section = String::from("Education");
            for item in &self.education {
                section.push('\n');
                section.push_str(&headline(&item.degree, &item.institution, &item.year));
            }
            blocks.push(section);
        }

        if !self.skills.is_empty() {
            blocks.push(format!("Skills\n{}", self.skills.join(", ")));
        }

        blocks.join("\n\n")
    }
}

/// "Title, Place (when)", skipping empty parts.
fn headline(title: &str, place: &str, when: &str) -> String {
    let mut line = [title.trim(), place.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !when.trim().is_empty() {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("({})", when.trim()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeData {
        ResumeData {
            photo: String::new(),
            personal_info: PersonalInfo {
                full_name: "Emma Watson".to_string(),
                email: "emma@example.com".to_string(),
                phone: "+1 567 890 123".to_string(),
                location: String::new(),
            },
            summary: "Senior software engineer.".to_string(),
            experience: vec![ExperienceItem {
                company: "Tech Innovators Ltd".to_string(),
                position: "Senior Software Engineer".to_string(),
                duration: "2018 - Present".to_string(),
                description: "Lead development of cloud-native applications.".to_string(),
            }],
            education: vec![EducationItem {
                institution: "MIT".to_string(),
                degree: "Master of Science".to_string(),
                year: "2017".to_string(),
            }],
            skills: vec!["DevOps".to_string(), "System Design".to_string()],
        }
    }

    #[test]
    fn test_plain_text_has_headed_sections() {
        let text = sample().to_plain_text();
        assert_eq!(
            text,
            "Emma Watson\nemma@example.com | +1 567 890 123\n\n\
             Summary\nSenior software engineer.\n\n\
             Experience\nSenior Software Engineer, Tech Innovators Ltd (2018 - Present)\n\
             Lead development of cloud-native applications.\n\n\
             Education\nMaster of Science, MIT (2017)\n\n\
             Skills\nDevOps, System Design"
        );
    }

    #[test]
    fn test_plain_text_skips_empty_sections() {
        let resume = ResumeData {
            skills: vec!["Rust".to_string()],
            ..ResumeData::default()
        };
        assert_eq!(resume.to_plain_text(), "Skills\nRust");
        assert_eq!(ResumeData::default().to_plain_text(), "");
    }

    #[test]
    fn test_headline_skips_empty_parts() {
        assert_eq!(headline("", "MIT", ""), "MIT");
        assert_eq!(headline("BSc", "", "2016"), "BSc (2016)");
        assert_eq!(headline("", "", ""), "");
    }

    #[test]
    fn test_deserializes_without_optional_sections() {
        let json = r#"{"personal_info": {"full_name": "A", "email": "a@b.co", "phone": ""}}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert!(resume.experience.is_empty());
        assert_eq!(resume.personal_info.location, "");
    }
}
