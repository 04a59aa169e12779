//! Built-in starter resumes, one per visual template.

use crate::resume::models::{EducationItem, ExperienceItem, PersonalInfo, ResumeData};

struct TemplateSeed {
    id: &'static str,
    full_name: &'static str,
    email: &'static str,
    phone: &'static str,
    summary: &'static str,
    // company, position, duration, description
    experience: (&'static str, &'static str, &'static str, &'static str),
    // institution, degree, year
    education: (&'static str, &'static str, &'static str),
    skills: [&'static str; 5],
}

const TEMPLATES: &[TemplateSeed] = &[
    TemplateSeed {
        id: "modern",
        full_name: "John Doe",
        email: "john@example.com",
        phone: "+1 234 567 890",
        summary: "Experienced professional with a track record of success in project management and team leadership. Skilled in developing and implementing strategic initiatives that drive business growth.",
        experience: (
            "Tech Solutions Inc.",
            "Senior Project Manager",
            "2020 - Present",
            "Led cross-functional teams in delivering complex software projects. Improved project delivery efficiency by 30%.",
        ),
        education: (
            "University of Technology",
            "Bachelor of Science in Computer Science",
            "2016",
        ),
        skills: [
            "Project Management",
            "Team Leadership",
            "Strategic Planning",
            "Agile Methodologies",
            "Stakeholder Management",
        ],
    },
    TemplateSeed {
        id: "minimal",
        full_name: "Sarah Smith",
        email: "sarah@example.com",
        phone: "+1 987 654 321",
        summary: "Creative and detail-oriented designer with expertise in user interface and brand identity development. Passionate about creating meaningful and impactful digital experiences.",
        experience: (
            "Creative Design Studio",
            "UI/UX Designer",
            "2019 - Present",
            "Design and implement user interfaces for web and mobile applications. Collaborate with clients to understand requirements and deliver solutions.",
        ),
        education: (
            "Design Institute",
            "Bachelor of Fine Arts in Digital Design",
            "2019",
        ),
        skills: [
            "UI/UX Design",
            "Adobe Creative Suite",
            "Figma",
            "User Research",
            "Prototyping",
        ],
    },
    TemplateSeed {
        id: "professional",
        full_name: "Michael Johnson",
        email: "michael@example.com",
        phone: "+1 456 789 012",
        summary: "Results-driven marketing professional with over 8 years of experience in digital marketing and brand development. Proven track record of developing and executing successful marketing campaigns.",
        experience: (
            "Global Marketing Agency",
            "Marketing Director",
            "2018 - Present",
            "Develop and implement comprehensive marketing strategies. Lead a team of marketing professionals in executing campaigns across multiple channels.",
        ),
        education: ("Business School", "Master of Business Administration", "2015"),
        skills: [
            "Digital Marketing",
            "Brand Development",
            "Team Management",
            "Marketing Strategy",
            "Analytics",
        ],
    },
    TemplateSeed {
        id: "executive",
        full_name: "Alexandra Chen",
        email: "alexandra@example.com",
        phone: "+1 789 012 345",
        summary: "Strategic executive leader with 15+ years of experience driving organizational growth and innovation. Proven track record of building high-performing teams and delivering exceptional business results.",
        experience: (
            "Global Innovations Corp",
            "Chief Operating Officer",
            "2017 - Present",
            "Spearhead operational excellence initiatives resulting in 40% efficiency improvement. Lead digital transformation projects across multiple business units.",
        ),
        education: ("Harvard Business School", "Executive MBA", "2012"),
        skills: [
            "Executive Leadership",
            "Strategic Planning",
            "Digital Transformation",
            "Change Management",
            "Business Development",
        ],
    },
    TemplateSeed {
        id: "creative",
        full_name: "Lucas Rivera",
        email: "lucas@example.com",
        phone: "+1 234 901 678",
        summary: "Award-winning creative director with a passion for storytelling and brand innovation. Expertise in leading creative teams and developing compelling visual narratives that resonate with audiences.",
        experience: (
            "Creative Minds Agency",
            "Creative Director",
            "2019 - Present",
            "Direct creative vision for major brand campaigns. Lead a team of designers, copywriters, and artists in delivering innovative creative solutions.",
        ),
        education: ("School of Visual Arts", "BFA in Graphic Design", "2014"),
        skills: [
            "Creative Direction",
            "Brand Strategy",
            "Visual Design",
            "Team Leadership",
            "Art Direction",
        ],
    },
    TemplateSeed {
        id: "technical",
        full_name: "Emma Watson",
        email: "emma@example.com",
        phone: "+1 567 890 123",
        summary: "Senior software engineer with expertise in full-stack development and cloud architecture. Passionate about building scalable solutions and mentoring junior developers.",
        experience: (
            "Tech Innovators Ltd",
            "Senior Software Engineer",
            "2018 - Present",
            "Lead development of cloud-native applications using microservices architecture. Implement CI/CD pipelines and DevOps practices.",
        ),
        education: ("MIT", "Master of Science in Computer Science", "2017"),
        skills: [
            "Full Stack Development",
            "Cloud Architecture",
            "DevOps",
            "System Design",
            "Technical Leadership",
        ],
    },
];

pub fn template_ids() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.id).collect()
}

/// Starter data for template `id`; ids are matched case-insensitively.
pub fn template(id: &str) -> Option<ResumeData> {
    TEMPLATES
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id.trim()))
        .map(TemplateSeed::to_resume)
}

impl TemplateSeed {
    fn to_resume(&self) -> ResumeData {
        let (company, position, duration, description) = self.experience;
        let (institution, degree, year) = self.education;
        ResumeData {
            photo: String::new(),
            personal_info: PersonalInfo {
                full_name: self.full_name.to_string(),
                email: self.email.to_string(),
                phone: self.phone.to_string(),
                location: String::new(),
            },
            summary: self.summary.to_string(),
            experience: vec![ExperienceItem {
                company: company.to_string(),
                position: position.to_string(),
                duration: duration.to_string(),
                description: description.to_string(),
            }],
            education: vec![EducationItem {
                institution: institution.to_string(),
                degree: degree.to_string(),
                year: year.to_string(),
            }],
            skills: self.skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}
