//! Job profiles: the keyword sets a resume is scored against.

use serde::{Deserialize, Serialize};

/// A target role. Immutable once loaded; no inheritance between profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub must_have: Vec<String>,
    #[serde(default)]
    pub good_to_have: Vec<String>,
    /// Free-text phrases matched as literal substrings.
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl JobProfile {
    /// Must-have keywords followed by good-to-have keywords.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.must_have
            .iter()
            .chain(self.good_to_have.iter())
            .map(String::as_str)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords().count()
    }
}

struct ProfileSeed {
    id: &'static str,
    title: &'static str,
    must_have: &'static [&'static str],
    good_to_have: &'static [&'static str],
    requirements: &'static [&'static str],
}

const BUILTIN_PROFILES: &[ProfileSeed] = &[
    // Scanner profiles: must-have / good-to-have split
    ProfileSeed {
        id: "frontend",
        title: "Frontend Developer",
        must_have: &["react", "javascript", "html", "css", "responsive", "typescript"],
        good_to_have: &["redux", "webpack", "git", "api", "testing", "sass", "vue", "angular"],
        requirements: &[],
    },
    ProfileSeed {
        id: "backend",
        title: "Backend Developer",
        must_have: &["node.js", "database", "api", "sql", "server", "rest"],
        good_to_have: &["python", "java", "mongodb", "docker", "aws", "microservices"],
        requirements: &[],
    },
    ProfileSeed {
        id: "fullstack",
        title: "Full Stack Developer",
        must_have: &["javascript", "react", "node.js", "database", "api", "fullstack"],
        good_to_have: &["typescript", "mongodb", "docker", "aws", "redux", "testing"],
        requirements: &[],
    },
    ProfileSeed {
        id: "ui-ux",
        title: "UI/UX Designer",
        must_have: &["figma", "user experience", "wireframes", "prototyping", "design"],
        good_to_have: &["adobe xd", "sketch", "user research", "usability", "interaction"],
        requirements: &[],
    },
    // Role profiles: one keyword list plus requirement phrases
    ProfileSeed {
        id: "frontend-developer",
        title: "Frontend Developer",
        must_have: &[
            "React",
            "JavaScript",
            "TypeScript",
            "HTML",
            "CSS",
            "Redux",
            "REST API",
            "Responsive Design",
        ],
        good_to_have: &[],
        requirements: &["3+ years experience", "Bachelor's degree", "Web development"],
    },
    ProfileSeed {
        id: "backend-developer",
        title: "Backend Developer",
        must_have: &[
            "Node.js",
            "Python",
            "Java",
            "SQL",
            "REST API",
            "Microservices",
            "AWS",
            "Docker",
        ],
        good_to_have: &[],
        requirements: &["API Development", "Database design", "Server architecture"],
    },
    ProfileSeed {
        id: "fullstack-developer",
        title: "Full Stack Developer",
        must_have: &[
            "React",
            "Node.js",
            "JavaScript",
            "TypeScript",
            "MongoDB",
            "REST API",
            "Git",
            "AWS",
        ],
        good_to_have: &[],
        requirements: &["Full stack development", "Database management", "API design"],
    },
    ProfileSeed {
        id: "ui-ux-designer",
        title: "UI/UX Designer",
        must_have: &[
            "Figma",
            "Adobe XD",
            "User Research",
            "Wireframing",
            "Prototyping",
            "Design Systems",
        ],
        good_to_have: &[],
        requirements: &["UI/UX principles", "Design portfolio", "User testing"],
    },
];

impl From<&ProfileSeed> for JobProfile {
    fn from(seed: &ProfileSeed) -> Self {
        JobProfile {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            must_have: owned(seed.must_have),
            good_to_have: owned(seed.good_to_have),
            requirements: owned(seed.requirements),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Named profile set, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: Vec<JobProfile>,
}

impl ProfileCatalog {
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_PROFILES.iter().map(JobProfile::from).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&JobProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn list(&self) -> &[JobProfile] {
        &self.profiles
    }

    /// Adds a profile, replacing any existing profile with the same id.
    pub fn insert(&mut self, profile: JobProfile) {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}
