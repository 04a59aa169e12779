//! Lexicon: curated variant spellings for canonical keywords.
//!
//! Pure data. Unknown keywords have no variants and degrade to exact plus
//! auto-derived matching in the matcher.

use std::collections::HashMap;

/// Variants surfaced by the resume scanner (abbreviations, ecosystem terms,
/// role phrasing).
const SCANNER_VARIANTS: &[(&str, &[&str])] = &[
    (
        "react",
        &[
            "reactjs",
            "react.js",
            "react native",
            "react hooks",
            "react framework",
            "react applications",
            "react development",
            "react components",
        ],
    ),
    (
        "javascript",
        &[
            "js",
            "es6",
            "es2015",
            "vanilla javascript",
            "ecmascript",
            "javascript development",
            "javascript programming",
            "js development",
            "javascript applications",
        ],
    ),
    (
        "typescript",
        &[
            "ts",
            "typed javascript",
            "typescript development",
            "type system",
            "typescript programming",
            ".ts",
            "typescript applications",
        ],
    ),
    (
        "node.js",
        &[
            "nodejs",
            "node",
            "express.js",
            "expressjs",
            "node development",
            "node.js development",
            "node backend",
            "node server",
        ],
    ),
    (
        "html",
        &[
            "html5",
            "semantic html",
            "html/css",
            "html markup",
            "html development",
            "html coding",
            "html structure",
        ],
    ),
    (
        "css",
        &[
            "css3",
            "scss",
            "sass",
            "styled-components",
            "tailwind",
            "bootstrap",
            "css frameworks",
            "cascading style sheets",
            "css styling",
            "css design",
        ],
    ),
    (
        "responsive",
        &[
            "responsive design",
            "mobile-first",
            "adaptive design",
            "responsive layout",
            "responsive development",
            "cross-platform",
            "multi-device",
        ],
    ),
    (
        "api",
        &[
            "rest api",
            "restful",
            "graphql",
            "web services",
            "endpoints",
            "api development",
            "api integration",
            "api design",
            "web api",
        ],
    ),
    (
        "database",
        &[
            "sql",
            "mysql",
            "postgresql",
            "mongodb",
            "nosql",
            "oracle",
            "database management",
            "database design",
            "data storage",
        ],
    ),
    (
        "testing",
        &[
            "jest",
            "cypress",
            "unit testing",
            "e2e",
            "test driven",
            "testing frameworks",
            "automated testing",
            "qa testing",
            "quality assurance",
        ],
    ),
    (
        "git",
        &[
            "github",
            "gitlab",
            "version control",
            "bitbucket",
            "git repository",
            "source control",
            "git management",
        ],
    ),
    (
        "docker",
        &[
            "containerization",
            "kubernetes",
            "k8s",
            "container",
            "docker containers",
            "docker images",
            "containerized",
        ],
    ),
    (
        "aws",
        &[
            "amazon web services",
            "cloud",
            "s3",
            "ec2",
            "lambda",
            "aws services",
            "aws cloud",
            "amazon cloud",
        ],
    ),
    (
        "figma",
        &[
            "figma design",
            "ui design",
            "interface design",
            "figma prototyping",
            "figma tools",
            "design system",
        ],
    ),
    (
        "user experience",
        &[
            "ux",
            "user research",
            "usability",
            "user interface",
            "ui/ux",
            "ux design",
            "user-centered",
            "user-focused",
        ],
    ),
];

/// Skill-family variants (languages, frameworks, cloud, design tools).
/// Appended after the scanner variants for keys present in both.
const SKILL_VARIANTS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &["js", "es6", "es2015", "ecmascript", "vanilla javascript", "vanilla js"],
    ),
    ("typescript", &["ts", "typed js", "typed javascript"]),
    ("python", &["py", "python3", "python2", "django", "flask"]),
    ("java", &["j2ee", "java8", "java11", "spring", "spring boot"]),
    (
        "react",
        &["reactjs", "react.js", "react native", "react hooks", "redux"],
    ),
    (
        "angular",
        &["angular.js", "angularjs", "angular2+", "angular cli"],
    ),
    ("vue", &["vuejs", "vue.js", "vue3", "vuex", "vue router"]),
    (
        "node.js",
        &["nodejs", "node", "express.js", "expressjs", "npm"],
    ),
    (
        "sql",
        &["mysql", "postgresql", "oracle sql", "sql server", "tsql"],
    ),
    ("nosql", &["mongodb", "dynamodb", "cassandra", "couchdb"]),
    (
        "aws",
        &["amazon web services", "ec2", "s3", "lambda", "cloudfront"],
    ),
    (
        "docker",
        &["containerization", "docker-compose", "kubernetes", "k8s"],
    ),
    (
        "ci/cd",
        &[
            "continuous integration",
            "continuous deployment",
            "jenkins",
            "gitlab ci",
        ],
    ),
    (
        "figma",
        &["figma design", "figma prototyping", "figma components"],
    ),
    ("adobe xd", &["xd", "adobe experience design"]),
    (
        "ui/ux",
        &["user interface", "user experience", "ux design", "ui design"],
    ),
    (
        "agile",
        &["scrum", "kanban", "sprint planning", "agile methodologies"],
    ),
    ("git", &["github", "gitlab", "bitbucket", "version control"]),
    (
        "api",
        &["rest api", "graphql", "soap", "api development", "swagger"],
    ),
];

/// Canonical keyword → ordered variant list.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// The built-in lexicon: scanner variants first, skill variants merged in.
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();
        for table in [SCANNER_VARIANTS, SKILL_VARIANTS] {
            for (keyword, variants) in table {
                lexicon.extend_entry(keyword, variants.iter().copied());
            }
        }
        lexicon
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for (keyword, variants) in entries {
            lexicon.extend_entry(keyword.as_ref(), variants.iter().map(|v| v.as_ref()));
        }
        lexicon
    }

    /// Appends every entry of `other`, keeping existing variant order.
    pub fn merge(&mut self, other: Lexicon) {
        for (keyword, variants) in other.entries {
            self.extend_entry(&keyword, variants.iter().map(String::as_str));
        }
    }

    /// Configured variants for `keyword` (case-insensitive); empty when unknown.
    pub fn variants_of(&self, keyword: &str) -> &[String] {
        self.entries
            .get(&keyword.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn extend_entry<'a>(&mut self, keyword: &str, variants: impl Iterator<Item = &'a str>) {
        let key = keyword.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        let list = self.entries.entry(key.clone()).or_default();
        for variant in variants {
            let variant = variant.trim().to_lowercase();
            if variant.is_empty() || variant == key || list.contains(&variant) {
                continue;
            }
            list.push(variant);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_of_known_keyword() {
        let lexicon = Lexicon::builtin();
        let variants = lexicon.variants_of("react");
        assert_eq!(variants[0], "reactjs");
        assert!(variants.iter().any(|v| v == "react.js"));
        // "redux" only comes from the skill table
        assert!(variants.iter().any(|v| v == "redux"));
    }

    #[test]
    fn test_variants_of_is_case_insensitive() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.variants_of("Node.JS"), lexicon.variants_of("node.js"));
        assert!(lexicon.variants_of("NODE.js").contains(&"nodejs".to_string()));
    }

    #[test]
    fn test_unknown_keyword_has_no_variants() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.variants_of("wireframes").is_empty());
    }

    #[test]
    fn test_merged_tables_do_not_duplicate_variants() {
        let lexicon = Lexicon::builtin();
        let js = lexicon.variants_of("javascript");
        let count = js.iter().filter(|v| *v == "es6").count();
        assert_eq!(count, 1);
        assert!(js.iter().any(|v| v == "vanilla js"));
    }

    #[test]
    fn test_from_entries_normalizes_case_and_drops_empties() {
        let lexicon = Lexicon::from_entries(vec![("Rust", vec!["RustLang", "", "rust"])]);
        assert_eq!(lexicon.variants_of("rust"), ["rustlang".to_string()]);
    }

    #[test]
    fn test_merge_extends_existing_entry() {
        let mut lexicon = Lexicon::builtin();
        let before = lexicon.variants_of("git").len();
        lexicon.merge(Lexicon::from_entries(vec![("git", vec!["git flow", "github"])]));
        let after = lexicon.variants_of("git");
        assert_eq!(after.len(), before + 1);
        assert_eq!(after.last().map(String::as_str), Some("git flow"));
    }
}
