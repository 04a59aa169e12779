//! Scorer: aggregates keyword matches into a 0–100 ATS score.
//!
//! Two presets share the matcher:
//! - `WeightedBonus`: must-have 70 + good-to-have 30, plus variant and
//!   context bonuses.
//! - `FormatFloorRequirement`: 40-point format floor with up to 20 format
//!   bonus, a 35-point keyword band weighted by relevance, and a 25-point
//!   requirement band.
//!
//! Scoring is total: empty documents and empty keyword lists degrade to zero
//! (or to the format floor) and never fail.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ats::lexicon::Lexicon;
use crate::ats::matcher::{
    context_window, first_occurrence, KeywordMatch, KeywordMatcher, MatchWeights,
};
use crate::ats::normalize::{fold_case_and_space, normalize_document, strip_control_chars};
use crate::ats::profiles::JobProfile;

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    #[default]
    WeightedBonus,
    FormatFloorRequirement,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::WeightedBonus => "weighted-bonus",
            ScoringMode::FormatFloorRequirement => "format-floor-requirement",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weighted-bonus" => Ok(ScoringMode::WeightedBonus),
            "format-floor-requirement" => Ok(ScoringMode::FormatFloorRequirement),
            other => Err(format!(
                "unknown scoring mode '{other}' (expected 'weighted-bonus' or 'format-floor-requirement')"
            )),
        }
    }
}

/// Every tunable constant of both presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    pub match_weights: MatchWeights,
    pub must_have_weight: f64,
    pub good_to_have_weight: f64,
    /// Points per matched variant beyond the first.
    pub variant_bonus: f64,
    /// Points per matched keyword whose context window contains an action verb.
    pub context_bonus: f64,
    pub context_radius: usize,
    pub context_verbs: Vec<String>,
    pub format_base: f64,
    pub format_bonus: f64,
    pub keyword_band: f64,
    pub requirement_band: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            match_weights: MatchWeights::default(),
            must_have_weight: 70.0,
            good_to_have_weight: 30.0,
            variant_bonus: 2.0,
            context_bonus: 2.0,
            context_radius: 50,
            context_verbs: [
                "experience",
                "project",
                "develop",
                "implement",
                "built",
                "created",
                "managed",
            ]
            .iter()
            .map(|v| v.to_string())
            .collect(),
            format_base: 40.0,
            format_bonus: 20.0,
            keyword_band: 35.0,
            requirement_band: 25.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordTier {
    MustHave,
    GoodToHave,
}

/// Per-keyword outcome of one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub keyword: String,
    pub tier: KeywordTier,
    pub found: bool,
    pub relevance: f32,
    pub matched_variants: Vec<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub profile_id: String,
    pub mode: ScoringMode,
    pub total_score: u32, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub must_have_matched: Vec<String>,
    pub good_to_have_matched: Vec<String>,
    pub format_score: f64,
    pub format_feedback: Vec<String>,
    pub keyword_score: f64,
    pub requirement_score: f64,
    pub bonus_points: f64,
    pub context_bonus: f64,
    pub keyword_results: Vec<KeywordResult>,
    pub improvements: Vec<String>,
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
    config: ScoringConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(lexicon: &'a Lexicon, config: ScoringConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores `raw_text` against `profile` with the configured mode.
    pub fn analyze(&self, raw_text: &str, profile: &JobProfile) -> ScoreReport {
        self.analyze_with_mode(raw_text, profile, self.config.mode)
    }

    pub fn analyze_with_mode(
        &self,
        raw_text: &str,
        profile: &JobProfile,
        mode: ScoringMode,
    ) -> ScoreReport {
        let document = normalize_document(raw_text);
        let results = self.match_profile(&document, profile);

        let report = match mode {
            ScoringMode::WeightedBonus => self.score_weighted_bonus(&document, profile, results),
            ScoringMode::FormatFloorRequirement => {
                self.score_format_floor(raw_text, profile, results)
            }
        };

        info!(
            profile = %profile.id,
            mode = %mode,
            keywords = profile.keyword_count(),
            score = report.total_score,
            matched = report.matched_keywords.len(),
            missing = report.missing_keywords.len(),
            "resume scanned"
        );
        report
    }

    fn match_profile(&self, document: &str, profile: &JobProfile) -> Vec<KeywordResult> {
        let matcher = KeywordMatcher::new(self.lexicon, self.config.match_weights);
        let tiered = profile
            .must_have
            .iter()
            .map(|k| (k, KeywordTier::MustHave))
            .chain(profile.good_to_have.iter().map(|k| (k, KeywordTier::GoodToHave)));

        tiered
            .map(|(keyword, tier)| {
                let m = matcher.match_keyword(document, keyword);
                let context = self.context_for(document, &m);
                KeywordResult {
                    keyword: m.keyword,
                    tier,
                    found: m.found,
                    relevance: m.relevance,
                    matched_variants: m.matched_variants,
                    context,
                }
            })
            .collect()
    }

    fn context_for(&self, document: &str, m: &KeywordMatch) -> Option<String> {
        if !m.found {
            return None;
        }
        first_occurrence(document, m)
            .map(|index| context_window(document, index, self.config.context_radius).to_string())
    }

    fn score_weighted_bonus(
        &self,
        document: &str,
        profile: &JobProfile,
        results: Vec<KeywordResult>,
    ) -> ScoreReport {
        let cfg = &self.config;
        let must_have_matched = matched_in_tier(&results, KeywordTier::MustHave);
        let good_to_have_matched = matched_in_tier(&results, KeywordTier::GoodToHave);

        let must_score = ratio(must_have_matched.len(), profile.must_have.len()) * cfg.must_have_weight;
        let good_score =
            ratio(good_to_have_matched.len(), profile.good_to_have.len()) * cfg.good_to_have_weight;

        let found: Vec<&KeywordResult> = results.iter().filter(|r| r.found).collect();
        let bonus_points: f64 = found
            .iter()
            .map(|r| r.matched_variants.len().saturating_sub(1) as f64 * cfg.variant_bonus)
            .sum();
        let context_bonus: f64 = found
            .iter()
            .filter(|r| {
                r.context
                    .as_deref()
                    .is_some_and(|window| self.has_context_verb(window))
            })
            .count() as f64
            * cfg.context_bonus;

        let raw_total = must_score + good_score + bonus_points + context_bonus;
        let total_score = raw_total.clamp(0.0, 100.0).round() as u32;
        debug!(document_len = document.len(), raw_total, "weighted score computed");

        let matched_keywords = found.iter().map(|r| r.keyword.clone()).collect();
        let missing_keywords = missing(&results);
        let improvements = build_improvements(&missing_keywords, profile);

        ScoreReport {
            profile_id: profile.id.clone(),
            mode: ScoringMode::WeightedBonus,
            total_score,
            matched_keywords,
            missing_keywords,
            must_have_matched,
            good_to_have_matched,
            format_score: 0.0,
            format_feedback: vec![],
            keyword_score: must_score + good_score,
            requirement_score: 0.0,
            bonus_points,
            context_bonus,
            keyword_results: results,
            improvements,
            feedback: build_feedback(total_score),
        }
    }

    fn score_format_floor(
        &self,
        raw_text: &str,
        profile: &JobProfile,
        results: Vec<KeywordResult>,
    ) -> ScoreReport {
        let cfg = &self.config;
        let cleaned = strip_control_chars(raw_text);

        let format_score = self.format_score(&cleaned);
        let format_feedback = format_feedback(&cleaned);

        let total_relevance: f64 = results.iter().map(|r| r.relevance as f64).sum();
        let keyword_score = if results.is_empty() {
            0.0
        } else {
            total_relevance / results.len() as f64 * cfg.keyword_band
        };

        let requirement_score = self.requirement_score(&cleaned, &profile.requirements);

        let total_score = (format_score + keyword_score + requirement_score)
            .clamp(0.0, 100.0)
            .round() as u32;

        let mut ranked: Vec<&KeywordResult> = results.iter().filter(|r| r.found).collect();
        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let matched_keywords = ranked.iter().map(|r| r.keyword.clone()).collect();
        let missing_keywords = missing(&results);
        let improvements = build_improvements(&missing_keywords, profile);

        ScoreReport {
            profile_id: profile.id.clone(),
            mode: ScoringMode::FormatFloorRequirement,
            total_score,
            matched_keywords,
            missing_keywords,
            must_have_matched: matched_in_tier(&results, KeywordTier::MustHave),
            good_to_have_matched: matched_in_tier(&results, KeywordTier::GoodToHave),
            format_score,
            format_feedback,
            keyword_score,
            requirement_score,
            bonus_points: 0.0,
            context_bonus: 0.0,
            keyword_results: results,
            improvements,
            feedback: build_feedback(total_score),
        }
    }

    fn has_context_verb(&self, window: &str) -> bool {
        let window = window.to_lowercase();
        self.config
            .context_verbs
            .iter()
            .any(|verb| window.contains(&verb.to_lowercase()))
    }

    /// Format floor plus whatever format bonus survives the penalties.
    fn format_score(&self, content: &str) -> f64 {
        let penalties: f64 = FORMAT_CHECKS
            .iter()
            .filter(|check| !(check.passes)(content))
            .map(|check| check.penalty)
            .sum();
        self.config.format_base + (self.config.format_bonus - penalties).max(0.0)
    }

    fn requirement_score(&self, content: &str, requirements: &[String]) -> f64 {
        if requirements.is_empty() {
            return 0.0;
        }
        let folded = fold_case_and_space(content);
        let per_requirement = self.config.requirement_band / requirements.len() as f64;
        requirements
            .iter()
            .map(|req| fold_case_and_space(req))
            .filter(|req| !req.is_empty() && folded.contains(req.as_str()))
            .count() as f64
            * per_requirement
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Format checks
// ────────────────────────────────────────────────────────────────────────────

lazy_static! {
    static ref EDUCATION_HEADER: Regex = Regex::new(r"(?i)education|academic|qualification").unwrap();
    static ref EXPERIENCE_HEADER: Regex =
        Regex::new(r"(?i)experience|employment|work history").unwrap();
    static ref SKILLS_HEADER: Regex = Regex::new(r"(?i)skills|expertise|competencies").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\n|\r\n\r\n").unwrap();
    static ref EXCESSIVE_BREAKS: Regex = Regex::new(r"\n{4,}").unwrap();
    static ref HEADER_LINE: Regex = Regex::new(r"[A-Z][A-Za-z\s]*:?\n").unwrap();
}

struct FormatCheck {
    penalty: f64,
    passes: fn(&str) -> bool,
}

const FORMAT_CHECKS: &[FormatCheck] = &[
    FormatCheck {
        penalty: 4.0,
        passes: |c| EDUCATION_HEADER.is_match(c),
    },
    FormatCheck {
        penalty: 4.0,
        passes: |c| EXPERIENCE_HEADER.is_match(c),
    },
    FormatCheck {
        penalty: 4.0,
        passes: |c| SKILLS_HEADER.is_match(c),
    },
    FormatCheck {
        penalty: 3.0,
        passes: |c| PARAGRAPH_BREAK.is_match(c),
    },
    FormatCheck {
        penalty: 3.0,
        passes: |c| !EXCESSIVE_BREAKS.is_match(c),
    },
    FormatCheck {
        penalty: 2.0,
        passes: |c| HEADER_LINE.is_match(c),
    },
];

fn format_feedback(content: &str) -> Vec<String> {
    let mut feedback = Vec::new();
    if !PARAGRAPH_BREAK.is_match(content) {
        feedback.push("Improve spacing between sections for better readability".to_string());
    }
    if EXCESSIVE_BREAKS.is_match(content) {
        feedback.push("Reduce excessive spacing between sections".to_string());
    }
    if !HEADER_LINE.is_match(content) {
        feedback.push("Add clear section headers".to_string());
    }
    feedback
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

fn matched_in_tier(results: &[KeywordResult], tier: KeywordTier) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.found && r.tier == tier)
        .map(|r| r.keyword.clone())
        .collect()
}

fn missing(results: &[KeywordResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| !r.found)
        .map(|r| r.keyword.clone())
        .collect()
}

/// Up to three missing keywords, then role-family suggestions.
fn build_improvements(missing_keywords: &[String], profile: &JobProfile) -> Vec<String> {
    let mut improvements = Vec::new();
    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords.iter().take(3).map(String::as_str).collect();
        improvements.push(format!("Add missing keywords: {}", top.join(", ")));
    }

    let title = profile.title.to_lowercase();
    if title.contains("developer") {
        improvements.push("Include specific technical project examples".to_string());
        improvements.push("Highlight your GitHub profile or portfolio".to_string());
    }
    if title.contains("designer") {
        improvements.push("Include links to your design portfolio".to_string());
        improvements.push("Mention specific design tools and methodologies".to_string());
    }
    improvements
}

fn build_feedback(score: u32) -> String {
    if score >= 70 {
        "Great match! Your resume is well-optimized.".to_string()
    } else if score >= 50 {
        "Good start, but consider adding the missing keywords to improve your score.".to_string()
    } else {
        "Consider revising your resume to include more relevant keywords.".to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::profiles::ProfileCatalog;

    const SCENARIO_A: &str = "Built responsive React.js applications using TypeScript and modern CSS3, strong JavaScript fundamentals, HTML5 semantics.";

    fn profile(id: &str) -> JobProfile {
        ProfileCatalog::builtin().get(id).unwrap().clone()
    }

    fn weighted(lexicon: &Lexicon) -> Scorer<'_> {
        Scorer::new(lexicon, ScoringConfig::default())
    }

    fn format_floor(lexicon: &Lexicon) -> Scorer<'_> {
        Scorer::new(
            lexicon,
            ScoringConfig {
                mode: ScoringMode::FormatFloorRequirement,
                ..ScoringConfig::default()
            },
        )
    }

    #[test]
    fn test_scenario_a_all_must_have_matched() {
        let lexicon = Lexicon::builtin();
        let frontend = profile("frontend");
        let report = weighted(&lexicon).analyze(SCENARIO_A, &frontend);

        assert_eq!(report.must_have_matched, frontend.must_have);
        assert!(report.good_to_have_matched.is_empty());
        assert!((report.keyword_score - 70.0).abs() < 1e-9);
        assert!(report.total_score >= 70, "got {}", report.total_score);
        // react and react.js both appear
        assert!(report.bonus_points >= 2.0);
    }

    #[test]
    fn test_scenario_a_variant_routes() {
        let lexicon = Lexicon::builtin();
        let report = weighted(&lexicon).analyze(SCENARIO_A, &profile("frontend"));
        let variants_of = |kw: &str| {
            report
                .keyword_results
                .iter()
                .find(|r| r.keyword == kw)
                .unwrap()
                .matched_variants
                .clone()
        };
        assert!(variants_of("css").contains(&"css3".to_string()));
        assert!(variants_of("html").contains(&"html5".to_string()));
        assert!(variants_of("react").contains(&"react.js".to_string()));
    }

    #[test]
    fn test_scenario_b_empty_document_scores_zero() {
        let lexicon = Lexicon::builtin();
        let frontend = profile("frontend");
        let report = weighted(&lexicon).analyze("", &frontend);

        assert_eq!(report.total_score, 0);
        assert!(report.matched_keywords.is_empty());
        let expected: Vec<String> = frontend.keywords().map(String::from).collect();
        assert_eq!(report.missing_keywords, expected);
        assert_eq!(report.bonus_points, 0.0);
        assert_eq!(report.context_bonus, 0.0);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let lexicon = Lexicon::builtin();
        let scorer = weighted(&lexicon);
        let p = profile("fullstack");
        let text = "Developed Node.js APIs with MongoDB and React; managed Docker deployments on AWS.";
        assert_eq!(scorer.analyze(text, &p), scorer.analyze(text, &p));
    }

    #[test]
    fn test_total_score_is_bounded() {
        let lexicon = Lexicon::builtin();
        let scorer = weighted(&lexicon);
        let p = profile("frontend");
        // every keyword and most variants, repeated: raw total exceeds 100
        let text = format!(
            "{} react reactjs react.js react hooks react native redux webpack git github gitlab \
             api rest api graphql testing jest cypress sass scss vue vuejs angular angularjs \
             javascript js es6 typescript ts html html5 css css3 tailwind responsive design",
            "built project experience ".repeat(3)
        );
        let report = scorer.analyze(&text, &p);
        assert_eq!(report.total_score, 100);

        for mode in [ScoringMode::WeightedBonus, ScoringMode::FormatFloorRequirement] {
            for text in ["", "x", SCENARIO_A] {
                let score = scorer.analyze_with_mode(text, &p, mode).total_score;
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn test_adding_missing_keyword_never_decreases_score() {
        let lexicon = Lexicon::builtin();
        let scorer = weighted(&lexicon);
        let p = profile("frontend");
        let base = "Built React applications with HTML and CSS.";
        let before = scorer.analyze(base, &p);
        assert!(before.missing_keywords.contains(&"typescript".to_string()));

        let after = scorer.analyze(&format!("{base} Typescript."), &p);
        assert!(after.total_score >= before.total_score);
        assert!(after.must_have_matched.contains(&"typescript".to_string()));
    }

    #[test]
    fn test_case_insensitive_keyword_sets() {
        let lexicon = Lexicon::builtin();
        let scorer = weighted(&lexicon);
        let p = profile("backend");
        let text = "Designed REST APIs on Node.js servers backed by PostgreSQL and Docker.";
        let lower = scorer.analyze(text, &p);
        let upper = scorer.analyze(&text.to_uppercase(), &p);
        assert_eq!(lower.matched_keywords, upper.matched_keywords);
        assert_eq!(lower.missing_keywords, upper.missing_keywords);
        assert_eq!(lower.total_score, upper.total_score);
    }

    #[test]
    fn test_variant_bonus_counts_extra_variants() {
        let lexicon = Lexicon::builtin();
        let p = JobProfile {
            id: "t".to_string(),
            title: "Tester".to_string(),
            must_have: vec!["git".to_string()],
            good_to_have: vec![],
            requirements: vec![],
        };
        let report = weighted(&lexicon).analyze("git github gitlab", &p);
        // git, github, gitlab: two beyond the first
        assert_eq!(report.bonus_points, 4.0);
        assert_eq!(report.context_bonus, 0.0);
        assert_eq!(report.total_score, 74);
    }

    fn single_keyword(keyword: &str) -> JobProfile {
        JobProfile {
            id: "t".to_string(),
            title: "Tester".to_string(),
            must_have: vec![keyword.to_string()],
            good_to_have: vec![],
            requirements: vec![],
        }
    }

    #[test]
    fn test_derived_phrasing_earns_no_variant_bonus() {
        let lexicon = Lexicon::builtin();
        let scorer = weighted(&lexicon);
        for (keyword, text) in [
            ("docker", "Skilled in Docker"),
            ("wireframes", "Wireframes design"),
            ("css", "Proficient in CSS"),
        ] {
            let report = scorer.analyze(text, &single_keyword(keyword));
            assert_eq!(report.bonus_points, 0.0, "{keyword}");
            assert_eq!(report.total_score, 70, "{keyword}");
        }
    }

    #[test]
    fn test_context_bonus_ignores_substring_of_longer_word() {
        let lexicon = Lexicon::builtin();
        let text = format!(
            "Implemented javascript widgets. {} spring services.",
            "filler ".repeat(12)
        );
        let report = weighted(&lexicon).analyze(&text, &single_keyword("java"));
        let java = &report.keyword_results[0];
        assert!(java.found);
        assert!(!java.context.as_deref().unwrap().contains("javascript"));
        assert_eq!(report.context_bonus, 0.0);
    }

    #[test]
    fn test_context_bonus_requires_action_verb_nearby() {
        let lexicon = Lexicon::builtin();
        let p = JobProfile {
            id: "t".to_string(),
            title: "Tester".to_string(),
            must_have: vec!["docker".to_string()],
            good_to_have: vec![],
            requirements: vec![],
        };
        let scorer = weighted(&lexicon);
        let with_verb = scorer.analyze("I implemented docker pipelines", &p);
        assert_eq!(with_verb.context_bonus, 2.0);

        let far = format!("{} docker", "word ".repeat(20));
        let far = format!("implemented {far}");
        let without = scorer.analyze(&far, &p);
        assert_eq!(without.context_bonus, 0.0);
    }

    #[test]
    fn test_empty_profile_lists_degrade_to_zero() {
        let lexicon = Lexicon::builtin();
        let p = JobProfile {
            id: "empty".to_string(),
            title: "Empty".to_string(),
            must_have: vec![],
            good_to_have: vec![],
            requirements: vec![],
        };
        let report = weighted(&lexicon).analyze(SCENARIO_A, &p);
        assert_eq!(report.total_score, 0);
        assert!(report.improvements.is_empty());

        let report = format_floor(&lexicon).analyze(SCENARIO_A, &p);
        assert_eq!(report.keyword_score, 0.0);
        assert_eq!(report.requirement_score, 0.0);
    }

    #[test]
    fn test_format_floor_empty_document() {
        let lexicon = Lexicon::builtin();
        let report = format_floor(&lexicon).analyze("", &profile("frontend-developer"));
        // 40 floor + 20 bonus - 4*3 sections - 3 spacing - 2 headers
        assert_eq!(report.format_score, 43.0);
        assert_eq!(report.keyword_score, 0.0);
        assert_eq!(report.requirement_score, 0.0);
        assert_eq!(report.total_score, 43);
        assert_eq!(report.format_feedback.len(), 2);
    }

    #[test]
    fn test_format_floor_full_document_clamps_to_100() {
        let lexicon = Lexicon::builtin();
        let text = "Summary\nFrontend engineer with 3+ years experience in Web development.\n\n\
                    Experience\nBuilt React and Redux apps.\n\n\
                    Education\nBachelor's degree in CS\n\n\
                    Skills\nJavaScript, TypeScript, HTML, CSS, REST API, Responsive Design";
        let report = format_floor(&lexicon).analyze(text, &profile("frontend-developer"));
        assert_eq!(report.format_score, 60.0);
        assert!((report.keyword_score - 35.0).abs() < 1e-6);
        assert!((report.requirement_score - 25.0).abs() < 1e-9);
        assert_eq!(report.total_score, 100);
        assert!(report.missing_keywords.is_empty());
        assert!(report.format_feedback.is_empty());
    }

    #[test]
    fn test_format_floor_partial_requirements_and_relevance_order() {
        let lexicon = Lexicon::builtin();
        let p = JobProfile {
            id: "t".to_string(),
            title: "UI/UX Designer".to_string(),
            must_have: vec!["design systems".to_string(), "figma".to_string()],
            good_to_have: vec![],
            requirements: vec!["Design portfolio".to_string(), "User testing".to_string()],
        };
        let text = "Figma work and a DESIGN PORTFOLIO; systems thinking.";
        let report = format_floor(&lexicon).analyze(text, &p);

        assert!((report.requirement_score - 12.5).abs() < 1e-9);
        // figma exact (1.0) ranks ahead of the compound match (0.7)
        assert_eq!(report.matched_keywords, vec!["figma", "design systems"]);
        let expected_keywords = (1.0 + 0.7) / 2.0 * 35.0;
        assert!((report.keyword_score - expected_keywords).abs() < 1e-4);
        assert!(report
            .improvements
            .iter()
            .any(|i| i.contains("design portfolio")));
    }

    #[test]
    fn test_improvements_list_top_three_missing_and_developer_tips() {
        let lexicon = Lexicon::builtin();
        let report = weighted(&lexicon).analyze("nothing here", &profile("backend"));
        assert_eq!(
            report.improvements[0],
            "Add missing keywords: node.js, database, api"
        );
        assert!(report.improvements.iter().any(|i| i.contains("GitHub")));
        assert!(!report.improvements.iter().any(|i| i.contains("design portfolio")));
    }

    #[test]
    fn test_feedback_bands() {
        assert!(build_feedback(85).starts_with("Great match"));
        assert!(build_feedback(55).starts_with("Good start"));
        assert!(build_feedback(10).starts_with("Consider revising"));
    }

    #[test]
    fn test_scoring_mode_parsing() {
        assert_eq!(
            "format-floor-requirement".parse::<ScoringMode>().unwrap(),
            ScoringMode::FormatFloorRequirement
        );
        assert_eq!(
            " Weighted-Bonus ".parse::<ScoringMode>().unwrap(),
            ScoringMode::WeightedBonus
        );
        assert!("fancy".parse::<ScoringMode>().is_err());
        let json = serde_json::to_string(&ScoringMode::FormatFloorRequirement).unwrap();
        assert_eq!(json, r#""format-floor-requirement""#);
    }
}
