//! Completeness scoring against a fixed rubric

use crate::error::{Result, ScannerError};
use crate::parser::resume::ResumeDraft;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reference vocabulary of common technology terms used for the keyword
/// portion of the completeness score.
pub const COMMON_SKILLS: [&str; 15] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "SQL",
    "AWS",
    "Docker",
    "Git",
    "REST API",
    "GraphQL",
    "HTML",
    "CSS",
    "MongoDB",
];

/// Category weights of the scoring rubric. The maxima sum to 100, so the
/// total is bounded by construction.
const NAME_POINTS: u8 = 10;
const EMAIL_POINTS: u8 = 10;
const PHONE_POINTS: u8 = 5;
const SUMMARY_POINTS: u8 = 10;
const SKILLS_POINTS: u8 = 15;
const EXPERIENCE_POINTS: u8 = 20;
const EDUCATION_POINTS: u8 = 15;
const KEYWORD_POINTS_EACH: u8 = 3;
const KEYWORD_POINTS_MAX: u8 = 15;

/// Completeness report for a structured resume. Recomputed from scratch on
/// every call; carries no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsMetrics {
    pub has_name: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_summary: bool,
    pub keyword_matches: usize,
    pub total_score: u8,
    pub suggestions: Vec<String>,
}

/// Scores a resume draft for completeness and reference-keyword coverage.
pub struct CompletenessScorer {
    matcher: AhoCorasick,
}

impl CompletenessScorer {
    pub fn new() -> Result<Self> {
        Self::with_custom_vocabulary(Vec::new())
    }

    /// Extend the reference vocabulary with additional terms. The rubric
    /// itself is fixed; extra terms only widen the keyword scan.
    pub fn with_custom_vocabulary(additional: Vec<String>) -> Result<Self> {
        let mut vocabulary: Vec<String> = COMMON_SKILLS.iter().map(|s| s.to_string()).collect();
        vocabulary.extend(additional);

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&vocabulary)
            .map_err(|e| {
                ScannerError::Processing(format!("Failed to build keyword matcher: {}", e))
            })?;

        Ok(Self { matcher })
    }

    pub fn score(&self, resume: &ResumeDraft) -> Result<AtsMetrics> {
        let mut metrics = AtsMetrics {
            has_name: !resume.personal_info.name.is_empty(),
            has_email: !resume.personal_info.email.is_empty(),
            has_phone: !resume.personal_info.phone.is_empty(),
            has_experience: !resume.experience.is_empty(),
            has_education: !resume.education.is_empty(),
            has_skills: !resume.skills.is_empty(),
            has_summary: !resume.summary.is_empty(),
            keyword_matches: 0,
            total_score: 0,
            suggestions: Vec::new(),
        };

        metrics.keyword_matches = self.count_keyword_matches(resume)?;

        let keyword_points = (metrics.keyword_matches * KEYWORD_POINTS_EACH as usize)
            .min(KEYWORD_POINTS_MAX as usize) as u8;

        let category_points = [
            (metrics.has_name, NAME_POINTS),
            (metrics.has_email, EMAIL_POINTS),
            (metrics.has_phone, PHONE_POINTS),
            (metrics.has_summary, SUMMARY_POINTS),
            (metrics.has_skills, SKILLS_POINTS),
            (metrics.has_experience, EXPERIENCE_POINTS),
            (metrics.has_education, EDUCATION_POINTS),
        ];

        metrics.total_score = category_points
            .iter()
            .map(|(present, points)| if *present { *points } else { 0 })
            .sum::<u8>()
            + keyword_points;

        metrics.suggestions = Self::suggestions(&metrics);

        Ok(metrics)
    }

    /// Number of vocabulary entries appearing anywhere in the serialized
    /// resume content, case-insensitively. Overlapping matches are counted so
    /// that "JavaScript" also satisfies "Java".
    fn count_keyword_matches(&self, resume: &ResumeDraft) -> Result<usize> {
        let serialized = serde_json::to_string(resume)?;

        let mut found: HashSet<usize> = HashSet::new();
        for hit in self.matcher.find_overlapping_iter(&serialized) {
            found.insert(hit.pattern().as_usize());
        }

        Ok(found.len())
    }

    /// One suggestion per missing category, in fixed order, plus a generic
    /// keyword nudge when coverage is thin. Driven purely by the flags,
    /// independent of the numeric total.
    fn suggestions(metrics: &AtsMetrics) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !metrics.has_name {
            suggestions.push("Add your full name".to_string());
        }
        if !metrics.has_email {
            suggestions.push("Include your email address".to_string());
        }
        if !metrics.has_phone {
            suggestions.push("Add your phone number".to_string());
        }
        if !metrics.has_summary {
            suggestions.push("Add a professional summary".to_string());
        }
        if !metrics.has_skills {
            suggestions.push("List your key skills".to_string());
        }
        if !metrics.has_experience {
            suggestions.push("Add your work experience".to_string());
        }
        if !metrics.has_education {
            suggestions.push("Include your education".to_string());
        }
        if metrics.keyword_matches < 3 {
            suggestions.push("Add more relevant skills and keywords".to_string());
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn full_draft() -> ResumeDraft {
        ResumeDraft {
            personal_info: PersonalInfo {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                location: String::new(),
            },
            summary: "Backend developer".to_string(),
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "SQL".to_string(),
                "AWS".to_string(),
                "Docker".to_string(),
            ],
            experience: vec![ExperienceEntry {
                id: "1".to_string(),
                job_title: "Engineer".to_string(),
                company: "Acme".to_string(),
                start_date: "Jan 2021".to_string(),
                end_date: "Present".to_string(),
                description: "Built services".to_string(),
            }],
            education: vec![EducationEntry {
                id: "2".to_string(),
                degree: "BSc".to_string(),
                school: "State University".to_string(),
                start_date: String::new(),
                end_date: String::new(),
                description: String::new(),
            }],
        }
    }

    #[test]
    fn test_empty_draft_scores_zero() {
        let scorer = CompletenessScorer::new().unwrap();
        let metrics = scorer.score(&ResumeDraft::default()).unwrap();

        assert_eq!(metrics.total_score, 0);
        assert_eq!(metrics.keyword_matches, 0);
        assert!(!metrics.has_name);
        assert_eq!(metrics.suggestions.len(), 8);
    }

    #[test]
    fn test_complete_draft_scores_one_hundred() {
        let scorer = CompletenessScorer::new().unwrap();
        let metrics = scorer.score(&full_draft()).unwrap();

        // JavaScript, Java (substring), React, SQL, AWS, Docker >= 5 matches,
        // so the keyword category is saturated at 15.
        assert!(metrics.keyword_matches >= 5);
        assert_eq!(metrics.total_score, 100);
        assert!(metrics.suggestions.is_empty());
    }

    #[test]
    fn test_rubric_is_additive() {
        let scorer = CompletenessScorer::new().unwrap();
        let mut draft = ResumeDraft::default();
        draft.personal_info.name = "Jane".to_string();
        draft.summary = "Engineer".to_string();

        let metrics = scorer.score(&draft).unwrap();
        assert_eq!(metrics.total_score, 10 + 10);
    }

    #[test]
    fn test_keyword_points_are_capped() {
        let scorer = CompletenessScorer::new().unwrap();
        let mut draft = ResumeDraft::default();
        draft.skills = COMMON_SKILLS.iter().map(|s| s.to_string()).collect();

        let metrics = scorer.score(&draft).unwrap();
        assert_eq!(metrics.keyword_matches, 15);
        // 15 for skills present, 15 for the saturated keyword category.
        assert_eq!(metrics.total_score, 30);
    }

    #[test]
    fn test_substring_matching_counts_contained_terms() {
        let scorer = CompletenessScorer::new().unwrap();
        let mut draft = ResumeDraft::default();
        draft.skills = vec!["JavaScript".to_string()];

        let metrics = scorer.score(&draft).unwrap();
        // "JavaScript" contains "Java".
        assert_eq!(metrics.keyword_matches, 2);
    }

    #[test]
    fn test_suggestions_fixed_order() {
        let scorer = CompletenessScorer::new().unwrap();
        let metrics = scorer.score(&ResumeDraft::default()).unwrap();

        assert_eq!(
            metrics.suggestions,
            vec![
                "Add your full name",
                "Include your email address",
                "Add your phone number",
                "Add a professional summary",
                "List your key skills",
                "Add your work experience",
                "Include your education",
                "Add more relevant skills and keywords",
            ]
        );
    }

    #[test]
    fn test_keyword_suggestion_dropped_at_three_matches() {
        let scorer = CompletenessScorer::new().unwrap();
        let mut draft = ResumeDraft::default();
        draft.skills = vec![
            "Python".to_string(),
            "Docker".to_string(),
            "MongoDB".to_string(),
        ];

        let metrics = scorer.score(&draft).unwrap();
        assert_eq!(metrics.keyword_matches, 3);
        assert!(!metrics
            .suggestions
            .iter()
            .any(|s| s == "Add more relevant skills and keywords"));
    }

    #[test]
    fn test_custom_vocabulary_extends_scan() {
        let scorer =
            CompletenessScorer::with_custom_vocabulary(vec!["Kafka".to_string()]).unwrap();
        let mut draft = ResumeDraft::default();
        draft.skills = vec!["Kafka".to_string()];

        let metrics = scorer.score(&draft).unwrap();
        assert_eq!(metrics.keyword_matches, 1);
    }

    #[test]
    fn test_score_bounded_for_any_draft() {
        let scorer = CompletenessScorer::new().unwrap();
        for draft in [ResumeDraft::default(), full_draft()] {
            let metrics = scorer.score(&draft).unwrap();
            assert!(metrics.total_score <= 100);
        }
    }
}
