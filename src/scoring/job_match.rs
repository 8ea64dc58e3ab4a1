//! Keyword-overlap matching between a resume and a job description

use crate::error::{Result, ScannerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display cap for the found/missing keyword lists. The score is always
/// computed over the full candidate set before this truncation is applied.
pub const MAX_DISPLAY_KEYWORDS: usize = 20;

const MIN_KEYWORD_LEN: usize = 3;

/// A job-description keyword found in the resume, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: usize,
}

/// Keyword-overlap report. `found` and `missing` are truncated display lists
/// (at most [`MAX_DISPLAY_KEYWORDS`] entries each); `candidate_count` and
/// `found_count` carry the full-set numbers the score was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchReport {
    /// Percentage of candidate keywords present in the resume, 0-100.
    pub score: u8,
    /// Found keywords, highest occurrence count first.
    pub found: Vec<KeywordHit>,
    /// Absent keywords, in job-description discovery order.
    pub missing: Vec<String>,
    pub candidate_count: usize,
    pub found_count: usize,
}

/// Standalone keyword-overlap calculator. Extracts candidate keywords from a
/// job description and checks them against resume text; no segmentation or
/// field extraction involved.
pub struct JobMatcher {
    stop_words: HashSet<&'static str>,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl JobMatcher {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
        }
    }

    /// Compare resume text against a job description. Never divides by zero:
    /// a job description with no usable keywords scores 0.
    pub fn match_against(&self, resume_text: &str, job_text: &str) -> Result<JobMatchReport> {
        let resume_text = resume_text.to_lowercase();
        let job_text = job_text.to_lowercase();

        let candidates = self.extract_candidates(&job_text);

        let mut found = Vec::new();
        let mut missing = Vec::new();

        for keyword in &candidates {
            let count = Self::count_occurrences(&resume_text, keyword)?;
            if count > 0 {
                found.push(KeywordHit {
                    keyword: keyword.clone(),
                    count,
                });
            } else {
                missing.push(keyword.clone());
            }
        }

        let score = if candidates.is_empty() {
            0
        } else {
            (found.len() as f64 / candidates.len() as f64 * 100.0).round() as u8
        };

        let candidate_count = candidates.len();
        let found_count = found.len();

        // Stable sort keeps discovery order among equal counts.
        found.sort_by(|a, b| b.count.cmp(&a.count));
        found.truncate(MAX_DISPLAY_KEYWORDS);
        missing.truncate(MAX_DISPLAY_KEYWORDS);

        Ok(JobMatchReport {
            score,
            found,
            missing,
            candidate_count,
            found_count,
        })
    }

    /// Candidate keywords: whitespace tokens stripped of non-alphanumeric
    /// characters, at least [`MIN_KEYWORD_LEN`] long, not stop words,
    /// de-duplicated preserving first appearance.
    fn extract_candidates(&self, job_text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for token in job_text.split_whitespace() {
            let word: String = token.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
            if word.len() < MIN_KEYWORD_LEN || self.stop_words.contains(word.as_str()) {
                continue;
            }
            if seen.insert(word.clone()) {
                candidates.push(word);
            }
        }

        candidates
    }

    /// Word-boundary-delimited occurrence count of `keyword` in `text`.
    fn count_occurrences(text: &str, keyword: &str) -> Result<usize> {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
            .map_err(|e| ScannerError::Processing(format!("Invalid keyword pattern: {}", e)))?;
        Ok(pattern.find_iter(text).count())
    }

    fn create_stop_words() -> HashSet<&'static str> {
        [
            "the", "and", "or", "but", "a", "an", "in", "on", "at", "to", "for", "with", "as",
            "by", "of", "is", "are", "was", "were", "be", "this", "that", "these", "those", "it",
            "its", "our", "we", "you", "they", "them", "their", "your", "my", "mine", "have",
            "has", "had", "do", "does", "did", "will", "would", "should", "could", "can", "may",
            "might", "must", "shall",
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_description_scores_zero() {
        let matcher = JobMatcher::new();
        let report = matcher.match_against("a resume full of words", "").unwrap();

        assert_eq!(report.score, 0);
        assert_eq!(report.candidate_count, 0);
        assert!(report.found.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_stop_words_only_scores_zero() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against("some resume", "the and with should could must")
            .unwrap();

        assert_eq!(report.score, 0);
        assert_eq!(report.candidate_count, 0);
    }

    #[test]
    fn test_found_and_missing_split() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against(
                "Rust engineer building Python services",
                "Looking for Rust and Python developers, Tokio welcome",
            )
            .unwrap();

        // Candidates: looking, rust, python, developers, tokio, welcome.
        assert_eq!(report.candidate_count, 6);
        assert_eq!(report.found_count, 2);
        assert!(report.found.iter().any(|hit| hit.keyword == "rust"));
        assert!(report.found.iter().any(|hit| hit.keyword == "python"));
        assert!(report.missing.contains(&"tokio".to_string()));
        assert_eq!(report.score, 33);
    }

    #[test]
    fn test_occurrences_counted_and_sorted_descending() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against(
                "rust rust rust python",
                "rust python",
            )
            .unwrap();

        assert_eq!(report.found[0].keyword, "rust");
        assert_eq!(report.found[0].count, 3);
        assert_eq!(report.found[1].keyword, "python");
        assert_eq!(report.found[1].count, 1);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_word_boundary_matching() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against("I know javascript well", "java developer wanted")
            .unwrap();

        // "java" must not match inside "javascript".
        assert!(report.missing.contains(&"java".to_string()));
        assert!(report.found.is_empty());
    }

    #[test]
    fn test_punctuation_stripped_from_candidates() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against("experience with nodejs services", "Node.js required!")
            .unwrap();

        // "Node.js" strips to "nodejs", "required!" to "required".
        assert!(report.found.iter().any(|hit| hit.keyword == "nodejs"));
        assert!(report.missing.contains(&"required".to_string()));
    }

    #[test]
    fn test_candidates_deduplicated() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against("", "rust rust rust")
            .unwrap();

        assert_eq!(report.candidate_count, 1);
        assert_eq!(report.missing, vec!["rust".to_string()]);
    }

    #[test]
    fn test_display_truncation_keeps_full_score() {
        let matcher = JobMatcher::new();
        let job: String = (0..30).map(|i| format!("keyword{:02} ", i)).collect();
        let report = matcher.match_against("nothing relevant", &job).unwrap();

        assert_eq!(report.candidate_count, 30);
        assert_eq!(report.missing.len(), MAX_DISPLAY_KEYWORDS);
        assert_eq!(report.score, 0);

        // Found side: resume containing half of them still scores over the
        // full set, not over the truncated display list.
        let resume: String = (0..15).map(|i| format!("keyword{:02} ", i)).collect();
        let report = matcher.match_against(&resume, &job).unwrap();
        assert_eq!(report.found_count, 15);
        assert_eq!(report.score, 50);
    }

    #[test]
    fn test_score_rounding() {
        let matcher = JobMatcher::new();
        let report = matcher
            .match_against("alpha beta", "alpha beta gamma")
            .unwrap();

        // 2 of 3 -> 66.67 rounds to 67.
        assert_eq!(report.score, 67);
    }
}
