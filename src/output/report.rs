//! Report structures handed to the output formatters

use crate::parser::resume::ResumeDraft;
use crate::scoring::completeness::AtsMetrics;
use crate::scoring::job_match::JobMatchReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Generation info attached to every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub source_file: String,
    pub word_count: usize,
    pub character_count: usize,
}

impl ReportMetadata {
    pub fn for_document(source_file: &str, text: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            source_file: source_file.to_string(),
            word_count: text.unicode_words().count(),
            character_count: text.chars().count(),
        }
    }
}

/// Result of the `scan` command: the extracted draft plus its completeness
/// score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub resume: ResumeDraft,
    pub ats: AtsMetrics,
    pub metadata: ReportMetadata,
}

/// Result of the `match` command: keyword overlap between a resume and a job
/// description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: JobMatchReport,
    pub resume_file: String,
    pub job_file: String,
    pub generated_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn new(outcome: JobMatchReport, resume_file: &str, job_file: &str) -> Self {
        Self {
            outcome,
            resume_file: resume_file.to_string(),
            job_file: job_file.to_string(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_counts() {
        let metadata = ReportMetadata::for_document("resume.txt", "two words");
        assert_eq!(metadata.source_file, "resume.txt");
        assert_eq!(metadata.word_count, 2);
        assert_eq!(metadata.character_count, 9);
    }
}
