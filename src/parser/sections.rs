//! Section segmentation by header-keyword line matching

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The section labels the segmenter recognizes. Variant order here is the
/// match precedence: a line matching several patterns is filed under the
/// earliest-declared label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
    ];
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Summary => write!(f, "Summary"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Education => write!(f, "Education"),
            SectionKind::Skills => write!(f, "Skills"),
        }
    }
}

/// Splits raw resume text into labeled blocks using header-keyword matching.
pub struct SectionSegmenter {
    patterns: Vec<(SectionKind, Regex)>,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSegmenter {
    pub fn new() -> Self {
        let patterns = vec![
            (
                SectionKind::Summary,
                Regex::new(r"(?i)summary|about|profile").expect("Invalid summary pattern"),
            ),
            (
                SectionKind::Experience,
                Regex::new(r"(?i)experience|work\s+history|employment")
                    .expect("Invalid experience pattern"),
            ),
            (
                SectionKind::Education,
                Regex::new(r"(?i)education|academic").expect("Invalid education pattern"),
            ),
            (
                SectionKind::Skills,
                Regex::new(r"(?i)skills|technical\s+skills|technologies")
                    .expect("Invalid skills pattern"),
            ),
        ];

        Self { patterns }
    }

    /// Split `text` into per-section blocks. Each block starts with the header
    /// line that opened it; lines before the first recognized header are
    /// discarded. A repeated header for the same label restarts that label's
    /// block. Returns an empty map when no header matches.
    pub fn segment(&self, text: &str) -> HashMap<SectionKind, String> {
        let mut sections: HashMap<SectionKind, String> = HashMap::new();
        let mut current: Option<SectionKind> = None;

        for line in text.lines() {
            if let Some(kind) = self.classify(line) {
                current = Some(kind);
                let block = sections.entry(kind).or_default();
                block.clear();
                block.push_str(line);
                block.push('\n');
            } else if let Some(kind) = current {
                let block = sections.entry(kind).or_default();
                block.push_str(line);
                block.push('\n');
            }
        }

        sections
    }

    fn classify(&self, line: &str) -> Option<SectionKind> {
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(line))
            .map(|(kind, _)| *kind)
    }
}

/// The lines of a section block after its header line.
pub fn section_body(block: &str) -> &str {
    block.split_once('\n').map(|(_, rest)| rest).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let segmenter = SectionSegmenter::new();
        let text = "Summary\nSeasoned developer\n\nSkills\nRust, Python\n";

        let sections = segmenter.segment(text);

        assert_eq!(
            sections.get(&SectionKind::Summary).map(String::as_str),
            Some("Summary\nSeasoned developer\n\n")
        );
        assert_eq!(
            sections.get(&SectionKind::Skills).map(String::as_str),
            Some("Skills\nRust, Python\n")
        );
    }

    #[test]
    fn test_declared_order_precedence() {
        let segmenter = SectionSegmenter::new();
        // Matches both the summary and skills patterns; summary is declared
        // first and must win.
        let sections = segmenter.segment("Profile of skills\ndetail\n");

        assert!(sections.contains_key(&SectionKind::Summary));
        assert!(!sections.contains_key(&SectionKind::Skills));
    }

    #[test]
    fn test_no_headers_yields_empty_map() {
        let segmenter = SectionSegmenter::new();
        let sections = segmenter.segment("John Doe\njohn@example.com\n555-123-4567\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_preamble_lines_are_discarded() {
        let segmenter = SectionSegmenter::new();
        let sections = segmenter.segment("John Doe\nSome street\nEducation\nState University\n");

        assert_eq!(sections.len(), 1);
        let block = sections.get(&SectionKind::Education).unwrap();
        assert!(!block.contains("John Doe"));
        assert!(block.contains("State University"));
    }

    #[test]
    fn test_repeated_header_resets_block() {
        let segmenter = SectionSegmenter::new();
        let text = "Skills\nRust\nTechnologies\nPython\n";

        let sections = segmenter.segment(text);

        let block = sections.get(&SectionKind::Skills).unwrap();
        assert_eq!(block, "Technologies\nPython\n");
    }

    #[test]
    fn test_section_body_strips_header_line() {
        assert_eq!(section_body("Skills\nRust, Python\n"), "Rust, Python\n");
        assert_eq!(section_body("Skills"), "");
    }

    #[test]
    fn test_case_insensitive_headers() {
        let segmenter = SectionSegmenter::new();
        let sections = segmenter.segment("WORK HISTORY\nEngineer at Acme\n");
        assert!(sections.contains_key(&SectionKind::Experience));
    }
}
