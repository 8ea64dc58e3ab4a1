//! Experience and education entry extraction

use crate::parser::ids::IdGenerator;
use crate::parser::resume::{EducationEntry, ExperienceEntry};
use regex::Regex;

/// Extracts dated entries from the experience and education sections.
/// Entries are blank-line-delimited; anything too short or (for experience)
/// with an unparsable first line is dropped whole, never emitted partially.
pub struct EntryExtractor {
    entry_split: Regex,
    title_at: Regex,
    title_delim: Regex,
    date_range: Regex,
    date_range_to: Regex,
    edu_date_range: Regex,
}

impl Default for EntryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryExtractor {
    pub fn new() -> Self {
        let entry_split = Regex::new(r"\n\s*\n").expect("Invalid entry split regex");

        // "<title> at <company>", tolerating a trailing parenthetical.
        let title_at =
            Regex::new(r"(?i)^(.+?)\s*at\s*(.+?)(?:\(.*\))?$").expect("Invalid title regex");

        // Fallback: "<title>, <company>" or "<title>-<company>".
        let title_delim = Regex::new(r"^(.+?)[,-]\s*(.+)$").expect("Invalid title fallback regex");

        let date_range = Regex::new(r"(?i)(\w+\s*\d{4})\s*-\s*(Present|\w+\s*\d{4})")
            .expect("Invalid date range regex");

        let date_range_to = Regex::new(r"(?i)(\w+\s*\d{4})\s*to\s*(Present|\w+\s*\d{4})")
            .expect("Invalid date range regex");

        let edu_date_range = Regex::new(r"(?i)(\w+\s*\d{4})\s*-\s*(\w+\s*\d{4}|Present)")
            .expect("Invalid education date regex");

        Self {
            entry_split,
            title_at,
            title_delim,
            date_range,
            date_range_to,
            edu_date_range,
        }
    }

    /// Extract experience entries from a section body. An entry whose first
    /// line matches neither title pattern is dropped; a second line with no
    /// recognizable date range is preserved verbatim in `end_date` so the
    /// information is not lost.
    pub fn experience(&self, section_text: &str, ids: &dyn IdGenerator) -> Vec<ExperienceEntry> {
        let mut entries = Vec::new();

        for chunk in self.entry_split.split(section_text) {
            let lines: Vec<&str> = chunk.lines().filter(|l| !l.trim().is_empty()).collect();
            if lines.len() < 2 {
                continue;
            }

            let captures = self
                .title_at
                .captures(lines[0])
                .or_else(|| self.title_delim.captures(lines[0]));

            let Some(title_match) = captures else {
                continue;
            };

            let date_match = self
                .date_range
                .captures(lines[1])
                .or_else(|| self.date_range_to.captures(lines[1]));

            let (start_date, end_date) = match &date_match {
                Some(caps) => (caps[1].to_string(), caps[2].to_string()),
                None => (String::new(), lines[1].trim().to_string()),
            };

            entries.push(ExperienceEntry {
                id: ids.next_id(),
                job_title: title_match[1].trim().to_string(),
                company: title_match[2].trim().to_string(),
                start_date,
                end_date,
                description: lines[2..].join("\n"),
            });
        }

        entries
    }

    /// Extract education entries from a section body. The first line is taken
    /// verbatim as the degree; the date range, when found, is stripped out of
    /// the second line to leave the school name.
    pub fn education(&self, section_text: &str, ids: &dyn IdGenerator) -> Vec<EducationEntry> {
        let mut entries = Vec::new();

        for chunk in self.entry_split.split(section_text) {
            let lines: Vec<&str> = chunk.lines().filter(|l| !l.trim().is_empty()).collect();
            if lines.len() < 2 {
                continue;
            }

            let (school, start_date, end_date) = match self.edu_date_range.captures(lines[1]) {
                Some(caps) => {
                    let range = caps.get(0).expect("capture 0 always present");
                    let school = format!(
                        "{}{}",
                        &lines[1][..range.start()],
                        &lines[1][range.end()..]
                    );
                    (
                        school.trim().to_string(),
                        caps[1].to_string(),
                        caps[2].to_string(),
                    )
                }
                None => (lines[1].trim().to_string(), String::new(), String::new()),
            };

            entries.push(EducationEntry {
                id: ids.next_id(),
                degree: lines[0].trim().to_string(),
                school,
                start_date,
                end_date,
                description: lines[2..].join("\n"),
            });
        }

        entries
    }
}
