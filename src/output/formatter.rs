//! Output formatters: console, JSON, and markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::{MatchReport, ScanReport};
use crate::scoring::job_match::MAX_DISPLAY_KEYWORDS;
use colored::{Color, Colorize};

/// Trait for rendering reports into a displayable string.
pub trait OutputFormatter {
    fn format_scan(&self, report: &ScanReport) -> Result<String>;
    fn format_match(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with colors and score badges.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tooling.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            50..=79 => ("FAIR", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_flag(&self, present: bool, label: &str) -> String {
        if present {
            format!("  {} {}\n", self.colorize("✓", Color::Green), label)
        } else {
            format!("  {} {}\n", self.colorize("✗", Color::Red), label)
        }
    }
}

/// Verdict line for a match score.
fn match_verdict(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent match! Your resume contains most of the important keywords."
    } else if score >= 50 {
        "Good match, but could be improved. Consider adding some of the missing keywords."
    } else {
        "Low match. Your resume is missing many important keywords from the job description."
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_scan(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME SCAN", 1));
        output.push_str(&format!(
            "Generated: {} | Source: {} ({} words)\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.source_file,
            report.metadata.word_count
        ));

        output.push_str(&self.format_header("ATS Completeness", 2));
        output.push_str(&format!(
            "Score: {}% {}\n",
            report.ats.total_score,
            self.format_score_badge(report.ats.total_score)
        ));
        output.push_str(&format!(
            "Reference keywords matched: {}\n\n",
            report.ats.keyword_matches
        ));

        output.push_str(&self.format_flag(report.ats.has_name, "Name"));
        output.push_str(&self.format_flag(report.ats.has_email, "Email"));
        output.push_str(&self.format_flag(report.ats.has_phone, "Phone"));
        output.push_str(&self.format_flag(report.ats.has_summary, "Summary"));
        output.push_str(&self.format_flag(report.ats.has_skills, "Skills"));
        output.push_str(&self.format_flag(report.ats.has_experience, "Experience"));
        output.push_str(&self.format_flag(report.ats.has_education, "Education"));

        if !report.ats.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 3));
            for suggestion in &report.ats.suggestions {
                output.push_str(&format!("  • {}\n", self.colorize(suggestion, Color::Yellow)));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Extracted Draft", 2));

            let info = &report.resume.personal_info;
            output.push_str(&format!("Name:  {}\n", info.name));
            output.push_str(&format!("Email: {}\n", info.email));
            output.push_str(&format!("Phone: {}\n", info.phone));

            if !report.resume.summary.is_empty() {
                output.push_str(&self.format_header("Summary", 3));
                output.push_str(&format!("{}\n", report.resume.summary));
            }

            if !report.resume.skills.is_empty() {
                output.push_str(&self.format_header("Skills", 3));
                output.push_str(&format!("{}\n", report.resume.skills.join(", ")));
            }

            if !report.resume.experience.is_empty() {
                output.push_str(&self.format_header("Experience", 3));
                for entry in &report.resume.experience {
                    output.push_str(&format!(
                        "  • {} — {} ({} - {})\n",
                        self.colorize(&entry.job_title, Color::White),
                        entry.company,
                        entry.start_date,
                        entry.end_date
                    ));
                }
            }

            if !report.resume.education.is_empty() {
                output.push_str(&self.format_header("Education", 3));
                for entry in &report.resume.education {
                    output.push_str(&format!("  • {} — {}\n", entry.degree, entry.school));
                }
            }
        }

        Ok(output)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let outcome = &report.outcome;

        output.push_str(&self.format_header("ATS MATCH", 1));
        output.push_str(&format!(
            "Generated: {} | Resume: {} | Job: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.resume_file,
            report.job_file
        ));

        output.push_str(&format!(
            "\nMatch Score: {}% {}\n",
            outcome.score,
            self.format_score_badge(outcome.score)
        ));
        output.push_str(&format!("{}\n", self.colorize(match_verdict(outcome.score), Color::Cyan)));
        output.push_str(&format!(
            "Keywords matched: {} of {}\n",
            outcome.found_count, outcome.candidate_count
        ));

        if !outcome.found.is_empty() {
            output.push_str(&self.format_header("Found Keywords", 2));
            for hit in &outcome.found {
                output.push_str(&format!(
                    "  • {} ({})\n",
                    self.colorize(&hit.keyword, Color::Green),
                    hit.count
                ));
            }
        }

        if !outcome.missing.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 2));
            for keyword in &outcome.missing {
                output.push_str(&format!("  • {}\n", self.colorize(keyword, Color::Red)));
            }
            let hidden = outcome.candidate_count - outcome.found_count;
            if hidden > MAX_DISPLAY_KEYWORDS {
                output.push_str(&format!(
                    "  ... and {} more (lists are capped at {} entries; the score covers all of them)\n",
                    hidden - MAX_DISPLAY_KEYWORDS,
                    MAX_DISPLAY_KEYWORDS
                ));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scan(&self, report: &ScanReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_scan(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Scan Report\n\n");
        output.push_str(&format!(
            "Generated: {} | Source: `{}`\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.source_file
        ));

        output.push_str("## ATS Completeness\n\n");
        output.push_str(&format!("**Score: {}%**\n\n", report.ats.total_score));

        let flags = [
            (report.ats.has_name, "Name"),
            (report.ats.has_email, "Email"),
            (report.ats.has_phone, "Phone"),
            (report.ats.has_summary, "Summary"),
            (report.ats.has_skills, "Skills"),
            (report.ats.has_experience, "Experience"),
            (report.ats.has_education, "Education"),
        ];
        for (present, label) in flags {
            output.push_str(&format!("- [{}] {}\n", if present { "x" } else { " " }, label));
        }
        output.push_str(&format!(
            "\nReference keywords matched: {}\n",
            report.ats.keyword_matches
        ));

        if !report.ats.suggestions.is_empty() {
            output.push_str("\n## Suggestions\n\n");
            for suggestion in &report.ats.suggestions {
                output.push_str(&format!("- {}\n", suggestion));
            }
        }

        if !report.resume.skills.is_empty() {
            output.push_str("\n## Extracted Skills\n\n");
            output.push_str(&format!("{}\n", report.resume.skills.join(", ")));
        }

        if !report.resume.experience.is_empty() {
            output.push_str("\n## Extracted Experience\n\n");
            for entry in &report.resume.experience {
                output.push_str(&format!(
                    "- **{}**, {} ({} - {})\n",
                    entry.job_title, entry.company, entry.start_date, entry.end_date
                ));
            }
        }

        if !report.resume.education.is_empty() {
            output.push_str("\n## Extracted Education\n\n");
            for entry in &report.resume.education {
                output.push_str(&format!("- **{}**, {}\n", entry.degree, entry.school));
            }
        }

        Ok(output)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let outcome = &report.outcome;

        output.push_str("# ATS Match Report\n\n");
        output.push_str(&format!(
            "Resume: `{}` | Job description: `{}`\n\n",
            report.resume_file, report.job_file
        ));
        output.push_str(&format!("**Match Score: {}%**\n\n", outcome.score));
        output.push_str(&format!("{}\n", match_verdict(outcome.score)));
        output.push_str(&format!(
            "\nKeywords matched: {} of {}\n",
            outcome.found_count, outcome.candidate_count
        ));

        if !outcome.found.is_empty() {
            output.push_str("\n## Found Keywords\n\n");
            output.push_str("| Keyword | Count |\n|---|---|\n");
            for hit in &outcome.found {
                output.push_str(&format!("| {} | {} |\n", hit.keyword, hit.count));
            }
        }

        if !outcome.missing.is_empty() {
            output.push_str("\n## Missing Keywords\n\n");
            for keyword in &outcome.missing {
                output.push_str(&format!("- {}\n", keyword));
            }
        }

        Ok(output)
    }
}

/// Coordinates formatters according to the output configuration.
pub struct ReportGenerator {
    format: OutputFormat,
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            format: config.format.clone(),
            console: ConsoleFormatter::new(config.color_output, config.detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format_scan(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => self.console.format_scan(report),
            OutputFormat::Json => self.json.format_scan(report),
            OutputFormat::Markdown => self.markdown.format_scan(report),
        }
    }

    pub fn format_match(&self, report: &MatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => self.console.format_match(report),
            OutputFormat::Json => self.json.format_match(report),
            OutputFormat::Markdown => self.markdown.format_match(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::parser::resume::ResumeDraft;
    use crate::scoring::completeness::CompletenessScorer;
    use crate::scoring::job_match::JobMatcher;

    fn scan_report() -> ScanReport {
        let draft = ResumeDraft {
            summary: "Engineer".to_string(),
            skills: vec!["Python".to_string()],
            ..Default::default()
        };
        let ats = CompletenessScorer::new().unwrap().score(&draft).unwrap();
        ScanReport {
            resume: draft,
            ats,
            metadata: ReportMetadata::for_document("resume.txt", "Engineer Python"),
        }
    }

    fn match_report() -> MatchReport {
        let outcome = JobMatcher::new()
            .match_against("python developer", "python rust")
            .unwrap();
        MatchReport::new(outcome, "resume.txt", "job.txt")
    }

    #[test]
    fn test_console_scan_contains_score_and_suggestions() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_scan(&scan_report()).unwrap();

        assert!(output.contains("Score:"));
        assert!(output.contains("Add your full name"));
    }

    #[test]
    fn test_console_detailed_includes_draft() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_scan(&scan_report()).unwrap();
        assert!(output.contains("Python"));
    }

    #[test]
    fn test_json_scan_round_trips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_scan(&scan_report()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["ats"]["total_score"].is_u64());
    }

    #[test]
    fn test_markdown_match_lists_keywords() {
        let output = MarkdownFormatter.format_match(&match_report()).unwrap();
        assert!(output.contains("| python | 1 |"));
        assert!(output.contains("- rust"));
    }

    #[test]
    fn test_match_verdict_thresholds() {
        assert!(match_verdict(80).starts_with("Excellent"));
        assert!(match_verdict(79).starts_with("Good"));
        assert!(match_verdict(50).starts_with("Good"));
        assert!(match_verdict(49).starts_with("Low"));
    }
}
