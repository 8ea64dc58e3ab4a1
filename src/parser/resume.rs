//! Structured resume draft produced by the parser

use serde::{Deserialize, Serialize};

/// Contact fields extracted from the document header area. An empty string is
/// the "not found" sentinel; consumers display these fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// One work-history entry. Dates are free-text tokens ("Jan 2020"), not
/// validated calendar values; `end_date` may hold the raw second line of the
/// entry when no date pattern matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Generated at extraction time so the caller can key/re-order entries;
    /// unrelated to the input text.
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Best-effort structured draft of a resume. Missing fields degrade to empty
/// values rather than errors; the draft is meant to seed an editable form,
/// not to be a guaranteed-correct parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDraft {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ResumeDraft {
    /// Flatten the textual content of the draft into a single string, the
    /// form the job-description matcher consumes.
    pub fn flatten_text(&self) -> String {
        let mut parts: Vec<String> = vec![self.summary.clone(), self.skills.join(" ")];

        parts.extend(
            self.education
                .iter()
                .map(|edu| format!("{} {} {}", edu.degree, edu.school, edu.description)),
        );

        parts.extend(
            self.experience
                .iter()
                .map(|exp| format!("{} {} {}", exp.job_title, exp.company, exp.description)),
        );

        parts.join(" ")
    }
}
