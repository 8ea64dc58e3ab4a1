//! Heuristic resume-text parsing

pub mod contact;
pub mod entries;
pub mod ids;
pub mod resume;
pub mod sections;
pub mod skills;

use self::contact::ContactExtractor;
use self::entries::EntryExtractor;
use self::ids::{IdGenerator, UuidIds};
use self::resume::ResumeDraft;
use self::sections::{section_body, SectionKind, SectionSegmenter};

/// Turns raw resume text into a structured draft: contact fields from the
/// whole document, then per-section extraction over the segmented blocks.
/// Never fails; unrecognized input degrades to empty fields.
pub struct ResumeParser {
    segmenter: SectionSegmenter,
    contact: ContactExtractor,
    entries: EntryExtractor,
    ids: Box<dyn IdGenerator>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidIds))
    }

    /// Build a parser with a caller-supplied id source, so callers (and
    /// tests) can control entry identity.
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            segmenter: SectionSegmenter::new(),
            contact: ContactExtractor::new(),
            entries: EntryExtractor::new(),
            ids,
        }
    }

    pub fn parse(&self, text: &str) -> ResumeDraft {
        let mut draft = ResumeDraft::default();

        draft.personal_info.email = self.contact.email(text).unwrap_or_default();
        draft.personal_info.phone = self.contact.phone(text).unwrap_or_default();
        draft.personal_info.name = self.contact.name(text).unwrap_or_default();

        let sections = self.segmenter.segment(text);

        // Header lines stay in the segmented blocks but are stripped before
        // field extraction, so a "Skills" header is never read as a skill.
        if let Some(block) = sections.get(&SectionKind::Summary) {
            draft.summary = section_body(block).trim().to_string();
        }

        if let Some(block) = sections.get(&SectionKind::Skills) {
            draft.skills = skills::extract_skills(section_body(block));
        }

        if let Some(block) = sections.get(&SectionKind::Experience) {
            draft.experience = self
                .entries
                .experience(section_body(block), self.ids.as_ref());
        }

        if let Some(block) = sections.get(&SectionKind::Education) {
            draft.education = self
                .entries
                .education(section_body(block), self.ids.as_ref());
        }

        draft
    }
}
