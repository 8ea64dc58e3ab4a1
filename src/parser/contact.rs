//! Contact field extraction (name, email, phone)

use regex::Regex;

/// Extracts contact identifiers from raw resume text. Every method follows a
/// strict first-match-in-document-order policy and returns `None` rather than
/// failing when nothing matches.
pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    contact_line_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"(\+\d{1,3}[- ]?)?\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})")
                .expect("Invalid phone regex");

        // Lines that look like contact info are skipped by the name heuristic.
        let contact_line_regex = Regex::new(r"@|\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
            .expect("Invalid contact line regex");

        Self {
            email_regex,
            phone_regex,
            contact_line_regex,
        }
    }

    /// First email-shaped substring in document order; later occurrences are
    /// ignored.
    pub fn email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// First phone-shaped substring: optional country code, optional
    /// parenthesized area code, space/dot/hyphen separators.
    pub fn phone(&self, text: &str) -> Option<String> {
        self.phone_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// First non-empty line that does not itself look like an email or phone
    /// number. Document-order, not name-aware: a section header or street
    /// address that comes first is returned as-is.
    pub fn name(&self, text: &str) -> Option<String> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .find(|line| !self.contact_line_regex.is_match(line))
            .map(|line| line.trim().to_string())
    }
}
