//! Skill list extraction from a skills section

/// Connector words that show up in skills prose but are not skills.
const SKILL_STOPLIST: [&str; 5] = ["and", "or", "with", "using", "experience"];

/// Split a skills section on commas, newlines, pipes, or slashes; trim; drop
/// one-character tokens and connector words; de-duplicate preserving
/// first-seen order.
pub fn extract_skills(section_text: &str) -> Vec<String> {
    let mut skills = Vec::new();

    for token in section_text.split(|c: char| matches!(c, ',' | '\n' | '|' | '/')) {
        let skill = token.trim();
        if skill.len() <= 1 {
            continue;
        }
        if SKILL_STOPLIST.contains(&skill.to_lowercase().as_str()) {
            continue;
        }
        if !skills.iter().any(|seen| seen == skill) {
            skills.push(skill.to_string());
        }
    }

    skills
}
