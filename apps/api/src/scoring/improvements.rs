use crate::models::resume::ResumeData;
use crate::scoring::bullets::has_numbers;

const MAX_IMPROVEMENTS: usize = 3;
const MIN_PROJECTS: usize = 2;
const MIN_SUMMARY_WORDS: usize = 40;
const TARGET_SKILLS: usize = 8;

/// Returns up to three content improvements, most important first.
///
/// Unlike the ATS score these look at quality rather than presence: project
/// count, measurable impact in details, summary word count, flat skill count.
pub fn top_improvements(data: &ResumeData) -> Vec<String> {
    let mut items = Vec::new();

    if data.projects.len() < MIN_PROJECTS {
        items.push("Add at least 2 projects to showcase your work.".to_string());
    }

    let details_with_numbers = data
        .experience
        .iter()
        .filter_map(|e| e.details.as_deref())
        .chain(data.projects.iter().filter_map(|p| p.details.as_deref()))
        .any(has_numbers);
    let has_entries = !data.experience.is_empty() || !data.projects.is_empty();
    if has_entries && !details_with_numbers {
        items.push("Add measurable impact (numbers) in experience/project bullets.".to_string());
    }

    let summary_words = data.summary.split_whitespace().count();
    if summary_words > 0 && summary_words < MIN_SUMMARY_WORDS {
        items.push("Expand your summary to 40–120 words for better impact.".to_string());
    }

    let flat_skills = data.skills.len();
    if flat_skills > 0 && flat_skills < TARGET_SKILLS {
        items.push(format!(
            "Add more skills (target {TARGET_SKILLS}+, currently {flat_skills})."
        ));
    }

    if data.experience.is_empty() && !data.projects.is_empty() {
        items.push("Consider adding internship or project work as experience.".to_string());
    }

    items.truncate(MAX_IMPROVEMENTS);
    items
}
