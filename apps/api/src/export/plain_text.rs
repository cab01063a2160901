use crate::models::resume::{ResumeData, SkillCategory};

const RULE_WIDTH: usize = 50;

fn push_section(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("─".repeat(RULE_WIDTH));
}

/// One entry: label parts joined by " · ", an indented details line, a blank line.
fn push_entry(lines: &mut Vec<String>, parts: &[&str], details: Option<&str>) {
    let label: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    if !label.is_empty() {
        lines.push(label.join(" · "));
    }
    if let Some(details) = details.filter(|d| !d.is_empty()) {
        lines.push(format!("  {details}"));
    }
    lines.push(String::new());
}

fn skill_lines(data: &ResumeData) -> Vec<String> {
    match &data.skills_categorized {
        Some(categorized) => SkillCategory::ALL
            .iter()
            .filter(|c| !categorized.get(**c).is_empty())
            .map(|c| format!("{}: {}", c.label(), categorized.get(*c).join(", ")))
            .collect(),
        None if !data.skills.is_empty() => vec![data.skills.join(", ")],
        None => Vec::new(),
    }
}

/// Renders the resume as clipboard-ready plain text.
///
/// Order is fixed: name, contact, links, then the Summary, Education,
/// Experience, Projects and Skills sections. Anything empty is left out,
/// including section headers.
pub fn to_plain_text(data: &ResumeData) -> String {
    let mut lines: Vec<String> = Vec::new();
    let personal = &data.personal;

    if !personal.name.is_empty() {
        lines.push(personal.name.clone());
        lines.push(String::new());
    }

    let contact: Vec<&str> = [
        personal.email.as_str(),
        personal.phone.as_str(),
        personal.location.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
        lines.push(String::new());
    }

    let mut links = Vec::new();
    if !data.links.github.is_empty() {
        links.push(format!("GitHub: {}", data.links.github));
    }
    if !data.links.linkedin.is_empty() {
        links.push(format!("LinkedIn: {}", data.links.linkedin));
    }
    if !links.is_empty() {
        lines.push(links.join(" | "));
        lines.push(String::new());
    }

    if !data.summary.is_empty() {
        push_section(&mut lines, "SUMMARY");
        lines.push(data.summary.clone());
        lines.push(String::new());
    }

    if !data.education.is_empty() {
        push_section(&mut lines, "EDUCATION");
        for e in &data.education {
            push_entry(
                &mut lines,
                &[e.institution.as_str(), e.degree.as_str(), e.period.as_str()],
                e.details.as_deref(),
            );
        }
    }

    if !data.experience.is_empty() {
        push_section(&mut lines, "EXPERIENCE");
        for e in &data.experience {
            push_entry(
                &mut lines,
                &[e.company.as_str(), e.role.as_str(), e.period.as_str()],
                e.details.as_deref(),
            );
        }
    }

    if !data.projects.is_empty() {
        push_section(&mut lines, "PROJECTS");
        for p in &data.projects {
            push_entry(&mut lines, &[p.name.as_str(), p.period.as_str()], p.details.as_deref());
        }
    }

    let skills = skill_lines(data);
    if !skills.is_empty() {
        push_section(&mut lines, "SKILLS");
        lines.extend(skills);
        lines.push(String::new());
    }

    lines.join("\n")
}
