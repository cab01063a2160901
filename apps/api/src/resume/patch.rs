//! Field-level and list-level mutations of the resume aggregate.
//!
//! Every edit the editor makes is one `ResumePatch`. Patches touch exactly one
//! field or one list entry (addressed by id) and never reorder lists.

use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeData, SkillCategory, SkillsData,
};

pub const MAX_PROJECT_DESCRIPTION_CHARS: usize = 200;

/// Skills merged in by the "suggest skills" action.
const SUGGESTED_SKILLS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Technical,
        &["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"],
    ),
    (SkillCategory::Soft, &["Team Leadership", "Problem Solving"]),
    (SkillCategory::Tools, &["Git", "Docker", "AWS"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileLink {
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumePatch {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    SetLink {
        field: ProfileLink,
        value: String,
    },
    AddEducation,
    UpdateEducation {
        id: String,
        institution: Option<String>,
        degree: Option<String>,
        period: Option<String>,
        details: Option<String>,
    },
    RemoveEducation {
        id: String,
    },
    AddExperience,
    UpdateExperience {
        id: String,
        company: Option<String>,
        role: Option<String>,
        period: Option<String>,
        details: Option<String>,
    },
    RemoveExperience {
        id: String,
    },
    AddProject,
    UpdateProject {
        id: String,
        name: Option<String>,
        period: Option<String>,
        details: Option<String>,
        description: Option<String>,
        live_url: Option<String>,
        github_url: Option<String>,
    },
    RemoveProject {
        id: String,
    },
    AddTech {
        project_id: String,
        tech: String,
    },
    RemoveTech {
        project_id: String,
        tech: String,
    },
    AddSkill {
        category: SkillCategory,
        skill: String,
    },
    RemoveSkill {
        category: SkillCategory,
        skill: String,
    },
    SuggestSkills,
    SetFlatSkills {
        skills: Vec<String>,
    },
}

impl ResumePatch {
    /// Short operation name used in logs.
    pub fn op_name(&self) -> &'static str {
        match self {
            ResumePatch::SetPersonal { .. } => "set_personal",
            ResumePatch::SetSummary { .. } => "set_summary",
            ResumePatch::SetLink { .. } => "set_link",
            ResumePatch::AddEducation => "add_education",
            ResumePatch::UpdateEducation { .. } => "update_education",
            ResumePatch::RemoveEducation { .. } => "remove_education",
            ResumePatch::AddExperience => "add_experience",
            ResumePatch::UpdateExperience { .. } => "update_experience",
            ResumePatch::RemoveExperience { .. } => "remove_experience",
            ResumePatch::AddProject => "add_project",
            ResumePatch::UpdateProject { .. } => "update_project",
            ResumePatch::RemoveProject { .. } => "remove_project",
            ResumePatch::AddTech { .. } => "add_tech",
            ResumePatch::RemoveTech { .. } => "remove_tech",
            ResumePatch::AddSkill { .. } => "add_skill",
            ResumePatch::RemoveSkill { .. } => "remove_skill",
            ResumePatch::SuggestSkills => "suggest_skills",
            ResumePatch::SetFlatSkills { .. } => "set_flat_skills",
        }
    }
}

fn set_if_some(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn set_opt_if_some(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

fn find_entry<'a, T>(
    list: &'a mut [T],
    id: &str,
    id_of: fn(&T) -> &str,
    kind: &str,
) -> Result<&'a mut T, AppError> {
    list.iter_mut()
        .find(|entry| id_of(entry) == id)
        .ok_or_else(|| AppError::NotFound(format!("{kind} entry {id} not found")))
}

fn remove_entry<T>(
    list: &mut Vec<T>,
    id: &str,
    id_of: fn(&T) -> &str,
    kind: &str,
) -> Result<(), AppError> {
    let before = list.len();
    list.retain(|entry| id_of(entry) != id);
    if list.len() == before {
        return Err(AppError::NotFound(format!("{kind} entry {id} not found")));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), AppError> {
    let len = description.chars().count();
    if len > MAX_PROJECT_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Project description is {len} characters; the limit is {MAX_PROJECT_DESCRIPTION_CHARS}"
        )));
    }
    Ok(())
}

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(AppError::Validation(format!("{kind} entry has an empty id")));
        }
        if !seen.insert(id) {
            return Err(AppError::Validation(format!("Duplicate {kind} entry id {id}")));
        }
    }
    Ok(())
}

/// Checks a whole aggregate submitted in one piece: entry ids present and
/// unique within each list, project descriptions within the length cap.
pub fn check_resume(data: &ResumeData) -> Result<(), AppError> {
    check_ids("Education", data.education.iter().map(|e| e.id.as_str()))?;
    check_ids("Experience", data.experience.iter().map(|e| e.id.as_str()))?;
    check_ids("Project", data.projects.iter().map(|p| p.id.as_str()))?;
    for description in data.projects.iter().filter_map(|p| p.description.as_deref()) {
        check_description(description)?;
    }
    Ok(())
}

/// Appends `value` (trimmed) unless it is blank or already present.
fn push_unique(list: &mut Vec<String>, value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() || list.iter().any(|existing| existing == trimmed) {
        return;
    }
    list.push(trimmed.to_string());
}

/// Applies one patch in place. Fails only for unknown entry ids or invalid values;
/// on failure the aggregate is left untouched.
pub fn apply_patch(data: &mut ResumeData, patch: ResumePatch) -> Result<(), AppError> {
    match patch {
        ResumePatch::SetPersonal { field, value } => {
            let target = match field {
                PersonalField::Name => &mut data.personal.name,
                PersonalField::Email => &mut data.personal.email,
                PersonalField::Phone => &mut data.personal.phone,
                PersonalField::Location => &mut data.personal.location,
            };
            *target = value;
        }
        ResumePatch::SetSummary { value } => data.summary = value,
        ResumePatch::SetLink { field, value } => match field {
            ProfileLink::Github => data.links.github = value,
            ProfileLink::Linkedin => data.links.linkedin = value,
        },

        ResumePatch::AddEducation => data.education.push(EducationEntry::new()),
        ResumePatch::UpdateEducation {
            id,
            institution,
            degree,
            period,
            details,
        } => {
            let entry = find_entry(&mut data.education, &id, |e| e.id.as_str(), "Education")?;
            set_if_some(&mut entry.institution, institution);
            set_if_some(&mut entry.degree, degree);
            set_if_some(&mut entry.period, period);
            set_opt_if_some(&mut entry.details, details);
        }
        ResumePatch::RemoveEducation { id } => {
            remove_entry(&mut data.education, &id, |e| e.id.as_str(), "Education")?
        }

        ResumePatch::AddExperience => data.experience.push(ExperienceEntry::new()),
        ResumePatch::UpdateExperience {
            id,
            company,
            role,
            period,
            details,
        } => {
            let entry = find_entry(&mut data.experience, &id, |e| e.id.as_str(), "Experience")?;
            set_if_some(&mut entry.company, company);
            set_if_some(&mut entry.role, role);
            set_if_some(&mut entry.period, period);
            set_opt_if_some(&mut entry.details, details);
        }
        ResumePatch::RemoveExperience { id } => {
            remove_entry(&mut data.experience, &id, |e| e.id.as_str(), "Experience")?
        }

        ResumePatch::AddProject => data.projects.push(ProjectEntry::new()),
        ResumePatch::UpdateProject {
            id,
            name,
            period,
            details,
            description,
            live_url,
            github_url,
        } => {
            if let Some(desc) = &description {
                check_description(desc)?;
            }
            let entry = find_entry(&mut data.projects, &id, |p| p.id.as_str(), "Project")?;
            set_if_some(&mut entry.name, name);
            set_if_some(&mut entry.period, period);
            set_opt_if_some(&mut entry.details, details);
            set_opt_if_some(&mut entry.description, description);
            set_opt_if_some(&mut entry.live_url, live_url);
            set_opt_if_some(&mut entry.github_url, github_url);
        }
        ResumePatch::RemoveProject { id } => {
            remove_entry(&mut data.projects, &id, |p| p.id.as_str(), "Project")?
        }
        ResumePatch::AddTech { project_id, tech } => {
            let entry = find_entry(&mut data.projects, &project_id, |p| p.id.as_str(), "Project")?;
            push_unique(entry.tech_stack.get_or_insert_with(Vec::new), &tech);
        }
        ResumePatch::RemoveTech { project_id, tech } => {
            let entry = find_entry(&mut data.projects, &project_id, |p| p.id.as_str(), "Project")?;
            if let Some(stack) = entry.tech_stack.as_mut() {
                stack.retain(|t| *t != tech);
            }
        }

        ResumePatch::AddSkill { category, skill } => {
            let skills = data.skills_categorized.get_or_insert_with(SkillsData::default);
            push_unique(skills.get_mut(category), &skill);
        }
        ResumePatch::RemoveSkill { category, skill } => {
            if let Some(skills) = data.skills_categorized.as_mut() {
                skills.get_mut(category).retain(|s| *s != skill);
            }
        }
        ResumePatch::SuggestSkills => {
            let skills = data.skills_categorized.get_or_insert_with(SkillsData::default);
            for (category, suggested) in SUGGESTED_SKILLS {
                let list = skills.get_mut(*category);
                for skill in *suggested {
                    push_unique(list, skill);
                }
            }
        }
        ResumePatch::SetFlatSkills { skills } => {
            data.skills = skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
    Ok(())
}
