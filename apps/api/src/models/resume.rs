//! Resume aggregate as persisted under `resumeBuilderData`.
//!
//! Field names serialize in camelCase so records written by earlier clients
//! load unchanged. Missing fields fall back to empty values.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Tools => "Tools & Technologies",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsData {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillsData {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Legacy flat list, kept so older records still score and render.
    pub skills: Vec<String>,
    /// Current shape. Authoritative over `skills` whenever present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_categorized: Option<SkillsData>,
    pub links: Links,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
            skills_categorized: Some(SkillsData::default()),
            links: Links::default(),
        }
    }
}

impl ResumeData {
    /// Skill count used for scoring: the categorized sum when present, else the flat list.
    pub fn total_skills(&self) -> usize {
        match &self.skills_categorized {
            Some(categorized) => categorized.len(),
            None => self.skills.len(),
        }
    }
}

/// True when an optional free-text field holds something other than whitespace.
pub fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

impl EducationEntry {
    pub fn new() -> Self {
        Self {
            id: new_entry_id(),
            details: Some(String::new()),
            ..Self::default()
        }
    }
}

impl ExperienceEntry {
    pub fn new() -> Self {
        Self {
            id: new_entry_id(),
            details: Some(String::new()),
            ..Self::default()
        }
    }
}

impl ProjectEntry {
    pub fn new() -> Self {
        Self {
            id: new_entry_id(),
            details: Some(String::new()),
            description: Some(String::new()),
            tech_stack: Some(Vec::new()),
            live_url: Some(String::new()),
            github_url: Some(String::new()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty_with_categorized_skills() {
        let data = ResumeData::default();
        assert!(data.personal.name.is_empty());
        assert!(data.education.is_empty());
        assert_eq!(data.skills_categorized, Some(SkillsData::default()));
        assert_eq!(data.total_skills(), 0);
    }

    #[test]
    fn test_legacy_record_without_categorized_skills_uses_flat_list() {
        let raw = json!({
            "personal": { "name": "Alex", "email": "", "phone": "", "location": "" },
            "summary": "",
            "education": [],
            "experience": [],
            "projects": [],
            "skills": ["Rust", "Go", "SQL"],
            "links": { "github": "", "linkedin": "" }
        });
        let data: ResumeData = serde_json::from_value(raw).unwrap();
        assert!(data.skills_categorized.is_none());
        assert_eq!(data.total_skills(), 3);
    }

    #[test]
    fn test_categorized_skills_supersede_flat_list() {
        let data = ResumeData {
            skills: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            skills_categorized: Some(SkillsData {
                technical: vec!["Rust".into()],
                ..SkillsData::default()
            }),
            ..ResumeData::default()
        };
        assert_eq!(data.total_skills(), 1);
    }

    #[test]
    fn test_project_fields_serialize_camel_case() {
        let project = ProjectEntry {
            id: "p1".into(),
            tech_stack: Some(vec!["Rust".into()]),
            live_url: Some("https://example.com".into()),
            ..ProjectEntry::default()
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["techStack"], json!(["Rust"]));
        assert_eq!(value["liveUrl"], json!("https://example.com"));
        assert!(value.get("githubUrl").is_none());
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = ExperienceEntry::new();
        let b = ExperienceEntry::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.details.as_deref(), Some(""));
    }

    #[test]
    fn test_has_text_ignores_whitespace() {
        assert!(!has_text(&None));
        assert!(!has_text(&Some("   ".into())));
        assert!(has_text(&Some("Shipped v2".into())));
    }
}
