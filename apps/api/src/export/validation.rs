use serde::Serialize;

use crate::models::resume::ResumeData;

/// Non-blocking pre-export check. Warnings are advisory; export always proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

pub fn validate_resume(data: &ResumeData) -> ValidationReport {
    let mut warnings = Vec::new();

    if data.personal.name.trim().is_empty() {
        warnings.push("Name is missing.".to_string());
    }
    if data.projects.is_empty() && data.experience.is_empty() {
        warnings.push("At least one project or experience entry is recommended.".to_string());
    }

    ValidationReport {
        is_valid: warnings.is_empty(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ProjectEntry;

    #[test]
    fn test_empty_resume_has_both_warnings() {
        let report = validate_resume(&ResumeData::default());
        assert!(!report.is_valid);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let mut data = ResumeData::default();
        data.personal.name = "   ".into();
        data.projects.push(ProjectEntry::new());
        let report = validate_resume(&data);
        assert_eq!(report.warnings, vec!["Name is missing.".to_string()]);
    }

    #[test]
    fn test_project_alone_satisfies_entry_check() {
        let mut data = ResumeData::default();
        data.personal.name = "Sam".into();
        data.projects.push(ProjectEntry::new());
        assert!(validate_resume(&data).is_valid);
    }
}
