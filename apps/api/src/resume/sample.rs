use crate::models::resume::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeData,
};

/// Fresh copy of the "load sample data" resume. Callers own the result outright.
pub fn sample_resume() -> ResumeData {
    ResumeData {
        personal: PersonalInfo {
            name: "Alex Chen".to_string(),
            email: "alex.chen@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
        },
        summary: "Software engineer with 5+ years building scalable web applications. \
                  Focus on clean architecture and user experience."
            .to_string(),
        education: vec![EducationEntry {
            id: "ed-1".to_string(),
            institution: "State University".to_string(),
            degree: "B.S. Computer Science".to_string(),
            period: "2015 – 2019".to_string(),
            details: Some("Relevant coursework: Algorithms, Distributed Systems.".to_string()),
        }],
        experience: vec![
            ExperienceEntry {
                id: "exp-1".to_string(),
                company: "Tech Corp".to_string(),
                role: "Senior Software Engineer".to_string(),
                period: "2021 – Present".to_string(),
                details: Some(
                    "Lead development of customer dashboard. Improved performance by 40%."
                        .to_string(),
                ),
            },
            ExperienceEntry {
                id: "exp-2".to_string(),
                company: "Startup Inc".to_string(),
                role: "Software Engineer".to_string(),
                period: "2019 – 2021".to_string(),
                details: Some(
                    "Built APIs and internal tools. Collaborated with design and product."
                        .to_string(),
                ),
            },
        ],
        projects: vec![ProjectEntry {
            id: "proj-1".to_string(),
            name: "Open Source CLI Tool".to_string(),
            period: "2023".to_string(),
            details: Some(
                "TypeScript CLI with 2k+ weekly downloads. Maintained docs and issues."
                    .to_string(),
            ),
            ..ProjectEntry::default()
        }],
        skills: ["TypeScript", "React", "Node.js", "PostgreSQL", "AWS"]
            .into_iter()
            .map(String::from)
            .collect(),
        skills_categorized: None,
        links: Links {
            github: "https://github.com/alexchen".to_string(),
            linkedin: "https://linkedin.com/in/alexchen".to_string(),
        },
    }
}
