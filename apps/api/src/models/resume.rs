//! The resume document — the aggregate every other component works on.
//!
//! A document lives entirely in memory while it is being edited and only
//! touches the database on an explicit save. Before the first save it carries
//! a `temp-` placeholder id; the store assigns the permanent id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::field::ResumeField;
use crate::models::user::UserProfile;
use crate::render::TemplateId;

/// Marker prefix for ids of documents that have never been persisted.
pub const TEMP_ID_PREFIX: &str = "temp-";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// Free text; newline-delimited bullet lines. Renderers split and strip
    /// leading bullet glyphs (see `render::helpers::description_lines`).
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub technologies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Permanent UUID string once persisted; `temp-<uuid>` before that.
    pub id: String,
    pub user_id: Uuid,
    pub title: String,
    pub field: ResumeField,
    pub template_id: TemplateId,
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub projects: Vec<ProjectItem>,
    /// Insertion-ordered, duplicate-free.
    pub skills: Vec<String>,
    /// Free text entries, e.g. "English (Native)".
    pub languages: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// Seeds an empty document for a freshly started resume, prefilled with
    /// the owner's name and email.
    pub fn new_for_user(user: &UserProfile) -> Self {
        let now = Utc::now();
        Resume {
            id: format!("{TEMP_ID_PREFIX}{}", Uuid::new_v4()),
            user_id: user.id,
            title: "My Resume".to_string(),
            field: ResumeField::General,
            template_id: TemplateId::Modern,
            personal_info: PersonalInfo {
                full_name: user.name.clone(),
                email: user.email.clone(),
                ..PersonalInfo::default()
            },
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True once the store has assigned a permanent id.
    pub fn has_permanent_id(&self) -> bool {
        !self.id.is_empty() && !self.id.starts_with(TEMP_ID_PREFIX)
    }

    /// Deep copy with a fresh placeholder id and a "(Copy)" title, ready to
    /// be saved as a new document.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = format!("{TEMP_ID_PREFIX}{}", Uuid::new_v4());
        copy.title = format!("{} (Copy)", self.title);
        copy
    }

    pub fn skill_suggestions(&self) -> Vec<&'static str> {
        self.field.skill_suggestions(&self.skills)
    }

    // ── Experience ──────────────────────────────────────────────────────────

    /// Appends an empty experience entry and returns its id.
    pub fn add_experience(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.experience.push(ExperienceItem {
            id: id.clone(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        });
        id
    }

    /// Replaces the fields of the targeted entry, preserving order and id.
    /// Returns false if no entry has this id.
    pub fn update_experience(&mut self, id: &str, update: ExperienceUpdate) -> bool {
        match self.experience.iter_mut().find(|e| e.id == id) {
            Some(item) => {
                item.company = update.company;
                item.position = update.position;
                item.start_date = update.start_date;
                item.end_date = update.end_date;
                item.current = update.current;
                item.description = update.description;
                true
            }
            None => false,
        }
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.experience.retain(|e| e.id != id);
    }

    // ── Education ───────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.education.push(EducationItem {
            id: id.clone(),
            institution: String::new(),
            degree: String::new(),
            field_of_study: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        });
        id
    }

    pub fn update_education(&mut self, id: &str, update: EducationUpdate) -> bool {
        match self.education.iter_mut().find(|e| e.id == id) {
            Some(item) => {
                item.institution = update.institution;
                item.degree = update.degree;
                item.field_of_study = update.field_of_study;
                item.start_date = update.start_date;
                item.end_date = update.end_date;
                true
            }
            None => false,
        }
    }

    pub fn remove_education(&mut self, id: &str) {
        self.education.retain(|e| e.id != id);
    }

    // ── Projects ────────────────────────────────────────────────────────────

    pub fn add_project(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.projects.push(ProjectItem {
            id: id.clone(),
            name: String::new(),
            description: String::new(),
            link: String::new(),
            technologies: String::new(),
        });
        id
    }

    pub fn update_project(&mut self, id: &str, update: ProjectUpdate) -> bool {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(item) => {
                item.name = update.name;
                item.description = update.description;
                item.link = update.link;
                item.technologies = update.technologies;
                true
            }
            None => false,
        }
    }

    pub fn remove_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);
    }

    // ── Skills & languages ──────────────────────────────────────────────────

    /// Adds a skill unless it is already present. Returns whether it was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    pub fn add_language(&mut self, language: &str) -> bool {
        let language = language.trim();
        if language.is_empty() || self.languages.iter().any(|l| l == language) {
            return false;
        }
        self.languages.push(language.to_string());
        true
    }

    pub fn remove_language(&mut self, language: &str) {
        self.languages.retain(|l| l != language);
    }
}

/// Field payloads for item updates. The item id is addressed separately and
/// never changes once assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpdate {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationUpdate {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub name: String,
    pub description: String,
    pub link: String,
    pub technologies: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_new_document_is_seeded_and_temporary() {
        let user = test_user();
        let resume = Resume::new_for_user(&user);
        assert!(resume.id.starts_with(TEMP_ID_PREFIX));
        assert!(!resume.has_permanent_id());
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert_eq!(resume.personal_info.email, "jane@example.com");
        assert_eq!(resume.field, ResumeField::General);
        assert_eq!(resume.template_id, TemplateId::Modern);
    }

    #[test]
    fn test_item_ids_are_unique_and_stable() {
        let mut resume = Resume::new_for_user(&test_user());
        let a = resume.add_experience();
        let b = resume.add_experience();
        assert_ne!(a, b);

        let updated = resume.update_experience(
            &a,
            ExperienceUpdate {
                company: "Acme".into(),
                position: "Engineer".into(),
                start_date: "2020-01".into(),
                end_date: "2023-01".into(),
                current: false,
                description: "Built things".into(),
            },
        );
        assert!(updated);
        // Order preserved, id untouched
        assert_eq!(resume.experience[0].id, a);
        assert_eq!(resume.experience[0].company, "Acme");
        assert_eq!(resume.experience[1].id, b);
    }

    #[test]
    fn test_update_unknown_item_is_a_noop() {
        let mut resume = Resume::new_for_user(&test_user());
        resume.add_education();
        let before = resume.clone();
        let updated = resume.update_education(
            "missing",
            EducationUpdate {
                institution: "MIT".into(),
                degree: "BSc".into(),
                field_of_study: "CS".into(),
                start_date: "2016".into(),
                end_date: "2020".into(),
            },
        );
        assert!(!updated);
        assert_eq!(resume, before);
    }

    #[test]
    fn test_remove_filters_by_id() {
        let mut resume = Resume::new_for_user(&test_user());
        let a = resume.add_project();
        let b = resume.add_project();
        resume.remove_project(&a);
        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.projects[0].id, b);
    }

    #[test]
    fn test_skills_reject_duplicates_keep_order() {
        let mut resume = Resume::new_for_user(&test_user());
        assert!(resume.add_skill("React"));
        assert!(resume.add_skill("SQL"));
        assert!(!resume.add_skill("React"));
        assert!(!resume.add_skill("  "));
        assert_eq!(resume.skills, vec!["React", "SQL"]);
    }

    #[test]
    fn test_skill_suggestions_exclude_present_skills() {
        let mut resume = Resume::new_for_user(&test_user());
        resume.field = ResumeField::SoftwareEngineer;
        resume.add_skill("React");
        let suggestions = resume.skill_suggestions();
        assert!(!suggestions.contains(&"React"));
        assert!(suggestions.contains(&"TypeScript"));
    }

    #[test]
    fn test_duplicate_gets_fresh_id_and_copy_title() {
        let mut resume = Resume::new_for_user(&test_user());
        resume.id = Uuid::new_v4().to_string();
        resume.title = "Backend CV".to_string();
        let copy = resume.duplicate();
        assert_ne!(copy.id, resume.id);
        assert!(!copy.has_permanent_id());
        assert_eq!(copy.title, "Backend CV (Copy)");
        assert_eq!(copy.experience, resume.experience);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let resume = Resume::new_for_user(&test_user());
        let json = serde_json::to_value(&resume).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("templateId").is_some());
        assert!(json["personalInfo"].get("fullName").is_some());

        let back: Resume = serde_json::from_value(json).unwrap();
        assert_eq!(back, resume);
    }
}
