//! Editing sessions — the orchestration layer around an in-memory document.
//!
//! A session owns the authoritative working copy of one resume. Field edits
//! mutate it synchronously and mark it dirty; an explicit save pushes it to
//! the store; AI actions merge their result in only on success. Two flags
//! guard the async edges: `saving` rejects double-submitted saves, and
//! `ai_pending` serializes AI calls to at most one in flight.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::SampleResume;
use crate::errors::AppError;
use crate::models::field::ResumeField;
use crate::models::resume::{
    EducationItem, EducationUpdate, ExperienceItem, ExperienceUpdate, ProjectItem, ProjectUpdate,
    Resume,
};
use crate::models::user::UserProfile;
use crate::render::TemplateId;

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume: Resume,
    /// The working copy has diverged from the last persisted copy.
    pub dirty: bool,
    /// A save round-trip is outstanding.
    pub saving: bool,
    /// An AI call is outstanding; a second one is rejected until it settles.
    pub ai_pending: bool,
}

impl EditorSession {
    /// Session over a document loaded from the store.
    pub fn open_existing(resume: Resume) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: resume.user_id,
            resume,
            dirty: false,
            saving: false,
            ai_pending: false,
        }
    }

    /// Session over a freshly seeded document (unsaved, dirty from birth).
    pub fn open_new(user: &UserProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user.id,
            resume: Resume::new_for_user(user),
            dirty: true,
            saving: false,
            ai_pending: false,
        }
    }

    pub fn phase(&self) -> &'static str {
        if self.saving {
            "saving"
        } else if self.dirty {
            "editing"
        } else {
            "idle"
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            phase: self.phase(),
            dirty: self.dirty,
            saving: self.saving,
            ai_pending: self.ai_pending,
            skill_suggestions: self.resume.skill_suggestions(),
            resume: self.resume.clone(),
        }
    }

    /// Applies one edit command. On success the document is mutated in place
    /// and the session marked dirty; on failure nothing changes.
    pub fn apply(&mut self, command: EditCommand) -> Result<(), AppError> {
        let changed = match command {
            EditCommand::SetTitle { value } => {
                self.resume.title = value;
                true
            }
            EditCommand::SetField { value } => {
                self.resume.field = value;
                true
            }
            EditCommand::SetTemplate { value } => {
                self.resume.template_id = value;
                true
            }
            EditCommand::SetPersonal { field, value } => {
                self.set_personal(field, value);
                true
            }
            EditCommand::AddExperience => {
                self.resume.add_experience();
                true
            }
            EditCommand::UpdateExperience { id, update } => {
                if !self.resume.update_experience(&id, update) {
                    return Err(item_not_found("experience", &id));
                }
                true
            }
            EditCommand::RemoveExperience { id } => {
                self.resume.remove_experience(&id);
                true
            }
            EditCommand::AddEducation => {
                self.resume.add_education();
                true
            }
            EditCommand::UpdateEducation { id, update } => {
                if !self.resume.update_education(&id, update) {
                    return Err(item_not_found("education", &id));
                }
                true
            }
            EditCommand::RemoveEducation { id } => {
                self.resume.remove_education(&id);
                true
            }
            EditCommand::AddProject => {
                self.resume.add_project();
                true
            }
            EditCommand::UpdateProject { id, update } => {
                if !self.resume.update_project(&id, update) {
                    return Err(item_not_found("project", &id));
                }
                true
            }
            EditCommand::RemoveProject { id } => {
                self.resume.remove_project(&id);
                true
            }
            EditCommand::AddSkill { value } => self.resume.add_skill(&value),
            EditCommand::RemoveSkill { value } => {
                self.resume.remove_skill(&value);
                true
            }
            EditCommand::AddLanguage { value } => self.resume.add_language(&value),
            EditCommand::RemoveLanguage { value } => {
                self.resume.remove_language(&value);
                true
            }
        };
        if changed {
            self.dirty = true;
        }
        Ok(())
    }

    fn set_personal(&mut self, field: PersonalField, value: String) {
        let info = &mut self.resume.personal_info;
        match field {
            PersonalField::FullName => info.full_name = value,
            PersonalField::Email => info.email = value,
            PersonalField::Phone => info.phone = value,
            PersonalField::Location => info.location = value,
            PersonalField::Website => info.website = value,
            PersonalField::Linkedin => info.linkedin = value,
            PersonalField::Github => info.github = value,
            PersonalField::Summary => info.summary = value,
            PersonalField::PhotoUrl => {
                info.photo_url = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
        }
    }

    /// Merges a generated summary (the `ai/summary` action).
    pub fn apply_summary(&mut self, summary: String) {
        self.resume.personal_info.summary = summary;
        self.dirty = true;
    }

    /// Merges an improved description into one experience entry.
    pub fn apply_improved_description(&mut self, experience_id: &str, text: String) -> bool {
        match self
            .resume
            .experience
            .iter_mut()
            .find(|e| e.id == experience_id)
        {
            Some(item) => {
                item.description = text;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Bulk-overwrites the generated sub-trees (the auto-fill action).
    /// Every incoming list item gets a fresh id.
    pub fn apply_sample(&mut self, sample: SampleResume) {
        let resume = &mut self.resume;
        resume.personal_info.summary = sample.personal_info.summary;
        resume.experience = sample
            .experience
            .into_iter()
            .map(|e| ExperienceItem {
                id: Uuid::new_v4().to_string(),
                company: e.company,
                position: e.position,
                start_date: e.start_date,
                end_date: e.end_date,
                current: e.current,
                description: e.description,
            })
            .collect();
        resume.education = sample
            .education
            .into_iter()
            .map(|e| EducationItem {
                id: Uuid::new_v4().to_string(),
                institution: e.institution,
                degree: e.degree,
                field_of_study: e.field_of_study,
                start_date: e.start_date,
                end_date: e.end_date,
            })
            .collect();
        resume.projects = sample
            .projects
            .into_iter()
            .map(|p| ProjectItem {
                id: Uuid::new_v4().to_string(),
                name: p.name,
                description: p.description,
                link: p.link,
                technologies: p.technologies,
            })
            .collect();
        resume.skills.clear();
        for skill in sample.skills {
            resume.add_skill(&skill);
        }
        self.dirty = true;
    }
}

fn item_not_found(section: &str, id: &str) -> AppError {
    AppError::NotFound(format!("No {section} item with id {id}"))
}

/// What the editor surface sees after every operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub phase: &'static str,
    pub dirty: bool,
    pub saving: bool,
    pub ai_pending: bool,
    pub skill_suggestions: Vec<&'static str>,
    pub resume: Resume,
}

/// One user edit, applied synchronously to the in-memory document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditCommand {
    SetTitle { value: String },
    SetField { value: ResumeField },
    SetTemplate { value: TemplateId },
    SetPersonal { field: PersonalField, value: String },
    AddExperience,
    UpdateExperience { id: String, update: ExperienceUpdate },
    RemoveExperience { id: String },
    AddEducation,
    UpdateEducation { id: String, update: EducationUpdate },
    RemoveEducation { id: String },
    AddProject,
    UpdateProject { id: String, update: ProjectUpdate },
    RemoveProject { id: String },
    AddSkill { value: String },
    RemoveSkill { value: String },
    AddLanguage { value: String },
    RemoveLanguage { value: String },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Summary,
    PhotoUrl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{SamplePersonalInfo, SampleResume};

    fn test_user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    fn session() -> EditorSession {
        EditorSession::open_new(&test_user())
    }

    #[test]
    fn test_new_session_starts_dirty_existing_starts_clean() {
        let user = test_user();
        assert!(EditorSession::open_new(&user).dirty);

        let mut resume = Resume::new_for_user(&user);
        resume.id = Uuid::new_v4().to_string();
        let existing = EditorSession::open_existing(resume);
        assert!(!existing.dirty);
        assert_eq!(existing.phase(), "idle");
    }

    #[test]
    fn test_edit_marks_dirty_and_mutates_synchronously() {
        let mut session = session();
        session.dirty = false;
        session
            .apply(EditCommand::SetTitle {
                value: "Senior Dev".to_string(),
            })
            .unwrap();
        assert_eq!(session.resume.title, "Senior Dev");
        assert!(session.dirty);
        assert_eq!(session.phase(), "editing");
    }

    #[test]
    fn test_duplicate_skill_does_not_mark_dirty() {
        let mut session = session();
        session.apply(EditCommand::AddSkill { value: "Rust".into() }).unwrap();
        session.dirty = false;
        session.apply(EditCommand::AddSkill { value: "Rust".into() }).unwrap();
        assert!(!session.dirty);
        assert_eq!(session.resume.skills, vec!["Rust"]);
    }

    #[test]
    fn test_update_of_missing_item_fails_without_mutation() {
        let mut session = session();
        session.dirty = false;
        let before = session.resume.clone();
        let result = session.apply(EditCommand::UpdateExperience {
            id: "missing".to_string(),
            update: ExperienceUpdate {
                company: "X".into(),
                position: "Y".into(),
                start_date: String::new(),
                end_date: String::new(),
                current: false,
                description: String::new(),
            },
        });
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(session.resume, before);
        assert!(!session.dirty);
    }

    #[test]
    fn test_set_photo_url_empty_clears_it() {
        let mut session = session();
        session
            .apply(EditCommand::SetPersonal {
                field: PersonalField::PhotoUrl,
                value: "https://x/p.png".into(),
            })
            .unwrap();
        assert_eq!(
            session.resume.personal_info.photo_url.as_deref(),
            Some("https://x/p.png")
        );
        session
            .apply(EditCommand::SetPersonal {
                field: PersonalField::PhotoUrl,
                value: "".into(),
            })
            .unwrap();
        assert_eq!(session.resume.personal_info.photo_url, None);
    }

    #[test]
    fn test_apply_sample_overwrites_subtrees_with_fresh_ids() {
        let mut session = session();
        session.apply(EditCommand::AddExperience).unwrap();
        let old_id = session.resume.experience[0].id.clone();

        session.apply_sample(SampleResume {
            personal_info: SamplePersonalInfo {
                summary: "Generated".to_string(),
            },
            experience: vec![crate::ai::SampleExperience {
                company: "Gen Co".into(),
                position: "Role".into(),
                start_date: "2020-01".into(),
                end_date: "2022-01".into(),
                current: false,
                description: "• Did things".into(),
            }],
            education: vec![],
            projects: vec![],
            skills: vec!["A".into(), "B".into(), "A".into()],
        });

        assert_eq!(session.resume.personal_info.summary, "Generated");
        assert_eq!(session.resume.experience.len(), 1);
        assert_ne!(session.resume.experience[0].id, old_id);
        assert!(!session.resume.experience[0].id.is_empty());
        // Duplicates in generated skills are collapsed.
        assert_eq!(session.resume.skills, vec!["A", "B"]);
        assert!(session.dirty);
    }

    #[test]
    fn test_edit_command_wire_format() {
        let cmd: EditCommand = serde_json::from_str(
            r#"{"op":"setPersonal","field":"fullName","value":"Jane"}"#,
        )
        .unwrap();
        assert!(matches!(
            cmd,
            EditCommand::SetPersonal {
                field: PersonalField::FullName,
                ..
            }
        ));

        let cmd: EditCommand = serde_json::from_str(
            r#"{"op":"updateEducation","id":"e1","update":{"institution":"MIT",
"degree":"BSc","fieldOfStudy":"CS","startDate":"2016","endDate":"2020"}}"#,
        )
        .unwrap();
        assert!(matches!(cmd, EditCommand::UpdateEducation { .. }));
    }
}
