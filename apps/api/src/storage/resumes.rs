//! Resume persistence — CRUD against the `resumes` table.
//!
//! The store is behind a trait so the editor layer and its tests never need a
//! live database. Save semantics: documents with a `temp-` placeholder id are
//! INSERTed under a fresh server-assigned id; documents with a permanent id
//! are UPDATEd in place. Both paths refresh `updated_at` server-side and
//! return the canonical stored copy. Updates are last-write-wins — no
//! version token is checked.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::field::ResumeField;
use crate::models::resume::Resume;
use crate::render::TemplateId;

/// Listing row for dashboards: everything but the document body.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub title: String,
    pub field: String,
    pub template_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// All resumes owned by the user, most recently updated first.
    async fn list(&self, user_id: Uuid) -> Result<Vec<ResumeSummary>, AppError>;

    /// A single document, or None. Ids that are not UUIDs (including `temp-`
    /// placeholders) resolve to None rather than erroring.
    async fn get(&self, id: &str) -> Result<Option<Resume>, AppError>;

    /// Insert-or-update; returns the canonical stored copy so the caller can
    /// adopt a newly assigned id.
    async fn save(&self, resume: &Resume) -> Result<Resume, AppError>;

    /// Returns whether a row was actually removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResumeRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    field: String,
    template_id: String,
    personal_info: serde_json::Value,
    experience: serde_json::Value,
    education: serde_json::Value,
    projects: serde_json::Value,
    skills: Vec<String>,
    languages: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResumeRow {
    fn into_resume(self) -> Result<Resume, AppError> {
        Ok(Resume {
            id: self.id.to_string(),
            user_id: self.user_id,
            title: self.title,
            field: ResumeField::from_name(&self.field),
            template_id: TemplateId::from_name(&self.template_id),
            personal_info: serde_json::from_value(self.personal_info)
                .map_err(|e| decode_error("personal_info", e))?,
            experience: serde_json::from_value(self.experience)
                .map_err(|e| decode_error("experience", e))?,
            education: serde_json::from_value(self.education)
                .map_err(|e| decode_error("education", e))?,
            projects: serde_json::from_value(self.projects)
                .map_err(|e| decode_error("projects", e))?,
            skills: self.skills,
            languages: self.languages,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn decode_error(column: &str, err: serde_json::Error) -> AppError {
    AppError::Internal(anyhow::anyhow!("Failed to decode stored {column}: {err}"))
}

fn encode_error(column: &str, err: serde_json::Error) -> AppError {
    AppError::Internal(anyhow::anyhow!("Failed to serialize {column}: {err}"))
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn list(&self, user_id: Uuid) -> Result<Vec<ResumeSummary>, AppError> {
        Ok(sqlx::query_as::<_, ResumeSummary>(
            r#"
            SELECT id, title, field, template_id, created_at, updated_at
            FROM resumes
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: &str) -> Result<Option<Resume>, AppError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(ResumeRow::into_resume).transpose()
    }

    async fn save(&self, resume: &Resume) -> Result<Resume, AppError> {
        let personal_info = serde_json::to_value(&resume.personal_info)
            .map_err(|e| encode_error("personal_info", e))?;
        let experience = serde_json::to_value(&resume.experience)
            .map_err(|e| encode_error("experience", e))?;
        let education = serde_json::to_value(&resume.education)
            .map_err(|e| encode_error("education", e))?;
        let projects =
            serde_json::to_value(&resume.projects).map_err(|e| encode_error("projects", e))?;

        let row: ResumeRow = if resume.has_permanent_id() {
            let id = Uuid::parse_str(&resume.id)
                .map_err(|_| AppError::Validation(format!("Invalid resume id '{}'", resume.id)))?;
            sqlx::query_as(
                r#"
                UPDATE resumes
                SET title = $2, field = $3, template_id = $4, personal_info = $5,
                    experience = $6, education = $7, projects = $8,
                    skills = $9, languages = $10, updated_at = now()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(&resume.title)
            .bind(resume.field.as_str())
            .bind(resume.template_id.as_str())
            .bind(&personal_info)
            .bind(&experience)
            .bind(&education)
            .bind(&projects)
            .bind(&resume.skills)
            .bind(&resume.languages)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", resume.id)))?
        } else {
            sqlx::query_as(
                r#"
                INSERT INTO resumes
                    (id, user_id, title, field, template_id, personal_info,
                     experience, education, projects, skills, languages)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(resume.user_id)
            .bind(&resume.title)
            .bind(resume.field.as_str())
            .bind(resume.template_id.as_str())
            .bind(&personal_info)
            .bind(&experience)
            .bind(&education)
            .bind(&projects)
            .bind(&resume.skills)
            .bind(&resume.languages)
            .fetch_one(&self.pool)
            .await?
        };

        row.into_resume()
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
