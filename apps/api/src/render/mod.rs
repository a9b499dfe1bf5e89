//! Template renderer — maps a resume document onto one of nine printable
//! layouts.
//!
//! Rendering is a pure function of the document snapshot: no I/O, no clock,
//! no randomness. Two renders of an identical document produce identical
//! markup. Every template targets a fixed A4 surface (210mm × 297mm) and
//! uses only physical units in the printable area so the export pipeline can
//! paginate it without viewport surprises.
//!
//! Shared contract across all templates (enforced by the tests at the bottom
//! of this module):
//! - sections backed by empty lists are omitted entirely;
//! - description text is split on newlines, blank lines dropped, leading
//!   bullet glyphs stripped;
//! - `current` experience entries end at the literal "Present";
//! - a missing photo renders an initial-letter placeholder;
//! - the experience heading comes from the resume's career field, verbatim;
//! - every section is wrapped in an element carrying `data-section="<name>"`.

pub mod helpers;

mod academic;
mod banking;
mod creative;
mod executive;
mod healthcare;
mod minimalist;
mod modern;
mod professional;
mod tech;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::resume::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateId {
    #[default]
    Modern,
    Minimalist,
    Executive,
    Creative,
    Tech,
    Professional,
    Academic,
    Healthcare,
    Banking,
}

impl TemplateId {
    pub const ALL: [TemplateId; 9] = [
        TemplateId::Modern,
        TemplateId::Minimalist,
        TemplateId::Executive,
        TemplateId::Creative,
        TemplateId::Tech,
        TemplateId::Professional,
        TemplateId::Academic,
        TemplateId::Healthcare,
        TemplateId::Banking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Executive => "executive",
            TemplateId::Creative => "creative",
            TemplateId::Tech => "tech",
            TemplateId::Professional => "professional",
            TemplateId::Academic => "academic",
            TemplateId::Healthcare => "healthcare",
            TemplateId::Banking => "banking",
        }
    }

    /// Unknown ids fall back to Modern rather than failing the render.
    pub fn from_name(name: &str) -> TemplateId {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or(TemplateId::Modern)
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TemplateId::from_name(&name))
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the inner page markup for the resume's selected template.
pub fn render(resume: &Resume) -> String {
    match resume.template_id {
        TemplateId::Modern => modern::page(resume),
        TemplateId::Minimalist => minimalist::page(resume),
        TemplateId::Executive => executive::page(resume),
        TemplateId::Creative => creative::page(resume),
        TemplateId::Tech => tech::page(resume),
        TemplateId::Professional => professional::page(resume),
        TemplateId::Academic => academic::page(resume),
        TemplateId::Healthcare => healthcare::page(resume),
        TemplateId::Banking => banking::page(resume),
    }
}

/// Base stylesheet shared by all templates. Template-specific looks are
/// carried as inline styles so each page is self-contained.
const BASE_CSS: &str = "\
*{margin:0;padding:0;box-sizing:border-box}\
@page{size:A4;margin:0}\
body{background:#fff}\
.page{width:210mm;min-height:297mm;background:#fff;color:#1f2937;\
font-family:'Helvetica Neue',Arial,sans-serif;font-size:10pt;\
line-height:1.45;overflow:hidden}\
.page ul.bullets{list-style:disc outside;margin-left:5mm}\
.page ul.bullets li{margin-bottom:1mm}\
.page img.photo{width:100%;height:100%;object-fit:cover;display:block}\
.photo-frame{overflow:hidden;flex-shrink:0}\
.photo-fallback{width:100%;height:100%;display:flex;align-items:center;\
justify-content:center;font-weight:700}\
@media print{.page{box-shadow:none}}";

/// Wraps the rendered page in a complete standalone HTML document the print
/// pipeline can capture as-is.
pub fn export_document(resume: &Resume) -> String {
    let title = if resume.personal_info.full_name.trim().is_empty() {
        "Resume".to_string()
    } else {
        helpers::escape(&resume.personal_info.full_name)
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title}</title>\n<style>{BASE_CSS}</style>\n</head>\n<body>\n\
<div class=\"page\">{page}</div>\n</body>\n</html>\n",
        page = render(resume),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::ResumeField;
    use crate::models::resume::{
        EducationItem, ExperienceItem, PersonalInfo, ProjectItem, Resume,
    };
    use chrono::TimeZone;
    use chrono::Utc;
    use uuid::Uuid;

    fn empty_resume() -> Resume {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Resume {
            id: "11111111-1111-1111-1111-111111111111".to_string(),
            user_id: Uuid::nil(),
            title: "Test".to_string(),
            field: ResumeField::General,
            template_id: TemplateId::Modern,
            personal_info: PersonalInfo {
                full_name: "jane doe".to_string(),
                email: "jane@example.com".to_string(),
                ..PersonalInfo::default()
            },
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn full_resume() -> Resume {
        let mut resume = empty_resume();
        resume.field = ResumeField::SoftwareEngineer;
        resume.personal_info.summary = "Seasoned engineer.".to_string();
        resume.experience.push(ExperienceItem {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2099-12".to_string(),
            current: true,
            description: "• Shipped the thing\n\n- Cut latency\nPlain line\n  \n".to_string(),
        });
        resume.education.push(EducationItem {
            id: "ed1".to_string(),
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            start_date: "2016".to_string(),
            end_date: "2020".to_string(),
        });
        resume.projects.push(ProjectItem {
            id: "p1".to_string(),
            name: "Side Project".to_string(),
            description: "A tool".to_string(),
            link: "https://example.com".to_string(),
            technologies: "Rust".to_string(),
        });
        resume.skills.push("Rust".to_string());
        resume.languages.push("English (Native)".to_string());
        resume
    }

    fn section_marker(name: &str) -> String {
        format!("data-section=\"{name}\"")
    }

    #[test]
    fn test_unknown_template_name_falls_back_to_modern() {
        assert_eq!(TemplateId::from_name("sparkly"), TemplateId::Modern);
        let decoded: TemplateId = serde_json::from_str("\"sparkly\"").unwrap();
        assert_eq!(decoded, TemplateId::Modern);
        let decoded: TemplateId = serde_json::from_str("\"banking\"").unwrap();
        assert_eq!(decoded, TemplateId::Banking);
    }

    #[test]
    fn test_empty_sections_are_omitted_in_every_template() {
        for template in TemplateId::ALL {
            let mut resume = empty_resume();
            resume.template_id = template;
            let html = render(&resume);
            for name in ["experience", "education", "projects", "skills", "languages"] {
                assert!(
                    !html.contains(&section_marker(name)),
                    "{template}: empty {name} section should be omitted"
                );
            }
        }
    }

    #[test]
    fn test_populated_sections_are_present_in_every_template() {
        for template in TemplateId::ALL {
            let mut resume = full_resume();
            resume.template_id = template;
            let html = render(&resume);
            for name in ["experience", "education", "projects", "skills", "languages"] {
                assert!(
                    html.contains(&section_marker(name)),
                    "{template}: populated {name} section should render"
                );
            }
        }
    }

    #[test]
    fn test_description_bullets_split_and_strip_in_every_template() {
        for template in TemplateId::ALL {
            let mut resume = full_resume();
            resume.template_id = template;
            let html = render(&resume);
            // Three non-blank lines, blank ones dropped, glyphs stripped.
            assert!(html.contains("Shipped the thing"), "{template}");
            assert!(html.contains("Cut latency"), "{template}");
            assert!(html.contains("Plain line"), "{template}");
            assert!(!html.contains("• Shipped"), "{template}: glyph must be stripped");
            assert!(!html.contains("- Cut"), "{template}: glyph must be stripped");
        }
    }

    #[test]
    fn test_current_experience_renders_present_in_every_template() {
        for template in TemplateId::ALL {
            let mut resume = full_resume();
            resume.template_id = template;
            let html = render(&resume);
            assert!(html.contains("Present"), "{template}");
            assert!(
                !html.contains("2099-12"),
                "{template}: endDate of a current entry must be ignored"
            );
        }
    }

    #[test]
    fn test_missing_photo_renders_initial_placeholder() {
        for template in TemplateId::ALL {
            let mut resume = full_resume();
            resume.template_id = template;
            let html = render(&resume);
            assert!(html.contains("photo-fallback"), "{template}");
            assert!(html.contains(">J<"), "{template}: initial of the name");
            assert!(!html.contains("<img"), "{template}: no img without a photo url");
        }
    }

    #[test]
    fn test_photo_url_renders_img_tag() {
        let mut resume = full_resume();
        resume.personal_info.photo_url = Some("https://cdn.example.com/me.png".to_string());
        for template in TemplateId::ALL {
            resume.template_id = template;
            let html = render(&resume);
            assert!(html.contains("https://cdn.example.com/me.png"), "{template}");
            assert!(!html.contains("photo-fallback"), "{template}");
        }
    }

    #[test]
    fn test_experience_heading_follows_field() {
        let mut resume = full_resume();
        resume.field = ResumeField::Doctor;
        for template in TemplateId::ALL {
            resume.template_id = template;
            let html = render(&resume);
            assert!(html.contains("Clinical Experience"), "{template}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for template in TemplateId::ALL {
            let mut resume = full_resume();
            resume.template_id = template;
            assert_eq!(render(&resume), render(&resume), "{template}");
        }
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut resume = full_resume();
        resume.personal_info.full_name = "Jane <script>alert(1)</script>".to_string();
        for template in TemplateId::ALL {
            resume.template_id = template;
            let html = render(&resume);
            assert!(!html.contains("<script>"), "{template}");
        }
    }

    #[test]
    fn test_export_document_is_print_fixed() {
        let resume = full_resume();
        let doc = export_document(&resume);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("size:A4"));
        assert!(doc.contains("210mm"));
        assert!(doc.contains("297mm"));
        assert!(!doc.contains("100vw"));
        assert!(!doc.contains("100vh"));
    }
}
