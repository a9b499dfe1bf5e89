//! Prompt construction for the AI assist operations. Templates are filled
//! with user data via plain `replace` so the output stays deterministic and
//! greppable.

use crate::models::field::ResumeField;

const SUMMARY_PROMPT_TEMPLATE: &str = "\
Write a professional, ATS-friendly resume summary for a {job_title} in the field of {field}.
Key skills: {skills}.
Experience highlights: {experience}.
Keep it under 50 words. Use strong action verbs.";

const IMPROVE_PROMPT_TEMPLATE: &str = "\
Rewrite the following resume bullet point to be more impactful, use action verbs, and quantify results if possible.
Role: {role}. Field: {field}.
Original text: \"{text}\"
Return only the improved text, no explanations.";

const SAMPLE_RESUME_PROMPT_TEMPLATE: &str = r#"Generate a sample resume JSON structure for a {field} role.
{field_emphasis}
Include a professional summary, 2 sample experience entries (relevant to {field}), 1 sample education entry, 2 sample projects (or certifications if more relevant), and a list of 5 relevant skills.

Format as valid JSON matching this schema exactly:
{
  "personalInfo": { "summary": "Professional summary here..." },
  "experience": [{ "company": "Example Org", "position": "Role Title", "startDate": "2020-01", "endDate": "2023-01", "current": false, "description": "• Bullet point 1\n• Bullet point 2" }],
  "education": [{ "institution": "University Name", "degree": "Degree Name", "fieldOfStudy": "Major", "startDate": "2016", "endDate": "2020" }],
  "projects": [{ "name": "Project/Cert Name", "description": "Description...", "technologies": "Tools used", "link": "https://example.com" }],
  "skills": ["Skill 1", "Skill 2", "Skill 3", "Skill 4", "Skill 5"]
}

IMPORTANT: Return ONLY the raw JSON string. Do not include markdown formatting like ```json or ```."#;

pub fn summary_prompt(
    job_title: &str,
    skills: &[String],
    experience: &str,
    field: ResumeField,
) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{field}", field.as_str())
        .replace("{skills}", &skills.join(", "))
        .replace("{experience}", experience)
}

pub fn improve_prompt(text: &str, role: &str, field: ResumeField) -> String {
    IMPROVE_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{field}", field.as_str())
        .replace("{text}", text)
}

pub fn sample_resume_prompt(field: ResumeField) -> String {
    SAMPLE_RESUME_PROMPT_TEMPLATE
        .replace("{field_emphasis}", field_emphasis(field))
        .replace("{field}", field.as_str())
}

/// Field-specific emphasis for generated sample content.
fn field_emphasis(field: ResumeField) -> &'static str {
    match field {
        ResumeField::Doctor => {
            "Include clinical rotations, hospital experience, and medical certifications."
        }
        ResumeField::Teacher => {
            "Include teaching experience, curriculum development, and classroom management."
        }
        ResumeField::BankEmployee => {
            "Include financial analysis, risk management, and customer relationship management."
        }
        ResumeField::StudentFresher => {
            "Focus on education, internships, academic projects, and soft skills."
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_interpolates_inputs() {
        let prompt = summary_prompt(
            "Staff Engineer",
            &["Rust".to_string(), "SQL".to_string()],
            "Led platform team",
            ResumeField::SoftwareEngineer,
        );
        assert!(prompt.contains("Staff Engineer"));
        assert!(prompt.contains("Software Engineer"));
        assert!(prompt.contains("Rust, SQL"));
        assert!(prompt.contains("under 50 words"));
    }

    #[test]
    fn test_sample_prompt_carries_field_emphasis() {
        let doctor = sample_resume_prompt(ResumeField::Doctor);
        assert!(doctor.contains("clinical rotations"));
        let teacher = sample_resume_prompt(ResumeField::Teacher);
        assert!(teacher.contains("curriculum development"));
        let general = sample_resume_prompt(ResumeField::General);
        assert!(!general.contains("clinical rotations"));
        assert!(general.contains("ONLY the raw JSON"));
    }
}
