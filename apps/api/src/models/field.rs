//! Career fields — the user's declared profession.
//!
//! The field drives two lookup tables: the skill-suggestion catalog shown in
//! the editor, and the heading used for the experience section when a resume
//! is rendered.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResumeField {
    SoftwareEngineer,
    DevOps,
    ProductManager,
    DataScientist,
    Designer,
    Marketing,
    Doctor,
    Teacher,
    BankEmployee,
    HumanResources,
    StudentFresher,
    #[default]
    General,
}

impl Serialize for ResumeField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResumeField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ResumeField::from_name(&name))
    }
}

impl ResumeField {
    pub const ALL: [ResumeField; 12] = [
        ResumeField::SoftwareEngineer,
        ResumeField::DevOps,
        ResumeField::ProductManager,
        ResumeField::DataScientist,
        ResumeField::Designer,
        ResumeField::Marketing,
        ResumeField::Doctor,
        ResumeField::Teacher,
        ResumeField::BankEmployee,
        ResumeField::HumanResources,
        ResumeField::StudentFresher,
        ResumeField::General,
    ];

    /// Anything we don't recognize resolves to General so that old rows and
    /// hand-edited payloads keep rendering instead of erroring.
    pub fn from_name(name: &str) -> ResumeField {
        ResumeField::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .unwrap_or(ResumeField::General)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeField::SoftwareEngineer => "Software Engineer",
            ResumeField::DevOps => "DevOps",
            ResumeField::ProductManager => "Product Manager",
            ResumeField::DataScientist => "Data Scientist",
            ResumeField::Designer => "Designer",
            ResumeField::Marketing => "Marketing",
            ResumeField::Doctor => "Doctor",
            ResumeField::Teacher => "Teacher",
            ResumeField::BankEmployee => "Bank Employee",
            ResumeField::HumanResources => "Human Resources",
            ResumeField::StudentFresher => "Student / Fresher",
            ResumeField::General => "General",
        }
    }

    /// Candidate skills offered for this profession.
    pub fn skill_catalog(&self) -> &'static [&'static str] {
        match self {
            ResumeField::SoftwareEngineer => &[
                "React",
                "TypeScript",
                "Node.js",
                "Python",
                "AWS",
                "System Design",
                "Git",
                "SQL",
            ],
            ResumeField::DevOps => &[
                "Docker",
                "Kubernetes",
                "CI/CD",
                "AWS",
                "Terraform",
                "Linux",
                "Bash Scripting",
                "Monitoring",
            ],
            ResumeField::ProductManager => &[
                "Product Strategy",
                "Agile",
                "User Research",
                "Roadmapping",
                "Data Analysis",
                "Stakeholder Management",
            ],
            ResumeField::DataScientist => &[
                "Python",
                "R",
                "Machine Learning",
                "SQL",
                "Tableau",
                "Statistics",
                "Big Data",
                "TensorFlow",
            ],
            ResumeField::Designer => &[
                "Figma",
                "Adobe XD",
                "UI/UX",
                "Prototyping",
                "User Testing",
                "Wireframing",
                "Visual Design",
            ],
            ResumeField::Marketing => &[
                "SEO",
                "Content Strategy",
                "Social Media",
                "Google Analytics",
                "Email Marketing",
                "Copywriting",
                "Branding",
            ],
            ResumeField::Doctor => &[
                "Patient Care",
                "Diagnosis",
                "Surgery",
                "EMR",
                "Clinical Research",
                "Emergency Medicine",
                "Pediatrics",
                "Communication",
            ],
            ResumeField::Teacher => &[
                "Classroom Management",
                "Curriculum Design",
                "Lesson Planning",
                "Student Assessment",
                "Special Education",
                "EdTech",
            ],
            ResumeField::BankEmployee => &[
                "Risk Management",
                "Financial Analysis",
                "Customer Service",
                "Compliance",
                "Investment Banking",
                "Accounting",
                "Sales",
            ],
            ResumeField::HumanResources => &[
                "Recruitment",
                "Employee Relations",
                "Payroll",
                "Onboarding",
                "Performance Management",
                "HRIS",
                "Conflict Resolution",
            ],
            ResumeField::StudentFresher => &[
                "Communication",
                "Teamwork",
                "Problem Solving",
                "Time Management",
                "Leadership",
                "Microsoft Office",
                "Research",
            ],
            ResumeField::General => &[
                "Communication",
                "Project Management",
                "Leadership",
                "Organization",
                "Problem Solving",
            ],
        }
    }

    /// Heading used for the experience section of a rendered resume.
    pub fn experience_heading(&self) -> &'static str {
        match self {
            ResumeField::Doctor => "Clinical Experience",
            ResumeField::Teacher => "Teaching Experience",
            ResumeField::BankEmployee => "Banking Experience",
            ResumeField::SoftwareEngineer
            | ResumeField::DevOps
            | ResumeField::Designer
            | ResumeField::Marketing => "Work Experience",
            ResumeField::ProductManager | ResumeField::DataScientist => "Professional Experience",
            ResumeField::HumanResources => "HR Experience",
            ResumeField::StudentFresher => "Internships & Experience",
            ResumeField::General => "Experience",
        }
    }

    /// Catalog skills not yet present on the resume, insertion order kept.
    pub fn skill_suggestions(&self, existing: &[String]) -> Vec<&'static str> {
        self.skill_catalog()
            .iter()
            .copied()
            .filter(|candidate| !existing.iter().any(|s| s == candidate))
            .collect()
    }
}

impl std::fmt::Display for ResumeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_heading_per_field() {
        assert_eq!(ResumeField::Doctor.experience_heading(), "Clinical Experience");
        assert_eq!(ResumeField::Teacher.experience_heading(), "Teaching Experience");
        assert_eq!(ResumeField::BankEmployee.experience_heading(), "Banking Experience");
        assert_eq!(ResumeField::General.experience_heading(), "Experience");
    }

    #[test]
    fn test_unknown_field_decodes_as_general() {
        let field: ResumeField = serde_json::from_str("\"UnknownField\"").unwrap();
        assert_eq!(field, ResumeField::General);
        assert_eq!(field.experience_heading(), "Experience");
    }

    #[test]
    fn test_field_round_trips_display_names() {
        for field in ResumeField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
            let back: ResumeField = serde_json::from_str(&json).unwrap();
            assert_eq!(back, field);
        }
    }

    #[test]
    fn test_skill_suggestions_exclude_existing() {
        let existing = vec!["React".to_string()];
        let suggestions = ResumeField::SoftwareEngineer.skill_suggestions(&existing);
        assert!(!suggestions.contains(&"React"));
        assert!(suggestions.contains(&"TypeScript"));
    }

    #[test]
    fn test_skill_suggestions_keep_catalog_order() {
        let suggestions = ResumeField::DevOps.skill_suggestions(&[]);
        assert_eq!(suggestions, ResumeField::DevOps.skill_catalog());
    }
}
