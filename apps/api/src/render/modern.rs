//! Modern — lavender sidebar (photo, contact, education, skills, languages)
//! with the name, summary and an accented experience timeline on the right.

use super::helpers::{bullet_list, date_range, escape, photo_or_initial};
use crate::models::resume::Resume;

const ACCENT: &str = "#4f46e5";
const SIDEBAR_BG: &str = "#f3f0ff";

pub fn page(resume: &Resume) -> String {
    format!(
        "<div style=\"display:flex;width:100%;min-height:297mm\">{}{}</div>",
        sidebar(resume),
        main_column(resume)
    )
}

fn sidebar(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = format!(
        "<div style=\"width:35%;background:{SIDEBAR_BG};padding:10mm 7mm;\
display:flex;flex-direction:column;gap:8mm\">"
    );

    out.push_str(&format!(
        "<div style=\"display:flex;justify-content:center\">{}</div>",
        photo_or_initial(
            p,
            "width:38mm;height:38mm;border-radius:50%;border:1.5mm solid #fff",
            &format!("background:#e0e7ff;color:{ACCENT};font-size:18pt"),
        )
    ));

    let contact: Vec<(&str, &str)> = [
        ("Phone", p.phone.as_str()),
        ("Email", p.email.as_str()),
        ("Location", p.location.as_str()),
        ("Website", p.website.as_str()),
        ("LinkedIn", p.linkedin.as_str()),
        ("GitHub", p.github.as_str()),
    ]
    .into_iter()
    .filter(|(_, v)| !v.trim().is_empty())
    .collect();
    if !contact.is_empty() {
        out.push_str(&sidebar_heading("Contact"));
        out.push_str("<div style=\"font-size:8.5pt;display:flex;flex-direction:column;gap:2mm\">");
        for (label, value) in contact {
            out.push_str(&format!(
                "<div><span style=\"font-weight:700;color:{ACCENT}\">{label}</span><br>{}</div>",
                escape(value)
            ));
        }
        out.push_str("</div>");
    }

    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\">");
        out.push_str(&sidebar_heading("Education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4mm\">\
<p style=\"font-size:8pt;font-weight:600;color:{ACCENT}\">{}</p>\
<p style=\"font-weight:700;font-size:9.5pt\">{}</p>\
<p style=\"font-size:8.5pt;color:#4b5563\">{}</p></div>",
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
                escape(&edu.degree),
                escape(&edu.institution),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.skills.is_empty() {
        out.push_str("<section data-section=\"skills\">");
        out.push_str(&sidebar_heading("Skills"));
        out.push_str("<ul style=\"list-style:none;font-size:9pt\">");
        for skill in &resume.skills {
            out.push_str(&format!(
                "<li style=\"margin-bottom:1.5mm\">\
<span style=\"display:inline-block;width:1.5mm;height:1.5mm;background:{ACCENT};\
border-radius:50%;margin-right:2mm;vertical-align:middle\"></span>{}</li>",
                escape(skill)
            ));
        }
        out.push_str("</ul></section>");
    }

    if !resume.languages.is_empty() {
        out.push_str("<section data-section=\"languages\">");
        out.push_str(&sidebar_heading("Languages"));
        out.push_str("<ul style=\"list-style:none;font-size:9pt\">");
        for language in &resume.languages {
            out.push_str(&format!(
                "<li style=\"margin-bottom:1.5mm\">{}</li>",
                escape(language)
            ));
        }
        out.push_str("</ul></section>");
    }

    out.push_str("</div>");
    out
}

fn sidebar_heading(label: &str) -> String {
    format!(
        "<h3 style=\"font-size:11pt;font-weight:700;color:#111827;\
border-bottom:0.3mm solid #d1d5db;padding-bottom:1.5mm;margin-bottom:3mm\">{}</h3>",
        escape(label)
    )
}

fn main_column(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = String::from("<div style=\"width:65%;padding:12mm 10mm\">");

    out.push_str(&format!(
        "<div style=\"margin-bottom:9mm\">\
<h1 style=\"font-size:24pt;font-weight:800;letter-spacing:-0.2mm\">{}</h1>\
<p style=\"font-size:13pt;color:#6b7280;text-transform:uppercase;\
letter-spacing:0.8mm;font-weight:500\">{}</p></div>",
        escape(&p.full_name),
        escape(resume.field.as_str()),
    ));

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:9mm\">{}\
<p style=\"font-size:9.5pt;color:#4b5563;text-align:justify\">{}</p></section>",
            main_heading("About Me"),
            escape(&p.summary),
        ));
    }

    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:9mm\">");
        out.push_str(&main_heading(resume.field.experience_heading()));
        out.push_str(
            "<div style=\"border-left:0.6mm solid #e0e7ff;padding-left:5mm;\
margin-left:1mm;display:flex;flex-direction:column;gap:6mm\">",
        );
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div><div style=\"display:flex;justify-content:space-between;\
align-items:baseline;margin-bottom:1mm\">\
<h3 style=\"font-size:12pt;font-weight:700\">{}</h3>\
<span style=\"font-size:8pt;font-weight:600;color:{ACCENT};background:#eef2ff;\
padding:1mm 2mm;border-radius:1mm\">{}</span></div>\
<p style=\"font-size:9.5pt;font-weight:500;color:{ACCENT};margin-bottom:2mm\">{}</p>{}</div>",
                escape(&exp.position),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                escape(&exp.company),
                bullet_list(&exp.description, "font-size:9.5pt;color:#4b5563"),
            ));
        }
        out.push_str("</div></section>");
    }

    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\">");
        out.push_str(&main_heading("Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4mm\">\
<h3 style=\"font-size:10.5pt;font-weight:700\">{}</h3>\
<p style=\"font-size:9.5pt;color:#4b5563\">{}</p>\
<p style=\"font-size:8.5pt;color:{ACCENT}\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                escape(
                    &[project.technologies.as_str(), project.link.as_str()]
                        .iter()
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                        .join(" · ")
                ),
            ));
        }
        out.push_str("</section>");
    }

    out.push_str("</div>");
    out
}

fn main_heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:14pt;font-weight:700;margin-bottom:4mm\">{}</h2>",
        escape(label)
    )
}
