//! Professional — navy header band, classic two-column body with dates
//! right-aligned in the main column.

use super::helpers::{bullet_list, date_range, escape, join_contact, photo_or_initial};
use crate::models::resume::Resume;

const NAVY: &str = "#1e3a5f";

pub fn page(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = String::from("<div style=\"min-height:297mm\">");

    out.push_str(&format!(
        "<div style=\"background:{NAVY};color:#fff;padding:10mm 14mm;display:flex;\
align-items:center;gap:8mm\">{}\
<div><h1 style=\"font-size:20pt;font-weight:700\">{}</h1>\
<p style=\"font-size:11pt;opacity:0.85;text-transform:uppercase;\
letter-spacing:0.6mm\">{}</p>\
<p style=\"font-size:8.5pt;opacity:0.8;margin-top:2mm\">{}</p></div></div>",
        photo_or_initial(
            p,
            "width:28mm;height:28mm;border-radius:50%;border:0.8mm solid rgba(255,255,255,0.5)",
            "background:rgba(255,255,255,0.15);color:#fff;font-size:14pt",
        ),
        escape(&p.full_name),
        escape(resume.field.as_str()),
        join_contact(
            &[&p.email, &p.phone, &p.location, &p.linkedin, &p.website],
            " &nbsp;|&nbsp; "
        ),
    ));

    out.push_str("<div style=\"display:flex;padding:9mm 14mm;gap:9mm\">");

    // Main column.
    out.push_str("<div style=\"width:66%\">");
    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:7mm\">{}\
<p style=\"font-size:9.5pt;color:#374151;text-align:justify\">{}</p></section>",
            heading("Summary"),
            escape(&p.summary)
        ));
    }
    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading(resume.field.experience_heading()));
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div style=\"margin-bottom:5mm\">\
<div style=\"display:flex;justify-content:space-between;align-items:baseline\">\
<h3 style=\"font-size:11pt;font-weight:700;color:{NAVY}\">{}</h3>\
<span style=\"font-size:8.5pt;color:#6b7280;text-align:right\">{}</span></div>\
<p style=\"font-size:9.5pt;font-weight:600;color:#4b5563;margin-bottom:1.5mm\">{}</p>{}</div>",
                escape(&exp.position),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                escape(&exp.company),
                bullet_list(&exp.description, "font-size:9.5pt;color:#374151"),
            ));
        }
        out.push_str("</section>");
    }
    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\">");
        out.push_str(&heading("Key Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4mm\">\
<h3 style=\"font-size:10.5pt;font-weight:700;color:{NAVY}\">{}</h3>\
<p style=\"font-size:9.5pt;color:#374151\">{}</p>\
<p style=\"font-size:8.5pt;color:#6b7280\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                join_contact(&[&project.technologies, &project.link], " · "),
            ));
        }
        out.push_str("</section>");
    }
    out.push_str("</div>");

    // Side column.
    out.push_str("<div style=\"width:34%\">");
    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading("Education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3.5mm\">\
<p style=\"font-size:9.5pt;font-weight:700;color:{NAVY}\">{}</p>\
<p style=\"font-size:9pt;color:#4b5563\">{}, {}</p>\
<p style=\"font-size:8pt;color:#9ca3af\">{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.field_of_study),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }
    if !resume.skills.is_empty() {
        out.push_str("<section data-section=\"skills\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading("Skills"));
        out.push_str("<ul style=\"list-style:none;font-size:9.5pt;color:#374151\">");
        for skill in &resume.skills {
            out.push_str(&format!(
                "<li style=\"margin-bottom:1.5mm;border-bottom:0.2mm solid #e5e7eb;\
padding-bottom:1mm\">{}</li>",
                escape(skill)
            ));
        }
        out.push_str("</ul></section>");
    }
    if !resume.languages.is_empty() {
        out.push_str("<section data-section=\"languages\">");
        out.push_str(&heading("Languages"));
        out.push_str("<ul style=\"list-style:none;font-size:9.5pt;color:#374151\">");
        for language in &resume.languages {
            out.push_str(&format!(
                "<li style=\"margin-bottom:1.5mm\">{}</li>",
                escape(language)
            ));
        }
        out.push_str("</ul></section>");
    }
    out.push_str("</div>");

    out.push_str("</div></div>");
    out
}

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:11pt;font-weight:700;text-transform:uppercase;\
letter-spacing:0.6mm;color:{NAVY};border-bottom:0.5mm solid {NAVY};\
padding-bottom:1.5mm;margin-bottom:3.5mm\">{}</h2>",
        escape(label)
    )
}
