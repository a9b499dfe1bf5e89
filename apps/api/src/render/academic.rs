//! Academic — serif CV: centered name, education before experience, projects
//! presented as research work.

use super::helpers::{bullet_list, date_range, escape, join_contact, photo_or_initial};
use crate::models::resume::Resume;

const SERIF: &str = "font-family:'Palatino Linotype',Palatino,Georgia,serif";

pub fn page(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = format!("<div style=\"padding:14mm 18mm;min-height:297mm;{SERIF}\">");

    out.push_str(&format!(
        "<div style=\"text-align:center;margin-bottom:6mm\">\
<div style=\"display:flex;justify-content:center;margin-bottom:3mm\">{}</div>\
<h1 style=\"font-size:18pt;font-weight:700\">{}</h1>\
<p style=\"font-size:10pt;color:#4b5563\">{}</p>\
<p style=\"font-size:8.5pt;color:#6b7280;margin-top:1.5mm\">{}</p>\
<hr style=\"border:none;border-top:0.3mm solid #111827;margin-top:4mm\"></div>",
        photo_or_initial(
            p,
            "width:26mm;height:26mm;border-radius:50%;border:0.3mm solid #d1d5db",
            "background:#f9fafb;color:#374151;font-size:13pt",
        ),
        escape(&p.full_name),
        escape(resume.field.as_str()),
        join_contact(
            &[&p.email, &p.phone, &p.location, &p.website],
            " &nbsp;•&nbsp; "
        ),
    ));

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:6mm\">{}\
<p style=\"font-size:9.5pt;color:#374151;text-align:justify\">{}</p></section>",
            heading("Research Interests"),
            escape(&p.summary)
        ));
    }

    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\" style=\"margin-bottom:6mm\">");
        out.push_str(&heading("Education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;\
align-items:baseline;margin-bottom:2.5mm\">\
<p style=\"font-size:10pt\"><span style=\"font-weight:700\">{}</span>, {}<br>\
<span style=\"font-style:italic;color:#4b5563\">{}</span></p>\
<span style=\"font-size:9pt;color:#4b5563\">{}</span></div>",
                escape(&edu.degree),
                escape(&edu.field_of_study),
                escape(&edu.institution),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:6mm\">");
        out.push_str(&heading(resume.field.experience_heading()));
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4.5mm\">\
<div style=\"display:flex;justify-content:space-between;align-items:baseline\">\
<h3 style=\"font-size:10.5pt;font-weight:700\">{}, <span style=\"font-weight:400;\
font-style:italic\">{}</span></h3>\
<span style=\"font-size:9pt;color:#4b5563\">{}</span></div>{}</div>",
                escape(&exp.position),
                escape(&exp.company),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                bullet_list(&exp.description, "font-size:9.5pt;color:#374151;margin-top:1mm"),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\" style=\"margin-bottom:6mm\">");
        out.push_str(&heading("Research & Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3.5mm\">\
<p style=\"font-size:10pt\"><span style=\"font-weight:700\">{}</span>. {}</p>\
<p style=\"font-size:8.5pt;font-style:italic;color:#6b7280\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                join_contact(&[&project.technologies, &project.link], " — "),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.skills.is_empty() {
        out.push_str(&format!(
            "<section data-section=\"skills\" style=\"margin-bottom:6mm\">{}\
<p style=\"font-size:9.5pt;color:#374151\">{}</p></section>",
            heading("Technical Skills"),
            resume
                .skills
                .iter()
                .map(|s| escape(s))
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }

    if !resume.languages.is_empty() {
        out.push_str(&format!(
            "<section data-section=\"languages\">{}\
<p style=\"font-size:9.5pt;color:#374151\">{}</p></section>",
            heading("Languages"),
            resume
                .languages
                .iter()
                .map(|l| escape(l))
                .collect::<Vec<_>>()
                .join("; "),
        ));
    }

    out.push_str("</div>");
    out
}

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:11pt;font-weight:700;text-transform:uppercase;\
letter-spacing:0.5mm;border-bottom:0.3mm solid #9ca3af;padding-bottom:1mm;\
margin-bottom:3mm\">{}</h2>",
        escape(label)
    )
}
