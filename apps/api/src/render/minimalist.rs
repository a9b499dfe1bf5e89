//! Minimalist — a single quiet column: thin rules, uppercase letterspaced
//! headings, skills and languages as inline lists.

use super::helpers::{bullet_list, date_range, escape, join_contact, photo_or_initial};
use crate::models::resume::Resume;

pub fn page(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = String::from("<div style=\"padding:16mm 18mm;min-height:297mm\">");

    // Header: name left, small photo right, contact in one rule-separated line.
    out.push_str(&format!(
        "<div style=\"display:flex;justify-content:space-between;align-items:center;\
border-bottom:0.5mm solid #111827;padding-bottom:5mm;margin-bottom:7mm\">\
<div><h1 style=\"font-size:22pt;font-weight:300;letter-spacing:1mm;\
text-transform:uppercase\">{}</h1>\
<p style=\"font-size:9pt;color:#6b7280;margin-top:1mm\">{}</p></div>{}</div>",
        escape(&p.full_name),
        join_contact(
            &[&p.email, &p.phone, &p.location, &p.website],
            " &nbsp;/&nbsp; "
        ),
        photo_or_initial(
            p,
            "width:24mm;height:24mm;border-radius:50%",
            "background:#f3f4f6;color:#9ca3af;font-size:12pt",
        ),
    ));

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:8mm\">\
<p style=\"font-size:9.5pt;color:#374151;text-align:justify\">{}</p></section>",
            escape(&p.summary)
        ));
    }

    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:8mm\">");
        out.push_str(&heading(resume.field.experience_heading()));
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div style=\"margin-bottom:5mm\">\
<div style=\"display:flex;justify-content:space-between;align-items:baseline\">\
<h3 style=\"font-size:10.5pt;font-weight:600\">{} — {}</h3>\
<span style=\"font-size:8.5pt;color:#6b7280\">{}</span></div>{}</div>",
                escape(&exp.position),
                escape(&exp.company),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                bullet_list(&exp.description, "font-size:9.5pt;color:#374151;margin-top:1.5mm"),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\" style=\"margin-bottom:8mm\">");
        out.push_str(&heading("Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4mm\">\
<h3 style=\"font-size:10.5pt;font-weight:600\">{}</h3>\
<p style=\"font-size:9.5pt;color:#374151\">{}</p>\
<p style=\"font-size:8.5pt;color:#6b7280\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                join_contact(&[&project.technologies, &project.link], " · "),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\" style=\"margin-bottom:8mm\">");
        out.push_str(&heading("Education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;\
align-items:baseline;margin-bottom:2.5mm\">\
<p style=\"font-size:10pt\"><span style=\"font-weight:600\">{}</span>, {} — {}</p>\
<span style=\"font-size:8.5pt;color:#6b7280\">{}</span></div>",
                escape(&edu.degree),
                escape(&edu.field_of_study),
                escape(&edu.institution),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.skills.is_empty() {
        out.push_str(&format!(
            "<section data-section=\"skills\" style=\"margin-bottom:8mm\">{}\
<p style=\"font-size:9.5pt;color:#374151\">{}</p></section>",
            heading("Skills"),
            resume
                .skills
                .iter()
                .map(|s| escape(s))
                .collect::<Vec<_>>()
                .join(" · "),
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
                .join(" · "),
        ));
    }

    out.push_str("</div>");
    out
}

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:10pt;font-weight:600;text-transform:uppercase;\
letter-spacing:1.2mm;color:#111827;border-bottom:0.3mm solid #e5e7eb;\
padding-bottom:1.5mm;margin-bottom:3.5mm\">{}</h2>",
        escape(label)
    )
}
