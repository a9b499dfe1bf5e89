//! Healthcare — teal accents, photo beside the name in a tinted header band,
//! sections marked with a left accent bar.

use super::helpers::{bullet_list, date_range, escape, join_contact, photo_or_initial};
use crate::models::resume::Resume;

const TEAL: &str = "#0d9488";

pub fn page(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = String::from("<div style=\"min-height:297mm\">");

    out.push_str(&format!(
        "<div style=\"background:#f0fdfa;border-bottom:0.8mm solid {TEAL};\
padding:10mm 14mm;display:flex;align-items:center;gap:8mm\">{}\
<div><h1 style=\"font-size:20pt;font-weight:700;color:#134e4a\">{}</h1>\
<p style=\"font-size:11pt;color:{TEAL};font-weight:600\">{}</p>\
<p style=\"font-size:8.5pt;color:#4b5563;margin-top:2mm\">{}</p></div></div>",
        photo_or_initial(
            p,
            &format!("width:30mm;height:30mm;border-radius:50%;border:0.8mm solid {TEAL}"),
            &format!("background:#ccfbf1;color:{TEAL};font-size:15pt"),
        ),
        escape(&p.full_name),
        escape(resume.field.as_str()),
        join_contact(
            &[&p.email, &p.phone, &p.location, &p.linkedin],
            " &nbsp;•&nbsp; "
        ),
    ));

    out.push_str("<div style=\"padding:9mm 14mm\">");

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:7mm\">{}\
<p style=\"font-size:9.5pt;color:#374151;text-align:justify\">{}</p></section>",
            heading("Professional Summary"),
            escape(&p.summary)
        ));
    }

    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading(resume.field.experience_heading()));
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div style=\"border-left:1mm solid #99f6e4;padding-left:4mm;\
margin-bottom:5mm\">\
<div style=\"display:flex;justify-content:space-between;align-items:baseline\">\
<h3 style=\"font-size:11pt;font-weight:700;color:#134e4a\">{}</h3>\
<span style=\"font-size:8.5pt;color:{TEAL};font-weight:600\">{}</span></div>\
<p style=\"font-size:9.5pt;color:#4b5563;font-weight:600;margin-bottom:1.5mm\">{}</p>{}</div>",
                escape(&exp.position),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                escape(&exp.company),
                bullet_list(&exp.description, "font-size:9.5pt;color:#374151"),
            ));
        }
        out.push_str("</section>");
    }

    out.push_str("<div style=\"display:flex;gap:9mm\">");
    out.push_str("<div style=\"width:55%\">");
    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading("Education & Training"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3.5mm\">\
<p style=\"font-size:9.5pt;font-weight:700;color:#134e4a\">{}, {}</p>\
<p style=\"font-size:9pt;color:#4b5563\">{}</p>\
<p style=\"font-size:8pt;color:#9ca3af\">{}</p></div>",
                escape(&edu.degree),
                escape(&edu.field_of_study),
                escape(&edu.institution),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }
    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\">");
        out.push_str(&heading("Certifications & Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3.5mm\">\
<p style=\"font-size:9.5pt;font-weight:700;color:#134e4a\">{}</p>\
<p style=\"font-size:9pt;color:#4b5563\">{}</p>\
<p style=\"font-size:8pt;color:{TEAL}\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                join_contact(&[&project.technologies, &project.link], " · "),
            ));
        }
        out.push_str("</section>");
    }
    out.push_str("</div>");

    out.push_str("<div style=\"width:45%\">");
    if !resume.skills.is_empty() {
        out.push_str("<section data-section=\"skills\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading("Clinical Skills"));
        out.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:1.5mm\">");
        for skill in &resume.skills {
            out.push_str(&format!(
                "<span style=\"background:#f0fdfa;border:0.3mm solid #99f6e4;\
color:#134e4a;font-size:8.5pt;padding:1mm 2.5mm;border-radius:1mm\">{}</span>",
                escape(skill)
            ));
        }
        out.push_str("</div></section>");
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
    out.push_str("</div></div>");

    out.push_str("</div></div>");
    out
}

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:11pt;font-weight:700;text-transform:uppercase;\
letter-spacing:0.5mm;color:{TEAL};margin-bottom:3mm\">{}</h2>",
        escape(label)
    )
}
