//! Creative — a gradient header band with the photo on the right, then a
//! 65/35 split: story on the left, facts on the right, skills as pills.

use super::helpers::{bullet_list, date_range, escape, join_contact, photo_or_initial};
use crate::models::resume::Resume;

const ACCENT: &str = "#db2777";

pub fn page(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = String::from("<div style=\"min-height:297mm\">");

    out.push_str(&format!(
        "<div style=\"background:linear-gradient(120deg,#7c3aed,{ACCENT});color:#fff;\
padding:12mm 12mm;display:flex;justify-content:space-between;align-items:center\">\
<div><h1 style=\"font-size:22pt;font-weight:800\">{}</h1>\
<p style=\"font-size:12pt;opacity:0.9;margin-top:1mm\">{}</p>\
<p style=\"font-size:8.5pt;opacity:0.85;margin-top:3mm\">{}</p></div>{}</div>",
        escape(&p.full_name),
        escape(resume.field.as_str()),
        join_contact(&[&p.email, &p.phone, &p.location, &p.website], " ✦ "),
        photo_or_initial(
            p,
            "width:32mm;height:32mm;border-radius:50%;border:1mm solid rgba(255,255,255,0.6)",
            "background:rgba(255,255,255,0.2);color:#fff;font-size:16pt",
        ),
    ));

    out.push_str("<div style=\"display:flex;padding:10mm 12mm;gap:8mm\">");

    // Left: summary, experience, projects.
    out.push_str("<div style=\"width:65%\">");
    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:7mm\">{}\
<p style=\"font-size:9.5pt;color:#4b5563\">{}</p></section>",
            heading("Hello!"),
            escape(&p.summary)
        ));
    }
    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading(resume.field.experience_heading()));
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div style=\"border-left:0.8mm solid {ACCENT};padding-left:4mm;\
margin-bottom:5mm\">\
<h3 style=\"font-size:11pt;font-weight:700\">{}</h3>\
<p style=\"font-size:9pt;color:{ACCENT};font-weight:600\">{} · {}</p>{}</div>",
                escape(&exp.position),
                escape(&exp.company),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                bullet_list(&exp.description, "font-size:9.5pt;color:#4b5563;margin-top:1.5mm"),
            ));
        }
        out.push_str("</section>");
    }
    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\">");
        out.push_str(&heading("Things I Made"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4mm\">\
<h3 style=\"font-size:10.5pt;font-weight:700\">{}</h3>\
<p style=\"font-size:9.5pt;color:#4b5563\">{}</p>\
<p style=\"font-size:8.5pt;color:{ACCENT}\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                join_contact(&[&project.technologies, &project.link], " · "),
            ));
        }
        out.push_str("</section>");
    }
    out.push_str("</div>");

    // Right: education, skills, languages.
    out.push_str("<div style=\"width:35%\">");
    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading("Education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3.5mm\">\
<p style=\"font-size:9.5pt;font-weight:700\">{}</p>\
<p style=\"font-size:9pt;color:#4b5563\">{}</p>\
<p style=\"font-size:8pt;color:#9ca3af\">{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }
    if !resume.skills.is_empty() {
        out.push_str("<section data-section=\"skills\" style=\"margin-bottom:7mm\">");
        out.push_str(&heading("Skills"));
        out.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:1.5mm\">");
        for skill in &resume.skills {
            out.push_str(&format!(
                "<span style=\"background:#fdf2f8;color:{ACCENT};font-size:8.5pt;\
padding:1mm 2.5mm;border-radius:3mm\">{}</span>",
                escape(skill)
            ));
        }
        out.push_str("</div></section>");
    }
    if !resume.languages.is_empty() {
        out.push_str("<section data-section=\"languages\">");
        out.push_str(&heading("Languages"));
        out.push_str("<ul style=\"list-style:none;font-size:9.5pt;color:#4b5563\">");
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
        "<h2 style=\"font-size:12pt;font-weight:800;color:#111827;\
margin-bottom:3mm\"><span style=\"border-bottom:1mm solid {ACCENT};\
padding-bottom:0.5mm\">{}</span></h2>",
        escape(label)
    )
}
