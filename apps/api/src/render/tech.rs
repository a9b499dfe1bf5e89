//! Tech — dark monospace sidebar with skill tags and contact, terminal-style
//! section markers in the main column.

use super::helpers::{bullet_list, date_range, escape, photo_or_initial};
use crate::models::resume::Resume;

const MONO: &str = "font-family:'JetBrains Mono','Fira Code',Consolas,monospace";
const ACCENT: &str = "#22d3ee";

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
        "<div style=\"width:30%;background:#0f172a;color:#e2e8f0;padding:10mm 6mm;\
{MONO};font-size:8.5pt;display:flex;flex-direction:column;gap:7mm\">"
    );

    out.push_str(&format!(
        "<div style=\"display:flex;justify-content:center\">{}</div>",
        photo_or_initial(
            p,
            "width:32mm;height:32mm;border-radius:2mm;border:0.5mm solid #334155",
            &format!("background:#1e293b;color:{ACCENT};font-size:16pt"),
        )
    ));

    let contact: Vec<&str> = [
        p.email.as_str(),
        p.phone.as_str(),
        p.location.as_str(),
        p.website.as_str(),
        p.github.as_str(),
        p.linkedin.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.trim().is_empty())
    .collect();
    if !contact.is_empty() {
        out.push_str(&sidebar_heading("contact"));
        out.push_str("<div style=\"display:flex;flex-direction:column;gap:1.5mm;word-break:break-all\">");
        for value in contact {
            out.push_str(&format!(
                "<div><span style=\"color:{ACCENT}\">&gt;</span> {}</div>",
                escape(value)
            ));
        }
        out.push_str("</div>");
    }

    if !resume.skills.is_empty() {
        out.push_str("<section data-section=\"skills\">");
        out.push_str(&sidebar_heading("skills"));
        out.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:1.5mm\">");
        for skill in &resume.skills {
            out.push_str(&format!(
                "<span style=\"background:#1e293b;border:0.3mm solid #334155;\
color:{ACCENT};padding:0.8mm 2mm;border-radius:1mm\">{}</span>",
                escape(skill)
            ));
        }
        out.push_str("</div></section>");
    }

    if !resume.languages.is_empty() {
        out.push_str("<section data-section=\"languages\">");
        out.push_str(&sidebar_heading("languages"));
        out.push_str("<ul style=\"list-style:none\">");
        for language in &resume.languages {
            out.push_str(&format!(
                "<li style=\"margin-bottom:1.5mm\">{}</li>",
                escape(language)
            ));
        }
        out.push_str("</ul></section>");
    }

    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\">");
        out.push_str(&sidebar_heading("education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3mm\">\
<p style=\"font-weight:700;color:#f1f5f9\">{}</p>\
<p style=\"color:#94a3b8\">{}</p>\
<p style=\"color:#64748b\">{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }

    out.push_str("</div>");
    out
}

fn sidebar_heading(label: &str) -> String {
    format!(
        "<h3 style=\"color:{ACCENT};font-size:9.5pt;font-weight:700;\
border-bottom:0.3mm solid #334155;padding-bottom:1.5mm;margin-bottom:2.5mm\">\
## {}</h3>",
        escape(label)
    )
}

fn main_column(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = String::from("<div style=\"width:70%;padding:12mm 9mm\">");

    out.push_str(&format!(
        "<div style=\"margin-bottom:8mm\">\
<h1 style=\"font-size:20pt;font-weight:800;{MONO}\">{}</h1>\
<p style=\"font-size:11pt;color:#0891b2;{MONO}\">$ whoami: {}</p></div>",
        escape(&p.full_name),
        escape(resume.field.as_str()),
    ));

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:8mm\">{}\
<p style=\"font-size:9.5pt;color:#374151\">{}</p></section>",
            heading("About"),
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
<h3 style=\"font-size:11pt;font-weight:700\">{}</h3>\
<span style=\"font-size:8.5pt;color:#0891b2;{MONO}\">[{}]</span></div>\
<p style=\"font-size:9.5pt;color:#0e7490;font-weight:600;margin-bottom:1.5mm\">{}</p>{}</div>",
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
        out.push_str(&heading("Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4mm;border:0.3mm solid #e5e7eb;\
border-radius:1.5mm;padding:3mm\">\
<h3 style=\"font-size:10.5pt;font-weight:700\">{}</h3>\
<p style=\"font-size:9.5pt;color:#374151\">{}</p>\
<p style=\"font-size:8.5pt;color:#0891b2;{MONO}\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                escape(
                    &[project.technologies.as_str(), project.link.as_str()]
                        .iter()
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                        .join("  ·  ")
                ),
            ));
        }
        out.push_str("</section>");
    }

    out.push_str("</div>");
    out
}

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:12pt;font-weight:700;{MONO};color:#0f172a;\
margin-bottom:3.5mm\"><span style=\"color:#0891b2\">//</span> {}</h2>",
        escape(label)
    )
}
