//! Banking — conservative navy serif letterhead, ruled sections, dates
//! right-aligned throughout.

use super::helpers::{bullet_list, date_range, escape, join_contact, photo_or_initial};
use crate::models::resume::Resume;

const NAVY: &str = "#172554";
const SERIF: &str = "font-family:Georgia,'Times New Roman',serif";

pub fn page(resume: &Resume) -> String {
    let p = &resume.personal_info;
    let mut out = format!("<div style=\"min-height:297mm;{SERIF}\">");

    out.push_str(&format!(
        "<div style=\"border-top:2mm solid {NAVY};padding:10mm 16mm 6mm;\
display:flex;justify-content:space-between;align-items:center;\
border-bottom:0.3mm solid {NAVY}\">\
<div><h1 style=\"font-size:19pt;font-weight:700;color:{NAVY};\
letter-spacing:0.5mm\">{}</h1>\
<p style=\"font-size:10.5pt;color:#374151\">{}</p>\
<p style=\"font-size:8.5pt;color:#6b7280;margin-top:2mm\">{}</p></div>{}</div>",
        escape(&p.full_name),
        escape(resume.field.as_str()),
        join_contact(
            &[&p.email, &p.phone, &p.location, &p.linkedin],
            " &nbsp;|&nbsp; "
        ),
        photo_or_initial(
            p,
            &format!("width:26mm;height:26mm;border:0.4mm solid {NAVY}"),
            &format!("background:#eff6ff;color:{NAVY};font-size:13pt"),
        ),
    ));

    out.push_str("<div style=\"padding:8mm 16mm\">");

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section style=\"margin-bottom:6mm\">{}\
<p style=\"font-size:9.5pt;color:#374151;text-align:justify\">{}</p></section>",
            heading("Profile"),
            escape(&p.summary)
        ));
    }

    if !resume.experience.is_empty() {
        out.push_str("<section data-section=\"experience\" style=\"margin-bottom:6mm\">");
        out.push_str(&heading(resume.field.experience_heading()));
        for exp in &resume.experience {
            out.push_str(&format!(
                "<div style=\"margin-bottom:4.5mm\">\
<div style=\"display:flex;justify-content:space-between;align-items:baseline\">\
<h3 style=\"font-size:11pt;font-weight:700;color:{NAVY}\">{}</h3>\
<span style=\"font-size:9pt;color:#374151;text-align:right\">{}</span></div>\
<p style=\"font-size:9.5pt;font-style:italic;color:#4b5563;margin-bottom:1.5mm\">{}</p>{}</div>",
                escape(&exp.position),
                escape(&date_range(&exp.start_date, &exp.end_date, exp.current)),
                escape(&exp.company),
                bullet_list(&exp.description, "font-size:9.5pt;color:#374151"),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.education.is_empty() {
        out.push_str("<section data-section=\"education\" style=\"margin-bottom:6mm\">");
        out.push_str(&heading("Education"));
        for edu in &resume.education {
            out.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;\
align-items:baseline;margin-bottom:2.5mm\">\
<p style=\"font-size:10pt\"><span style=\"font-weight:700\">{}</span>, {} — {}</p>\
<span style=\"font-size:9pt;color:#374151\">{}</span></div>",
                escape(&edu.degree),
                escape(&edu.field_of_study),
                escape(&edu.institution),
                escape(&date_range(&edu.start_date, &edu.end_date, false)),
            ));
        }
        out.push_str("</section>");
    }

    if !resume.projects.is_empty() {
        out.push_str("<section data-section=\"projects\" style=\"margin-bottom:6mm\">");
        out.push_str(&heading("Key Transactions & Projects"));
        for project in &resume.projects {
            out.push_str(&format!(
                "<div style=\"margin-bottom:3.5mm\">\
<p style=\"font-size:10pt;font-weight:700;color:{NAVY}\">{}</p>\
<p style=\"font-size:9.5pt;color:#374151\">{}</p>\
<p style=\"font-size:8.5pt;font-style:italic;color:#6b7280\">{}</p></div>",
                escape(&project.name),
                escape(&project.description),
                join_contact(&[&project.technologies, &project.link], " · "),
            ));
        }
        out.push_str("</section>");
    }

    let two_col = !resume.skills.is_empty() && !resume.languages.is_empty();
    if two_col {
        out.push_str("<div style=\"display:flex;gap:10mm\">");
    }
    if !resume.skills.is_empty() {
        out.push_str(&format!(
            "<section data-section=\"skills\" style=\"flex:1\">{}\
<p style=\"font-size:9.5pt;color:#374151\">{}</p></section>",
            heading("Competencies"),
            resume
                .skills
                .iter()
                .map(|s| escape(s))
                .collect::<Vec<_>>()
                .join(" | "),
        ));
    }
    if !resume.languages.is_empty() {
        out.push_str(&format!(
            "<section data-section=\"languages\" style=\"flex:1\">{}\
<p style=\"font-size:9.5pt;color:#374151\">{}</p></section>",
            heading("Languages"),
            resume
                .languages
                .iter()
                .map(|l| escape(l))
                .collect::<Vec<_>>()
                .join(" | "),
        ));
    }
    if two_col {
        out.push_str("</div>");
    }

    out.push_str("</div></div>");
    out
}

fn heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:11pt;font-weight:700;text-transform:uppercase;\
letter-spacing:0.7mm;color:{NAVY};border-bottom:0.3mm solid #cbd5e1;\
padding-bottom:1mm;margin-bottom:3mm\">{}</h2>",
        escape(label)
    )
}
