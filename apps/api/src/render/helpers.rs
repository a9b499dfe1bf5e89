//! Building blocks shared by all templates.

use crate::models::resume::PersonalInfo;

/// Escapes text for safe interpolation into HTML body and attribute positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Splits a description into bullet lines: newline-delimited, trimmed, blank
/// lines dropped, one leading bullet glyph (•, ‣, -, *) stripped so the
/// renderer's own list styling doesn't double the marker.
pub fn description_lines(description: &str) -> Vec<String> {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_bullet_glyph)
        .collect()
}

fn strip_bullet_glyph(line: &str) -> String {
    let stripped = line
        .strip_prefix('•')
        .or_else(|| line.strip_prefix('‣'))
        .or_else(|| line.strip_prefix('-'))
        .or_else(|| line.strip_prefix('*'))
        .unwrap_or(line);
    stripped.trim_start().to_string()
}

/// Renders a description as a `<ul class="bullets">`, or nothing when the
/// description holds no non-blank lines.
pub fn bullet_list(description: &str, style: &str) -> String {
    let lines = description_lines(description);
    if lines.is_empty() {
        return String::new();
    }
    let mut out = format!("<ul class=\"bullets\" style=\"{style}\">");
    for line in lines {
        out.push_str("<li>");
        out.push_str(&escape(&line));
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// "start – end", with the end boundary forced to "Present" for current
/// entries regardless of what endDate holds.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = start.trim();
    let end = if current { "Present" } else { end.trim() };
    if start.is_empty() && end.is_empty() {
        return String::new();
    }
    format!("{start} – {end}")
}

/// Uppercased first character of the name, or "U" when there is none.
pub fn initial(full_name: &str) -> String {
    full_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

/// The profile photo, or an initial-letter placeholder when none is set.
/// `frame_style` sizes the frame; `fallback_style` colors the placeholder.
pub fn photo_or_initial(info: &PersonalInfo, frame_style: &str, fallback_style: &str) -> String {
    match info.photo_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => format!(
            "<div class=\"photo-frame\" style=\"{frame_style}\">\
<img class=\"photo\" src=\"{}\" alt=\"Profile\"></div>",
            escape(url)
        ),
        _ => format!(
            "<div class=\"photo-frame\" style=\"{frame_style}\">\
<div class=\"photo-fallback\" style=\"{fallback_style}\">{}</div></div>",
            escape(&initial(&info.full_name))
        ),
    }
}

/// Joins the non-empty parts with a separator, escaping each.
pub fn join_contact(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(escape)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_description_lines_drop_blanks_and_strip_glyphs() {
        let text = "• First\n\n   \n- Second\n* Third\nFourth\n";
        assert_eq!(
            description_lines(text),
            vec!["First", "Second", "Third", "Fourth"]
        );
    }

    #[test]
    fn test_description_lines_count_matches_non_blank_lines() {
        let text = "one\n\ntwo\n\n\nthree";
        assert_eq!(description_lines(text).len(), 3);
    }

    #[test]
    fn test_only_one_leading_glyph_is_stripped() {
        assert_eq!(description_lines("• • nested"), vec!["• nested"]);
    }

    #[test]
    fn test_bullet_list_empty_for_blank_description() {
        assert_eq!(bullet_list("  \n \n", ""), "");
    }

    #[test]
    fn test_date_range_present_overrides_end_date() {
        assert_eq!(date_range("2020-01", "2023-01", true), "2020-01 – Present");
        assert_eq!(date_range("2020-01", "2023-01", false), "2020-01 – 2023-01");
        assert_eq!(date_range("", "", false), "");
        assert_eq!(date_range("", "", true), " – Present");
    }

    #[test]
    fn test_initial_falls_back_to_generic_glyph() {
        assert_eq!(initial("jane doe"), "J");
        assert_eq!(initial("  "), "U");
        assert_eq!(initial(""), "U");
    }

    #[test]
    fn test_photo_prefers_url() {
        let mut info = PersonalInfo::default();
        info.full_name = "Ada".to_string();
        assert!(photo_or_initial(&info, "", "").contains("photo-fallback"));
        assert!(photo_or_initial(&info, "", "").contains(">A<"));

        info.photo_url = Some("https://x/y.png".to_string());
        let html = photo_or_initial(&info, "", "");
        assert!(html.contains("<img"));
        assert!(!html.contains("photo-fallback"));
    }

    #[test]
    fn test_join_contact_skips_empty_parts() {
        assert_eq!(
            join_contact(&["a@x.com", "", "  ", "City"], " · "),
            "a@x.com · City"
        );
    }
}
