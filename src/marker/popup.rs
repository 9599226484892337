use std::fmt;

use serde::Serialize;

use crate::data::ProjectRecord;

/// Longest text kept from any single record field.
pub const MAX_FIELD_CHARS: usize = 200;
/// Popup width hint for the renderer, in pixels.
pub const POPUP_MAX_WIDTH: u32 = 280;

/// Outbound reference shown at the bottom of a popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// Structured popup content. All text is display text, never markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    pub title: String,
    pub operator: String,
    pub link: Option<Link>,
    pub max_width: u32,
}

impl Popup {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: truncate(&record.program_name, MAX_FIELD_CHARS),
            operator: truncate(&record.operator, MAX_FIELD_CHARS),
            link: outbound_link(&record.source_url),
            max_width: POPUP_MAX_WIDTH,
        }
    }

    /// HTML fragment for renderers that take markup; every field is escaped.
    pub fn to_html(&self) -> String {
        PopupHtml(self).to_string()
    }

    /// Write the HTML fragment to any writer.
    pub fn write_html<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<div style='width: 250px; font-family: sans-serif;'>")?;
        write!(out, "<h4 style='margin-bottom:5px; font-size:14px;'>{}</h4>", escape_html(&self.title))?;
        write!(out, "<p style='margin:0;'><b>Operator:</b> {}</p>", escape_html(&self.operator))?;
        if let Some(link) = &self.link {
            write!(
                out,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(&link.href),
                escape_html(&link.label),
            )?;
        }
        out.write_str("</div>")
    }
}

struct PopupHtml<'a>(&'a Popup);

impl fmt::Display for PopupHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.write_html(f) }
}

/// Keep a link only when it is an absolute http(s) URL.
fn outbound_link(url: &str) -> Option<Link> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    let allowed = ["http://", "https://"].iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    if !allowed || url.chars().count() > 2048 { return None }
    Some(Link { href: url.to_string(), label: "Source Link".to_string() })
}

/// Cap `text` at `max` characters, marking the cut with an ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max { return text.to_string() }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Escape text for use in HTML element content and quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, operator: &str, url: &str) -> ProjectRecord {
        ProjectRecord {
            program_name: name.into(),
            operator: operator.into(),
            delivery_method: "Ground-based Generator".into(),
            latitude: 40.0,
            longitude: -105.0,
            source_url: url.into(),
        }
    }

    #[test]
    fn markup_in_fields_is_escaped() {
        let popup = Popup::from_record(&record("<script>alert(1)</script>", "A & B", "https://x.org/?a=1&b=\"2\""));
        let html = popup.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("href=\"https://x.org/?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn only_http_links_are_kept() {
        assert!(Popup::from_record(&record("P", "O", "javascript:alert(1)")).link.is_none());
        assert!(Popup::from_record(&record("P", "O", "")).link.is_none());
        assert!(Popup::from_record(&record("P", "O", "https://")).link.is_none());
        let link = Popup::from_record(&record("P", "O", " HTTPS://weather.example/x ")).link.unwrap();
        assert_eq!(link.href, "HTTPS://weather.example/x");
        assert_eq!(link.label, "Source Link");
    }

    #[test]
    fn long_fields_are_capped() {
        let long = "x".repeat(500);
        let popup = Popup::from_record(&record(&long, "O", ""));
        assert_eq!(popup.title.chars().count(), MAX_FIELD_CHARS);
        assert!(popup.title.ends_with('…'));
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn html_without_link_has_no_anchor() {
        let html = Popup::from_record(&record("P", "O", "")).to_html();
        assert!(!html.contains("<a "));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn write_html_matches_to_html() {
        let popup = Popup::from_record(&record("P & Q", "O", "https://example.org/p"));
        let mut out = String::from("<!-- popup -->");
        popup.write_html(&mut out).unwrap();
        assert_eq!(out, format!("<!-- popup -->{}", popup.to_html()));
    }
}
