//! Sitemap XML generation.
//!
//! Builds a `urlset` document from the public base URL plus one entry per
//! approved movie. Pure string assembly; the api crate serves the result
//! with `Content-Type: application/xml`.

use crate::types::Timestamp;

/// One `<url>` entry in the sitemap.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    /// Path relative to the site root, e.g. `/movies/42`.
    pub path: String,
    /// Last modification time, rendered as a W3C date (`YYYY-MM-DD`).
    pub last_modified: Option<Timestamp>,
}

/// Escape the five XML-special characters for use in element text.
fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Build a sitemap document for `base_url` (no trailing slash) and the
/// given entries. The site root is always included as the first URL.
pub fn build_sitemap(base_url: &str, entries: &[SitemapEntry]) -> String {
    let base = base_url.trim_end_matches('/');

    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}/</loc>\n", escape_xml(base)));
    xml.push_str("  </url>\n");

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}{}</loc>\n",
            escape_xml(base),
            escape_xml(&entry.path)
        ));
        if let Some(ts) = entry.last_modified {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", ts.format("%Y-%m-%d")));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
