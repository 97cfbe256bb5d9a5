//! Rendered page model

use std::fmt;

/// Output of a view render
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    /// Rendered as `<h1>`
    pub heading: Option<String>,
    /// Rendered as one `<p>` each
    pub lines: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Page with a single line and no heading
    pub fn message(line: impl Into<String>) -> Self {
        Self::new().line(line)
    }

    /// True if the heading or any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.heading.as_deref().is_some_and(|h| h.contains(needle))
            || self.lines.iter().any(|l| l.contains(needle))
    }

    /// Heading then lines, one per row
    pub fn text(&self) -> String {
        self.heading
            .iter()
            .chain(self.lines.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// HTML fragment for the page body
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"view\">\n");
        if let Some(heading) = &self.heading {
            html.push_str(&format!("  <h1>{}</h1>\n", escape_html(heading)));
        }
        for line in &self.lines {
            html.push_str(&format!("  <p>{}</p>\n", escape_html(line)));
        }
        html.push_str("</div>");
        html
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Escape text for inclusion in HTML element content
pub fn escape_html(text: &str) -> String {
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
