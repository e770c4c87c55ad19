//! Line-level markdown classification for terminal output.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s*(.*)$").expect("numbered pattern is valid"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `### Heading`
    Heading(String),
    /// A bold line acting as a section title.
    Title(String),
    Bullet(String),
    Numbered { number: String, text: String },
    Blank,
    Paragraph(String),
}

pub fn classify(line: &str) -> Line {
    let trimmed = line.trim();

    if let Some(heading) = line.strip_prefix("### ") {
        return Line::Heading(heading.to_string());
    }
    if line.starts_with("**") && (line.ends_with("**") || !line.contains(':')) {
        return Line::Title(line.replace("**", ""));
    }
    if let Some(item) = trimmed.strip_prefix("- ") {
        return Line::Bullet(item.to_string());
    }
    if let Some(caps) = NUMBERED.captures(trimmed) {
        return Line::Numbered {
            number: caps[1].to_string(),
            text: caps[2].to_string(),
        };
    }
    if trimmed.is_empty() {
        return Line::Blank;
    }
    Line::Paragraph(line.to_string())
}

pub fn parse(content: &str) -> Vec<Line> {
    content.lines().map(classify).collect()
}

/// Removes inline `**bold**` markers, keeping the text.
pub fn strip_inline(text: &str) -> String {
    BOLD.replace_all(text, "$1").into_owned()
}

/// Plain-text rendering used by the CLI.
pub fn render_plain(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for line in parse(content) {
        match line {
            Line::Heading(text) => {
                out.push('\n');
                out.push_str(&text.to_uppercase());
            }
            Line::Title(text) => out.push_str(&text),
            Line::Bullet(text) => {
                out.push_str("  • ");
                out.push_str(&strip_inline(&text));
            }
            Line::Numbered { number, text } => {
                out.push_str("  ");
                out.push_str(&number);
                out.push_str(". ");
                out.push_str(&strip_inline(&text));
            }
            Line::Blank => {}
            Line::Paragraph(text) => out.push_str(&strip_inline(&text)),
        }
        out.push('\n');
    }
    out
}
