//! Heading-boundary primitives shared by every persona field extractor.
//!
//! A section is the text between a heading line and the next heading of
//! equal-or-higher level (fewer or equal `#`s).

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").unwrap());

/// Returns `(level, text)` if `line` is an ATX heading.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    Some((level, text))
}

fn ends_section(line: &str, level: usize) -> bool {
    matches!(parse_heading(line), Some((l, _)) if l <= level)
}

/// Returns the trimmed body under the first `level`-deep heading labelled
/// `heading`, or an empty string when no such heading exists.
pub fn extract_section(document: &str, heading: &str, level: usize) -> String {
    let target = format!("{} {}", "#".repeat(level), heading.trim());
    let mut lines = document.lines();

    if !lines.by_ref().any(|line| line.trim_end() == target) {
        return String::new();
    }

    lines
        .take_while(|line| !ends_section(line, level))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Prose under a heading, cut at its first nested heading. Free-text fields
/// such as an identity snapshot use this so child subsections stay out.
pub fn extract_lead(document: &str, heading: &str, level: usize) -> String {
    extract_section(document, heading, level)
        .lines()
        .take_while(|line| parse_heading(line).is_none())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Text of the first heading at exactly `level`, or empty.
pub fn first_heading(document: &str, level: usize) -> String {
    document
        .lines()
        .filter_map(parse_heading)
        .find(|(l, _)| *l == level)
        .map(|(_, text)| text.trim().to_string())
        .unwrap_or_default()
}

/// Splits `text` into `(heading, body)` pairs at every heading of exactly
/// `level`. Text before the first such heading is discarded. Each body stops
/// at the next heading of equal-or-higher level.
pub fn split_subsections(text: &str, level: usize) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        match parse_heading(line) {
            Some((l, heading)) if l <= level => {
                if let Some((h, body)) = current.take() {
                    out.push((h, body.join("\n").trim().to_string()));
                }
                if l == level {
                    current = Some((heading.trim().to_string(), Vec::new()));
                }
            }
            _ => {
                if let Some((_, body)) = current.as_mut() {
                    body.push(line);
                }
            }
        }
    }

    if let Some((h, body)) = current {
        out.push((h, body.join("\n").trim().to_string()));
    }

    out
}
