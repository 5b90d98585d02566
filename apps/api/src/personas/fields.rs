//! Field extractors. Each one is total: a missing or malformed input yields an
//! empty result, never an error.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^>\s*["“](.+?)["”]\s*$"#).unwrap());
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$").unwrap());

/// Removes `**bold**` markers.
pub fn strip_bold(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

/// Removes one layer of surrounding straight or curly quotes.
pub fn strip_quotes(text: &str) -> String {
    let t = text.trim();
    let t = t.strip_prefix(['"', '“']).unwrap_or(t);
    let t = t.strip_suffix(['"', '”']).unwrap_or(t);
    t.trim().to_string()
}

/// Top-level `- ` bullets. Indented sub-bullets and other lines are dropped.
pub fn bullet_list(section: &str) -> Vec<String> {
    section
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .map(strip_bold)
        .filter(|item| !item.is_empty())
        .collect()
}

/// `1. item` style lines.
pub fn numbered_list(section: &str) -> Vec<String> {
    section
        .lines()
        .filter_map(|line| NUMBERED_RE.captures(line.trim_end()))
        .map(|caps| strip_bold(&caps[1]))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Data rows of the first Markdown table in `section` as `(key, value)`
/// pairs. Only rows after a header + separator pair are read; rows with fewer
/// than two non-empty cells are skipped and extra columns are ignored.
pub fn table_rows(section: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = section.lines().map(str::trim).collect();

    let Some(start) = lines
        .windows(2)
        .position(|w| w[0].starts_with('|') && SEPARATOR_RE.is_match(w[1]))
    else {
        return Vec::new();
    };

    lines[start + 2..]
        .iter()
        .take_while(|line| line.starts_with('|'))
        .filter_map(|line| {
            let cells: Vec<String> = line
                .split('|')
                .map(strip_bold)
                .filter(|cell| !cell.is_empty())
                .collect();
            match cells.as_slice() {
                [key, value, ..] => Some((key.clone(), value.clone())),
                _ => None,
            }
        })
        .collect()
}

/// Two-column table as a key → value mapping. Later duplicate keys win.
pub fn table_map(section: &str) -> BTreeMap<String, String> {
    table_rows(section).into_iter().collect()
}

/// Lines of the form `> "text"`, returning `text`.
pub fn block_quotes(section: &str) -> Vec<String> {
    section
        .lines()
        .filter_map(|line| QUOTE_RE.captures(line.trim()))
        .map(|caps| caps[1].trim().to_string())
        .filter(|quote| !quote.is_empty())
        .collect()
}

/// Value of the first `**Label:** value` line in `document`.
pub fn labeled_bold(document: &str, label: &str) -> String {
    let prefix = format!("**{label}:**");
    document
        .lines()
        .find_map(|line| line.trim().strip_prefix(prefix.as_str()).map(str::trim))
        .unwrap_or_default()
        .to_string()
}
