// Shared prompt fragments used across generators.
// Each feature that calls the LLM keeps its own prompts.rs alongside it.

/// Common brand-voice instruction appended to every copy prompt.
pub const BRAND_VOICE_INSTRUCTION: &str = "\
    Write in the brand voice: warm, confident, and inclusive. \
    Speak to real routines, not idealised ones. \
    Never make medical or clinical claims, never promise permanent results, \
    and never shame the reader about age, skin, or body.";

/// Instruction to keep copy inside the declared zone limits.
pub const ZONE_LIMIT_INSTRUCTION: &str = "\
    CRITICAL: When a copy zone declares a character limit, every field written \
    for that zone MUST fit within it. Count characters, including spaces.";

/// Substitutes `{key}` placeholders in one left-to-right pass. Inserted values
/// are never rescanned, so braces inside user or persona text survive as-is.
/// Braces that do not name a known key (e.g. a JSON example) are kept.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let filled = tail.find('}').and_then(|close| {
            let key = &tail[1..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (close, *value))
        });
        match filled {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_keys() {
        let out = fill_template("Hi {name}, {count} left", &[("name", "Ana"), ("count", "3")]);
        assert_eq!(out, "Hi Ana, 3 left");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let out = fill_template(
            "{product} / {count}",
            &[("product", "{count} pack"), ("count", "3")],
        );
        assert_eq!(out, "{count} pack / 3");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let template = "[\n  {\n    \"cta\": \"Shop\"\n  }\n] {missing} {";
        assert_eq!(fill_template(template, &[("cta", "x")]), template);
    }
}
