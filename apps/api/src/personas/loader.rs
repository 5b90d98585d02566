//! Collection Loader & Ranker — reads every persona document in a directory.
//!
//! Synchronous filesystem work. Async callers run it via
//! `tokio::task::spawn_blocking`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::personas::models::ParsedPersona;
use crate::personas::parser::{parse_persona, ParseOptions};

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("Failed to list persona directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses each Markdown file independently and returns the collection sorted
/// by share of customer base, highest first.
///
/// An unreadable document is logged and skipped. Only a failure to list the
/// directory itself is returned as an error.
pub fn load_personas(
    dir: &Path,
    opts: &ParseOptions,
) -> Result<Vec<ParsedPersona>, PersonaError> {
    let list_err = |source: std::io::Error| PersonaError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(list_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(list_err)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| is_markdown(path))
        .collect();

    // read_dir order is platform-defined; fix it so ties rank identically on every call.
    files.sort();

    let mut personas: Vec<ParsedPersona> = files
        .iter()
        .filter_map(|path| {
            let filename = path.file_name()?.to_string_lossy().into_owned();
            match fs::read_to_string(path) {
                Ok(text) => Some(parse_persona(&text, &filename, opts)),
                Err(e) => {
                    warn!("Skipping unreadable persona document {}: {e}", path.display());
                    None
                }
            }
        })
        .collect();

    // Stable: equal shares keep filename order.
    personas.sort_by_key(|p| std::cmp::Reverse(p.percentage_rank()));

    debug!("Loaded {} personas from {}", personas.len(), dir.display());
    Ok(personas)
}

/// Loads the collection and returns the persona whose id is `id`.
pub fn find_persona(
    dir: &Path,
    id: &str,
    opts: &ParseOptions,
) -> Result<Option<ParsedPersona>, PersonaError> {
    Ok(load_personas(dir, opts)?
        .into_iter()
        .find(|p| p.id == id))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(dir: &Path) -> Result<Vec<ParsedPersona>, PersonaError> {
        load_personas(dir, &ParseOptions::default())
    }

    fn write(dir: &Path, name: &str, contents: &[u8]) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn persona_doc(name: &str, percentage: Option<&str>) -> String {
        let mut doc = format!("# {name}\n\n");
        if let Some(p) = percentage {
            doc.push_str(&format!("**Percentage of Customer Base:** {p}\n\n"));
        }
        doc.push_str("## Identity Snapshot\n\nSomeone.\n");
        doc
    }

    #[test]
    fn test_sorted_by_percentage_descending() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "none.md", persona_doc("None", None).as_bytes());
        write(dir.path(), "ten.md", persona_doc("Ten", Some("~10%")).as_bytes());
        write(dir.path(), "forty.md", persona_doc("Forty", Some("~40%")).as_bytes());

        let personas = load(dir.path()).unwrap();
        let ids: Vec<_> = personas.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["forty", "ten", "none"]);
    }

    #[test]
    fn test_unreadable_document_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", persona_doc("A", Some("~5%")).as_bytes());
        write(dir.path(), "b.md", persona_doc("B", Some("~15%")).as_bytes());
        write(dir.path(), "c.md", persona_doc("C", None).as_bytes());
        // Invalid UTF-8 fails read_to_string.
        write(dir.path(), "broken.md", &[0xff, 0xfe, 0xfd, 0x00, 0xc3]);

        let personas = load(dir.path()).unwrap();
        assert_eq!(personas.len(), 3);
        assert!(personas.iter().all(|p| p.id != "broken"));
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", persona_doc("A", None).as_bytes());
        write(dir.path(), "notes.txt", b"# Not a persona");
        write(dir.path(), "B.MD", persona_doc("B", None).as_bytes());

        let personas = load(dir.path()).unwrap();
        let ids: Vec<_> = personas.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "a"]);
    }

    #[test]
    fn test_empty_directory_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = load(&missing).unwrap_err();
        assert!(matches!(err, PersonaError::ListDirectory { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_ties_keep_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "zeta.md", persona_doc("Z", Some("~20%")).as_bytes());
        write(dir.path(), "alpha.md", persona_doc("A", Some("~20%")).as_bytes());

        let first = load(dir.path()).unwrap();
        let second = load(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].id, "alpha");
    }

    #[test]
    fn test_find_persona() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "glow.md", persona_doc("Glow Getter", Some("~30%")).as_bytes());

        let opts = ParseOptions::default();
        let found = find_persona(dir.path(), "glow", &opts).unwrap();
        assert_eq!(found.map(|p| p.name), Some("Glow Getter".to_string()));
        assert!(find_persona(dir.path(), "other", &opts).unwrap().is_none());
    }
}
