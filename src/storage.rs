use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{CleanerError, Result};
use crate::types::Card;

/// Reads a full card catalog from a UTF-8 JSON file.
///
/// The document must be a top-level array; each element must be an
/// object. Non-object elements are reported with their index.
pub fn read_cards(path: &Path) -> Result<Vec<Card>> {
    let text = fs::read_to_string(path).map_err(|source| CleanerError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let values: Vec<Value> =
        serde_json::from_str(&text).map_err(|source| CleanerError::InputParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = values.len(), "parsed card catalog");

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(map) => Ok(Card(map)),
            _ => Err(CleanerError::MalformedRecord {
                index,
                reason: "record is not a JSON object".to_string(),
            }),
        })
        .collect()
}

/// Writes the full catalog to `path` as pretty-printed UTF-8 JSON.
///
/// The file is staged in a temp file in the same directory and renamed
/// into place, so a failure never leaves a truncated output behind.
pub fn write_cards(path: &Path, cards: &[Card]) -> Result<()> {
    let write_err = |source: std::io::Error| CleanerError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(cards)
        .map_err(|e| write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn read_missing_file_is_input_not_found() {
        let dir = tempdir().unwrap();
        let err = read_cards(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CleanerError::InputNotFound { .. }));
    }

    #[test]
    fn read_invalid_json_is_input_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, "not json at all").unwrap();
        let err = read_cards(&path).unwrap_err();
        assert!(matches!(err, CleanerError::InputParse { .. }));
    }

    #[test]
    fn read_top_level_object_is_input_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"{"name": "A"}"#).unwrap();
        let err = read_cards(&path).unwrap_err();
        assert!(matches!(err, CleanerError::InputParse { .. }));
    }

    #[test]
    fn read_non_object_element_is_malformed_with_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"[{"name": "A"}, 42]"#).unwrap();
        match read_cards(&path) {
            Err(CleanerError::MalformedRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn write_is_pretty_printed_and_keeps_non_ascii_literal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards_clean.json");
        let cards: Vec<Card> =
            serde_json::from_value(json!([{"name": "Café élégant", "tags": ["soft"]}])).unwrap();

        write_cards(&path, &cards).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Café élégant"));
        assert!(!written.contains("\\u"));
        assert!(written.lines().count() > 1);
    }

    #[test]
    fn write_preserves_key_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards_clean.json");
        let cards: Vec<Card> =
            serde_json::from_value(json!([{"zeta": 1, "alpha": 2, "tags": ["soft"]}])).unwrap();

        write_cards(&path, &cards).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let zeta = written.find("zeta").unwrap();
        let alpha = written.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn roundtrip_keeps_records_intact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let cards: Vec<Card> = serde_json::from_value(json!([
            {"name": "A", "nested": {"k": [1, 2, 3]}, "tags": ["trash"]},
            {"name": "B", "tags": ["soft"]}
        ]))
        .unwrap();

        write_cards(&path, &cards).unwrap();
        let reread = read_cards(&path).unwrap();
        assert_eq!(cards, reread);
    }
}
