//! Checks the shared conformance vectors under `tests/vectors`.
//!
//! Positive vectors are a `.st` source with the expected `.scb.hex` encoding
//! and `.hash.hex` digest. Negative vectors are a `.hex` input with the
//! expected `.error.json` decode error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExpectedError {
    kind: String,
    offset: usize,
}

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("vectors")
}

/// Returns the paths in `dir` ending with `suffix`, sorted, with the suffix
/// removed.
fn stems(dir: &str, suffix: &str) -> Vec<String> {
    let mut stems: Vec<_> = fs::read_dir(vectors_dir().join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter_map(|path| {
            let path = path.to_str()?;
            path.strip_suffix(suffix).map(str::to_owned)
        })
        .collect();
    stems.sort();
    stems
}

fn read_hex(path: &str) -> Vec<u8> {
    let text = fs::read_to_string(path).unwrap();
    hex::decode(text.trim()).unwrap()
}

#[track_caller]
fn check_positive(dir: &str, count: usize) {
    let stems = stems(dir, ".st");
    assert_eq!(stems.len(), count, "{stems:?}");
    for stem in stems {
        let source = fs::read_to_string(format!("{stem}.st")).unwrap();
        let expected_bytes = read_hex(&format!("{stem}.scb.hex"));
        let expected_hash = fs::read_to_string(format!("{stem}.hash.hex")).unwrap();

        let value = strata::parse(&source).unwrap_or_else(|err| panic!("{stem}:{err:#}"));
        let bytes = strata::encode(&value);
        assert_eq!(strata::to_hex(&bytes), strata::to_hex(&expected_bytes), "{stem}");
        assert_eq!(strata::compile(&source).unwrap(), bytes, "{stem}");
        assert_eq!(
            strata::hash_value(&value).to_hex(),
            expected_hash.trim(),
            "{stem}"
        );
        assert_eq!(strata::decode(&expected_bytes).unwrap(), value, "{stem}");
        assert_eq!(strata::parse(&format!("{value:#}")).unwrap(), value, "{stem}");
    }
}

#[test]
fn vectors_v1() {
    check_positive("v1", 3);
}

#[test]
fn vectors_v2() {
    check_positive("v2", 3);
}

#[test]
fn vectors_v2_1_negative() {
    let stems = stems("v2.1", ".error.json");
    assert_eq!(stems.len(), 6, "{stems:?}");
    for stem in stems {
        let input = read_hex(&format!("{stem}.hex"));
        let expected: ExpectedError =
            serde_json::from_str(&fs::read_to_string(format!("{stem}.error.json")).unwrap())
                .unwrap();

        let err = strata::decode(&input).unwrap_err();
        assert_eq!(err.kind().name(), expected.kind, "{stem}");
        assert_eq!(err.offset(), expected.offset, "{stem}");
    }
}
