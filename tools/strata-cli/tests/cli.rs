use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn strata<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_strata"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

fn write(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn cli_compile() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "input.st", "a { x: 1 }\n");
    let output = dir.path().join("output.scb");

    let out = strata(["compile", input.as_str(), output.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));

    let bytes = fs::read(&output).unwrap();
    assert_eq!(strata::to_hex(&bytes), "400120016140012001781001");
}

#[test]
fn cli_compile_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "input.st", "a { x: }\n");
    let output = dir.path().join("output.scb");

    let out = strata(["compile", input.as_str(), output.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("failed to parse"));
    assert!(stderr(&out).contains("expected value, found '}'"));
    assert!(!output.exists());
}

#[test]
fn cli_compile_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.st");
    let output = dir.path().join("output.scb");

    let out = strata(["compile", input.to_str().unwrap(), output.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("failed to read"));
}

#[test]
fn cli_decode() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "input.scb", [0x10, 0x01]);

    let out = strata(["decode", input.as_str()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "1\n");
}

#[test]
fn cli_decode_json() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = strata_lib_bytes();
    let input = write(dir.path(), "input.scb", bytes);

    let out = strata(["decode", "--json", input.as_str()]);
    assert!(out.status.success(), "{}", stderr(&out));
    let json: serde_json::Value = serde_json::from_str(stdout(&out)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "a": { "big": "9007199254740993", "raw": [0, 255] } })
    );
}

#[test]
fn cli_decode_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "input.scb", [0x00, 0x00]);

    let out = strata(["decode", input.as_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("trailing bytes after value at byte 1"));
}

#[test]
fn cli_hash_text_and_encoding_agree() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(dir.path(), "value.st", "42");
    let encoded = write(dir.path(), "value.scb", [0x10, 0x2a]);

    let expected = "3e20f5db4d3d1fafc8838f65ede2cbb326e77d2e58ba1cbcb4ebd6ffe2d935b4\n";
    for input in [&text, &encoded] {
        let out = strata(["hash", input.as_str()]);
        assert!(out.status.success(), "{}", stderr(&out));
        assert_eq!(stdout(&out), expected);
    }
}

#[test]
fn cli_fmt() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "input.st",
        "# comment\nconfig{retries:3 tags:[\"a\"]}",
    );

    let out = strata(["fmt", input.as_str()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "config {\n    retries: 3\n    tags: [\n        \"a\",\n    ]\n}\n"
    );
}

#[test]
fn cli_fmt_error_is_pretty() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "input.st", "config {\n    retries: 3 ]\n}\n");

    let out = strata(["fmt", input.as_str()]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("2 |     retries: 3 ]"), "{err}");
    assert!(err.contains("expected ',' or '}', found ']'"), "{err}");
}

#[test]
fn cli_frame_and_unframe() {
    let dir = tempfile::tempdir().unwrap();
    let one = write(dir.path(), "one.scb", [0x10, 0x01]);
    let two = write(dir.path(), "two.scb", [0x20, 0x02, b'h', b'i']);
    let stream = dir.path().join("stream.bin");

    let out = strata(["frame", one.as_str(), two.as_str(), "-o", stream.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        fs::read(&stream).unwrap(),
        [0, 0, 0, 2, 0x10, 0x01, 0, 0, 0, 4, 0x20, 0x02, b'h', b'i']
    );

    let out = strata(["unframe", stream.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "1\n\"hi\"\n");

    let out = strata(["unframe", "--json", stream.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "\"1\"\n\"hi\"\n");
}

#[test]
fn cli_unframe_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let stream = write(dir.path(), "stream.bin", [0, 0, 0, 2, 0x10, 0x01, 0, 0, 0, 4, 0x20]);

    let out = strata(["unframe", stream.as_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "1\n");
    assert!(stderr(&out).contains("failed to read frame 1"));
}

#[test]
fn cli_unframe_zero_length() {
    let dir = tempfile::tempdir().unwrap();
    let stream = write(dir.path(), "stream.bin", [0, 0, 0, 0]);

    let out = strata(["unframe", stream.as_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("frame has zero length"));
}

fn strata_lib_bytes() -> Vec<u8> {
    strata::encode(&strata::value! {
        a: { big: 9007199254740993_i64, raw: strata::Value::bytes([0x00, 0xff]) }
    })
}
