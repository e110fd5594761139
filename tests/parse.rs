use strata::{parse, parse_with, Limits, ParseErrorKind, Span, Value};

#[track_caller]
fn parse_err(source: &str) -> (String, usize, usize) {
    let err = parse(source).unwrap_err();
    let Span { line, column, .. } = err.span();
    (err.kind().to_string(), line, column)
}

#[test]
fn parse_scalars() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
    assert_eq!(parse("42").unwrap(), Value::Int(42));
    assert_eq!(parse("-7").unwrap(), Value::Int(-7));
    assert_eq!(parse("\"hi\"").unwrap(), Value::from("hi"));
    assert_eq!(parse("0xdeadBEEF").unwrap(), Value::bytes([0xde, 0xad, 0xbe, 0xef]));
}

#[test]
fn parse_list() {
    assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
    assert_eq!(
        parse("[1, \"two\", 0x03]").unwrap(),
        Value::List(vec![Value::Int(1), Value::from("two"), Value::bytes([3])])
    );
}

#[test]
fn parse_list_trailing_comma() {
    assert_eq!(parse("[1, 2,]").unwrap(), Value::from(vec![1, 2]));
}

#[test]
fn parse_map() {
    assert_eq!(parse("{}").unwrap(), strata::value! {});
    assert_eq!(
        parse("{ a: 1, b: \"x\", c: [] }").unwrap(),
        strata::value! { a: 1, b: "x", c: [] }
    );
}

#[test]
fn parse_map_separators() {
    let expected = strata::value! { a: 1, b: 2, c: 3 };
    assert_eq!(parse("{ a: 1, b: 2, c: 3 }").unwrap(), expected);
    assert_eq!(parse("{ a: 1, b: 2, c: 3, }").unwrap(), expected);
    assert_eq!(parse("{ a: 1 b: 2\n c: 3 }").unwrap(), expected);
}

#[test]
fn parse_map_nested_without_colon() {
    assert_eq!(
        parse("{ outer { inner: true } other: {} }").unwrap(),
        strata::value! { outer: { inner: true }, other: {} }
    );
}

#[test]
fn parse_map_duplicate_keys_last_wins() {
    assert_eq!(parse("{ a: 1, a: 2 }").unwrap(), strata::value! { a: 2 });
}

#[test]
fn parse_root_shorthand() {
    assert_eq!(
        parse("config { retries: 3, name: \"strata\" }").unwrap(),
        strata::value! { config: { retries: 3, name: "strata" } }
    );
}

#[test]
fn parse_shorthand_as_map_value() {
    assert_eq!(
        parse("{ x: y { z: 1 } }").unwrap(),
        strata::value! { x: { y: { z: 1 } } }
    );
}

#[test]
fn parse_shorthand_as_list_element() {
    assert_eq!(
        parse("[a { b: 1 }, 2, c { }]").unwrap(),
        Value::from(vec![
            strata::value! { a: { b: 1 } },
            Value::Int(2),
            strata::value! { c: {} },
        ])
    );
}

#[test]
fn parse_err_shorthand_without_map() {
    assert_eq!(parse_err("[a]"), ("expected map or value, found ']'".into(), 1, 3));
    assert_eq!(parse_err("{ x: y }"), ("expected map or value, found '}'".into(), 1, 8));
}

#[test]
fn parse_comments_and_whitespace() {
    let source = "
        # leading comment
        profile { // trailing comment
            \tid: 9007199254740993\r
            avatar_hash: 0x9f86d081884c7d659a2feaa0c55ad015
            tags: [\"logistics\", \"state\", \"integrity\"] # another
        }
        // done";
    assert_eq!(
        parse(source).unwrap(),
        strata::value! {
            profile: {
                id: 9007199254740993_i64,
                avatar_hash: Value::bytes(hex::decode("9f86d081884c7d659a2feaa0c55ad015").unwrap()),
                tags: ["logistics", "state", "integrity"],
            }
        }
    );
}

#[test]
fn parse_keys_are_case_sensitive() {
    assert_eq!(
        parse("{ key: 1, Key: 2, _k3y: 3 }").unwrap(),
        strata::value! { key: 1, Key: 2, _k3y: 3 }
    );
}

#[test]
fn parse_err_empty() {
    assert_eq!(parse_err(""), ("expected value, found EOF".into(), 1, 1));
    assert_eq!(parse_err("  // only a comment"), ("expected value, found EOF".into(), 1, 20));
}

#[test]
fn parse_err_list_missing_comma() {
    assert_eq!(
        parse_err("[1 2]"),
        ("expected ',' or ']', found integer".into(), 1, 4)
    );
}

#[test]
fn parse_err_list_unclosed() {
    assert_eq!(
        parse_err("[1, 2"),
        ("expected ',' or ']', found EOF".into(), 1, 6)
    );
}

#[test]
fn parse_err_list_leading_comma() {
    assert_eq!(parse_err("[,]"), ("expected value, found ','".into(), 1, 2));
}

#[test]
fn parse_err_map_missing_colon() {
    assert_eq!(parse_err("{ a 1 }"), ("expected ':', found integer".into(), 1, 5));
}

#[test]
fn parse_err_map_bad_key() {
    assert_eq!(
        parse_err("{ 1: 2 }"),
        ("expected identifier, found integer".into(), 1, 3)
    );
    assert_eq!(
        parse_err("{ \"a\": 2 }"),
        ("expected identifier, found string".into(), 1, 3)
    );
    assert_eq!(
        parse_err("{ null: 1 }"),
        ("expected identifier, found null".into(), 1, 3)
    );
    assert_eq!(
        parse_err("{ a: 1,, }"),
        ("expected identifier, found ','".into(), 1, 8)
    );
}

#[test]
fn parse_err_map_bad_separator() {
    assert_eq!(
        parse_err("{ a: 1 ] }"),
        ("expected ',' or '}', found ']'".into(), 1, 8)
    );
}

#[test]
fn parse_err_trailing_value() {
    assert_eq!(parse_err("1 2"), ("expected EOF, found integer".into(), 1, 3));
    assert_eq!(parse_err("{} {}"), ("expected EOF, found '{'".into(), 1, 4));
}

#[test]
fn parse_err_root_ident() {
    assert_eq!(parse_err("a"), ("expected map or value, found EOF".into(), 1, 2));
    assert_eq!(parse_err("a: 1"), ("expected map or value, found ':'".into(), 1, 2));
}

#[test]
fn parse_err_line_and_column() {
    let err = parse("{\n    a: ]\n}").unwrap_err();
    assert_eq!(err.span().line, 2);
    assert_eq!(err.span().column, 8);
    assert_eq!(err.span().offset, 9);
    assert_eq!(
        err.to_string(),
        "expected value, found ']' at line 2, column 8"
    );
}

#[test]
fn parse_nesting_limit() {
    let limits = Limits::builder().max_depth(1).build();
    assert_eq!(parse_with("[1]", &limits).unwrap(), Value::from(vec![1]));

    let err = parse_with("[[1]]", &limits).unwrap_err();
    assert_eq!(*err.kind(), ParseErrorKind::NestingTooDeep);
    assert_eq!(err.span().column, 2);

    let err = parse_with("{ a { } }", &limits).unwrap_err();
    assert_eq!(*err.kind(), ParseErrorKind::NestingTooDeep);
    assert_eq!(err.span().column, 5);
}

#[test]
fn parse_nesting_limit_root_shorthand() {
    let limits = Limits::builder().max_depth(1).build();
    assert!(parse_with("{ b: 1 }", &limits).is_ok());

    let err = parse_with("a { b: 1 }", &limits).unwrap_err();
    assert_eq!(*err.kind(), ParseErrorKind::NestingTooDeep);

    let limits = Limits::builder().max_depth(2).build();
    assert!(parse_with("[a { }]", &limits).is_err());
    assert!(parse_with("{ x: y { } }", &limits).is_err());
    assert!(parse_with("a { b { } }", &limits).is_err());
    assert!(parse_with("a { b: 1 }", &limits).is_ok());
}

#[test]
fn parse_nesting_default_limit() {
    let nested = |n: usize| format!("{}{}", "[".repeat(n), "]".repeat(n));
    assert!(parse(&nested(strata::DEFAULT_MAX_DEPTH)).is_ok());

    let err = parse(&nested(strata::DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(*err.kind(), ParseErrorKind::NestingTooDeep);
    assert_eq!(err.span().offset, strata::DEFAULT_MAX_DEPTH);
}

#[test]
fn parse_and_encode_agree_with_compile() {
    let source = "data { z: 1, a: 2, m: 3 }";
    assert_eq!(
        strata::compile(source).unwrap(),
        strata::encode(&parse(source).unwrap())
    );
}
