use strata::{hash_bytes, hash_value, Digest, Value, DIGEST_LEN};

#[test]
fn hash_known_values() {
    let cases = [
        (Value::Int(42), "3e20f5db4d3d1fafc8838f65ede2cbb326e77d2e58ba1cbcb4ebd6ffe2d935b4"),
        (Value::Null, "2d3adedff11b61f14c886e35afa036736dcd87a74d27b5c1510225d0f592e213"),
        (strata::value! {}, "5bef64c607cdf6af650c9cb2a1ecaa7b296f5d11ebc65e13d997b4ad3a8a8686"),
        (Value::from("hello"), "66355de29bafd0f4a3b250b500ea5e495a8865b2d7e07b48ae17b663a5463482"),
        (
            strata::value! { a: 1, b: 2 },
            "91f336124c80656fe0afda1a0601a24ab516a0b4b91cd27a2cb649adcf4524c8",
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(hash_value(&value).to_hex(), expected, "{value}");
    }
}

#[test]
fn hash_value_is_hash_of_encoding() {
    let value = strata::value! { config: { enabled: true, retries: 3, name: "strata", empty: null } };
    assert_eq!(hash_value(&value), hash_bytes(&strata::encode(&value)));
    assert_eq!(
        hash_value(&value).to_string(),
        "345bd4541606a21ce934dca50d294c133cd32e32fb89f3f3b317be36b05c2907"
    );
}

#[test]
fn hash_ignores_map_insertion_order() {
    let a = Value::map_from_entries([("z", 1), ("a", 2), ("m", 3)]);
    let b = Value::map_from_entries([("a", 2), ("m", 3), ("z", 1)]);
    assert_eq!(hash_value(&a), hash_value(&b));
}

#[test]
fn hash_distinguishes_string_and_bytes() {
    assert_ne!(hash_value(&Value::from("hi")), hash_value(&Value::bytes(*b"hi")));
}

#[test]
fn digest_from_str() {
    let hex = "3e20f5db4d3d1fafc8838f65ede2cbb326e77d2e58ba1cbcb4ebd6ffe2d935b4";
    let digest: Digest = hex.parse().unwrap();
    assert_eq!(digest, hash_value(&Value::Int(42)));
    assert_eq!(hex.to_uppercase().parse::<Digest>().unwrap(), digest);
    assert!("3e20".parse::<Digest>().is_err());
    assert!("zz".repeat(DIGEST_LEN).parse::<Digest>().is_err());
}

#[test]
fn digest_conversions() {
    let digest = hash_bytes(b"abc");
    let bytes: [u8; DIGEST_LEN] = digest.into();
    assert_eq!(Digest::from(bytes), digest);
    assert_eq!(digest.as_bytes(), &bytes);
    assert_eq!(digest.as_ref(), &bytes[..]);
    assert_eq!(
        format!("{digest:?}"),
        "Digest(6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85)"
    );
}
