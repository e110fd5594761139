//! Renders values as text notation.
//!
//! The output parses back to an equal value as long as every map key is an
//! identifier other than `null`, `true` or `false` and no bytes value is
//! empty. Other keys are rendered as quoted strings and empty bytes as `0x`,
//! which the parser does not accept.

use std::fmt;

use crate::value::Map;
use crate::Value;

const INDENT: &str = "    ";

impl fmt::Display for Value {
    /// Renders compact single line text notation, or the multi-line form
    /// with `{:#}`.
    ///
    /// # Examples
    ///
    /// ```
    /// let value = strata::value! { config: { retries: 3, tags: ["a"] } };
    /// assert_eq!(value.to_string(), r#"{config: {retries: 3, tags: ["a"]}}"#);
    /// assert_eq!(
    ///     format!("{value:#}"),
    ///     "config {\n    retries: 3\n    tags: [\n        \"a\",\n    ]\n}"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        let mut r = Renderer {
            f,
            pretty,
            depth: 0,
        };
        match self {
            Value::Map(map) if pretty && map.len() == 1 => {
                // A single entry root map holding a map is written with the
                // `ident { ... }` shorthand.
                let (key, value) = map.iter().next().ok_or(fmt::Error)?;
                if is_shorthand(key, value) {
                    r.entry(key, value)
                } else {
                    r.value(self)
                }
            }
            _ => r.value(self),
        }
    }
}

struct Renderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    pretty: bool,
    depth: usize,
}

impl Renderer<'_, '_> {
    fn value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Null => self.f.write_str("null"),
            Value::Bool(b) => write!(self.f, "{b}"),
            Value::Int(i) => write!(self.f, "{i}"),
            Value::String(s) => self.string(s),
            Value::Bytes(b) => write!(self.f, "0x{}", hex::encode(b)),
            Value::List(list) => self.list(list),
            Value::Map(map) => self.map(map),
        }
    }

    fn list(&mut self, list: &[Value]) -> fmt::Result {
        if list.is_empty() {
            return self.f.write_str("[]");
        }
        self.f.write_str("[")?;
        self.depth += 1;
        for (i, item) in list.iter().enumerate() {
            if self.pretty {
                self.newline()?;
            } else if i > 0 {
                self.f.write_str(", ")?;
            }
            self.value(item)?;
            if self.pretty {
                self.f.write_str(",")?;
            }
        }
        self.depth -= 1;
        if self.pretty {
            self.newline()?;
        }
        self.f.write_str("]")
    }

    fn map(&mut self, map: &Map<String, Value>) -> fmt::Result {
        if map.is_empty() {
            return self.f.write_str("{}");
        }
        self.f.write_str("{")?;
        self.depth += 1;
        for (i, (key, value)) in map.iter().enumerate() {
            if self.pretty {
                self.newline()?;
            } else if i > 0 {
                self.f.write_str(", ")?;
            }
            self.entry(key, value)?;
        }
        self.depth -= 1;
        if self.pretty {
            self.newline()?;
        }
        self.f.write_str("}")
    }

    fn entry(&mut self, key: &str, value: &Value) -> fmt::Result {
        if is_ident(key) {
            self.f.write_str(key)?;
        } else {
            self.string(key)?;
        }
        match value {
            Value::Map(map) if self.pretty && is_shorthand(key, value) => {
                self.f.write_str(" ")?;
                self.map(map)
            }
            _ => {
                self.f.write_str(": ")?;
                self.value(value)
            }
        }
    }

    fn string(&mut self, s: &str) -> fmt::Result {
        self.f.write_str("\"")?;
        for c in s.chars() {
            match c {
                '"' => self.f.write_str("\\\"")?,
                '\\' => self.f.write_str("\\\\")?,
                '\n' => self.f.write_str("\\n")?,
                '\r' => self.f.write_str("\\r")?,
                '\t' => self.f.write_str("\\t")?,
                ' '..='~' => write!(self.f, "{c}")?,
                c => {
                    for unit in c.encode_utf16(&mut [0; 2]) {
                        write!(self.f, "\\u{unit:04x}")?;
                    }
                }
            }
        }
        self.f.write_str("\"")
    }

    fn newline(&mut self) -> fmt::Result {
        self.f.write_str("\n")?;
        for _ in 0..self.depth {
            self.f.write_str(INDENT)?;
        }
        Ok(())
    }
}

/// Whether the entry can be written as `key { ... }`.
fn is_shorthand(key: &str, value: &Value) -> bool {
    is_ident(key) && matches!(value, Value::Map(map) if !map.is_empty())
}

/// Whether the key can be written bare.
fn is_ident(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some('A'..='Z' | 'a'..='z' | '_'))
        && chars.all(|c| matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_'))
        && !matches!(key, "null" | "true" | "false")
}
