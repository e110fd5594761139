//! The human-authored text notation.
//!
//! ```text
//! // comments run to the end of the line, as do `#` comments
//! profile {
//!     id: 9007199254740993
//!     avatar_hash: 0x9f86d081884c7d659a2feaa0c55ad015
//!     tags: ["logistics", "state", "integrity"]
//!     settings { verbose: false, motd: null }
//! }
//! ```

mod lex;
mod parse;

use crate::error::ParseError;
use crate::text::parse::Parser;
use crate::types::limits::Limits;
use crate::Value;

/// Parse text notation into a value using the default [`Limits`].
///
/// # Examples
///
/// ```
/// let value = strata::parse(r#"config { retries: 3, name: "strata" }"#)?;
/// assert_eq!(value, strata::value! { config: { retries: 3, name: "strata" } });
/// # Ok::<(), strata::ParseError>(())
/// ```
pub fn parse(source: &str) -> Result<Value, ParseError> {
    parse_with(source, &Limits::default())
}

/// Parse text notation into a value using the given [`Limits`].
pub fn parse_with(source: &str, limits: &Limits) -> Result<Value, ParseError> {
    let value = Parser::new(source, limits)?.parse_root()?;
    log::trace!("parsed {} value from {} bytes of text", value.human(), source.len());
    Ok(value)
}
