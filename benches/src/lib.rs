pub mod fixture;
#[cfg(test)]
mod tests;

use strata::Value;

/// Returns a random value with `n` profiles.
pub fn value(n: usize) -> Value {
    strata::to_value(fixture::random(n)).unwrap()
}

/// Returns the text notation of a random value with `n` profiles.
pub fn text(n: usize) -> String {
    format!("{:#}", value(n))
}
