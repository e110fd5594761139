pub mod limits;
pub mod span;
