//! integrated tests

mod parsing;

#[cfg(feature = "serde")]
mod serialization;
