//! The Ok-only form: success carries a value, failure carries no detail.

use crate::Outcome;

/// "Success with a value, or failure with no details."
///
/// The failure side is the unit type, so [`Maybe::fail`] takes no arguments
/// and a live failure has no retrievable payload beyond `&()`.
pub type Maybe<T> = Outcome<T, ()>;

impl<T> Outcome<T, ()> {
    /// Constructs the payload-less failure.
    pub fn fail() -> Self {
        Self::Err(())
    }
}

impl<T> From<core::option::Option<T>> for Maybe<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::Err(()),
        }
    }
}
impl<T> From<Maybe<T>> for core::option::Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.ok()
    }
}
