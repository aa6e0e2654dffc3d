//! The Err-only form: failure carries details, success carries no value.

use crate::Outcome;

/// "Success with no value, or failure with details."
///
/// The success side is the unit type, so [`Status::succeed`] takes no
/// arguments.
pub type Status<E> = Outcome<(), E>;

impl<E> Outcome<(), E> {
    /// Constructs the payload-less success.
    pub fn succeed() -> Self {
        Self::Ok(())
    }
}
