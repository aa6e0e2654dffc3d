//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   ZettaScale Zenoh Team, <zenoh@zettascale.tech>
//

//! A two-alternative result value type.
//!
//! [`Outcome<T, E>`](Outcome) holds exactly one of a success payload `T` or a
//! failure payload `E`, inline, with no allocation. The discriminant is fixed
//! at construction: callers query it with [`Outcome::is_ok`] /
//! [`Outcome::is_error`] and then read the live alternative through the
//! checked accessors ([`Outcome::ok_value`], [`Outcome::error_value`] and
//! their consuming forms). Reading the wrong alternative is a programming
//! defect and panics; it is never reported through a secondary error channel.
//!
//! The reduced forms [`Maybe<T>`](maybe::Maybe) (failure carries no detail)
//! and [`Status<E>`](status::Status) (success carries no value) are
//! instantiations of the same type with a unit payload on the absent side.
//!
//! Failures are relayed to the enclosing operation with [`propagate!`]:
//!
//! ```
//! use outcome::{propagate, Outcome};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum DivideError {
//!     DivideByZero,
//! }
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, DivideError> {
//!     if b == 0 {
//!         Outcome::Err(DivideError::DivideByZero)
//!     } else {
//!         Outcome::Ok(a / b)
//!     }
//! }
//!
//! fn half_of_quotient(a: i32, b: i32) -> Outcome<i32, DivideError> {
//!     let quotient = propagate!(divide(a, b));
//!     Outcome::Ok(quotient / 2)
//! }
//!
//! assert_eq!(half_of_quotient(20, 2), Outcome::Ok(5));
//! assert_eq!(
//!     half_of_quotient(20, 0),
//!     Outcome::Err(DivideError::DivideByZero)
//! );
//! ```

#![no_std]

pub mod maybe;
pub mod outcome;
pub mod status;

pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;
pub use crate::status::Status;

/// Evaluates an [`Outcome`]-producing expression once, returning its failure
/// from the enclosing function.
///
/// On success, the macro invocation evaluates to the owned success payload so
/// it can be used in the middle of an expression. On failure, the enclosing
/// function returns `Outcome::Err` immediately with the inner failure payload,
/// unwrapped and unconverted: the enclosing function must share the failure
/// type of the propagated expression.
///
/// ```
/// use outcome::{propagate, Outcome};
///
/// fn parse_digit(byte: u8) -> Outcome<u8, u8> {
///     if byte.is_ascii_digit() {
///         Outcome::Ok(byte - b'0')
///     } else {
///         Outcome::Err(byte)
///     }
/// }
///
/// fn checksum(bytes: &[u8]) -> Outcome<u32, u8> {
///     let mut sum = 0;
///     for &byte in bytes {
///         sum += propagate!(parse_digit(byte)) as u32;
///     }
///     Outcome::Ok(sum)
/// }
///
/// assert_eq!(checksum(b"123"), Outcome::Ok(6));
/// assert_eq!(checksum(b"12x3"), Outcome::Err(b'x'));
/// ```
#[macro_export]
macro_rules! propagate {
    ($outcome: expr) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => return $crate::Outcome::Err(error),
        }
    };
}
