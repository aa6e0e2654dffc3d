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

//! End-to-end demo: a fallible division pipeline built on `Outcome` and
//! `propagate!`.

use outcome::{propagate, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DivideError {
    DivideByZero,
    Remainder(i32),
}

fn divide(a: i32, b: i32) -> Outcome<i32, DivideError> {
    if b == 0 {
        return Outcome::Err(DivideError::DivideByZero);
    }
    if a % b != 0 {
        return Outcome::Err(DivideError::Remainder(a % b));
    }
    Outcome::Ok(a / b)
}

/// Splits `total` evenly across `groups`, then across `subgroups` of each
/// group. The first failing division aborts the whole computation.
fn share(total: i32, groups: i32, subgroups: i32) -> Outcome<i32, DivideError> {
    let per_group = propagate!(divide(total, groups));
    let per_subgroup = propagate!(divide(per_group, subgroups));
    Outcome::Ok(per_subgroup)
}

fn main() {
    for (total, groups, subgroups) in [(120, 4, 3), (120, 0, 3), (120, 4, 7)] {
        match share(total, groups, subgroups).as_ref() {
            Ok(per_subgroup) => {
                println!("{total} split across {groups}x{subgroups}: {per_subgroup} each")
            }
            Err(error) => {
                println!("{total} split across {groups}x{subgroups}: failed with {error:?}")
            }
        }
    }
}
