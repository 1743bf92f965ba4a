// Copyright (C) 2025 The holyland-phone Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Categories a number can be classified into. Every category has a rule in
/// the classification table, and the table is iterated in declaration order.
///
/// Names resolve case-insensitively, so both `LandLine` and `landline` map to
/// [`NumberCategory::LandLine`].
#[derive(Debug, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum NumberCategory {
    /// **Any recognized number.**
    /// Israeli or Palestinian landline, mobile, business or special number.
    Valid,
    /// **Israeli plan.**
    /// Area codes, mobile prefixes and non-geographic ranges allocated by the
    /// Israeli regulator, as well as special codes.
    Israeli,
    /// **Palestinian plan.**
    /// `0x2` area codes and the `056`/`059` mobile ranges.
    Palestinian,
    /// **Fixed-line numbers.**
    /// Geographic area codes plus the `07x` VoIP-style ranges.
    LandLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Special service codes.**
    /// A star followed by four digits, e.g. `*2700`.
    Special,
    /// **Non-geographic business numbers.**
    /// `1-700`, `1-800`, `1-900` and the like.
    Business,
    /// **Toll-free numbers.**
    /// Calls to these numbers are paid by the recipient (`1-800`).
    TollFree,
    /// **Premium-rate numbers.**
    /// `1-900` to `1-902` and `1-919`.
    Premium,
    /// **Kosher numbers.**
    /// Lines restricted by the carrier to voice calls only.
    Kosher,
    /// **SMS capable.**
    /// Mobile numbers that are not kosher.
    Smsable,
    /// **Adult content lines.**
    /// The `1-919` premium range.
    Erotic,
}

/// The most specific kind of line a number belongs to.
///
/// Unlike [`NumberCategory`], kinds are mutually exclusive: a `1-919` number
/// is reported as [`NumberType::Erotic`] even though it is premium and
/// business as well.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    Special,
    Erotic,
    Premium,
    TollFree,
    /// Business numbers that are neither toll-free nor premium (`1-700`...).
    Business,
    Mobile,
    LandLine,
    /// The number does not match any of the known patterns.
    Unknown,
}
