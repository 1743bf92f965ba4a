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

use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

use crate::{macros::category_predicates, PHONE_CLASSIFIER};

use super::{
    enums::{NumberCategory, NumberType},
    errors::UndefinedPredicateError,
    helper_functions::{normalize, to_international, to_local},
};

/// An Israeli or Palestinian phone number in canonical local form.
///
/// Built once from raw input and never changed afterwards; every
/// representation is derived on request. Equality is equality of the
/// canonical digits, so `"+972 50-123-4567"` and `"050 1234567"` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    canonical: String,
}

impl PhoneNumber {
    /// Normalizes `raw` into a number. Always succeeds, see [`normalize`].
    pub fn new(raw: &str) -> Self {
        Self { canonical: normalize(raw) }
    }

    pub fn create(raw: impl AsRef<str>) -> Self {
        Self::new(raw.as_ref())
    }

    /// Canonical local form, e.g. `0501234567`.
    pub fn phone_number(&self) -> &str {
        &self.canonical
    }

    pub fn local(&self) -> &str {
        to_local(&self.canonical)
    }

    /// International form, e.g. `972501234567`. Numbers without a trunk
    /// prefix (business, special) come back unchanged.
    pub fn international(&self) -> Cow<'_, str> {
        to_international(&self.canonical)
    }

    pub fn is(&self, category: NumberCategory) -> bool {
        PHONE_CLASSIFIER.is(category, &self.canonical)
    }

    pub fn is_not(&self, category: NumberCategory) -> bool {
        PHONE_CLASSIFIER.is_not(category, &self.canonical)
    }

    category_predicates! {
        Valid => is_valid, is_not_valid;
        Israeli => is_israeli, is_not_israeli;
        Palestinian => is_palestinian, is_not_palestinian;
        LandLine => is_land_line, is_not_land_line;
        Mobile => is_mobile, is_not_mobile;
        Special => is_special, is_not_special;
        Business => is_business, is_not_business;
        TollFree => is_toll_free, is_not_toll_free;
        Premium => is_premium, is_not_premium;
        Kosher => is_kosher, is_not_kosher;
        Smsable => is_smsable, is_not_smsable;
        Erotic => is_erotic, is_not_erotic;
    }

    /// Evaluates a predicate by name (`isNotMobile`, `is_premium`, ...).
    pub fn query(&self, name: &str) -> Result<bool, UndefinedPredicateError> {
        PHONE_CLASSIFIER.query(name, &self.canonical)
    }

    /// Complement of the predicate called `name`.
    ///
    /// # Panics
    /// If `name` doesn't resolve to a predicate. Use [`Self::query`] with an
    /// `isNot` name to get an error instead.
    pub fn is_not_named(&self, name: &str) -> bool {
        // `isMobile` and `is_mobile` carry the prefix, `israeli` doesn't
        let base = name
            .strip_prefix("is")
            .filter(| rest | rest.starts_with(| c: char | c.is_ascii_uppercase() || c == '_'))
            .unwrap_or(name);
        let negated = fast_cat::concat_str!("isNot", base);
        match self.query(&negated) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = NumberCategory> + '_ {
        PHONE_CLASSIFIER.categories(&self.canonical)
    }

    pub fn number_type(&self) -> NumberType {
        PHONE_CLASSIFIER.number_type(&self.canonical)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local())
    }
}

impl FromStr for PhoneNumber {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for PhoneNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PhoneNumber {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// Integers lose their leading zero, so `25555555u64` is not `025555555`;
/// international numbers (`972501234567u64`) survive though.
impl From<u64> for PhoneNumber {
    fn from(value: u64) -> Self {
        let mut buf = itoa::Buffer::new();
        Self::new(buf.format(value))
    }
}
