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

use std::str::FromStr;

use log::{trace, warn};
use strum::IntoEnumIterator;

use super::{
    category_patterns::CategoryPatterns,
    enums::{NumberCategory, NumberType},
    errors::UndefinedPredicateError,
};

const CAMEL_NEGATED: &str = "isNot";
const CAMEL_PLAIN: &str = "is";
const SNAKE_NEGATED: &str = "is_not_";
const SNAKE_PLAIN: &str = "is_";

/// Registry of classification rules over canonical numbers.
///
/// Usually accessed through [`crate::PHONE_CLASSIFIER`] or the
/// [`crate::PhoneNumber`] methods; every query expects a number that already
/// went through [`crate::normalize`].
pub struct PhoneClassifier {
    patterns: CategoryPatterns,
}

impl PhoneClassifier {
    pub(crate) fn new() -> Self {
        Self { patterns: CategoryPatterns::new() }
    }

    pub fn is(&self, category: NumberCategory, canonical: &str) -> bool {
        self.patterns.matches(category, canonical)
    }

    pub fn is_not(&self, category: NumberCategory, canonical: &str) -> bool {
        !self.is(category, canonical)
    }

    /// Evaluates a predicate given by name.
    ///
    /// Accepts `isMobile` / `isNotMobile` as well as `is_mobile` /
    /// `is_not_mobile`. Negated names resolve their base category and return
    /// the complement, so they work for any category without extra code.
    ///
    /// # Errors
    /// [`UndefinedPredicateError`] if the name doesn't resolve to a category.
    pub fn query(&self, name: &str, canonical: &str) -> Result<bool, UndefinedPredicateError> {
        let Some((category, negated)) = resolve_predicate(name) else {
            warn!("Call to undefined predicate '{name}'");
            return Err(UndefinedPredicateError(name.to_owned()));
        };
        let result = self.is(category, canonical);
        Ok(if negated { !result } else { result })
    }

    /// All categories the number belongs to, in table order.
    pub fn categories<'a>(&'a self, canonical: &'a str) -> impl Iterator<Item = NumberCategory> + 'a {
        NumberCategory::iter().filter(move | category | self.is(*category, canonical))
    }

    /// Picks the most specific [`NumberType`]. Numbers outside the valid plan
    /// are [`NumberType::Unknown`] even if some narrower pattern matches.
    pub fn number_type(&self, canonical: &str) -> NumberType {
        if !self.is(NumberCategory::Valid, canonical) {
            trace!("Number '{canonical}' type unknown - doesn't match any valid pattern");
            return NumberType::Unknown;
        }
        if self.is(NumberCategory::Special, canonical) {
            trace!("Number '{canonical}' is a special service code.");
            return NumberType::Special;
        }
        if self.is(NumberCategory::Erotic, canonical) {
            trace!("Number '{canonical}' is an erotic number.");
            return NumberType::Erotic;
        }
        if self.is(NumberCategory::Premium, canonical) {
            trace!("Number '{canonical}' is a premium number.");
            return NumberType::Premium;
        }
        if self.is(NumberCategory::TollFree, canonical) {
            trace!("Number '{canonical}' is a toll-free number.");
            return NumberType::TollFree;
        }
        if self.is(NumberCategory::Business, canonical) {
            trace!("Number '{canonical}' is a business number.");
            return NumberType::Business;
        }
        if self.is(NumberCategory::Mobile, canonical) {
            trace!("Number '{canonical}' is a mobile number.");
            return NumberType::Mobile;
        }
        if self.is(NumberCategory::LandLine, canonical) {
            trace!("Number '{canonical}' is a fixed line number.");
            return NumberType::LandLine;
        }
        trace!("Number '{canonical}' type unknown - doesn't match any specific number type pattern.");
        NumberType::Unknown
    }
}

/// Splits a predicate name into its category and whether it's negated.
fn resolve_predicate(name: &str) -> Option<(NumberCategory, bool)> {
    let (base, negated) = if let Some(base) = name.strip_prefix(SNAKE_NEGATED) {
        (base, true)
    } else if let Some(base) = name.strip_prefix(SNAKE_PLAIN) {
        (base, false)
    } else if let Some(base) = name.strip_prefix(CAMEL_NEGATED) {
        (base, true)
    } else {
        (name.strip_prefix(CAMEL_PLAIN)?, false)
    };
    // is_land_line -> landline, lookup is case insensitive
    let category = NumberCategory::from_str(&base.replace('_', "")).ok()?;
    Some((category, negated))
}

#[cfg(test)]
mod tests {
    use super::resolve_predicate;
    use crate::NumberCategory;

    #[test]
    fn resolves_camel_and_snake_names() {
        assert_eq!(resolve_predicate("isValid"), Some((NumberCategory::Valid, false)));
        assert_eq!(resolve_predicate("isNotValid"), Some((NumberCategory::Valid, true)));
        assert_eq!(resolve_predicate("isLandLine"), Some((NumberCategory::LandLine, false)));
        assert_eq!(resolve_predicate("is_not_land_line"), Some((NumberCategory::LandLine, true)));
        assert_eq!(resolve_predicate("is_toll_free"), Some((NumberCategory::TollFree, false)));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(resolve_predicate("isNotValidd"), None);
        assert_eq!(resolve_predicate("isNot"), None);
        assert_eq!(resolve_predicate("isNotNotValid"), None);
        assert_eq!(resolve_predicate("Valid"), None);
        assert_eq!(resolve_predicate(""), None);
    }
}
