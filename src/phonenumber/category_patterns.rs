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

use regex::Regex;
use strum::IntoEnumIterator;

use crate::{
    regex_util::{compile_full_match, RegexFullMatch},
    NumberCategory,
};

use super::helper_constants::{
    ANY_PLAN_PREFIX, BUSINESS_PREFIX, EROTIC_PATTERN, ISRAELI_PLAN_PREFIX, KOSHER_PATTERN,
    LAND_LINE_PATTERN, MOBILE_PATTERN, PALESTINIAN_PATTERN, PREMIUM_PATTERN, SPECIAL_PATTERN,
    SUBSCRIBER_DIGITS, TOLL_FREE_PATTERN,
};

/// How a single category is decided.
pub(super) enum Rule {
    /// Full-string match of the canonical number.
    Pattern(Regex),
    /// Combination of other categories.
    Derived(fn(&CategoryPatterns, &str) -> bool),
}

/// Compiled classification table, one rule per [`NumberCategory`], indexed
/// by the category discriminant.
pub(super) struct CategoryPatterns {
    rules: Vec<Rule>,
}

impl CategoryPatterns {
    /// Returns the source pattern of a category, `None` for derived ones.
    pub fn pattern_for(category: NumberCategory) -> Option<String> {
        // it'll be built only once per category, so we can use slow format!
        let pattern = match category {
            NumberCategory::Valid => format!(
                "(?:{}|{}){}|{}",
                ANY_PLAN_PREFIX, BUSINESS_PREFIX, SUBSCRIBER_DIGITS, SPECIAL_PATTERN
            ),
            NumberCategory::Israeli => format!(
                "(?:{}|{}){}|{}",
                ISRAELI_PLAN_PREFIX, BUSINESS_PREFIX, SUBSCRIBER_DIGITS, SPECIAL_PATTERN
            ),
            NumberCategory::Business => fast_cat::concat_str!(BUSINESS_PREFIX, SUBSCRIBER_DIGITS),
            NumberCategory::Palestinian => PALESTINIAN_PATTERN.to_owned(),
            NumberCategory::LandLine => LAND_LINE_PATTERN.to_owned(),
            NumberCategory::Mobile => MOBILE_PATTERN.to_owned(),
            NumberCategory::Special => SPECIAL_PATTERN.to_owned(),
            NumberCategory::TollFree => TOLL_FREE_PATTERN.to_owned(),
            NumberCategory::Premium => PREMIUM_PATTERN.to_owned(),
            NumberCategory::Kosher => KOSHER_PATTERN.to_owned(),
            NumberCategory::Erotic => EROTIC_PATTERN.to_owned(),
            NumberCategory::Smsable => return None,
        };
        Some(pattern)
    }

    fn rule_for(category: NumberCategory) -> Result<Rule, regex::Error> {
        if let Some(pattern) = Self::pattern_for(category) {
            return Ok(Rule::Pattern(compile_full_match(&pattern)?));
        }
        // Only SMS capability is derived for now.
        Ok(Rule::Derived(| patterns, number | {
            patterns.matches(NumberCategory::Mobile, number)
                && !patterns.matches(NumberCategory::Kosher, number)
        }))
    }

    pub fn try_new() -> Result<Self, regex::Error> {
        let rules = NumberCategory::iter()
            .map(Self::rule_for)
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    pub fn new() -> Self {
        // patterns are compiled-in constants, covered by tests below
        Self::try_new().unwrap()
    }

    pub fn matches(&self, category: NumberCategory, number: &str) -> bool {
        // the table is built from `NumberCategory::iter()`, so every
        // discriminant has a slot
        match &self.rules[category as usize] {
            Rule::Pattern(regex) => regex.full_match(number),
            Rule::Derived(rule) => rule(self, number),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{CategoryPatterns, Rule};
    use crate::NumberCategory;

    #[test]
    fn check_regexps_are_compiling() {
        let patterns = CategoryPatterns::try_new().unwrap();
        assert_eq!(patterns.rules.len(), NumberCategory::iter().count());
    }

    #[test]
    fn table_slots_follow_discriminants() {
        for (index, category) in NumberCategory::iter().enumerate() {
            assert_eq!(category as usize, index, "{category:?}");
        }
    }

    #[test]
    fn only_smsable_is_derived() {
        let patterns = CategoryPatterns::new();
        for (category, rule) in NumberCategory::iter().zip(&patterns.rules) {
            let derived = matches!(rule, Rule::Derived(_));
            assert_eq!(derived, category == NumberCategory::Smsable, "{category:?}");
        }
    }

    #[test]
    fn composite_patterns_keep_their_shape() {
        assert_eq!(
            CategoryPatterns::pattern_for(NumberCategory::Business).unwrap(),
            r"1(?:2(?:00|12)|599|70[05]|80[019]|90[012]|919)\d{6}"
        );
        assert_eq!(
            CategoryPatterns::pattern_for(NumberCategory::Valid).unwrap(),
            r"(?:0[23489][2356789]|0[57][102345689]\d|1(?:2(?:00|12)|599|70[05]|80[019]|90[012]|919))\d{6}|\*\d{4}"
        );
    }
}
