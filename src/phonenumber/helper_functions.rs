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

use std::{borrow::Cow, sync::LazyLock};

use log::trace;
use regex::Regex;

use crate::macros::owned_from_cow_or;

use super::helper_constants::{
    INTERNATIONAL_FORM, LOCAL_FORM, SPECIAL_CODE_LENGTH, SPECIAL_MARKER,
    TO_INTERNATIONAL_REPLACEMENT, TO_LOCAL_REPLACEMENT,
};

static INTERNATIONAL_FORM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INTERNATIONAL_FORM).unwrap());
static LOCAL_FORM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOCAL_FORM).unwrap());

/// Cleans a loosely formatted number into its canonical local-dial form.
///
/// Any Unicode decimal digit is first folded to its ASCII counterpart, then
/// everything that isn't a digit is dropped. A star written as the first
/// non-blank character survives as the special-code marker when exactly four
/// digits follow it, so `"*1234"` stays `"*1234"` while `"12*34"` becomes
/// `"1234"` and `"*12"` becomes `"12"`.
///
/// Other numbers in international form (`972` followed by 8 or 9 digits)
/// are rewritten to local form: `"+972 50-123-4567"` becomes `"0501234567"`.
///
/// Never fails; garbage in gives a (possibly empty) digit string out.
pub fn normalize(raw: &str) -> String {
    let decimals = dec_from_char::normalize_decimals(raw);
    let digits = decimals.chars().filter(char::is_ascii_digit).collect::<String>();

    if decimals.trim_start().starts_with(SPECIAL_MARKER) && digits.len() == SPECIAL_CODE_LENGTH {
        let mut special = digits;
        special.insert(0, SPECIAL_MARKER);
        trace!("Number '{raw}' kept its special marker: '{special}'");
        return special;
    }

    let canonical = owned_from_cow_or!(
        INTERNATIONAL_FORM_PATTERN.replace(&digits, TO_LOCAL_REPLACEMENT),
        digits
    );
    trace!("Number '{raw}' normalized to '{canonical}'");
    canonical
}

/// Rewrites a local-form number to its international form by replacing the
/// trunk prefix with the country code. Anything else is returned borrowed.
pub fn to_international(canonical: &str) -> Cow<'_, str> {
    LOCAL_FORM_PATTERN.replace(canonical, TO_INTERNATIONAL_REPLACEMENT)
}

/// Canonical numbers are local already.
pub fn to_local(canonical: &str) -> &str {
    canonical
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{normalize, to_international, to_local};

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize("02-(555)-5555"), "025555555");
        assert_eq!(normalize(" 050.123.4567 "), "0501234567");
        assert_eq!(normalize("call me"), "");
    }

    #[test]
    fn rewrites_international_form() {
        assert_eq!(normalize("+972 2-(555)-5555"), "025555555");
        assert_eq!(normalize("+972 50-123-4567"), "0501234567");
        // 972 followed by too few or too many digits is left alone
        assert_eq!(normalize("9721234567"), "9721234567");
        assert_eq!(normalize("97212345678901"), "97212345678901");
    }

    #[test]
    fn folds_unicode_decimals() {
        assert_eq!(normalize("٠٥٠-١٢٣-٤٥٦٧"), "0501234567");
        assert_eq!(normalize("０２５５５５５５５"), "025555555");
    }

    #[test]
    fn keeps_leading_special_marker_only() {
        assert_eq!(normalize("*1234"), "*1234");
        assert_eq!(normalize("  *27-00"), "*2700");
        assert_eq!(normalize("12*34"), "1234");
    }

    #[test]
    fn drops_marker_without_four_digit_code() {
        assert_eq!(normalize("*"), "");
        assert_eq!(normalize("*12"), "12");
        assert_eq!(normalize("*12345"), "12345");
        // without its marker the number is delocalized like any other
        assert_eq!(normalize("*972501234567"), "0501234567");
    }

    #[test]
    fn formats_to_international() {
        assert_eq!(to_international("025555555"), "97225555555");
        assert_eq!(to_international("0501234567"), "972501234567");
        assert_eq!(to_international("1800123456"), Cow::Borrowed("1800123456"));
        assert!(matches!(to_international("*1234"), Cow::Borrowed(_)));
        assert_eq!(to_local("0501234567"), "0501234567");
    }
}
