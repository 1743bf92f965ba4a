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

/// Marker in front of 4-digit special service codes (`*2700` etc).
pub const SPECIAL_MARKER: char = '*';
/// Digits following the marker in a special code.
pub const SPECIAL_CODE_LENGTH: usize = 4;

// Rewrites between local and international forms. Both sides carry 8 or 9
// significant digits after the prefix.
pub const INTERNATIONAL_FORM: &'static str = r"^972(\d{8,9})$";
pub const LOCAL_FORM: &'static str = r"^0(\d{8,9})$";
/// 972 is the country calling code shared by both plans, 0 is the trunk prefix.
pub const TO_LOCAL_REPLACEMENT: &'static str = "0${1}";
pub const TO_INTERNATIONAL_REPLACEMENT: &'static str = "972${1}";

// Non-geographic prefixes: 1-200, 1-212, 1-599, 1-700/1-705, 1-800/1/9,
// 1-900/1/2 and 1-919.
pub const BUSINESS_PREFIX: &'static str = r"1(?:2(?:00|12)|599|70[05]|80[019]|90[012]|919)";
// Geographic and mobile prefixes recognized by any of the two plans.
pub const ANY_PLAN_PREFIX: &'static str = r"0[23489][2356789]|0[57][102345689]\d";
// Same, restricted to the ranges allocated by the Israeli regulator.
pub const ISRAELI_PLAN_PREFIX: &'static str = r"0[23489][356789]|0[57][1023458]\d";
/// Subscriber part following a business or plan prefix.
pub const SUBSCRIBER_DIGITS: &'static str = r"\d{6}";

pub const PALESTINIAN_PATTERN: &'static str = r"(?:0[23489]2|05[69]\d)\d{6}";
pub const LAND_LINE_PATTERN: &'static str = r"0(?:[23489][2356789]|7\d{2})\d{6}";
pub const MOBILE_PATTERN: &'static str = r"05[102345689]\d{7}";
pub const SPECIAL_PATTERN: &'static str = r"\*\d{4}";
pub const TOLL_FREE_PATTERN: &'static str = r"180[019]\d{6}";
pub const PREMIUM_PATTERN: &'static str = r"19(?:0[012]|19)\d{6}";
/// Voice-only lines: geographic `x80` exchanges and a handful of mobile
/// sub-prefixes handed out by the carriers for "kosher" handsets.
pub const KOSHER_PATTERN: &'static str =
    r"0(?:[23489]80|5041|5271|5276|5484|5485|5331|5341|5832|5567)\d{5}";
pub const EROTIC_PATTERN: &'static str = r"1919\d{6}";
